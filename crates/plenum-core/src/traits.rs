//! Read-only access to simulation state.

use crate::cell::CellKind;
use crate::geom::Point;
use crate::id::TickId;
use crate::pressure::PressureLevel;

/// Uniform read access to a machine's cells and pressure field.
///
/// Implemented by the live circuit and by owned snapshots, so that
/// rendering and assertion code does not care which one it is looking
/// at. Out-of-range points answer `None` rather than panicking.
pub trait StateView {
    /// Grid width in cells.
    fn width(&self) -> u32;

    /// Grid height in cells.
    fn height(&self) -> u32;

    /// The kind of the cell at `at`, or `None` out of range.
    fn cell(&self, at: Point) -> Option<CellKind>;

    /// The pressure of the cell at `at`, or `None` out of range.
    fn pressure(&self, at: Point) -> Option<PressureLevel>;

    /// The tick of the last completed step.
    fn tick(&self) -> TickId;

    /// True when `at` lies inside the grid rectangle.
    fn in_bounds(&self, at: Point) -> bool {
        at.x >= 0
            && at.y >= 0
            && (at.x as u32) < self.width()
            && (at.y as u32) < self.height()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    struct FlatView {
        width: u32,
        height: u32,
    }

    impl StateView for FlatView {
        fn width(&self) -> u32 {
            self.width
        }

        fn height(&self) -> u32 {
            self.height
        }

        fn cell(&self, at: Point) -> Option<CellKind> {
            self.in_bounds(at).then_some(CellKind::Channel)
        }

        fn pressure(&self, at: Point) -> Option<PressureLevel> {
            self.in_bounds(at).then_some(PressureLevel::None)
        }

        fn tick(&self) -> TickId {
            TickId::ZERO
        }
    }

    #[test]
    fn in_bounds_covers_the_rectangle() {
        let view = FlatView {
            width: 3,
            height: 2,
        };
        assert!(view.in_bounds(Point::new(0, 0)));
        assert!(view.in_bounds(Point::new(2, 1)));
        assert!(!view.in_bounds(Point::new(3, 0)));
        assert!(!view.in_bounds(Point::new(0, 2)));
        assert!(!view.in_bounds(Point::new(-1, 0)));
        assert!(!view.in_bounds(Point::new(0, -1)));
    }

    #[test]
    fn out_of_range_reads_answer_none() {
        let view = FlatView {
            width: 1,
            height: 1,
        };
        assert_eq!(view.cell(Point::new(0, 0)), Some(CellKind::Channel));
        assert_eq!(view.cell(Point::new(5, 5)), None);
        assert_eq!(view.pressure(Point::new(-2, 0)), None);
    }

    #[test]
    fn trait_is_object_safe() {
        let view = FlatView {
            width: 2,
            height: 2,
        };
        let dynamic: &dyn StateView = &view;
        assert_eq!(dynamic.width(), 2);
    }
}
