//! Description validation errors.

use std::error::Error;
use std::fmt;

use plenum_core::Point;

/// Rejected machine description.
///
/// Construction is the only fallible part of this crate. Once a grid or
/// layout exists it is internally consistent and later accesses do not
/// produce these errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height of zero.
    EmptyGrid,
    /// A dimension above the supported maximum.
    DimensionTooLarge {
        /// Which axis was rejected, `"width"` or `"height"`.
        axis: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A cell or pixel buffer whose length disagrees with the grid
    /// dimensions.
    CellCountMismatch {
        /// Cell count implied by width times height.
        expected: usize,
        /// Cell count actually supplied.
        actual: usize,
    },
    /// A net membership table sized for a different grid.
    NetTableMismatch {
        /// Cell count of the grid being assembled.
        expected: usize,
        /// Cell count the membership table was built for.
        actual: usize,
    },
    /// A net member that lies outside the grid rectangle.
    NetPointOutOfBounds {
        /// The offending member coordinate.
        at: Point,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyGrid => {
                write!(f, "grid dimensions must both be at least 1")
            }
            GridError::DimensionTooLarge { axis, value, max } => {
                write!(f, "grid {axis} {value} exceeds the maximum of {max}")
            }
            GridError::CellCountMismatch { expected, actual } => {
                write!(
                    f,
                    "cell buffer holds {actual} entries but the dimensions \
                     require {expected}"
                )
            }
            GridError::NetTableMismatch { expected, actual } => {
                write!(
                    f,
                    "net membership table covers {actual} cells but the grid \
                     has {expected}"
                )
            }
            GridError::NetPointOutOfBounds { at } => {
                write!(f, "net member {at} lies outside the grid")
            }
        }
    }
}

impl Error for GridError {}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_rejected_values() {
        let err = GridError::DimensionTooLarge {
            axis: "width",
            value: 4_000_000_000,
            max: i32::MAX as u32,
        };
        let text = err.to_string();
        assert!(text.contains("width"), "{text}");
        assert!(text.contains("4000000000"), "{text}");

        let err = GridError::CellCountMismatch {
            expected: 12,
            actual: 11,
        };
        let text = err.to_string();
        assert!(text.contains("12"), "{text}");
        assert!(text.contains("11"), "{text}");
    }

    #[test]
    fn net_point_message_names_the_coordinate() {
        let err = GridError::NetPointOutOfBounds {
            at: Point::new(9, -1),
        };
        assert!(err.to_string().contains("(9, -1)"));
    }
}
