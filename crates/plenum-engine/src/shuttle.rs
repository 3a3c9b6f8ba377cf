//! Shuttle displacement.
//!
//! After the fill passes finish, the collected pushes are applied in
//! collection order. A push moves one shuttle cell one step; when the
//! next cell along is more shuttle hardware the move recurses first, so
//! a whole chain advances as a unit or not at all.

use plenum_core::{CellKind, Direction, Point, PressureLevel};
use plenum_grid::{CellGrid, PressureField};

use crate::fill::PendingShift;

/// What the resolver did with one step's worth of pushes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ShiftStats {
    /// Pushes whose root move succeeded.
    pub applied: u32,
    /// Individual cells moved, counting every link of a chain.
    pub cells_moved: u32,
}

/// Applies `shifts` in order and reports how many did anything.
///
/// Pushes are not re-validated against the current grid: an earlier
/// push may already have moved the cell a later record points at, and
/// the later record then acts on whatever sits there now.
pub(crate) fn apply_shifts(
    grid: &mut CellGrid,
    pressure: &mut PressureField,
    shifts: &[PendingShift],
) -> ShiftStats {
    let mut stats = ShiftStats::default();
    for shift in shifts {
        if shift_cell(
            grid,
            pressure,
            shift.at,
            shift.push,
            shift.level,
            &mut stats.cells_moved,
        ) {
            stats.applied += 1;
        }
    }
    stats
}

/// Moves the cell at `at` one step along `dir` if the far side can
/// take it, recursing through shuttle hardware.
///
/// A channel can take the cell only while its pressure is strictly
/// below the pushing level. The vacated cell becomes a channel and
/// inherits the pressure the far cell held before the move.
fn shift_cell(
    grid: &mut CellGrid,
    pressure: &mut PressureField,
    at: Point,
    dir: Direction,
    level: PressureLevel,
    moved: &mut u32,
) -> bool {
    if dir == Direction::None {
        return false;
    }
    let next = at.step(dir);
    let Some(next_index) = grid.index_of(next) else {
        return false;
    };

    let can_move = match grid.kind_at(next_index) {
        CellKind::Channel => pressure.level_at(next_index) < level,
        kind if kind.is_shuttle() => {
            shift_cell(grid, pressure, next, dir, level, moved)
        }
        _ => false,
    };
    if !can_move {
        return false;
    }

    // index_of(at) is Some here: `next` is in bounds and one step away.
    let Some(here_index) = grid.index_of(at) else {
        return false;
    };
    grid.set_at(next_index, grid.kind_at(here_index));
    grid.set_at(here_index, CellKind::Channel);
    pressure.set_at(here_index, pressure.level_at(next_index));
    *moved += 1;
    true
}

// ── Tests ───────────────────────────────────────────────────────────────────
