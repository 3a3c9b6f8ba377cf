//! Fault values.

use std::error::Error;
use std::fmt;

use crate::geom::Point;
use crate::pressure::PressureLevel;

/// Two different pressure levels met in one cell during a fill pass.
///
/// A short circuit aborts the whole step: no shuttle shifts are
/// applied, the tick does not advance, and the pressure field is left
/// partially written. The coordinate is the first conflicting cell in
/// deterministic fill order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShortCircuit {
    /// The cell where the conflict was detected.
    pub at: Point,
    /// The level the running fill pass tried to assign.
    pub attempted: PressureLevel,
    /// The level already present from an earlier pass.
    pub existing: PressureLevel,
}

impl fmt::Display for ShortCircuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "short circuit at {} between pressures {} and {}",
            self.at, self.attempted, self.existing
        )
    }
}

impl Error for ShortCircuit {}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_cell_and_both_levels() {
        let fault = ShortCircuit {
            at: Point::new(1, 0),
            attempted: PressureLevel::Negative,
            existing: PressureLevel::Positive,
        };
        assert_eq!(
            fault.to_string(),
            "short circuit at (1, 0) between pressures negative and positive"
        );
    }

    #[test]
    fn faults_compare_by_value() {
        let a = ShortCircuit {
            at: Point::new(2, 2),
            attempted: PressureLevel::Vent,
            existing: PressureLevel::Positive,
        };
        assert_eq!(a, a);
        assert_ne!(
            a,
            ShortCircuit {
                at: Point::new(2, 3),
                ..a
            }
        );
    }
}
