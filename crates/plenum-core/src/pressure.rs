//! Pressure levels.
//!
//! Every cell carries one pressure level per tick. The levels are
//! totally ordered, and that ordering is load-bearing: a shuttle cell
//! may only be displaced into a channel whose current level is strictly
//! below the pushing level. Neutral vent pressure therefore restores
//! shuttles against vacuum or dead air, and positive pressure overrides
//! vent.

use std::fmt;

use crate::cell::CellKind;

/// The pressure held by one cell for one tick.
///
/// The `Ord` implementation follows declaration order:
/// `None < Negative < Vent < Positive`.
///
/// # Examples
///
/// ```
/// use plenum_core::PressureLevel;
///
/// assert!(PressureLevel::None < PressureLevel::Negative);
/// assert!(PressureLevel::Negative < PressureLevel::Vent);
/// assert!(PressureLevel::Vent < PressureLevel::Positive);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PressureLevel {
    /// No pressure assigned this tick.
    #[default]
    None = 0,
    /// Suction spread from a sink.
    Negative = 1,
    /// Neutral reference spread from a vent.
    Vent = 2,
    /// Working pressure spread from a source.
    Positive = 3,
}

impl PressureLevel {
    /// Every level, in ascending order.
    pub const ALL: [PressureLevel; 4] = [
        PressureLevel::None,
        PressureLevel::Negative,
        PressureLevel::Vent,
        PressureLevel::Positive,
    ];

    /// The cell kind that injects this level into the grid.
    ///
    /// A fill pass starts from every cell of the entry kind and treats
    /// that kind as passable for its own level, so pressure can spread
    /// onward across adjacent entry cells of the same polarity.
    #[must_use]
    pub fn entry_kind(self) -> CellKind {
        match self {
            PressureLevel::Negative => CellKind::Sink,
            PressureLevel::Positive => CellKind::Source,
            _ => CellKind::Vent,
        }
    }
}

impl fmt::Display for PressureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PressureLevel::None => "none",
            PressureLevel::Negative => "negative",
            PressureLevel::Vent => "vent",
            PressureLevel::Positive => "positive",
        };
        write!(f, "{name}")
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
