//! Newtype identifiers shared across the workspace.

use std::fmt;

/// Identifies one completed simulation step.
///
/// A freshly constructed machine is at tick zero. The tick advances
/// only when a step completes without a fault.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick of a machine that has not stepped yet.
    pub const ZERO: TickId = TickId(0);

    /// The tick after this one.
    #[must_use]
    pub fn next(self) -> TickId {
        TickId(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(raw: u64) -> TickId {
        TickId(raw)
    }
}

/// Identifies one connection net within a machine description.
///
/// Net identifiers are dense indices assigned in the order the nets
/// were first encountered during decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NetId(pub u32);

impl fmt::Display for NetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "net{}", self.0)
    }
}

impl From<u32> for NetId {
    fn from(raw: u32) -> NetId {
        NetId(raw)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
