//! Per-step timing and work counters.

/// What one step attempt did and how long it took.
///
/// Metrics are plain data captured by [`crate::Circuit::step`] and read
/// back with [`crate::Circuit::last_metrics`]; nothing here is
/// published anywhere on its own. A faulted step leaves the previous
/// metrics in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock length of the whole step in microseconds.
    pub total_us: u64,
    /// Wall-clock length of each fill pass in microseconds, in pass
    /// order: positive, vent, negative.
    pub fill_us: [u64; 3],
    /// Cells assigned a pressure level across all three passes.
    pub cells_pressurised: u32,
    /// Displacement pushes collected by the fills.
    pub shifts_collected: u32,
    /// Collected pushes whose root move succeeded.
    pub shifts_applied: u32,
    /// Individual shuttle cells moved, counting every link of a chain.
    pub shuttle_cells_moved: u32,
}

// ── Tests ───────────────────────────────────────────────────────────────────
