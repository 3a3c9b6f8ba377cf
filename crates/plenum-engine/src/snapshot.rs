//! Owned state snapshots and the publication slot.
//!
//! A snapshot is a full copy of a machine's observable state, detached
//! from the live circuit so readers on other threads never contend
//! with the tick loop. The [`SnapshotSlot`] holds the latest published
//! snapshot behind an `Arc`; readers clone the handle and keep reading
//! their copy for as long as they like.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use plenum_core::{CellKind, Point, PressureLevel, ShortCircuit, StateView, TickId};

/// A detached copy of one machine state.
///
/// Snapshots taken after a faulted step carry the fault; their pressure
/// field is the partial one the aborted step left behind and should be
/// treated as stale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CircuitSnapshot {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
    pressure: Vec<PressureLevel>,
    tick: TickId,
    fault: Option<ShortCircuit>,
}

impl CircuitSnapshot {
    /// Assembles a snapshot from row-major buffers.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        cells: Vec<CellKind>,
        pressure: Vec<PressureLevel>,
        tick: TickId,
        fault: Option<ShortCircuit>,
    ) -> CircuitSnapshot {
        CircuitSnapshot {
            width,
            height,
            cells,
            pressure,
            tick,
            fault,
        }
    }

    /// The fault of the step attempt this snapshot was taken after, or
    /// `None` when that attempt completed.
    #[must_use]
    pub fn fault(&self) -> Option<ShortCircuit> {
        self.fault
    }

    /// True when the snapshot was taken after a faulted step.
    #[must_use]
    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    /// The whole cell buffer in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// The whole pressure field in row-major order.
    #[must_use]
    pub fn pressure_levels(&self) -> &[PressureLevel] {
        &self.pressure
    }

    fn index_of(&self, at: Point) -> Option<usize> {
        if !self.in_bounds(at) {
            return None;
        }
        Some(at.y as usize * self.width as usize + at.x as usize)
    }
}

impl StateView for CircuitSnapshot {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cell(&self, at: Point) -> Option<CellKind> {
        self.index_of(at).map(|index| self.cells[index])
    }

    fn pressure(&self, at: Point) -> Option<PressureLevel> {
        self.index_of(at).map(|index| self.pressure[index])
    }

    fn tick(&self) -> TickId {
        self.tick
    }
}

// Compile-time check that both ends of the publication path can cross
// thread boundaries.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CircuitSnapshot>();
    assert_send_sync::<SnapshotSlot>();
};

/// The latest-published snapshot, shared between the tick thread and
/// any number of readers.
///
/// Publishing replaces the held snapshot; readers that cloned the
/// previous `Arc` keep a consistent old copy. There is no history, only
/// the newest state.
#[derive(Debug, Default)]
pub struct SnapshotSlot {
    latest: Mutex<Option<Arc<CircuitSnapshot>>>,
    published: AtomicU64,
}

impl SnapshotSlot {
    /// An empty slot; [`SnapshotSlot::latest`] answers `None` until the
    /// first publish.
    #[must_use]
    pub fn new() -> SnapshotSlot {
        SnapshotSlot::default()
    }

    /// Replaces the held snapshot with `snapshot`.
    pub fn publish(&self, snapshot: CircuitSnapshot) {
        let mut slot = self.latest.lock().unwrap();
        *slot = Some(Arc::new(snapshot));
        drop(slot);
        self.published.fetch_add(1, Ordering::Release);
    }

    /// A handle to the most recently published snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<Arc<CircuitSnapshot>> {
        self.latest.lock().unwrap().clone()
    }

    /// How many snapshots have been published since construction.
    #[must_use]
    pub fn publish_count(&self) -> u64 {
        self.published.load(Ordering::Acquire)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
