//! The stepped machine.

use std::time::Instant;

use plenum_core::{CellKind, Point, PressureLevel, ShortCircuit, StateView, TickId};
use plenum_grid::{CellGrid, Layout, NetRegistry, PressureField};

use crate::fill;
use crate::metrics::StepMetrics;
use crate::shuttle;
use crate::snapshot::CircuitSnapshot;

/// The three fill passes of one step, in execution order.
const FILL_ORDER: [PressureLevel; 3] = [
    PressureLevel::Positive,
    PressureLevel::Vent,
    PressureLevel::Negative,
];

/// A machine plus its running state, advanced one tick at a time.
///
/// Each step rebuilds the pressure field from scratch, so the machine
/// has no hidden state between ticks beyond the grid itself: cells
/// moved by shuttles and inputs rewritten by [`Circuit::set_input`]
/// are the only things a step inherits from the last one.
///
/// # Examples
///
/// ```
/// use plenum_core::palette::colour_for_kind;
/// use plenum_core::CellKind;
/// use plenum_engine::Circuit;
/// use plenum_grid::Layout;
///
/// let pixels = [
///     colour_for_kind(CellKind::Source),
///     colour_for_kind(CellKind::Channel),
///     colour_for_kind(CellKind::Output),
/// ];
/// let mut circuit = Circuit::new(Layout::from_pixels(3, 1, &pixels)?);
///
/// circuit.step()?;
/// assert_eq!(circuit.output_levels(), vec![true]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    cells: CellGrid,
    nets: NetRegistry,
    pressure: PressureField,
    inputs: Vec<Point>,
    outputs: Vec<Point>,
    current_tick: TickId,
    last_fault: Option<ShortCircuit>,
    last_metrics: StepMetrics,
}

impl Circuit {
    /// Wraps a decoded layout in a machine at tick zero with no
    /// pressure assigned.
    #[must_use]
    pub fn new(layout: Layout) -> Circuit {
        let (cells, nets, inputs, outputs) = layout.into_parts();
        let pressure = PressureField::new(cells.len());
        Circuit {
            cells,
            nets,
            pressure,
            inputs,
            outputs,
            current_tick: TickId::ZERO,
            last_fault: None,
            last_metrics: StepMetrics::default(),
        }
    }

    /// Advances the machine by one tick.
    ///
    /// # Errors
    ///
    /// A [`ShortCircuit`] aborts the whole step: no shuttle shifts are
    /// applied, the tick stays where it was, and the pressure field is
    /// left partially written. The fault also stays readable through
    /// [`Circuit::last_fault`] until a later step completes.
    pub fn step(&mut self) -> Result<(), ShortCircuit> {
        let step_start = Instant::now();

        // 1. Wipe last tick's pressure. The field carries nothing over.
        self.pressure.clear();

        // 2. Flood each polarity from its entry cells, positive first,
        //    then vent, then negative. Entry cells are enumerated in
        //    scan order within each pass.
        let mut shifts = Vec::new();
        let mut fill_us = [0u64; 3];
        let mut cells_pressurised = 0u32;
        for (pass, level) in FILL_ORDER.iter().enumerate() {
            let pass_start = Instant::now();
            for start in self.cells.positions_of(level.entry_kind()) {
                let outcome = fill::fill_from(
                    &self.cells,
                    &self.nets,
                    &mut self.pressure,
                    start,
                    *level,
                    &mut shifts,
                );
                match outcome {
                    Ok(filled) => cells_pressurised += filled,
                    Err(fault) => {
                        self.last_fault = Some(fault);
                        return Err(fault);
                    }
                }
            }
            fill_us[pass] = pass_start.elapsed().as_micros() as u64;
        }

        // 3. Apply the collected pushes in collection order.
        let stats = shuttle::apply_shifts(&mut self.cells, &mut self.pressure, &shifts);

        // 4. The step held together: clear any stale fault, advance the
        //    tick, and record what the step did.
        self.last_fault = None;
        self.current_tick = self.current_tick.next();
        self.last_metrics = StepMetrics {
            total_us: step_start.elapsed().as_micros() as u64,
            fill_us,
            cells_pressurised,
            shifts_collected: shifts.len() as u32,
            shifts_applied: stats.applied,
            shuttle_cells_moved: stats.cells_moved,
        };
        Ok(())
    }

    /// Rewrites one cell. Returns false (and changes nothing) out of
    /// range.
    ///
    /// Editing the grid between steps is the intended way to repair a
    /// shorted machine or to build one interactively. Port lists and
    /// net membership are fixed at decode time and do not follow edits.
    pub fn set_cell(&mut self, at: Point, kind: CellKind) -> bool {
        self.cells.set(at, kind)
    }

    /// Drives one input port: high rewrites the port cell to a source,
    /// low to a sink. Returns false for an out-of-range index.
    ///
    /// The rewrite is permanent; the cell stops being
    /// [`CellKind::Input`] but keeps its place in [`Circuit::inputs`].
    pub fn set_input(&mut self, index: usize, high: bool) -> bool {
        let Some(at) = self.inputs.get(index).copied() else {
            return false;
        };
        let kind = if high { CellKind::Source } else { CellKind::Sink };
        self.cells.set(at, kind)
    }

    /// Drives every input port at once.
    ///
    /// # Panics
    ///
    /// Panics when `highs` does not have exactly one entry per input
    /// port.
    pub fn set_inputs(&mut self, highs: &[bool]) {
        assert_eq!(
            highs.len(),
            self.inputs.len(),
            "one level per input port required"
        );
        for (index, high) in highs.iter().enumerate() {
            self.set_input(index, *high);
        }
    }

    /// Input port cells in scan order. The positions stay fixed even
    /// after [`Circuit::set_input`] rewrites the cells themselves.
    #[must_use]
    pub fn inputs(&self) -> &[Point] {
        &self.inputs
    }

    /// Output port cells in scan order.
    #[must_use]
    pub fn outputs(&self) -> &[Point] {
        &self.outputs
    }

    /// The input port index at `at`, if any. This is how a pointer
    /// position maps back to a port.
    #[must_use]
    pub fn input_index_at(&self, at: Point) -> Option<usize> {
        self.inputs.iter().position(|port| *port == at)
    }

    /// One boolean per output port: true where the port sits at
    /// positive pressure this tick.
    #[must_use]
    pub fn output_levels(&self) -> Vec<bool> {
        self.outputs
            .iter()
            .map(|at| {
                self.cells
                    .index_of(*at)
                    .map(|index| self.pressure.level_at(index))
                    == Some(PressureLevel::Positive)
            })
            .collect()
    }

    /// The tick of the last completed step.
    #[must_use]
    pub fn tick(&self) -> TickId {
        self.current_tick
    }

    /// Metrics of the last completed step. A faulted attempt leaves the
    /// previous metrics in place.
    #[must_use]
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The fault of the most recent step attempt, or `None` when that
    /// attempt completed.
    #[must_use]
    pub fn last_fault(&self) -> Option<ShortCircuit> {
        self.last_fault
    }

    /// Captures an owned snapshot of the full machine state, including
    /// any standing fault.
    #[must_use]
    pub fn snapshot(&self) -> CircuitSnapshot {
        CircuitSnapshot::from_parts(
            self.cells.width(),
            self.cells.height(),
            self.cells.as_slice().to_vec(),
            self.pressure.as_slice().to_vec(),
            self.current_tick,
            self.last_fault,
        )
    }

    /// Renders the current grid as glyph rows.
    #[must_use]
    pub fn to_diagram(&self) -> String {
        self.cells.to_diagram()
    }
}

impl StateView for Circuit {
    fn width(&self) -> u32 {
        self.cells.width()
    }

    fn height(&self) -> u32 {
        self.cells.height()
    }

    fn cell(&self, at: Point) -> Option<CellKind> {
        self.cells.get(at)
    }

    fn pressure(&self, at: Point) -> Option<PressureLevel> {
        self.cells
            .index_of(at)
            .map(|index| self.pressure.level_at(index))
    }

    fn tick(&self) -> TickId {
        self.current_tick
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
