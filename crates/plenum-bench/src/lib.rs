//! Benchmark fixtures for the plenum pneumatic logic simulator.
//!
//! Provides deterministic machine layouts at benchmark scale:
//!
//! - [`serpentine_layout`]: one long channel snaking through the grid
//! - [`open_chamber_layout`]: one wide room, the worst case for fan-out
//! - [`shuttle_train_layout`]: a shuttle train pinned against a wall
//! - [`net_ladder_layout`]: sealed chambers chained by connection nets
//! - [`pilot_valve_layout`]: the pilot-operated valve from the examples
//!
//! The pixel builders are public too so decode benchmarks can run the
//! image decoder against the same fixtures.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use plenum_core::palette::colour_for_kind;
use plenum_core::CellKind;
use plenum_grid::Layout;

/// A solid pixel canvas with painters for carving cells out of it.
struct Canvas {
    width: u32,
    pixels: Vec<u32>,
}

impl Canvas {
    fn solid(width: u32, height: u32) -> Canvas {
        Canvas {
            width,
            pixels: vec![colour_for_kind(CellKind::Solid); (width * height) as usize],
        }
    }

    fn paint(&mut self, x: u32, y: u32, kind: CellKind) {
        self.paint_raw(x, y, colour_for_kind(kind));
    }

    fn paint_raw(&mut self, x: u32, y: u32, colour: u32) {
        self.pixels[(y * self.width + x) as usize] = colour;
    }
}

/// Pixel buffer for [`serpentine_layout`].
///
/// Open rows sit at even `y` and connectors alternate ends, so the
/// whole grid is one channel run from the source at the top left to the
/// output at the end of the bottom row. `height` must be odd so the
/// snake both starts and ends on an open row.
pub fn serpentine_pixels(width: u32, height: u32) -> Vec<u32> {
    assert!(width >= 2, "serpentine needs at least two columns");
    assert!(height % 2 == 1, "serpentine needs an odd row count");

    let mut canvas = Canvas::solid(width, height);
    for y in (0..height).step_by(2) {
        for x in 0..width {
            canvas.paint(x, y, CellKind::Channel);
        }
    }
    for y in (1..height).step_by(2) {
        let run = y / 2;
        let x = if run % 2 == 0 { width - 1 } else { 0 };
        canvas.paint(x, y, CellKind::Channel);
    }

    canvas.paint(0, 0, CellKind::Source);
    let last_run = (height - 1) / 2;
    let end_x = if last_run % 2 == 0 { width - 1 } else { 0 };
    canvas.paint(end_x, height - 1, CellKind::Output);
    canvas.pixels
}

/// One long serpentine channel: a fill benchmark with no shuttles and
/// no nets, roughly `width * height / 2` pressurised cells per step.
pub fn serpentine_layout(width: u32, height: u32) -> Layout {
    Layout::from_pixels(width, height, &serpentine_pixels(width, height)).unwrap()
}

/// Pixel buffer for [`open_chamber_layout`].
pub fn open_chamber_pixels(width: u32, height: u32) -> Vec<u32> {
    assert!(width >= 3, "chamber needs room inside its walls");
    assert!(height >= 3, "chamber needs room inside its walls");

    let mut canvas = Canvas::solid(width, height);
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            canvas.paint(x, y, CellKind::Channel);
        }
    }
    canvas.paint(1, 1, CellKind::Source);
    canvas.paint(width - 2, height - 2, CellKind::Output);
    canvas.pixels
}

/// One open room behind a solid border. Where the serpentine gives the
/// fill a single path, the chamber gives it the widest possible
/// fan-out: every interior cell is reachable along many routes, so the
/// walk revisits heavily and the dead-end check dominates.
pub fn open_chamber_layout(width: u32, height: u32) -> Layout {
    Layout::from_pixels(width, height, &open_chamber_pixels(width, height)).unwrap()
}

/// A single corridor: a source, `length` shuttle blocks, and the wall
/// they are pinned against. Every step records one displacement and
/// walks the whole train before finding it jammed, so the work per
/// step stays constant.
pub fn shuttle_train_layout(length: u32) -> Layout {
    let width = length + 2;
    let mut canvas = Canvas::solid(width, 1);
    canvas.paint(0, 0, CellKind::Source);
    for x in 1..=length {
        canvas.paint(x, 0, CellKind::ShuttleBlock);
    }
    Layout::from_pixels(width, 1, &canvas.pixels).unwrap()
}

/// Pixel buffer for [`net_ladder_layout`].
pub fn net_ladder_pixels(rungs: u32) -> Vec<u32> {
    assert!(rungs >= 1, "ladder needs at least one rung");
    assert!(rungs < 0xFE, "net colours would collide with the palette");

    let height = 2 * rungs - 1;
    let mut canvas = Canvas::solid(3, height);
    for rung in 0..rungs {
        let y = 2 * rung;
        if rung == 0 {
            canvas.paint(0, y, CellKind::Source);
        } else {
            canvas.paint_raw(0, y, net_colour(rung));
        }
        canvas.paint(1, y, CellKind::Channel);
        if rung == rungs - 1 {
            canvas.paint(2, y, CellKind::Output);
        } else {
            canvas.paint_raw(2, y, net_colour(rung + 1));
        }
    }
    canvas.pixels
}

/// `rungs` sealed chambers, each fed from the previous one through a
/// connection net. Pressure reaches the output only by hopping every
/// net in sequence.
pub fn net_ladder_layout(rungs: u32) -> Layout {
    Layout::from_pixels(3, 2 * rungs - 1, &net_ladder_pixels(rungs)).unwrap()
}

/// An off-palette colour for ladder net `index`.
fn net_colour(index: u32) -> u32 {
    0xFF00_0001 + index
}

/// The pilot-operated valve from the crate examples: a three-cell
/// shuttle across a supply line, a vent above it, a control input
/// below. Driving the input slides the shuttle up and cuts the supply
/// to the output.
pub fn pilot_valve_layout() -> Layout {
    let mut canvas = Canvas::solid(9, 7);
    canvas.paint(4, 0, CellKind::Vent);
    canvas.paint(4, 1, CellKind::Channel);
    canvas.paint(4, 2, CellKind::ShuttleBlock);
    canvas.paint(1, 3, CellKind::Source);
    canvas.paint(2, 3, CellKind::Channel);
    canvas.paint(3, 3, CellKind::NarrowHorizontal);
    canvas.paint(4, 3, CellKind::ShuttleThru);
    canvas.paint(5, 3, CellKind::NarrowHorizontal);
    canvas.paint(6, 3, CellKind::Channel);
    canvas.paint(7, 3, CellKind::Output);
    canvas.paint(4, 4, CellKind::ShuttleBlock);
    canvas.paint(4, 5, CellKind::Input);
    Layout::from_pixels(9, 7, &canvas.pixels).unwrap()
}
