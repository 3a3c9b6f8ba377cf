//! Diagram fixtures and assertion helpers for plenum development.
//!
//! Machines in tests are written as glyph diagrams, one character per
//! cell, using the palette glyph table plus two fixture extensions:
//! `.` is an alternative solid for diagrams where trailing spaces would
//! be fragile, and any uppercase letter declares a connection net keyed
//! by that letter.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use plenum_core::palette;
use plenum_core::{CellKind, Point, PressureLevel, StateView};
use plenum_grid::{CellGrid, Layout, NetRegistry};

/// Parses a glyph diagram into a layout.
///
/// Rows may be ragged; short rows are padded with solid cells to the
/// widest row. Uppercase letters become channels enrolled in the net
/// keyed by the letter, so `A ... A` wires two distant cells together.
///
/// # Panics
///
/// Panics on an empty diagram or a glyph outside the table, with the
/// offending glyph and coordinate in the message.
pub fn parse_diagram(diagram: &str) -> Layout {
    let rows: Vec<&str> = diagram.split('\n').collect();
    let width = rows
        .iter()
        .map(|row| row.chars().count())
        .max()
        .unwrap_or(0);
    let height = rows.len();

    let mut cells = Vec::with_capacity(width * height);
    let mut nets = NetRegistry::new(width * height);
    for (y, row) in rows.iter().enumerate() {
        let mut glyphs = row.chars();
        for x in 0..width {
            let at = Point::new(x as i32, y as i32);
            let index = cells.len();
            match glyphs.next() {
                None | Some('.') => cells.push(CellKind::Solid),
                Some(glyph @ 'A'..='Z') => {
                    nets.enroll(glyph as u32, at, index);
                    cells.push(CellKind::Channel);
                }
                Some(glyph) => match palette::kind_for_glyph(glyph) {
                    Some(kind) => cells.push(kind),
                    None => panic!("unrecognised glyph {glyph:?} at {at}"),
                },
            }
        }
    }

    let cells = CellGrid::from_cells(width as u32, height as u32, cells)
        .expect("diagram must have at least one cell");
    Layout::from_parts(cells, nets).expect("diagram nets are in bounds")
}

/// Renders a view's pressure field as one glyph per cell: `.` for no
/// pressure, `-` negative, `0` vent, `+` positive.
pub fn pressure_diagram(view: &impl StateView) -> String {
    let mut out = String::new();
    for y in 0..view.height() as i32 {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..view.width() as i32 {
            let glyph = match view.pressure(Point::new(x, y)) {
                Some(PressureLevel::None) | None => '.',
                Some(PressureLevel::Negative) => '-',
                Some(PressureLevel::Vent) => '0',
                Some(PressureLevel::Positive) => '+',
            };
            out.push(glyph);
        }
    }
    out
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagrams_round_trip_through_rendering() {
        let source = "#+ #\n# *#";
        let layout = parse_diagram(source);
        assert_eq!(layout.cells().to_diagram(), source);
    }

    #[test]
    fn dots_parse_as_solid() {
        let layout = parse_diagram("+..");
        assert_eq!(layout.cells().get(Point::new(1, 0)), Some(CellKind::Solid));
        assert_eq!(layout.cells().get(Point::new(2, 0)), Some(CellKind::Solid));
    }

    #[test]
    fn ragged_rows_are_padded_with_solid() {
        let layout = parse_diagram("+  \n#");
        assert_eq!(layout.cells().width(), 3);
        assert_eq!(layout.cells().get(Point::new(2, 1)), Some(CellKind::Solid));
    }

    #[test]
    fn uppercase_letters_declare_nets() {
        let layout = parse_diagram("A#B#A");
        assert_eq!(layout.nets().len(), 2);

        let a = layout.nets().id_for_key('A' as u32).unwrap();
        let net = layout.nets().net(a).unwrap();
        assert_eq!(net.points(), &[Point::new(0, 0), Point::new(4, 0)]);
        assert_eq!(layout.cells().get(Point::new(0, 0)), Some(CellKind::Channel));
    }

    #[test]
    fn ports_are_collected_from_the_diagram() {
        let layout = parse_diagram("^#v\n^##");
        assert_eq!(layout.inputs(), &[Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(layout.outputs(), &[Point::new(2, 0)]);
    }

    #[test]
    #[should_panic(expected = "unrecognised glyph")]
    fn unknown_glyphs_panic_with_their_position() {
        parse_diagram("+?");
    }
}
