//! Serialisation tables for cell kinds.
//!
//! A machine description is an ARGB pixel image: one pixel per cell,
//! looked up in [`CELL_COLOURS`]. Any colour outside the table is a
//! connection net marker, not an error; the decoder handles that case.
//!
//! The glyph table is the text rendering of the same kinds, used by
//! grid diagrams and the test fixtures that parse them.
//!
//! Both tables are indexed by [`CellKind`] discriminant and changing an
//! entry changes the wire format.

use crate::cell::CellKind;

/// ARGB colour of each cell kind, in discriminant order.
pub const CELL_COLOURS: [u32; 11] = [
    0xFF00_0000, // Solid: black
    0xFFFF_FFFF, // Channel: white
    0xFFC0_C0C0, // NarrowVertical: light grey
    0xFF40_4040, // NarrowHorizontal: dark grey
    0xFFFF_00FF, // ShuttleThru: magenta
    0xFF80_0080, // ShuttleBlock: purple
    0xFFFF_0000, // Sink: red
    0xFF00_FF00, // Source: green
    0xFF00_00FF, // Vent: blue
    0xFFFF_FF00, // Input: yellow
    0xFF00_FFFF, // Output: cyan
];

/// Diagram glyph of each cell kind, in discriminant order.
pub const CELL_GLYPHS: [char; 11] = [
    '#', // Solid
    ' ', // Channel
    '"', // NarrowVertical
    ':', // NarrowHorizontal
    '~', // ShuttleThru
    '*', // ShuttleBlock
    '-', // Sink
    '+', // Source
    '0', // Vent
    '^', // Input
    'v', // Output
];

/// The ARGB colour that serialises `kind`.
#[must_use]
pub fn colour_for_kind(kind: CellKind) -> u32 {
    CELL_COLOURS[kind as usize]
}

/// The cell kind a pixel of `colour` decodes to, or `None` when the
/// colour is a connection net marker.
#[must_use]
pub fn kind_for_colour(colour: u32) -> Option<CellKind> {
    CELL_COLOURS
        .iter()
        .position(|entry| *entry == colour)
        .map(|wire| CellKind::ALL[wire])
}

/// The diagram glyph that renders `kind`.
#[must_use]
pub fn glyph_for_kind(kind: CellKind) -> char {
    CELL_GLYPHS[kind as usize]
}

/// The cell kind a diagram `glyph` parses to, or `None` for characters
/// outside the table.
#[must_use]
pub fn kind_for_glyph(glyph: char) -> Option<CellKind> {
    CELL_GLYPHS
        .iter()
        .position(|entry| *entry == glyph)
        .map(|wire| CellKind::ALL[wire])
}

// ── Tests ───────────────────────────────────────────────────────────────────
