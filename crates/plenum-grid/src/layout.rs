//! Pixel image decoding.
//!
//! A machine ships as a width, a height, and one ARGB pixel per cell in
//! row-major order. Palette colours decode straight to cell kinds; any
//! other colour turns its cell into a channel and enrols it in the
//! connection net keyed by that colour.

use plenum_core::palette;
use plenum_core::{CellKind, Point};

use crate::error::GridError;
use crate::grid::{validate_dims, CellGrid};
use crate::net::NetRegistry;

/// A decoded machine description: cells, nets, and port lists.
///
/// Input and output ports are collected in scan order, and that order
/// is the index space external drivers address them by.
///
/// # Examples
///
/// ```
/// use plenum_core::palette::{colour_for_kind, CELL_COLOURS};
/// use plenum_core::{CellKind, Point};
/// use plenum_grid::Layout;
///
/// // [Source][Channel][net 0x1234]: the net colour still decodes.
/// let pixels = [
///     colour_for_kind(CellKind::Source),
///     colour_for_kind(CellKind::Channel),
///     0xFF00_1234,
/// ];
/// let layout = Layout::from_pixels(3, 1, &pixels)?;
///
/// assert_eq!(layout.cells().get(Point::new(2, 0)), Some(CellKind::Channel));
/// assert_eq!(layout.nets().len(), 1);
/// # Ok::<(), plenum_grid::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    cells: CellGrid,
    nets: NetRegistry,
    inputs: Vec<Point>,
    outputs: Vec<Point>,
}

impl Layout {
    /// Decodes a row-major ARGB pixel buffer.
    ///
    /// # Errors
    ///
    /// The dimension errors of [`CellGrid::new`], plus
    /// [`GridError::CellCountMismatch`] when the buffer length is not
    /// `width * height`.
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: &[u32],
    ) -> Result<Layout, GridError> {
        let len = validate_dims(width, height)?;
        if pixels.len() != len {
            return Err(GridError::CellCountMismatch {
                expected: len,
                actual: pixels.len(),
            });
        }

        let mut cells = Vec::with_capacity(len);
        let mut nets = NetRegistry::new(len);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let at = Point::new(x, y);
                let index = cells.len();
                match palette::kind_for_colour(pixels[index]) {
                    Some(kind) => cells.push(kind),
                    None => {
                        nets.enroll(pixels[index], at, index);
                        cells.push(CellKind::Channel);
                    }
                }
            }
        }

        let cells = CellGrid::from_cells(width, height, cells)?;
        Layout::from_parts(cells, nets)
    }

    /// Assembles a layout from an already-built grid and net registry,
    /// collecting the port lists by scan.
    ///
    /// # Errors
    ///
    /// [`GridError::NetTableMismatch`] when the registry was sized for
    /// a different grid, and [`GridError::NetPointOutOfBounds`] when a
    /// net member lies outside the grid.
    pub fn from_parts(cells: CellGrid, nets: NetRegistry) -> Result<Layout, GridError> {
        if nets.cell_count() != cells.len() {
            return Err(GridError::NetTableMismatch {
                expected: cells.len(),
                actual: nets.cell_count(),
            });
        }
        for net in nets.iter() {
            for at in net.points() {
                if !cells.in_bounds(*at) {
                    return Err(GridError::NetPointOutOfBounds { at: *at });
                }
            }
        }

        let inputs = cells.positions_of(CellKind::Input);
        let outputs = cells.positions_of(CellKind::Output);
        Ok(Layout {
            cells,
            nets,
            inputs,
            outputs,
        })
    }

    /// The decoded cell grid.
    #[must_use]
    pub fn cells(&self) -> &CellGrid {
        &self.cells
    }

    /// The decoded connection nets.
    #[must_use]
    pub fn nets(&self) -> &NetRegistry {
        &self.nets
    }

    /// Input port cells in scan order.
    #[must_use]
    pub fn inputs(&self) -> &[Point] {
        &self.inputs
    }

    /// Output port cells in scan order.
    #[must_use]
    pub fn outputs(&self) -> &[Point] {
        &self.outputs
    }

    /// Splits the layout into its parts, in the order cells, nets,
    /// inputs, outputs.
    #[must_use]
    pub fn into_parts(self) -> (CellGrid, NetRegistry, Vec<Point>, Vec<Point>) {
        (self.cells, self.nets, self.inputs, self.outputs)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
