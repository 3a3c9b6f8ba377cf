//! The cell grid and its spread geometry.

use plenum_core::palette;
use plenum_core::{CellKind, Direction, Point};
use smallvec::SmallVec;

use crate::error::GridError;

/// Largest accepted width or height.
///
/// Coordinates are `i32`, so a dimension must fit in one.
pub const MAX_DIM: u32 = i32::MAX as u32;

/// Checks dimensions and returns the implied cell count.
pub(crate) fn validate_dims(width: u32, height: u32) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    if width > MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            axis: "width",
            value: width,
            max: MAX_DIM,
        });
    }
    if height > MAX_DIM {
        return Err(GridError::DimensionTooLarge {
            axis: "height",
            value: height,
            max: MAX_DIM,
        });
    }
    Ok(width as usize * height as usize)
}

/// A rectangular grid of cells, stored row-major.
///
/// The grid is the mutable part of a machine: fill passes read it and
/// shuttle displacement rewrites it one cell at a time.
///
/// # Examples
///
/// ```
/// use plenum_core::{CellKind, Point};
/// use plenum_grid::CellGrid;
///
/// let mut grid = CellGrid::new(3, 2)?;
/// assert_eq!(grid.get(Point::new(0, 0)), Some(CellKind::Solid));
///
/// grid.set(Point::new(1, 0), CellKind::Source);
/// assert_eq!(grid.positions_of(CellKind::Source), vec![Point::new(1, 0)]);
/// # Ok::<(), plenum_grid::GridError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    cells: Vec<CellKind>,
}

impl CellGrid {
    /// Builds an all-[`CellKind::Solid`] grid.
    ///
    /// # Errors
    ///
    /// [`GridError::EmptyGrid`] for a zero dimension and
    /// [`GridError::DimensionTooLarge`] beyond [`MAX_DIM`].
    pub fn new(width: u32, height: u32) -> Result<CellGrid, GridError> {
        let len = validate_dims(width, height)?;
        Ok(CellGrid {
            width,
            height,
            cells: vec![CellKind::Solid; len],
        })
    }

    /// Builds a grid from an existing row-major cell buffer.
    ///
    /// # Errors
    ///
    /// The dimension errors of [`CellGrid::new`], plus
    /// [`GridError::CellCountMismatch`] when the buffer length is not
    /// `width * height`.
    pub fn from_cells(
        width: u32,
        height: u32,
        cells: Vec<CellKind>,
    ) -> Result<CellGrid, GridError> {
        let len = validate_dims(width, height)?;
        if cells.len() != len {
            return Err(GridError::CellCountMismatch {
                expected: len,
                actual: cells.len(),
            });
        }
        Ok(CellGrid {
            width,
            height,
            cells,
        })
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when `at` lies inside the grid rectangle.
    #[must_use]
    pub fn in_bounds(&self, at: Point) -> bool {
        at.x >= 0
            && at.y >= 0
            && (at.x as u32) < self.width
            && (at.y as u32) < self.height
    }

    /// Row-major index of `at`, or `None` out of range.
    #[must_use]
    pub fn index_of(&self, at: Point) -> Option<usize> {
        if !self.in_bounds(at) {
            return None;
        }
        Some(at.y as usize * self.width as usize + at.x as usize)
    }

    /// The kind at a raw index.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not below [`CellGrid::len`]. Indices from
    /// [`CellGrid::index_of`] are always valid.
    #[must_use]
    pub fn kind_at(&self, index: usize) -> CellKind {
        self.cells[index]
    }

    /// Rewrites the kind at a raw index.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not below [`CellGrid::len`].
    pub fn set_at(&mut self, index: usize, kind: CellKind) {
        self.cells[index] = kind;
    }

    /// The kind at `at`, or `None` out of range.
    #[must_use]
    pub fn get(&self, at: Point) -> Option<CellKind> {
        self.index_of(at).map(|index| self.cells[index])
    }

    /// Rewrites the kind at `at`. Returns false (and changes nothing)
    /// out of range.
    pub fn set(&mut self, at: Point, kind: CellKind) -> bool {
        match self.index_of(at) {
            Some(index) => {
                self.cells[index] = kind;
                true
            }
            None => false,
        }
    }

    /// The whole cell buffer in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[CellKind] {
        &self.cells
    }

    /// Every cell of `kind`, in scan order: top row first, left to
    /// right within a row.
    ///
    /// Fill passes start from this list, so scan order is part of the
    /// deterministic step contract.
    #[must_use]
    pub fn positions_of(&self, kind: CellKind) -> Vec<Point> {
        let mut found = Vec::new();
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let at = Point::new(x, y);
                if self.get(at) == Some(kind) {
                    found.push(at);
                }
            }
        }
        found
    }

    /// The in-bounds neighbours pressure spreads to from `at`, paired
    /// with the direction of travel.
    ///
    /// Targets keep the fixed spread order right, left, down, up.
    /// Narrow joints drop the pair of directions they gate:
    /// [`CellKind::NarrowVertical`] drops right and left,
    /// [`CellKind::NarrowHorizontal`] drops down and up. An
    /// out-of-range `at` has no targets.
    #[must_use]
    pub fn spread_targets(&self, at: Point) -> SmallVec<[(Point, Direction); 4]> {
        let mut targets = SmallVec::new();
        let Some(index) = self.index_of(at) else {
            return targets;
        };
        let kind = self.cells[index];
        if kind != CellKind::NarrowVertical {
            for dir in [Direction::Right, Direction::Left] {
                let next = at.step(dir);
                if self.in_bounds(next) {
                    targets.push((next, dir));
                }
            }
        }
        if kind != CellKind::NarrowHorizontal {
            for dir in [Direction::Down, Direction::Up] {
                let next = at.step(dir);
                if self.in_bounds(next) {
                    targets.push((next, dir));
                }
            }
        }
        targets
    }

    /// Renders the grid as glyph rows separated by newlines.
    ///
    /// The glyphs come from [`plenum_core::palette::CELL_GLYPHS`], one
    /// row of text per grid row.
    #[must_use]
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.height as usize);
        for y in 0..self.height as i32 {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..self.width as i32 {
                let at = Point::new(x, y);
                let kind = self.cells[at.y as usize * self.width as usize + at.x as usize];
                out.push(palette::glyph_for_kind(kind));
            }
        }
        out
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
