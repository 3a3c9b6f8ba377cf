//! The pressure field.

use plenum_core::PressureLevel;

/// Per-cell pressure for one tick, indexed like the owning grid.
///
/// The field is rebuilt from scratch every step: cleared first, then
/// written by the fill passes. It deliberately has no geometry of its
/// own; callers translate points through the grid they pair it with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PressureField {
    levels: Vec<PressureLevel>,
}

impl PressureField {
    /// A field of `len` cells, all at [`PressureLevel::None`].
    #[must_use]
    pub fn new(len: usize) -> PressureField {
        PressureField {
            levels: vec![PressureLevel::None; len],
        }
    }

    /// Cell count the field covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True for a zero-cell field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Resets every cell to [`PressureLevel::None`].
    pub fn clear(&mut self) {
        self.levels.fill(PressureLevel::None);
    }

    /// The level at a raw index.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not below [`PressureField::len`].
    #[must_use]
    pub fn level_at(&self, index: usize) -> PressureLevel {
        self.levels[index]
    }

    /// Writes the level at a raw index.
    ///
    /// # Panics
    ///
    /// Panics when `index` is not below [`PressureField::len`].
    pub fn set_at(&mut self, index: usize, level: PressureLevel) {
        self.levels[index] = level;
    }

    /// The whole field in row-major order.
    #[must_use]
    pub fn as_slice(&self) -> &[PressureLevel] {
        &self.levels
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
