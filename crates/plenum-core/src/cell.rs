//! Cell kinds.
//!
//! A machine is a rectangular grid of cells. Each cell has exactly one
//! kind, and the kind alone decides how the cell behaves during a
//! pressure fill and whether shuttle hardware can move through it.

/// The kind of a single grid cell.
///
/// The discriminant values are the wire order of the serialisation
/// tables in [`crate::palette`] and must not be rearranged.
///
/// # Examples
///
/// ```
/// use plenum_core::CellKind;
///
/// assert!(CellKind::ShuttleThru.is_shuttle());
/// assert!(!CellKind::Channel.is_shuttle());
/// assert_eq!(CellKind::default(), CellKind::Solid);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Impassable wall material. The grid default.
    #[default]
    Solid = 0,
    /// Open channel. Carries pressure in all four directions and is the
    /// only kind a shuttle cell can be displaced into.
    Channel = 1,
    /// Narrow joint that passes pressure vertically only.
    NarrowVertical = 2,
    /// Narrow joint that passes pressure horizontally only.
    NarrowHorizontal = 3,
    /// Shuttle section that passes pressure like a channel while the
    /// shuttle occupies it.
    ShuttleThru = 4,
    /// Shuttle section that seals the cell and receives displacement
    /// pushes from arriving pressure.
    ShuttleBlock = 5,
    /// Negative pressure entry point.
    Sink = 6,
    /// Positive pressure entry point.
    Source = 7,
    /// Neutral reference entry point.
    Vent = 8,
    /// External input port. Inert until driven, at which point the cell
    /// is rewritten to [`CellKind::Source`] or [`CellKind::Sink`].
    Input = 9,
    /// External output port. Carries pressure like a channel and is
    /// read back as the machine's result.
    Output = 10,
}

impl CellKind {
    /// Every kind, in discriminant order.
    pub const ALL: [CellKind; 11] = [
        CellKind::Solid,
        CellKind::Channel,
        CellKind::NarrowVertical,
        CellKind::NarrowHorizontal,
        CellKind::ShuttleThru,
        CellKind::ShuttleBlock,
        CellKind::Sink,
        CellKind::Source,
        CellKind::Vent,
        CellKind::Input,
        CellKind::Output,
    ];

    /// True for the two kinds that make up shuttle hardware.
    #[must_use]
    pub fn is_shuttle(self) -> bool {
        matches!(self, CellKind::ShuttleThru | CellKind::ShuttleBlock)
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
