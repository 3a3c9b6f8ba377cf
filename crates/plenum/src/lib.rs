//! Plenum: a pneumatic logic circuit simulator on a 2-D cell grid.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all plenum sub-crates. For most users, adding `plenum` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use plenum::prelude::*;
//! use plenum::types::palette::colour_for_kind;
//!
//! // [Source][Channel][Output]: a three-cell supply line.
//! let pixels = [
//!     colour_for_kind(CellKind::Source),
//!     colour_for_kind(CellKind::Channel),
//!     colour_for_kind(CellKind::Output),
//! ];
//! let layout = Layout::from_pixels(3, 1, &pixels).unwrap();
//! let mut circuit = Circuit::new(layout);
//!
//! circuit.step().unwrap();
//! assert_eq!(circuit.output_levels(), vec![true]);
//! assert_eq!(circuit.tick(), TickId(1));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plenum-core` | Cell kinds, pressure levels, geometry, the palette |
//! | [`grid`] | `plenum-grid` | Cell grids, pressure fields, nets, the pixel decoder |
//! | [`engine`] | `plenum-engine` | The stepped circuit and the realtime driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`plenum-core`).
///
/// Cell kinds, pressure levels, grid geometry, identifiers, the
/// serialisation palette, and the [`types::StateView`] access trait.
pub use plenum_core as types;

/// Machine descriptions (`plenum-grid`).
///
/// [`grid::CellGrid`], [`grid::PressureField`], colour-keyed
/// [`grid::ConnectionNet`]s, and [`grid::Layout`] decoding from ARGB
/// pixel images.
pub use plenum_grid as grid;

/// The simulation engine (`plenum-engine`).
///
/// [`engine::Circuit`] for synchronous stepping and
/// [`engine::RealtimeCircuit`] for autonomous background ticking with
/// published snapshots.
pub use plenum_engine as engine;

/// Common imports for typical plenum usage.
///
/// ```rust
/// use plenum::prelude::*;
/// ```
///
/// This imports the most frequently used types: the circuit and its
/// realtime driver, machine descriptions, and the core vocabulary.
pub mod prelude {
    // Vocabulary
    pub use plenum_core::{
        CellKind, Direction, NetId, Point, PressureLevel, ShortCircuit, StateView, TickId,
    };

    // Machine descriptions
    pub use plenum_grid::{CellGrid, GridError, Layout, NetRegistry, PressureField};

    // Engine
    pub use plenum_engine::{
        Circuit, CircuitSnapshot, DriverConfig, DriverError, RealtimeCircuit, StepMetrics,
        SubmitError,
    };
}
