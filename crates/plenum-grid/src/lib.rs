//! Machine descriptions for the plenum simulator.
//!
//! This crate owns the static shape of a machine: the rectangular
//! [`CellGrid`], the per-tick [`PressureField`] laid over it, the
//! [`NetRegistry`] of colour-keyed connection nets, and the
//! [`Layout`] decoder that turns an ARGB pixel image into all three.
//! The simulation itself lives in `plenum-engine`.
//!
//! # Modules
//!
//! - [`grid`]: the cell grid and its spread geometry
//! - [`field`]: the pressure field
//! - [`net`]: connection nets and their registry
//! - [`layout`]: pixel image decoding
//! - [`error`]: description validation errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod grid;
pub mod layout;
pub mod net;

pub use error::GridError;
pub use field::PressureField;
pub use grid::CellGrid;
pub use layout::Layout;
pub use net::{ConnectionNet, NetRegistry};
