//! Core vocabulary for the plenum pneumatic logic simulator.
//!
//! Everything in this crate is plain data: the cell kinds a machine is
//! built from, the pressure levels that flow through it, the grid
//! geometry those live on, and the identifiers and error values the
//! rest of the workspace passes around. No simulation happens here.
//!
//! # Modules
//!
//! - [`cell`]: the eleven cell kinds and their classification helpers
//! - [`pressure`]: pressure levels and their displacement ordering
//! - [`geom`]: grid points and spread directions
//! - [`id`]: newtype identifiers (ticks, connection nets)
//! - [`palette`]: the colour and glyph serialisation tables
//! - [`error`]: the short circuit fault value
//! - [`traits`]: read-only access to simulation state

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod geom;
pub mod id;
pub mod palette;
pub mod pressure;
pub mod traits;

pub use cell::CellKind;
pub use error::ShortCircuit;
pub use geom::{Direction, Point};
pub use id::{NetId, TickId};
pub use pressure::PressureLevel;
pub use traits::StateView;
