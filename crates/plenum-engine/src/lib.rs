//! Simulation engine for the plenum pneumatic logic simulator.
//!
//! A [`Circuit`] owns a decoded machine and advances it one tick at a
//! time: clear the pressure field, run the three fill passes, apply the
//! shuttle shifts the fills collected, and only then advance the tick.
//! A step that detects a short circuit aborts instead, leaving the
//! fault on record and the tick unchanged.
//!
//! [`RealtimeCircuit`] wraps a circuit in a dedicated tick thread that
//! steps at a fixed rate, publishes an owned [`CircuitSnapshot`] after
//! every attempt, and accepts input changes through a bounded command
//! channel.
//!
//! # Modules
//!
//! - [`circuit`]: the stepped machine
//! - [`snapshot`]: owned state snapshots and the publication slot
//! - [`metrics`]: per-step timing and work counters
//! - [`config`]: realtime driver configuration
//! - [`driver`]: the realtime tick thread

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod circuit;
pub mod config;
pub mod driver;
mod fill;
pub mod metrics;
mod shuttle;
pub mod snapshot;

pub use circuit::Circuit;
pub use config::{DriverConfig, DriverError};
pub use driver::{RealtimeCircuit, SubmitError};
pub use metrics::StepMetrics;
pub use snapshot::{CircuitSnapshot, SnapshotSlot};
