//! Realtime driver configuration.

use std::error::Error;
use std::fmt;
use std::time::Duration;

/// Tuning for [`crate::RealtimeCircuit`].
///
/// The defaults step at 100 Hz, one tick every 10 ms, which is the rate
/// the machines in the test fixtures were designed around.
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// Steps attempted per second.
    pub tick_rate_hz: f64,
    /// Bounded depth of the input command channel. Submissions beyond
    /// this back up at the caller rather than in memory.
    pub command_capacity: usize,
}

impl Default for DriverConfig {
    fn default() -> DriverConfig {
        DriverConfig {
            tick_rate_hz: 100.0,
            command_capacity: 64,
        }
    }
}

impl DriverConfig {
    /// Checks the configuration before a driver is built from it.
    ///
    /// # Errors
    ///
    /// [`DriverError::InvalidTickRate`] unless the rate is finite and
    /// positive, [`DriverError::ZeroCommandCapacity`] for an
    /// unbuffered command channel.
    pub fn validate(&self) -> Result<(), DriverError> {
        if !self.tick_rate_hz.is_finite() || self.tick_rate_hz <= 0.0 {
            return Err(DriverError::InvalidTickRate {
                value: self.tick_rate_hz,
            });
        }
        if self.command_capacity == 0 {
            return Err(DriverError::ZeroCommandCapacity);
        }
        Ok(())
    }

    /// The wall-clock budget of one tick at the configured rate.
    #[must_use]
    pub fn tick_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate_hz)
    }
}

/// Construction or shutdown failure of a realtime driver.
#[derive(Clone, Debug, PartialEq)]
pub enum DriverError {
    /// The configured tick rate was not a positive finite number.
    InvalidTickRate {
        /// The rejected rate.
        value: f64,
    },
    /// The command channel was configured with no capacity.
    ZeroCommandCapacity,
    /// The operating system refused to start the tick thread.
    ThreadSpawnFailed {
        /// The error the spawn reported.
        reason: String,
    },
    /// The tick thread panicked and the circuit could not be recovered.
    CircuitRecoveryFailed,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::InvalidTickRate { value } => {
                write!(f, "tick rate must be positive and finite, got {value}")
            }
            DriverError::ZeroCommandCapacity => {
                write!(f, "command channel capacity must be at least 1")
            }
            DriverError::ThreadSpawnFailed { reason } => {
                write!(f, "could not spawn the tick thread: {reason}")
            }
            DriverError::CircuitRecoveryFailed => {
                write!(f, "tick thread panicked; circuit state was lost")
            }
        }
    }
}

impl Error for DriverError {}

// ── Tests ───────────────────────────────────────────────────────────────────
