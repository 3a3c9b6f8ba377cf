//! The realtime tick thread.
//!
//! [`RealtimeCircuit`] moves a [`Circuit`] onto a dedicated thread that
//! steps it at a fixed rate. The thread owns the circuit outright;
//! everyone else sees the machine only through published snapshots and
//! talks to it only through the bounded command channel. Shutting down
//! hands the circuit back.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::circuit::Circuit;
use crate::config::{DriverConfig, DriverError};
use crate::snapshot::{CircuitSnapshot, SnapshotSlot};

/// A batch of input port changes, index paired with the driven level.
type InputBatch = Vec<(usize, bool)>;

/// Rejected input submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The tick thread is gone and the command channel is closed.
    Shutdown,
    /// The command channel is full; the tick thread has not caught up.
    ChannelFull,
    /// An input index with no matching port.
    UnknownInput {
        /// The rejected index.
        index: usize,
        /// How many input ports the machine has.
        count: usize,
    },
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::Shutdown => write!(f, "driver has shut down"),
            SubmitError::ChannelFull => write!(f, "command channel is full"),
            SubmitError::UnknownInput { index, count } => {
                write!(f, "input index {index} out of range for {count} ports")
            }
        }
    }
}

impl std::error::Error for SubmitError {}

/// A circuit stepped continuously on its own thread.
///
/// # Examples
///
/// ```no_run
/// use plenum_core::StateView;
/// use plenum_engine::{Circuit, DriverConfig, RealtimeCircuit};
/// use plenum_grid::Layout;
///
/// # fn layout() -> Layout { unimplemented!() }
/// let driver = RealtimeCircuit::new(Circuit::new(layout()), DriverConfig::default())?;
///
/// driver.submit_inputs(&[(0, true)])?;
/// if let Some(snapshot) = driver.latest_snapshot() {
///     println!("tick {}", snapshot.tick());
/// }
///
/// let circuit = driver.shutdown()?;
/// # let _ = circuit;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct RealtimeCircuit {
    slot: Arc<SnapshotSlot>,
    commands: Sender<InputBatch>,
    shutdown: Arc<AtomicBool>,
    tick_thread: Option<JoinHandle<Circuit>>,
    input_count: usize,
}

impl RealtimeCircuit {
    /// Spawns the tick thread and starts stepping `circuit` at the
    /// configured rate.
    ///
    /// # Errors
    ///
    /// The validation errors of [`DriverConfig::validate`], or
    /// [`DriverError::ThreadSpawnFailed`] when the thread cannot start.
    pub fn new(circuit: Circuit, config: DriverConfig) -> Result<RealtimeCircuit, DriverError> {
        config.validate()?;

        let input_count = circuit.inputs().len();
        let slot = Arc::new(SnapshotSlot::new());
        let shutdown = Arc::new(AtomicBool::new(false));
        let (tx, rx) = bounded(config.command_capacity);

        let tick_loop = TickLoop {
            circuit,
            slot: Arc::clone(&slot),
            commands: rx,
            shutdown: Arc::clone(&shutdown),
            budget: config.tick_budget(),
        };
        let tick_thread = thread::Builder::new()
            .name("plenum-tick".into())
            .spawn(move || tick_loop.run())
            .map_err(|err| DriverError::ThreadSpawnFailed {
                reason: err.to_string(),
            })?;

        Ok(RealtimeCircuit {
            slot,
            commands: tx,
            shutdown,
            tick_thread: Some(tick_thread),
            input_count,
        })
    }

    /// How many input ports the machine exposes.
    #[must_use]
    pub fn input_count(&self) -> usize {
        self.input_count
    }

    /// A handle to the newest published snapshot, or `None` before the
    /// first step attempt finishes.
    #[must_use]
    pub fn latest_snapshot(&self) -> Option<Arc<CircuitSnapshot>> {
        self.slot.latest()
    }

    /// How many step attempts have published so far. Faulted attempts
    /// publish too, so this keeps growing while the tick stands still.
    #[must_use]
    pub fn published_steps(&self) -> u64 {
        self.slot.publish_count()
    }

    /// Queues input port changes for the tick thread to apply before
    /// its next step.
    ///
    /// The whole batch is validated before any of it is queued.
    ///
    /// # Errors
    ///
    /// [`SubmitError::UnknownInput`] for an index with no port,
    /// [`SubmitError::ChannelFull`] when the channel is saturated, and
    /// [`SubmitError::Shutdown`] when the tick thread is gone.
    pub fn submit_inputs(&self, settings: &[(usize, bool)]) -> Result<(), SubmitError> {
        for (index, _) in settings {
            if *index >= self.input_count {
                return Err(SubmitError::UnknownInput {
                    index: *index,
                    count: self.input_count,
                });
            }
        }
        if settings.is_empty() {
            return Ok(());
        }
        match self.commands.try_send(settings.to_vec()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => Err(SubmitError::ChannelFull),
            Err(TrySendError::Disconnected(_)) => Err(SubmitError::Shutdown),
        }
    }

    /// Stops the tick thread and hands the circuit back.
    ///
    /// # Errors
    ///
    /// [`DriverError::CircuitRecoveryFailed`] when the tick thread
    /// panicked and took the circuit with it.
    pub fn shutdown(mut self) -> Result<Circuit, DriverError> {
        self.begin_shutdown();
        match self.tick_thread.take() {
            Some(handle) => handle.join().map_err(|_| DriverError::CircuitRecoveryFailed),
            None => Err(DriverError::CircuitRecoveryFailed),
        }
    }

    /// Signals the tick thread to stop and wakes it from its budget
    /// wait.
    fn begin_shutdown(&self) {
        self.shutdown.store(true, Ordering::Release);
        if let Some(handle) = &self.tick_thread {
            handle.thread().unpark();
        }
    }
}

impl Drop for RealtimeCircuit {
    fn drop(&mut self) {
        if self.tick_thread.is_some() {
            self.begin_shutdown();
            if let Some(handle) = self.tick_thread.take() {
                let _ = handle.join();
            }
        }
    }
}

/// State owned by the tick thread.
struct TickLoop {
    circuit: Circuit,
    slot: Arc<SnapshotSlot>,
    commands: Receiver<InputBatch>,
    shutdown: Arc<AtomicBool>,
    budget: Duration,
}

impl TickLoop {
    /// Steps until shutdown, then returns the circuit to the joiner.
    fn run(mut self) -> Circuit {
        while !self.shutdown.load(Ordering::Acquire) {
            let started = Instant::now();

            // Apply input changes queued since the last tick. Indices
            // were validated at submission.
            while let Ok(batch) = self.commands.try_recv() {
                for (index, high) in batch {
                    self.circuit.set_input(index, high);
                }
            }

            // A faulted attempt publishes like any other, so readers
            // see the fault rather than a silently frozen machine.
            let _ = self.circuit.step();
            self.slot.publish(self.circuit.snapshot());

            // Sleep out the rest of the budget. park_timeout, not
            // sleep, so begin_shutdown can cut the wait short.
            if let Some(remaining) = self.budget.checked_sub(started.elapsed()) {
                thread::park_timeout(remaining);
            }
        }
        self.circuit
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────
