//! # Runner: lifecycle orchestration and the shutdown funnel.
//!
//! The [`Runner`] starts a [`System`], then supervises the process for
//! the triggers that end or restart it. All triggers serialize through a
//! single supervision loop, so exactly one shutdown sequence runs per
//! lifecycle no matter how many triggers fire.
//!
//! ## High-level architecture
//! ```text
//! Runner::start()
//!   └─► System::start()
//!         ├─ Err ──► returned to caller, nothing registered
//!         └─ Ok(components)
//!              ├─ subscribe Bus (restart requests, faults)
//!              ├─ register termination signals (SIGINT/SIGTERM)
//!              ├─ spawn supervision loop
//!              └─ return components
//!
//! Supervision loop (one task, one trigger at a time):
//!   select! {
//!     signal    ──► log ──► System::stop() ──► ExitStatus::Graceful
//!     fault     ──► log ──► System::stop() ──► ExitStatus::Failure
//!     restart
//!      request  ──► RestartScheduler::schedule()   (debounced jitter)
//!     timer
//!      fired    ──► System::restart()
//!                     ├─ Ok  ──► components discarded, keep supervising
//!                     └─ Err ──► log ──► ExitStatus::Failure (no stop)
//!   }
//!
//! Runner::wait()  ──► resolves with the ExitStatus
//! ```
//!
//! ## Rules
//! - Triggers are processed **sequentially**; events arriving while a
//!   system operation is in flight wait in the bus buffer.
//! - The first terminal trigger wins; later ones are never drained.
//! - `stop` failures during shutdown are best-effort cleanup: they never
//!   change the exit status chosen by the trigger.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::config::RunnerConfig;
use crate::core::scheduler::RestartScheduler;
use crate::core::signal::{TerminationListener, TerminationSignal};
use crate::core::state::{LifecycleState, StateCell};
use crate::error::{RunnerError, SystemError};
use crate::events::{Bus, Event, EventKind};
use crate::sinks::{ConsoleLog, LogSink};
use crate::system::System;

/// Deterministic outcome of a supervised lifecycle.
///
/// Converts into [`std::process::ExitCode`] so `main` can terminate the
/// process with the mandated status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Signal-triggered shutdown completed; exit code 0.
    Graceful,
    /// Fatal fault or failed restart; exit code 1.
    Failure,
}

impl ExitStatus {
    /// Returns the numeric process exit code.
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Graceful => 0,
            ExitStatus::Failure => 1,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Graceful => std::process::ExitCode::SUCCESS,
            ExitStatus::Failure => std::process::ExitCode::from(1),
        }
    }
}

/// Supervises one lifecycle of a [`System`].
///
/// See the [module docs](self) for the architecture and the crate docs
/// for a complete example.
pub struct Runner<S: System> {
    system: Arc<S>,
    cfg: RunnerConfig,
    bus: Bus,
    sink: Arc<dyn LogSink>,
    state: Arc<StateCell>,
    exit: Arc<watch::Sender<Option<ExitStatus>>>,
}

impl<S: System> Runner<S> {
    /// Creates a runner with the given configuration and the default
    /// console sink.
    pub fn new(system: S, cfg: RunnerConfig) -> Self {
        Self::builder(system).with_config(cfg).build()
    }

    /// Starts building a runner.
    pub fn builder(system: S) -> RunnerBuilder<S> {
        RunnerBuilder::new(system)
    }

    /// Starts the system and begins supervising.
    ///
    /// On success, returns the system's components value unchanged; by
    /// that point the trigger listeners are registered, in deterministic
    /// order: bus (restart requests and faults) first, then termination
    /// signals.
    ///
    /// On failure, the system's error is propagated unchanged inside
    /// [`RunnerError::System`], nothing is registered, and the state
    /// stays [`LifecycleState::NotStarted`].
    ///
    /// A runner supervises exactly one lifecycle; a second call fails
    /// with [`RunnerError::AlreadyStarted`].
    pub async fn start(&self) -> Result<S::Components, RunnerError> {
        // Claim the lifecycle before touching the system so a concurrent
        // second call cannot start it twice; reverted if start fails.
        if !self
            .state
            .transition(LifecycleState::NotStarted, LifecycleState::Running)
        {
            return Err(RunnerError::AlreadyStarted);
        }

        let components = match self.system.start().await {
            Ok(components) => components,
            Err(err) => {
                self.state.set(LifecycleState::NotStarted);
                return Err(RunnerError::System(err));
            }
        };

        let events = self.bus.subscribe();
        let signals = match TerminationListener::register() {
            Ok(listener) => Some(listener),
            Err(err) => {
                self.sink.error(&format!(
                    "Failed to register signal listeners: {err}. \
                     Signal-triggered shutdown is disabled."
                ));
                None
            }
        };

        let supervision = Supervision {
            system: Arc::clone(&self.system),
            scheduler: RestartScheduler::new(self.cfg.restart.window, Arc::clone(&self.sink)),
            events: Some(events),
            signals,
            sink: Arc::clone(&self.sink),
            state: Arc::clone(&self.state),
            exit: Arc::clone(&self.exit),
            _bus: self.bus.clone(),
        };
        tokio::spawn(supervision.run());

        Ok(components)
    }

    /// Stops the system, forwarding the outcome unchanged.
    ///
    /// Caller-driven shutdown outside the fatal/signal paths: registered
    /// listeners and the lifecycle state are untouched.
    pub async fn stop(&self) -> Result<(), SystemError> {
        self.system.stop().await
    }

    /// Resolves once supervision has terminated, yielding the exit
    /// status. Any number of callers may wait concurrently.
    pub async fn wait(&self) -> ExitStatus {
        let mut rx = self.exit.subscribe();
        loop {
            if let Some(status) = *rx.borrow_and_update() {
                return status;
            }
            // The sender lives in this runner, so the channel cannot
            // close while `&self` is borrowed.
            if rx.changed().await.is_err() {
                return ExitStatus::Failure;
            }
        }
    }

    /// Convenience: [`start`](Self::start), then [`wait`](Self::wait).
    /// The components value is discarded.
    pub async fn run(&self) -> Result<ExitStatus, RunnerError> {
        self.start().await?;
        Ok(self.wait().await)
    }

    /// Returns the trigger bus. Clone it into any code that may request
    /// a restart or report a fault.
    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> LifecycleState {
        self.state.get()
    }

    /// Returns the runner's configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.cfg
    }
}

/// Builder for [`Runner`].
pub struct RunnerBuilder<S: System> {
    system: S,
    cfg: RunnerConfig,
    sink: Arc<dyn LogSink>,
    bus: Bus,
}

impl<S: System> RunnerBuilder<S> {
    fn new(system: S) -> Self {
        Self {
            system,
            cfg: RunnerConfig::default(),
            sink: Arc::new(ConsoleLog::new()),
            bus: Bus::default(),
        }
    }

    /// Replaces the default configuration.
    pub fn with_config(mut self, cfg: RunnerConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replaces the default [`ConsoleLog`] sink.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Uses an existing bus instead of creating one, for processes that
    /// wire the trigger bus before building the runner.
    pub fn with_bus(mut self, bus: Bus) -> Self {
        self.bus = bus;
        self
    }

    /// Builds the runner.
    pub fn build(self) -> Runner<S> {
        let (exit, _) = watch::channel(None);
        Runner {
            system: Arc::new(self.system),
            cfg: self.cfg,
            bus: self.bus,
            sink: self.sink,
            state: Arc::new(StateCell::new()),
            exit: Arc::new(exit),
        }
    }
}

/// One iteration's winning trigger.
enum Trigger {
    Signal(TerminationSignal),
    Incoming(Event),
    RestartDue,
    EventsClosed,
    Ignore,
}

/// State owned by the spawned supervision loop.
struct Supervision<S: System> {
    system: Arc<S>,
    scheduler: RestartScheduler,
    events: Option<broadcast::Receiver<Event>>,
    signals: Option<TerminationListener>,
    sink: Arc<dyn LogSink>,
    state: Arc<StateCell>,
    exit: Arc<watch::Sender<Option<ExitStatus>>>,
    // Keeps the trigger channel open for the lifetime of supervision.
    _bus: Bus,
}

impl<S: System> Supervision<S> {
    async fn run(mut self) {
        loop {
            let trigger = tokio::select! {
                sig = next_signal(&mut self.signals) => Trigger::Signal(sig),
                ev = next_event(&mut self.events) => match ev {
                    Ok(event) => Trigger::Incoming(event),
                    Err(broadcast::error::RecvError::Lagged(_)) => Trigger::Ignore,
                    Err(broadcast::error::RecvError::Closed) => Trigger::EventsClosed,
                },
                _ = self.scheduler.fired() => Trigger::RestartDue,
            };

            match trigger {
                Trigger::Signal(sig) => {
                    self.sink.info(&format!(
                        "Received {sig}. Attempting to shutdown gracefully."
                    ));
                    self.shutdown(ExitStatus::Graceful).await;
                    return;
                }
                Trigger::Incoming(event) => match event.kind {
                    EventKind::RestartRequested => {
                        // Suppressed outside Running: nothing may restart
                        // a system whose stop sequence has begun.
                        if self.state.get() == LifecycleState::Running {
                            self.scheduler.schedule();
                        }
                    }
                    EventKind::Fault(kind) => {
                        self.sink.error(&format!("{kind}. Invoking shutdown."));
                        if let Some(reason) = &event.reason {
                            self.sink.error(reason);
                        }
                        if let Some(trace) = &event.trace {
                            self.sink.error(trace);
                        }
                        self.shutdown(ExitStatus::Failure).await;
                        return;
                    }
                },
                Trigger::RestartDue => match self.system.restart().await {
                    // The restarted components value is observable only
                    // through the system itself.
                    Ok(_components) => {}
                    Err(err) => {
                        self.sink.error("Error restarting system.");
                        self.sink.error(&err.to_string());
                        self.finish(ExitStatus::Failure);
                        return;
                    }
                },
                Trigger::EventsClosed => {
                    self.events = None;
                }
                Trigger::Ignore => {}
            }
        }
    }

    /// Runs the one permitted stop sequence and publishes the outcome.
    async fn shutdown(&mut self, status: ExitStatus) {
        if !self
            .state
            .transition(LifecycleState::Running, LifecycleState::ShuttingDown)
        {
            return;
        }

        // Best-effort cleanup: the trigger decided the exit status.
        let _ = self.system.stop().await;
        self.finish(status);
    }

    fn finish(&self, status: ExitStatus) {
        self.state.set(LifecycleState::Terminated);
        self.exit.send_replace(Some(status));
    }
}

async fn next_signal(signals: &mut Option<TerminationListener>) -> TerminationSignal {
    match signals {
        Some(listener) => listener.recv().await,
        None => std::future::pending().await,
    }
}

async fn next_event(
    events: &mut Option<broadcast::Receiver<Event>>,
) -> Result<Event, broadcast::error::RecvError> {
    match events {
        Some(rx) => rx.recv().await,
        None => std::future::pending().await,
    }
}
