//! # runvisor
//!
//! **Runvisor** supervises the lifecycle of a long-running service
//! process: it starts an underlying component system, watches the process
//! for fatal conditions, and coordinates an orderly shutdown or a
//! randomized, jittered restart.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌─────────────────┐      ┌───────────────────┐
//!     │  your process   │      │   OS (signals)    │
//!     │ restart request │      │  SIGINT, SIGTERM  │
//!     │  fault report   │      └─────────┬─────────┘
//!     └───────┬─────────┘                │
//!             ▼                          ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Runner (lifecycle controller)                            │
//! │  - Bus (trigger ingress, broadcast)                       │
//! │  - supervision loop (one task, one trigger at a time)     │
//! │  - RestartScheduler (debounce + jitter, one timer)        │
//! │  - LogSink (injected, ConsoleLog by default)              │
//! └──────┬──────────────────────┬─────────────────────────────┘
//!        ▼                      ▼
//! ┌──────────────┐      ┌───────────────┐
//! │    System    │      │  ExitStatus   │
//! │ start / stop │      │ Graceful = 0  │
//! │   restart    │      │ Failure  = 1  │
//! └──────────────┘      └───────────────┘
//! ```
//!
//! ### Lifecycle
//! ```text
//! Runner::start() ──► System::start()
//!    ├─ Err ─► returned to the caller, nothing registered
//!    └─ Ok  ─► listeners registered, supervision begins
//!
//! then, per trigger:
//!    restart request ─► delay = jitter(config.restart.window)
//!                       re-arm the single pending timer
//!    timer fired     ─► System::restart()  (failure ends the lifecycle)
//!    SIGINT/SIGTERM  ─► System::stop() ─► ExitStatus::Graceful
//!    fault           ─► System::stop() ─► ExitStatus::Failure
//!
//! Runner::wait() ──► ExitStatus ──► std::process::ExitCode
//! ```
//!
//! ## Features
//! | Area               | Description                                                         | Key types / traits            |
//! |--------------------|---------------------------------------------------------------------|-------------------------------|
//! | **Lifecycle**      | Start the system, funnel every fatal trigger into one shutdown.     | [`Runner`], [`ExitStatus`]    |
//! | **Restart jitter** | Debounce restart requests into one randomized, superseding timer.   | [`Event::restart_requested`]  |
//! | **Triggers**       | Deliver restart requests and fault reports from anywhere.           | [`Bus`], [`Event`]            |
//! | **System**         | The supervised black box: start, stop, restart.                     | [`System`], [`SystemError`]   |
//! | **Logging**        | Capability-style sink, console by default.                          | [`LogSink`], [`ConsoleLog`]   |
//! | **Configuration**  | Leaf-level merge onto defaults, humantime duration strings.         | [`RunnerConfig`]              |
//!
//! ## Example
//! ```no_run
//! use std::process::ExitCode;
//!
//! use async_trait::async_trait;
//! use runvisor::{Runner, RunnerConfig, System, SystemError};
//!
//! struct Service;
//!
//! #[async_trait]
//! impl System for Service {
//!     type Components = ();
//!
//!     async fn start(&self) -> Result<(), SystemError> {
//!         // wire and start components...
//!         Ok(())
//!     }
//!
//!     async fn stop(&self) -> Result<(), SystemError> {
//!         Ok(())
//!     }
//!
//!     async fn restart(&self) -> Result<(), SystemError> {
//!         self.stop().await?;
//!         self.start().await
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> ExitCode {
//!     let runner = Runner::new(Service, RunnerConfig::default());
//!
//!     if let Err(err) = runner.start().await {
//!         eprintln!("failed to start: {err}");
//!         return ExitCode::FAILURE;
//!     }
//!
//!     runner.wait().await.into()
//! }
//! ```

mod config;
mod core;
mod error;
mod events;
mod sinks;
mod system;

// ---- Public re-exports ----

pub use crate::core::{ExitStatus, LifecycleState, Runner, RunnerBuilder};
pub use config::{parse_window, RestartConfig, RunnerConfig};
pub use error::{ConfigError, RunnerError, SystemError};
pub use events::{Bus, Event, EventKind, FaultKind};
pub use sinks::{ConsoleLog, LogSink};
pub use system::System;
