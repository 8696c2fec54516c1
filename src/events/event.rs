//! # Trigger events consumed by the runner.
//!
//! The [`EventKind`] enum classifies the two trigger categories:
//! - **Restart request**: some part of the process wants the system
//!   restarted (the runner answers with a jittered, debounced restart).
//! - **Fault**: a fatal condition surfaced without a handler (the runner
//!   answers with shutdown and a failure exit status).
//!
//! The [`Event`] struct carries the optional metadata a fault wants
//! logged: a human-readable reason and, if one was captured, a
//! stack/trace rendering.
//!
//! ## Example
//! ```rust
//! use runvisor::{Event, EventKind, FaultKind};
//!
//! let ev = Event::fault(FaultKind::UnhandledError)
//!     .with_reason("connection pool poisoned")
//!     .with_trace("at pool.rs:42\nat main.rs:7");
//!
//! assert_eq!(ev.kind, EventKind::Fault(FaultKind::UnhandledError));
//! assert_eq!(ev.reason.as_deref(), Some("connection pool poisoned"));
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::SystemTime;

/// Category of a fatal fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// A failure surfaced synchronously without a handler.
    UnhandledError,
    /// An asynchronous failure surfaced without an explicit handler.
    UnhandledRejection,
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaultKind::UnhandledError => f.write_str("Unhandled error"),
            FaultKind::UnhandledRejection => f.write_str("Unhandled rejection"),
        }
    }
}

/// Classification of trigger events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Request to restart the supervised system.
    ///
    /// Sets:
    /// - `at`: wall-clock timestamp
    RestartRequested,

    /// A fatal fault; the runner shuts the system down.
    ///
    /// Sets:
    /// - `reason`: failure message, if available
    /// - `trace`: stack/trace rendering, if captured
    /// - `at`: wall-clock timestamp
    Fault(FaultKind),
}

/// Trigger event with optional metadata.
#[derive(Debug, Clone)]
pub struct Event {
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Event classification.
    pub kind: EventKind,
    /// Human-readable failure message.
    pub reason: Option<Arc<str>>,
    /// Stack/trace rendering, if one was captured at the fault site.
    pub trace: Option<Arc<str>>,
}

impl Event {
    /// Creates a new event of the given kind with the current timestamp.
    pub fn new(kind: EventKind) -> Self {
        Self {
            at: SystemTime::now(),
            kind,
            reason: None,
            trace: None,
        }
    }

    /// Creates a restart-request event.
    #[inline]
    pub fn restart_requested() -> Self {
        Event::new(EventKind::RestartRequested)
    }

    /// Creates a fault event of the given category.
    #[inline]
    pub fn fault(kind: FaultKind) -> Self {
        Event::new(EventKind::Fault(kind))
    }

    /// Attaches a human-readable failure message.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches a stack/trace rendering.
    #[inline]
    pub fn with_trace(mut self, trace: impl Into<Arc<str>>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}
