//! # Cross-platform termination-signal handling.
//!
//! Provides [`TerminationListener`], which registers for the recognized
//! termination signals and reports which one arrived so the runner can
//! name it in the log.
//!
//! ## Signals
//! **Unix platforms:**
//! - `SIGINT` (Ctrl-C in terminal)
//! - `SIGTERM` (default kill signal, used by systemd/Kubernetes)
//!
//! **Other platforms:**
//! - `Ctrl-C` via [`tokio::signal::ctrl_c`], reported as interrupt.
//!
//! Registration is separated from waiting: [`TerminationListener::register`]
//! installs the OS listeners synchronously, so that by the time
//! `Runner::start` returns, a raised signal is already observed.

use std::fmt;
use std::io;

/// A recognized termination signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TerminationSignal {
    /// Interrupt (Ctrl-C).
    Interrupt,
    /// Terminate (the polite kill).
    Terminate,
}

impl fmt::Display for TerminationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationSignal::Interrupt => f.write_str("SIGINT"),
            TerminationSignal::Terminate => f.write_str("SIGTERM"),
        }
    }
}

/// Registered termination-signal listeners.
#[cfg(unix)]
pub(crate) struct TerminationListener {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl TerminationListener {
    /// Installs listeners for the recognized signals.
    ///
    /// Returns `Err` if signal registration fails; the caller decides how
    /// to degrade (the runner logs and continues without signal handling).
    pub fn register() -> io::Result<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    /// Waits for the next termination signal.
    pub async fn recv(&mut self) -> TerminationSignal {
        tokio::select! {
            _ = recv_or_pend(&mut self.interrupt) => TerminationSignal::Interrupt,
            _ = recv_or_pend(&mut self.terminate) => TerminationSignal::Terminate,
        }
    }
}

/// A closed signal stream can deliver nothing more; park that arm forever
/// instead of resolving spuriously.
#[cfg(unix)]
async fn recv_or_pend(sig: &mut tokio::signal::unix::Signal) {
    match sig.recv().await {
        Some(()) => (),
        None => std::future::pending().await,
    }
}

/// Registered termination-signal listeners.
#[cfg(not(unix))]
pub(crate) struct TerminationListener;

#[cfg(not(unix))]
impl TerminationListener {
    /// Installs listeners for the recognized signals.
    pub fn register() -> io::Result<Self> {
        Ok(Self)
    }

    /// Waits for the next termination signal.
    pub async fn recv(&mut self) -> TerminationSignal {
        match tokio::signal::ctrl_c().await {
            Ok(()) => TerminationSignal::Interrupt,
            Err(_) => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_names_match_log_format() {
        assert_eq!(TerminationSignal::Interrupt.to_string(), "SIGINT");
        assert_eq!(TerminationSignal::Terminate.to_string(), "SIGTERM");
    }
}
