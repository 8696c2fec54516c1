//! Error types used by the runvisor runtime and the supervised system.
//!
//! This module defines three error types:
//!
//! - [`SystemError`] — failure reported by a component-graph operation
//!   (`start`, `stop`, `restart`).
//! - [`RunnerError`] — errors raised by the lifecycle controller itself.
//! - [`ConfigError`] — configuration parsing failures.
//!
//! The runner never interprets a [`SystemError`] beyond displaying it: the
//! component graph is a black box and its failure payload is an opaque
//! message.

use thiserror::Error;

/// # Error reported by a [`System`](crate::System) operation.
///
/// The component graph is opaque to the runner, so its failures are too:
/// a `SystemError` carries only a human-readable message. Implementations
/// convert their own error types at the trait boundary.
///
/// # Example
/// ```
/// use runvisor::SystemError;
///
/// let err = SystemError::new("database pool exhausted");
/// assert_eq!(err.to_string(), "database pool exhausted");
/// ```
#[derive(Error, Debug, Clone)]
#[error("{message}")]
pub struct SystemError {
    message: String,
}

impl SystemError {
    /// Creates a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for SystemError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for SystemError {
    fn from(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// # Errors produced by the lifecycle controller.
///
/// A startup failure from the component graph surfaces through
/// [`RunnerError::System`] with the original message intact; the runner
/// adds nothing and retries nothing.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The runner supervises exactly one lifecycle; `start` was called twice.
    #[error("runner is already started")]
    AlreadyStarted,

    /// The component graph failed to start.
    #[error(transparent)]
    System(#[from] SystemError),
}

/// # Configuration parsing failures.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The restart window string could not be parsed as a duration.
    #[error("invalid restart window {value:?}: {source}")]
    InvalidWindow {
        /// The rejected input.
        value: String,
        /// The underlying parse error.
        #[source]
        source: humantime::DurationError,
    },

    /// The restart window parsed to zero, which would disable jitter entirely.
    #[error("restart window must be positive, got {value:?}")]
    ZeroWindow {
        /// The rejected input.
        value: String,
    },
}
