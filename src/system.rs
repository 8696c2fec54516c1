//! # The supervised component graph.
//!
//! This module defines the [`System`] trait, the black box the runner
//! supervises. A system knows how to start itself, stop itself, and
//! restart itself; the runner only reacts to the reported outcomes and
//! never looks inside.
//!
//! The [`System::Components`] value returned by `start` and `restart` is
//! opaque to the runner: `start` hands it back to the caller unchanged,
//! and the value produced by a scheduled restart is discarded.

use async_trait::async_trait;

use crate::error::SystemError;

/// # Component graph handle.
///
/// Completion semantics: each operation resolves exactly once, with either
/// success or failure. The runner imposes no timeout — an operation that
/// hangs, hangs the supervision of that lifecycle (timeout policy belongs
/// inside the system).
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use runvisor::{System, SystemError};
///
/// struct Service;
///
/// #[async_trait]
/// impl System for Service {
///     type Components = ();
///
///     async fn start(&self) -> Result<(), SystemError> {
///         // wire and start components...
///         Ok(())
///     }
///
///     async fn stop(&self) -> Result<(), SystemError> {
///         Ok(())
///     }
///
///     async fn restart(&self) -> Result<(), SystemError> {
///         self.stop().await?;
///         self.start().await
///     }
/// }
/// ```
#[async_trait]
pub trait System: Send + Sync + 'static {
    /// Opaque value describing the started components.
    ///
    /// Never interpreted by the runner.
    type Components: Send + 'static;

    /// Starts the component graph.
    async fn start(&self) -> Result<Self::Components, SystemError>;

    /// Stops the component graph.
    async fn stop(&self) -> Result<(), SystemError>;

    /// Restarts the component graph.
    async fn restart(&self) -> Result<Self::Components, SystemError>;
}
