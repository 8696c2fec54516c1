//! # Log sink trait.
//!
//! Provides [`LogSink`], the capability the runner uses for all of its
//! output. Two levels cover the runner's needs: informational lines
//! (signal received, restart scheduled) and error lines (fault details,
//! restart failure).
//!
//! ## Implementation requirements
//! - Calls happen on the supervision task; do not block.
//! - Handle errors internally; do not panic.
//!
//! ## Example
//! ```rust
//! use runvisor::LogSink;
//!
//! struct Prefixed;
//!
//! impl LogSink for Prefixed {
//!     fn info(&self, msg: &str) {
//!         println!("service: {msg}");
//!     }
//!
//!     fn error(&self, msg: &str) {
//!         eprintln!("service: {msg}");
//!     }
//! }
//! ```

/// Capability set the runner logs through.
pub trait LogSink: Send + Sync + 'static {
    /// Writes an informational line.
    fn info(&self, msg: &str);

    /// Writes an error line.
    fn error(&self, msg: &str);
}
