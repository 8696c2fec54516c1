//! # ConsoleLog — simple line printer
//!
//! The default [`LogSink`]: informational lines to stdout, error lines to
//! stderr. Use it when the embedding process has no logging stack of its
//! own.
//!
//! ## Example output
//! ```text
//! [info] Service will restart in 12 seconds.
//! [info] Received SIGTERM. Attempting to shutdown gracefully.
//! [error] Unhandled error. Invoking shutdown.
//! ```

use crate::sinks::LogSink;

/// Console sink.
#[derive(Default)]
pub struct ConsoleLog;

impl ConsoleLog {
    /// Construct a new [`ConsoleLog`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleLog {
    fn info(&self, msg: &str) {
        println!("[info] {msg}");
    }

    fn error(&self, msg: &str) {
        eprintln!("[error] {msg}");
    }
}
