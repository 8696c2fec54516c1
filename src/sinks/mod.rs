//! # Log sinks for the runner.
//!
//! The runner reports everything it does through an injected [`LogSink`]:
//! signal receipt, scheduled restarts, fault conditions, restart failures.
//! [`ConsoleLog`] is the bundled default for processes that have no
//! logging stack of their own.

mod console;
mod sink;

pub use console::ConsoleLog;
pub use sink::LogSink;
