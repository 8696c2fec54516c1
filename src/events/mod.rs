//! Trigger events: types and broadcast bus.
//!
//! This module groups the event **data model** and the **bus** through
//! which other parts of the process deliver triggers to the runner:
//! restart requests and fault reports.
//!
//! ## Contents
//! - [`Event`], [`EventKind`], [`FaultKind`] — trigger classification and payload
//! - [`Bus`] — thin wrapper over `tokio::sync::broadcast`
//!
//! The runner only listens on the bus; it never publishes. Observability
//! goes through the [`LogSink`](crate::LogSink) instead.

mod bus;
mod event;

pub use bus::Bus;
pub use event::{Event, EventKind, FaultKind};
