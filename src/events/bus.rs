//! # Event bus for delivering triggers to the runner.
//!
//! [`Bus`] is a thin wrapper around [`tokio::sync::broadcast`] that lets
//! any part of the process publish trigger events without blocking.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                     Subscriber (one):
//!   health checker ──┐
//!   config watcher ──┼──────► Bus ───────► Runner supervision loop
//!   fault hook     ──┘  (broadcast chan)
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls
//!   `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent events for
//!   all receivers; slow receivers observe `RecvError::Lagged` and skip
//!   the oldest items.
//! - **No persistence**: events published before the runner subscribes
//!   (i.e. before a successful `start`) are not delivered to it.

use tokio::sync::broadcast;

use super::event::Event;

/// Default ring-buffer capacity. Trigger traffic is sparse; a small
/// buffer absorbs any burst a process can meaningfully produce.
const DEFAULT_CAPACITY: usize = 64;

/// Broadcast channel for trigger events.
///
/// Cheap to clone (internally holds an `Arc`-backed sender); hand clones
/// to any code that may want to request a restart or report a fault.
#[derive(Clone, Debug)]
pub struct Bus {
    tx: broadcast::Sender<Event>,
}

impl Bus {
    /// Creates a new bus with the given channel capacity.
    ///
    /// The minimum capacity is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<Event>(capacity);
        Self { tx }
    }

    /// Publishes an event to all active subscribers.
    ///
    /// If there are no receivers, the event is dropped; this function
    /// still returns immediately.
    pub fn publish(&self, ev: Event) {
        let _ = self.tx.send(ev);
    }

    /// Creates a new receiver that observes subsequent events.
    ///
    /// A receiver only gets events sent **after** it subscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
