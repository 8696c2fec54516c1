//! # Lifecycle state machine.
//!
//! One runner supervises exactly one lifecycle:
//!
//! ```text
//! NotStarted ──► Running ──► ShuttingDown ──► Terminated
//! ```
//!
//! Transitions go through [`StateCell::transition`], a compare-and-swap,
//! so that once `ShuttingDown` is entered no second shutdown sequence can
//! begin regardless of how many triggers fire.

use std::sync::atomic::{AtomicU8, Ordering};

/// Where a runner is in its single lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LifecycleState {
    /// The system has not been started (or its start failed).
    NotStarted = 0,
    /// The system started successfully; triggers are being supervised.
    Running = 1,
    /// A terminal trigger won; the stop sequence is in progress.
    ShuttingDown = 2,
    /// Supervision has ended and the exit status is published.
    Terminated = 3,
}

/// Atomic cell holding a [`LifecycleState`].
#[derive(Debug)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    /// Creates a cell in [`LifecycleState::NotStarted`].
    pub fn new() -> Self {
        Self(AtomicU8::new(LifecycleState::NotStarted as u8))
    }

    /// Returns the current state.
    pub fn get(&self) -> LifecycleState {
        decode(self.0.load(Ordering::Acquire))
    }

    /// Unconditionally stores `state`.
    pub fn set(&self, state: LifecycleState) {
        self.0.store(state as u8, Ordering::Release);
    }

    /// Atomically moves `from → to`; returns whether this call won the
    /// transition.
    pub fn transition(&self, from: LifecycleState, to: LifecycleState) -> bool {
        self.0
            .compare_exchange(from as u8, to as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

/// Only values produced by `LifecycleState as u8` are ever stored, so the
/// wildcard arm can only be `Terminated`.
fn decode(value: u8) -> LifecycleState {
    match value {
        0 => LifecycleState::NotStarted,
        1 => LifecycleState::Running,
        2 => LifecycleState::ShuttingDown,
        _ => LifecycleState::Terminated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_not_started() {
        let cell = StateCell::new();
        assert_eq!(cell.get(), LifecycleState::NotStarted);
    }

    #[test]
    fn test_transition_succeeds_from_expected_state() {
        let cell = StateCell::new();
        assert!(cell.transition(LifecycleState::NotStarted, LifecycleState::Running));
        assert_eq!(cell.get(), LifecycleState::Running);
    }

    #[test]
    fn test_transition_fails_from_other_state() {
        let cell = StateCell::new();
        assert!(!cell.transition(LifecycleState::Running, LifecycleState::ShuttingDown));
        assert_eq!(cell.get(), LifecycleState::NotStarted);
    }

    #[test]
    fn test_shutdown_transition_has_one_winner() {
        let cell = StateCell::new();
        cell.set(LifecycleState::Running);
        assert!(cell.transition(LifecycleState::Running, LifecycleState::ShuttingDown));
        assert!(!cell.transition(LifecycleState::Running, LifecycleState::ShuttingDown));
    }
}
