//! # Restart scheduling: debounce, jitter, and the single pending timer.
//!
//! [`RestartScheduler`] reacts to restart requests. Each request computes
//! a fresh randomized delay inside the configured window and re-arms the
//! one [`PendingRestart`] timer, superseding whatever was armed before —
//! many requests collapse into one restart at the most recently computed
//! time.
//!
//! ## Delay
//! ```text
//! delay = ceil(random() * window_ms / 1000) * 1000
//! ```
//! i.e. uniform over `(0, window]`, rounded up to a whole second. The
//! randomization prevents synchronized restarts when a fleet-wide trigger
//! reaches many instances at the same instant.
//!
//! ## Rules
//! - At most one timer is armed at any time; arming cancels the previous.
//! - Cancelling with nothing armed is a no-op.
//! - An armed timer never delays shutdown: it lives inside the supervision
//!   loop's select, where signal and fault arms win regardless, and it
//!   dies with the loop.

use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::time::{self, Sleep};

use crate::sinks::LogSink;

/// Debounces restart requests into a single jittered pending restart.
pub(crate) struct RestartScheduler {
    window: Duration,
    sink: Arc<dyn LogSink>,
    pending: PendingRestart,
}

impl RestartScheduler {
    /// Creates a scheduler with the configured jitter window.
    pub fn new(window: Duration, sink: Arc<dyn LogSink>) -> Self {
        Self {
            window,
            sink,
            pending: PendingRestart::new(),
        }
    }

    /// Handles one restart request: computes a fresh delay, logs it, and
    /// re-arms the pending timer.
    pub fn schedule(&mut self) {
        let delay = restart_delay(self.window);
        self.sink.info(&format!(
            "Service will restart in {} seconds.",
            delay.as_secs()
        ));

        if self.pending.is_armed() {
            self.pending.cancel();
        }
        self.pending.arm(delay);
    }

    /// Resolves when the armed timer fires, disarming it. Pends forever
    /// while nothing is armed.
    pub async fn fired(&mut self) {
        self.pending.fired().await;
    }
}

/// The single pending restart timer.
///
/// An arena of one: the scheduler owns it exclusively and only
/// `arm`/`cancel`/`fired` ever touch the underlying sleep — no raw timer
/// handle escapes.
pub(crate) struct PendingRestart {
    sleep: Option<Pin<Box<Sleep>>>,
}

impl PendingRestart {
    /// Creates an unarmed timer.
    pub fn new() -> Self {
        Self { sleep: None }
    }

    /// Arms the timer for `delay`, replacing any previous deadline.
    pub fn arm(&mut self, delay: Duration) {
        self.sleep = Some(Box::pin(time::sleep(delay)));
    }

    /// Disarms the timer. Safe to call when nothing is armed.
    pub fn cancel(&mut self) {
        self.sleep = None;
    }

    /// Whether a timer is currently armed.
    pub fn is_armed(&self) -> bool {
        self.sleep.is_some()
    }

    /// Resolves when the armed timer fires, disarming it. Pends forever
    /// while nothing is armed, so it can sit in a `select!` unguarded.
    pub async fn fired(&mut self) {
        match self.sleep.as_mut() {
            Some(sleep) => {
                sleep.as_mut().await;
                self.sleep = None;
            }
            None => std::future::pending().await,
        }
    }
}

/// Computes a jittered restart delay: uniform over `(0, window]`, rounded
/// up to a whole second (windows under one second clamp to one second).
fn restart_delay(window: Duration) -> Duration {
    let window_ms = window.as_millis().min(u128::from(u64::MAX)) as u64;
    let roll: f64 = rand::rng().random();

    let secs = (roll * window_ms as f64 / 1000.0).ceil().max(1.0) as u64;
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_is_whole_seconds_within_window() {
        for window_secs in [1u64, 2, 10, 60, 90] {
            let window = Duration::from_secs(window_secs);
            for _ in 0..500 {
                let delay = restart_delay(window);
                assert_eq!(
                    delay.subsec_nanos(),
                    0,
                    "delay {:?} not a whole second",
                    delay
                );
                assert!(delay > Duration::ZERO, "delay must be positive");
                assert!(
                    delay <= window,
                    "delay {:?} exceeds window {:?}",
                    delay,
                    window
                );
            }
        }
    }

    #[test]
    fn test_delay_spreads_across_the_window() {
        let window = Duration::from_secs(60);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(restart_delay(window).as_secs());
        }
        assert!(
            seen.len() > 10,
            "500 draws produced only {} distinct delays",
            seen.len()
        );
    }

    #[test]
    fn test_sub_second_window_clamps_to_one_second() {
        let delay = restart_delay(Duration::from_millis(500));
        assert_eq!(delay, Duration::from_secs(1));
    }

    #[test]
    fn test_cancel_without_armed_timer_is_a_no_op() {
        let mut pending = PendingRestart::new();
        pending.cancel();
        pending.cancel();
        assert!(!pending.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_armed_timer_fires_and_disarms() {
        let mut pending = PendingRestart::new();
        pending.arm(Duration::from_secs(3));
        assert!(pending.is_armed());

        pending.fired().await;
        assert!(!pending.is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_rearming_supersedes_previous_deadline() {
        let mut pending = PendingRestart::new();
        pending.arm(Duration::from_secs(300));
        pending.arm(Duration::from_secs(2));

        let start = time::Instant::now();
        pending.fired().await;
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unarmed_timer_never_fires() {
        let mut pending = PendingRestart::new();
        let fired = time::timeout(Duration::from_secs(5), pending.fired()).await;
        assert!(fired.is_err(), "unarmed timer must pend forever");
    }
}
