//! # Runner configuration.
//!
//! Provides [`RunnerConfig`], the immutable settings consumed when a
//! [`Runner`](crate::Runner) is built.
//!
//! Caller-supplied values merge onto defaults at the leaf level: every
//! struct and field carries `#[serde(default)]`, so a config source that
//! names only `restart.window` overrides exactly that leaf and nothing
//! else. Duration fields deserialize from strings such as `"60s"` or
//! `"2m 30s"` via `humantime_serde`.
//!
//! For programmatic string input there is [`parse_window`], the same
//! parser with an explicit contract.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default upper bound of the restart jitter window.
const DEFAULT_RESTART_WINDOW: Duration = Duration::from_secs(60);

/// Global configuration for the lifecycle runner.
///
/// Immutable after the runner is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Restart scheduling settings.
    pub restart: RestartConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            restart: RestartConfig::default(),
        }
    }
}

/// Restart scheduling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartConfig {
    /// Upper bound of the randomized restart delay.
    ///
    /// A restart request is delayed by a uniformly random whole number of
    /// seconds in `(0, window]`, so that a fleet-wide restart trigger does
    /// not restart every instance at the same instant.
    #[serde(with = "humantime_serde")]
    pub window: Duration,
}

impl Default for RestartConfig {
    /// Defaults to a `60s` window.
    fn default() -> Self {
        Self {
            window: DEFAULT_RESTART_WINDOW,
        }
    }
}

/// Parses a restart window from a duration string.
///
/// Accepts the `humantime` grammar (`"60s"`, `"2m 30s"`, `"1h"`).
///
/// # Errors
/// - [`ConfigError::InvalidWindow`] if the string is not a duration.
/// - [`ConfigError::ZeroWindow`] if the duration is zero; a zero window
///   has no valid delay in `(0, window]`.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use runvisor::parse_window;
///
/// assert_eq!(parse_window("10s").unwrap(), Duration::from_secs(10));
/// assert!(parse_window("never").is_err());
/// ```
pub fn parse_window(value: &str) -> Result<Duration, ConfigError> {
    let window = humantime::parse_duration(value).map_err(|source| ConfigError::InvalidWindow {
        value: value.to_string(),
        source,
    })?;
    if window.is_zero() {
        return Err(ConfigError::ZeroWindow {
            value: value.to_string(),
        });
    }
    Ok(window)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window_is_sixty_seconds() {
        let cfg = RunnerConfig::default();
        assert_eq!(cfg.restart.window, Duration::from_secs(60));
    }

    #[test]
    fn test_parse_window_accepts_humantime_grammar() {
        assert_eq!(parse_window("10s").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_window("2m 30s").unwrap(), Duration::from_secs(150));
    }

    #[test]
    fn test_parse_window_rejects_garbage() {
        assert!(matches!(
            parse_window("soon"),
            Err(ConfigError::InvalidWindow { .. })
        ));
    }

    #[test]
    fn test_parse_window_rejects_zero() {
        assert!(matches!(
            parse_window("0s"),
            Err(ConfigError::ZeroWindow { .. })
        ));
    }

    #[test]
    fn test_empty_source_yields_defaults() {
        let cfg: RunnerConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.restart.window, Duration::from_secs(60));
    }

    #[test]
    fn test_leaf_override_merges_onto_defaults() {
        let cfg: RunnerConfig = toml::from_str("[restart]\nwindow = \"10s\"").unwrap();
        assert_eq!(cfg.restart.window, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_window_string_is_rejected() {
        assert!(toml::from_str::<RunnerConfig>("[restart]\nwindow = \"nope\"").is_err());
    }
}
