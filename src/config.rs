//! Demo configuration.
//!
//! Values come from defaults, optionally overridden by environment variables:
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `VSC_TICK_MS` | Event loop tick | 100 |
//! | `VSC_FETCH_MS` | Simulated fetch latency | 800 |
//! | `VSC_FAIL_EVERY` | Every Nth fetch fails (0 = never) | 3 |
//! | `VSC_LOG_FILE` | Log file path | `<tmp>/vsc-demo.log` |

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult};

pub const ENV_TICK_MS: &str = "VSC_TICK_MS";
pub const ENV_FETCH_MS: &str = "VSC_FETCH_MS";
pub const ENV_FAIL_EVERY: &str = "VSC_FAIL_EVERY";
pub const ENV_LOG_FILE: &str = "VSC_LOG_FILE";

/// Configuration for the demo binary.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use view_state_controller::config::DemoConfig;
///
/// let config = DemoConfig::default()
///     .with_fetch_latency(Duration::from_millis(200))
///     .with_fail_every(0);
/// assert!(!config.should_fail(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// How long the event loop waits for input before redrawing
    pub tick_rate: Duration,
    /// How long a simulated fetch takes
    pub fetch_latency: Duration,
    /// Every Nth fetch fails; 0 disables failures
    pub fail_every: u32,
    /// Where tracing output goes (the terminal is taken by the UI)
    pub log_file: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
            fetch_latency: Duration::from_millis(800),
            fail_every: 3,
            log_file: std::env::temp_dir().join("vsc-demo.log"),
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_fetch_latency(mut self, latency: Duration) -> Self {
        self.fetch_latency = latency;
        self
    }

    pub fn with_fail_every(mut self, fail_every: u32) -> Self {
        self.fail_every = fail_every;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Build the config from defaults overridden by `VSC_*` variables.
    ///
    /// Unset or empty variables keep their default.
    pub fn from_env() -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(ms) = read_u64(ENV_TICK_MS)? {
            if ms == 0 {
                return Err(ConfigError::Zero { var: ENV_TICK_MS });
            }
            config.tick_rate = Duration::from_millis(ms);
        }
        if let Some(ms) = read_u64(ENV_FETCH_MS)? {
            config.fetch_latency = Duration::from_millis(ms);
        }
        if let Some(n) = read_u64(ENV_FAIL_EVERY)? {
            config.fail_every = u32::try_from(n).map_err(|_| ConfigError::InvalidNumber {
                var: ENV_FAIL_EVERY,
                value: n.to_string(),
            })?;
        }
        if let Some(path) = read_var(ENV_LOG_FILE) {
            config.log_file = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Whether fetch number `attempt` (1-based) is configured to fail.
    pub fn should_fail(&self, attempt: u32) -> bool {
        self.fail_every != 0 && attempt % self.fail_every == 0
    }
}

fn read_var(var: &'static str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn read_u64(var: &'static str) -> ConfigResult<Option<u64>> {
    read_var(var)
        .map(|value| {
            value
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber { var, value })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [ENV_TICK_MS, ENV_FETCH_MS, ENV_FAIL_EVERY, ENV_LOG_FILE] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.tick_rate, Duration::from_millis(100));
        assert_eq!(config.fetch_latency, Duration::from_millis(800));
        assert_eq!(config.fail_every, 3);
        assert!(config.log_file.ends_with("vsc-demo.log"));
    }

    #[test]
    fn test_builder() {
        let config = DemoConfig::new()
            .with_tick_rate(Duration::from_millis(50))
            .with_fetch_latency(Duration::from_millis(10))
            .with_fail_every(2)
            .with_log_file("/tmp/custom.log");

        assert_eq!(config.tick_rate, Duration::from_millis(50));
        assert_eq!(config.fetch_latency, Duration::from_millis(10));
        assert_eq!(config.fail_every, 2);
        assert_eq!(config.log_file, PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn test_should_fail() {
        let config = DemoConfig::default().with_fail_every(3);
        assert!(!config.should_fail(1));
        assert!(!config.should_fail(2));
        assert!(config.should_fail(3));
        assert!(config.should_fail(6));

        let never = DemoConfig::default().with_fail_every(0);
        assert!((1..10).all(|n| !never.should_fail(n)));
    }

    #[test]
    #[serial]
    fn test_from_env_without_vars_uses_defaults() {
        clear_env();
        assert_eq!(DemoConfig::from_env(), Ok(DemoConfig::default()));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var(ENV_TICK_MS, "250");
        std::env::set_var(ENV_FETCH_MS, " 0 ");
        std::env::set_var(ENV_FAIL_EVERY, "5");
        std::env::set_var(ENV_LOG_FILE, "/tmp/vsc-test.log");

        let config = DemoConfig::from_env().expect("valid env");
        clear_env();

        assert_eq!(config.tick_rate, Duration::from_millis(250));
        assert_eq!(config.fetch_latency, Duration::ZERO);
        assert_eq!(config.fail_every, 5);
        assert_eq!(config.log_file, PathBuf::from("/tmp/vsc-test.log"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_garbage() {
        clear_env();
        std::env::set_var(ENV_FETCH_MS, "soon");
        let result = DemoConfig::from_env();
        clear_env();

        assert_eq!(
            result,
            Err(ConfigError::InvalidNumber {
                var: ENV_FETCH_MS,
                value: "soon".to_string(),
            })
        );
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_zero_tick() {
        clear_env();
        std::env::set_var(ENV_TICK_MS, "0");
        let result = DemoConfig::from_env();
        clear_env();

        assert_eq!(result, Err(ConfigError::Zero { var: ENV_TICK_MS }));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_oversized_fail_every() {
        clear_env();
        std::env::set_var(ENV_FAIL_EVERY, "99999999999");
        let result = DemoConfig::from_env();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidNumber { var: ENV_FAIL_EVERY, .. })
        ));
    }
}
