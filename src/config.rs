//! Restart configuration parsing and validation.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::{AppError, Result};

fn default_tick_seconds() -> u64 {
    1
}

fn default_checkpoints() -> Vec<u64> {
    vec![300, 180, 60, 30, 10, 5, 4, 3, 2, 1]
}

fn default_restart_method() -> String {
    "native-restart".into()
}

fn default_grace_period_seconds() -> u64 {
    2
}

fn default_method_delay_seconds() -> u64 {
    1
}

fn default_disconnect_message() -> String {
    "Server is restarting.".into()
}

/// Global configuration parsed from `config.toml`.
///
/// The core reads one immutable snapshot per operation; the host may
/// swap a fresh snapshot in between ticks via
/// [`CountdownScheduler::reconfigure`](crate::scheduler::countdown::CountdownScheduler::reconfigure).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct RestartConfig {
    /// Seconds of wall time between countdown ticks.
    #[serde(default = "default_tick_seconds")]
    pub tick_seconds: u64,
    /// Seconds-remaining values at which a warning notification fires.
    ///
    /// Values the tick cadence skips over never fire; choose checkpoints
    /// that are multiples of `tick_seconds`.
    #[serde(default = "default_checkpoints")]
    pub checkpoints: Vec<u64>,
    /// Restart method name: `graceful-shutdown`, `native-restart`, or
    /// `commands-only`.
    ///
    /// Kept as a raw string so an unrecognized value degrades to a
    /// runtime warning plus native-restart fallback instead of a config
    /// load failure.
    #[serde(default = "default_restart_method")]
    pub restart_method: String,
    /// Administrative commands run in order before clients are disconnected.
    #[serde(default)]
    pub pre_restart_commands: Vec<String>,
    /// Commands run in order by the `commands-only` restart method.
    #[serde(default)]
    pub restart_commands: Vec<String>,
    /// Delay between the final notice and client disconnection.
    #[serde(default = "default_grace_period_seconds")]
    pub grace_period_seconds: u64,
    /// Delay between client disconnection and the restart method.
    #[serde(default = "default_method_delay_seconds")]
    pub method_delay_seconds: u64,
    /// Message shown to each client as it is disconnected.
    #[serde(default = "default_disconnect_message")]
    pub disconnect_message: String,
}

impl Default for RestartConfig {
    fn default() -> Self {
        Self {
            tick_seconds: default_tick_seconds(),
            checkpoints: default_checkpoints(),
            restart_method: default_restart_method(),
            pre_restart_commands: Vec::new(),
            restart_commands: Vec::new(),
            grace_period_seconds: default_grace_period_seconds(),
            method_delay_seconds: default_method_delay_seconds(),
            disconnect_message: default_disconnect_message(),
        }
    }
}

impl RestartConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Wall-time interval between countdown ticks.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_seconds)
    }

    /// Delay between the final notice and client disconnection.
    #[must_use]
    pub fn grace_period(&self) -> Duration {
        Duration::from_secs(self.grace_period_seconds)
    }

    /// Delay between client disconnection and the restart method.
    #[must_use]
    pub fn method_delay(&self) -> Duration {
        Duration::from_secs(self.method_delay_seconds)
    }

    fn validate(&mut self) -> Result<()> {
        if self.tick_seconds == 0 {
            return Err(AppError::Config(
                "tick_seconds must be greater than zero".into(),
            ));
        }

        if self.checkpoints.iter().any(|&value| value == 0) {
            return Err(AppError::Config(
                "checkpoints must be positive seconds-remaining values".into(),
            ));
        }

        // Duplicate checkpoints would be fired once anyway; drop them
        // here so the configured set matches what can actually fire.
        let mut seen = std::collections::HashSet::new();
        self.checkpoints.retain(|&value| seen.insert(value));

        Ok(())
    }
}
