//! Terminal restart sequence.
//!
//! Runs once, when the countdown reaches zero: final notice,
//! pre-restart commands, a grace delay so the notice can render,
//! client disconnection, then the configured restart method. Every
//! step is best-effort — failures are logged and never abort later
//! steps, since the restart has already been promised to all
//! observers.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::config::RestartConfig;
use crate::sinks::{ClientRoster, CommandSink, NotificationSink, ProcessControl, RestartNotice};

/// Resolved restart method.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RestartMethod {
    /// Stop the process cleanly and let the supervisor bring it back.
    GracefulShutdown,
    /// Use the host environment's in-place restart facility.
    NativeRestart,
    /// Run the configured restart command list; the commands own any
    /// restart effect and the process is not stopped here.
    CommandsOnly,
}

impl RestartMethod {
    /// Resolve a configured method name.
    ///
    /// Unrecognized names log a warning and fall back to
    /// [`RestartMethod::NativeRestart`].
    #[must_use]
    pub fn resolve(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "graceful-shutdown" => Self::GracefulShutdown,
            "native-restart" => Self::NativeRestart,
            "commands-only" => Self::CommandsOnly,
            other => {
                warn!(method = other, "unknown restart method, using native-restart");
                Self::NativeRestart
            }
        }
    }
}

/// Executes the terminal restart sequence against the host sinks.
pub struct RestartExecutor {
    notifications: Arc<dyn NotificationSink>,
    commands: Arc<dyn CommandSink>,
    roster: Arc<dyn ClientRoster>,
    process: Arc<dyn ProcessControl>,
}

impl RestartExecutor {
    /// Build an executor around the host's collaborator sinks.
    #[must_use]
    pub fn new(
        notifications: Arc<dyn NotificationSink>,
        commands: Arc<dyn CommandSink>,
        roster: Arc<dyn ClientRoster>,
        process: Arc<dyn ProcessControl>,
    ) -> Self {
        Self {
            notifications,
            commands,
            roster,
            process,
        }
    }

    /// Run the full sequence once, against one configuration snapshot.
    ///
    /// The scheduler spawns this fire-and-forget and never observes the
    /// outcome; by this point there is no countdown left to protect.
    pub async fn run(&self, config: Arc<RestartConfig>) {
        self.notifications.deliver(RestartNotice::Restarting);

        for command in &config.pre_restart_commands {
            debug!(command, "running pre-restart command");
            if let Err(err) = self.commands.dispatch(command).await {
                error!(command, %err, "pre-restart command failed");
            }
        }

        // Let the final notice render before disruption.
        tokio::time::sleep(config.grace_period()).await;

        if let Err(err) = self.roster.disconnect_all(&config.disconnect_message).await {
            error!(%err, "failed to disconnect clients");
        }

        tokio::time::sleep(config.method_delay()).await;

        match RestartMethod::resolve(&config.restart_method) {
            RestartMethod::GracefulShutdown => {
                if let Err(err) = self.process.stop_gracefully().await {
                    error!(%err, "graceful shutdown failed");
                }
            }
            RestartMethod::NativeRestart => {
                if let Err(err) = self.process.restart_in_place().await {
                    error!(%err, "in-place restart failed");
                }
            }
            RestartMethod::CommandsOnly => {
                for command in &config.restart_commands {
                    debug!(command, "running restart command");
                    if let Err(err) = self.commands.dispatch(command).await {
                        error!(command, %err, "restart command failed");
                    }
                }
            }
        }
    }
}
