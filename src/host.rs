//! Host-side sink implementations for the standalone daemon.
//!
//! An embedding server provides its own sinks (real broadcast
//! delivery, a client roster, a supervisor-aware process control); the
//! daemon binary wires in these minimal ones: notices and disconnects
//! go to the log, commands run through the shell, and process control
//! trips the main loop's shutdown token.

use std::future::Future;
use std::pin::Pin;

use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::sinks::{ClientRoster, CommandSink, NotificationSink, ProcessControl, RestartNotice};
use crate::{AppError, Result};

/// Renders countdown notices as log lines.
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn deliver(&self, notice: RestartNotice) {
        match notice {
            RestartNotice::ScheduleAnnounced { duration } => {
                info!(duration, "server restart scheduled");
            }
            RestartNotice::CheckpointWarning { remaining } => {
                warn!(remaining, "server restarts soon");
            }
            RestartNotice::CountdownDisplay { remaining } => {
                debug!(remaining, "restart countdown");
            }
            RestartNotice::Cancelled => info!("scheduled restart cancelled"),
            RestartNotice::Restarting => warn!("server restarting now"),
        }
    }
}

/// Runs administrative commands through the system shell.
pub struct ShellCommandSink;

impl CommandSink for ShellCommandSink {
    fn dispatch(&self, command: &str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let command = command.to_owned();
        Box::pin(async move {
            let status = Command::new("sh")
                .arg("-c")
                .arg(&command)
                .status()
                .await
                .map_err(|err| AppError::Command(format!("failed to spawn `{command}`: {err}")))?;
            if status.success() {
                Ok(())
            } else {
                Err(AppError::Command(format!(
                    "`{command}` exited with {status}"
                )))
            }
        })
    }
}

/// Roster stand-in for the daemon, which holds no client connections.
pub struct LogRoster;

impl ClientRoster for LogRoster {
    fn disconnect_all(
        &self,
        message: &str,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let message = message.to_owned();
        Box::pin(async move {
            info!(message, "disconnecting all clients");
            Ok(())
        })
    }
}

/// Process control that trips the daemon's shutdown token.
///
/// The standalone daemon has no supervisor to re-exec under, so an
/// in-place restart resolves to the same clean stop with a
/// distinguishing log line; the supervisor (systemd, container
/// runtime) is expected to bring the process back.
pub struct HostProcessControl {
    shutdown: CancellationToken,
}

impl HostProcessControl {
    /// Wrap the daemon's shutdown token.
    #[must_use]
    pub fn new(shutdown: CancellationToken) -> Self {
        Self { shutdown }
    }
}

impl ProcessControl for HostProcessControl {
    fn stop_gracefully(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let shutdown = self.shutdown.clone();
        Box::pin(async move {
            info!("stopping process");
            shutdown.cancel();
            Ok(())
        })
    }

    fn restart_in_place(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let shutdown = self.shutdown.clone();
        Box::pin(async move {
            info!("in-place restart requested, handing control to the supervisor");
            shutdown.cancel();
            Ok(())
        })
    }
}
