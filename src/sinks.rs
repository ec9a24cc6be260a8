//! Collaborator seams between the countdown core and the host.
//!
//! The core never renders text, runs commands, or touches the process
//! itself; it hands those concerns to these traits so the state machine
//! stays unit-testable without a live server. Async methods use the
//! boxed-future form so implementations remain object-safe behind
//! `Arc<dyn …>`.

use std::future::Future;
use std::pin::Pin;

use crate::Result;

/// Semantic notifications emitted by the countdown core.
///
/// Time payloads are the strings produced by
/// [`timefmt::format_duration`](crate::timefmt::format_duration);
/// rendering, styling, and localization belong to the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestartNotice {
    /// A countdown was armed for the given total duration.
    ScheduleAnnounced {
        /// Formatted total duration (for example `"5m"`).
        duration: String,
    },
    /// A configured checkpoint was reached.
    CheckpointWarning {
        /// Formatted time remaining.
        remaining: String,
    },
    /// Per-tick live countdown display update.
    CountdownDisplay {
        /// Formatted time remaining.
        remaining: String,
    },
    /// The scheduled restart was cancelled.
    Cancelled,
    /// The countdown expired; the restart sequence is starting.
    Restarting,
}

/// Receives countdown notifications for delivery to observers.
///
/// Delivery is fire-and-forget; the core never waits on it.
pub trait NotificationSink: Send + Sync {
    /// Deliver one notification.
    fn deliver(&self, notice: RestartNotice);
}

/// Executes opaque administrative commands against the host.
pub trait CommandSink: Send + Sync {
    /// Run a single command to completion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Command`](crate::AppError::Command) if the
    /// command cannot be dispatched or reports failure.
    fn dispatch(&self, command: &str) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Enumerates and disconnects currently connected clients.
pub trait ClientRoster: Send + Sync {
    /// Disconnect every connected client, showing each `message`.
    ///
    /// # Errors
    ///
    /// Returns an error if the roster cannot be enumerated; individual
    /// client failures are the implementation's concern.
    fn disconnect_all(&self, message: &str)
        -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Host-provided process lifecycle primitives.
pub trait ProcessControl: Send + Sync {
    /// Stop the process cleanly.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the stop request.
    fn stop_gracefully(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;

    /// Invoke the host environment's in-place restart facility.
    ///
    /// # Errors
    ///
    /// Returns an error if the host has no restart facility available.
    fn restart_in_place(&self) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}
