//! The countdown scheduling state machine.
//!
//! Owns the single active [`RestartSession`] and advances it once per
//! externally delivered tick. The machine itself is synchronous; the
//! host serializes `schedule`/`tick`/`cancel` (the daemon keeps it
//! behind a `tokio::sync::Mutex`) and drives ticks from its own
//! periodic task, so the machine is unit-testable without a live
//! timer. Expiry hands off to the [`RestartExecutor`] as a spawned
//! fire-and-forget task and never returns to the running state.

use std::sync::Arc;

use tracing::{debug, info};

use super::executor::RestartExecutor;
use super::session::RestartSession;
use crate::config::RestartConfig;
use crate::sinks::{NotificationSink, RestartNotice};
use crate::timefmt::format_duration;
use crate::{AppError, Result};

/// Schedules, advances, and cancels the single restart countdown.
pub struct CountdownScheduler {
    config: Arc<RestartConfig>,
    session: RestartSession,
    notifications: Arc<dyn NotificationSink>,
    executor: Arc<RestartExecutor>,
}

impl CountdownScheduler {
    /// Build an idle scheduler around the given collaborators.
    #[must_use]
    pub fn new(
        config: Arc<RestartConfig>,
        notifications: Arc<dyn NotificationSink>,
        executor: Arc<RestartExecutor>,
    ) -> Self {
        Self {
            config,
            session: RestartSession::default(),
            notifications,
            executor,
        }
    }

    /// Arm a countdown of `seconds`.
    ///
    /// Announces the schedule with the formatted total duration. The
    /// countdown then expires on the `seconds`-th subsequent tick.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyScheduled`] if a countdown is already
    /// running (state unchanged) and [`AppError::InvalidDuration`] for
    /// a zero duration; duration parsing happens upstream in
    /// [`timefmt::parse_duration`](crate::timefmt::parse_duration).
    pub fn schedule(&mut self, seconds: u64) -> Result<()> {
        if self.session.is_active() {
            return Err(AppError::AlreadyScheduled);
        }
        if seconds == 0 {
            return Err(AppError::InvalidDuration(
                "restart delay must be positive".into(),
            ));
        }

        self.session.start(seconds);
        info!(seconds, "restart scheduled");
        self.notifications.deliver(RestartNotice::ScheduleAnnounced {
            duration: format_duration(seconds),
        });
        Ok(())
    }

    /// Advance the countdown by one tick.
    ///
    /// Ignored while idle (the tick source may deliver a final tick
    /// after the session ended). While running, emits the live
    /// countdown display, fires a checkpoint warning when one is due,
    /// and decrements; the tick that reaches zero clears the session
    /// first and then hands off to the executor exactly once.
    ///
    /// Must be called from within a tokio runtime: the executor
    /// hand-off is spawned as a detached task.
    pub fn tick(&mut self) {
        if !self.session.is_active() {
            return;
        }

        // One immutable snapshot per tick; a concurrent reconfigure()
        // only affects later ticks.
        let config = Arc::clone(&self.config);

        if self.session.remaining_seconds() > 0 {
            let remaining = format_duration(self.session.remaining_seconds());
            self.notifications.deliver(RestartNotice::CountdownDisplay {
                remaining: remaining.clone(),
            });
            if self.session.checkpoint_due(&config.checkpoints) {
                debug!(
                    remaining_seconds = self.session.remaining_seconds(),
                    "checkpoint reached"
                );
                self.notifications
                    .deliver(RestartNotice::CheckpointWarning { remaining });
            }
            self.session.decrement();
        }

        if self.session.remaining_seconds() == 0 {
            // Past the cancellable point: leave the running state before
            // the executor's first step can run.
            self.session.clear();
            info!("countdown expired, starting restart sequence");
            let executor = Arc::clone(&self.executor);
            tokio::spawn(async move {
                executor.run(config).await;
            });
        }
    }

    /// Cancel the running countdown.
    ///
    /// Emits the cancellation broadcast and returns true if a countdown
    /// was cancelled; a cancel while idle is a silent no-op returning
    /// false.
    pub fn cancel(&mut self) -> bool {
        if !self.session.is_active() {
            return false;
        }

        self.session.clear();
        info!("scheduled restart cancelled");
        self.notifications.deliver(RestartNotice::Cancelled);
        true
    }

    /// Tear down any running countdown without a cancellation notice.
    ///
    /// Used during process shutdown, where broadcasting would race
    /// teardown of the delivery layer.
    pub fn abort(&mut self) {
        if self.session.is_active() {
            debug!("active countdown aborted during shutdown");
            self.session.clear();
        }
    }

    /// Whether a countdown is currently running.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.session.is_active()
    }

    /// Seconds left until restart; 0 while idle.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.session.remaining_seconds()
    }

    /// Swap in a fresh configuration snapshot.
    ///
    /// Safe in either state. Does not touch an in-progress session's
    /// remaining time; later ticks read checkpoints (and the executor
    /// reads method and delays) from the new snapshot, so a reload
    /// retunes an already-running countdown.
    pub fn reconfigure(&mut self, config: Arc<RestartConfig>) {
        self.config = config;
    }
}
