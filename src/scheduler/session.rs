//! Data for one in-progress countdown.

use super::checkpoints::CheckpointTracker;

/// The single restart countdown session.
///
/// At most one session is active at a time; `remaining_seconds` only
/// decreases while active, and the checkpoint tracker is scoped to the
/// session (cleared on every start).
#[derive(Debug, Default)]
pub struct RestartSession {
    active: bool,
    remaining_seconds: u64,
    checkpoints: CheckpointTracker,
}

impl RestartSession {
    /// Begin a new session counting down from `seconds`.
    pub fn start(&mut self, seconds: u64) {
        self.active = true;
        self.remaining_seconds = seconds;
        self.checkpoints.reset();
    }

    /// Destroy the session (cancellation, completion, or teardown).
    pub fn clear(&mut self) {
        self.active = false;
        self.remaining_seconds = 0;
        self.checkpoints.reset();
    }

    /// Whether a countdown is currently running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds left until zero; 0 when idle.
    #[must_use]
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Advance the countdown by one second.
    pub fn decrement(&mut self) {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
    }

    /// Whether a checkpoint warning is due at the current remaining time.
    pub fn checkpoint_due(&mut self, configured: &[u64]) -> bool {
        self.checkpoints.due(self.remaining_seconds, configured)
    }
}
