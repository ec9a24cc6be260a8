//! Exactly-once checkpoint tracking for one countdown session.

use std::collections::HashSet;

/// Tracks which checkpoint values have already fired this session.
///
/// Checkpoints the tick cadence steps over are never observed and so
/// never fire; that is accepted rather than corrected.
#[derive(Debug, Default)]
pub struct CheckpointTracker {
    fired: HashSet<u64>,
}

impl CheckpointTracker {
    /// Clear the fired set; called once, at session start.
    pub fn reset(&mut self) {
        self.fired.clear();
    }

    /// Whether a warning is due for `remaining` seconds.
    ///
    /// Returns true iff `remaining` is a configured checkpoint that has
    /// not fired yet this session, recording it as fired in the same
    /// step so it can never fire twice.
    pub fn due(&mut self, remaining: u64, configured: &[u64]) -> bool {
        configured.contains(&remaining) && self.fired.insert(remaining)
    }
}
