//! Countdown scheduling modules.
//!
//! Covers the restart session data, exactly-once checkpoint tracking,
//! the countdown state machine, and the terminal restart sequence.

pub mod checkpoints;
pub mod countdown;
pub mod executor;
pub mod session;
