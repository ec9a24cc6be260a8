#![forbid(unsafe_code)]

//! Countdown-driven scheduled restart core for long-running servers.
//!
//! The crate owns a single-shot restart countdown: schedule a delay,
//! emit warnings at configured checkpoints while an external tick
//! source drives the countdown, and run the terminal restart sequence
//! when it reaches zero. Delivery of notifications, command execution,
//! client disconnection, and process control are collaborator seams
//! implemented by the embedding host (see [`sinks`]).

pub mod config;
pub mod errors;
pub mod host;
pub mod scheduler;
pub mod sinks;
pub mod timefmt;

pub use config::RestartConfig;
pub use errors::{AppError, Result};
