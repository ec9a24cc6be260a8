//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
///
/// A cancel or status query against an idle scheduler is a no-op by
/// design and deliberately has no variant here.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// Requested restart delay is unparseable or non-positive.
    InvalidDuration(String),
    /// Schedule attempted while a countdown is already running.
    AlreadyScheduled,
    /// An administrative command could not be dispatched.
    Command(String),
    /// File-system or I/O operation failure.
    Io(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::InvalidDuration(msg) => write!(f, "invalid duration: {msg}"),
            Self::AlreadyScheduled => write!(f, "a restart is already scheduled"),
            Self::Command(msg) => write!(f, "command: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
