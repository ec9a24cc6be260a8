//! Human time-expression parsing and formatting.
//!
//! Expressions are a single integer with an optional `h`/`m`/`s`
//! suffix (`"30s"`, `"5m"`, `"1h"`, `"90"`). Combined units
//! (`"1h30m"`), fractions, and locale-specific forms are not
//! supported — single-unit parsing is a documented limitation.

use crate::{AppError, Result};

/// Parse a human time expression into whole seconds.
///
/// Input is trimmed and lowercased first. A trailing `h`, `m`, or `s`
/// scales the integer prefix by 3600, 60, or 1; without a suffix the
/// whole string is read as plain seconds.
///
/// # Errors
///
/// Returns [`AppError::InvalidDuration`] for empty input, a
/// non-numeric prefix, or a non-positive result.
pub fn parse_duration(text: &str) -> Result<u64> {
    let text = text.trim().to_lowercase();
    if text.is_empty() {
        return Err(AppError::InvalidDuration("empty time expression".into()));
    }

    let (number, scale) = if let Some(prefix) = text.strip_suffix('h') {
        (prefix, 3600)
    } else if let Some(prefix) = text.strip_suffix('m') {
        (prefix, 60)
    } else if let Some(prefix) = text.strip_suffix('s') {
        (prefix, 1)
    } else {
        (text.as_str(), 1)
    };

    let value: i64 = number
        .parse()
        .map_err(|_| AppError::InvalidDuration(format!("`{text}` is not a time expression")))?;

    u64::try_from(value)
        .ok()
        .filter(|&seconds| seconds > 0)
        .and_then(|seconds| seconds.checked_mul(scale))
        .ok_or_else(|| AppError::InvalidDuration(format!("`{text}` must be a positive duration")))
}

/// Format whole seconds as a human time string.
///
/// `45` → `"45s"`, `90` → `"1m 30s"`, `3600` → `"1h"`,
/// `5400` → `"1h 30m"`. Sub-minute remainders are dropped above one
/// hour, matching the announcement granularity of the countdown.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{seconds}s")
    } else if seconds < 3600 {
        let minutes = seconds / 60;
        let rest = seconds % 60;
        if rest == 0 {
            format!("{minutes}m")
        } else {
            format!("{minutes}m {rest}s")
        }
    } else {
        let hours = seconds / 3600;
        let rest = (seconds % 3600) / 60;
        if rest == 0 {
            format!("{hours}h")
        } else {
            format!("{hours}h {rest}m")
        }
    }
}
