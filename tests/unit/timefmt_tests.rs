//! Unit tests for time-expression parsing and formatting.

use restart_herald::timefmt::{format_duration, parse_duration};
use restart_herald::AppError;

#[test]
fn parses_suffixed_units() {
    assert_eq!(parse_duration("30s").unwrap(), 30);
    assert_eq!(parse_duration("5m").unwrap(), 300);
    assert_eq!(parse_duration("1h").unwrap(), 3600);
    assert_eq!(parse_duration("2h").unwrap(), 7200);
}

#[test]
fn parses_bare_integers_as_seconds() {
    assert_eq!(parse_duration("90").unwrap(), 90);
    assert_eq!(parse_duration("1").unwrap(), 1);
}

#[test]
fn trims_and_lowercases_input() {
    assert_eq!(parse_duration("  10M  ").unwrap(), 600);
    assert_eq!(parse_duration("1H").unwrap(), 3600);
}

#[test]
fn rejects_invalid_expressions() {
    for input in ["", "   ", "abc", "-5", "0", "0m", "-1h", "m", "s"] {
        let err = parse_duration(input).expect_err(input);
        assert!(
            matches!(err, AppError::InvalidDuration(_)),
            "expected InvalidDuration for {input:?}, got {err:?}"
        );
    }
}

#[test]
fn rejects_combined_units() {
    // Single-unit parsing only; "1m 30s" is a formatting output, not
    // an accepted input.
    assert!(parse_duration("1h30m").is_err());
    assert!(parse_duration("1m 30s").is_err());
}

#[test]
fn rejects_overflowing_values() {
    assert!(parse_duration("9223372036854775807h").is_err());
    assert!(parse_duration("99999999999999999999").is_err());
}

#[test]
fn formats_literal_cases() {
    assert_eq!(format_duration(45), "45s");
    assert_eq!(format_duration(60), "1m");
    assert_eq!(format_duration(90), "1m 30s");
    assert_eq!(format_duration(3600), "1h");
    assert_eq!(format_duration(5400), "1h 30m");
}

#[test]
fn formats_boundaries() {
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(59), "59s");
    assert_eq!(format_duration(3599), "59m 59s");
    assert_eq!(format_duration(3660), "1h 1m");
    // Sub-minute remainders are dropped above one hour.
    assert_eq!(format_duration(3601), "1h");
}

#[test]
fn format_of_parse_is_stable_for_single_units() {
    for expr in ["45s", "1m", "5m", "1h"] {
        let seconds = parse_duration(expr).unwrap();
        assert_eq!(format_duration(seconds), expr);
    }
}
