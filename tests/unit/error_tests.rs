//! Unit tests for error display and conversions.

use restart_herald::AppError;

#[test]
fn display_formats_are_stable() {
    assert_eq!(
        AppError::Config("bad value".into()).to_string(),
        "config: bad value"
    );
    assert_eq!(
        AppError::InvalidDuration("`abc` is not a time expression".into()).to_string(),
        "invalid duration: `abc` is not a time expression"
    );
    assert_eq!(
        AppError::AlreadyScheduled.to_string(),
        "a restart is already scheduled"
    );
    assert_eq!(
        AppError::Command("exit 1".into()).to_string(),
        "command: exit 1"
    );
    assert_eq!(AppError::Io("broken pipe".into()).to_string(), "io: broken pipe");
}

#[test]
fn toml_errors_convert_to_config() {
    let err = toml::from_str::<restart_herald::RestartConfig>("tick_seconds = []").unwrap_err();
    let app: AppError = err.into();
    assert!(matches!(app, AppError::Config(_)));
    assert!(app.to_string().starts_with("config: invalid config"));
}

#[test]
fn io_errors_convert_to_io() {
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let app: AppError = err.into();
    assert!(matches!(app, AppError::Io(_)));
}

#[test]
fn implements_std_error() {
    fn assert_error<E: std::error::Error>(_: &E) {}
    assert_error(&AppError::AlreadyScheduled);
}
