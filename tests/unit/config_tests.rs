//! Unit tests for restart configuration parsing and validation.

use restart_herald::config::RestartConfig;
use restart_herald::AppError;

const SAMPLE: &str = r#"
tick_seconds = 1
checkpoints = [300, 60, 30, 10]
restart_method = "commands-only"
pre_restart_commands = ["save-all", "announce maintenance"]
restart_commands = ["systemctl restart game-server"]
grace_period_seconds = 3
method_delay_seconds = 2
disconnect_message = "Back in a minute."
"#;

#[test]
fn parses_full_config() {
    let config = RestartConfig::from_toml_str(SAMPLE).expect("config parses");

    assert_eq!(config.tick_seconds, 1);
    assert_eq!(config.checkpoints, vec![300, 60, 30, 10]);
    assert_eq!(config.restart_method, "commands-only");
    assert_eq!(config.pre_restart_commands.len(), 2);
    assert_eq!(
        config.restart_commands,
        vec!["systemctl restart game-server"]
    );
    assert_eq!(config.grace_period_seconds, 3);
    assert_eq!(config.method_delay_seconds, 2);
    assert_eq!(config.disconnect_message, "Back in a minute.");
}

#[test]
fn empty_config_uses_defaults() {
    let config = RestartConfig::from_toml_str("").expect("defaults apply");

    assert_eq!(config.tick_seconds, 1);
    assert_eq!(config.restart_method, "native-restart");
    assert!(config.pre_restart_commands.is_empty());
    assert!(config.restart_commands.is_empty());
    assert_eq!(config.grace_period_seconds, 2);
    assert_eq!(config.method_delay_seconds, 1);
    assert!(config.checkpoints.contains(&60));
    assert_eq!(config, RestartConfig::default());
}

#[test]
fn rejects_zero_tick_interval() {
    let err = RestartConfig::from_toml_str("tick_seconds = 0").expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn rejects_zero_checkpoint() {
    let err = RestartConfig::from_toml_str("checkpoints = [60, 0]").expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn deduplicates_checkpoints_preserving_order() {
    let config =
        RestartConfig::from_toml_str("checkpoints = [60, 30, 60, 10, 30]").expect("parses");
    assert_eq!(config.checkpoints, vec![60, 30, 10]);
}

#[test]
fn rejects_malformed_toml() {
    let err = RestartConfig::from_toml_str("tick_seconds = \"soon\"").expect_err("must fail");
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn loads_from_file_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, SAMPLE).expect("write config");

    let config = RestartConfig::load_from_path(&path).expect("loads");
    assert_eq!(config.restart_method, "commands-only");

    let err = RestartConfig::load_from_path(dir.path().join("missing.toml"))
        .expect_err("missing file must fail");
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn duration_helpers_reflect_fields() {
    let config = RestartConfig::from_toml_str(SAMPLE).expect("parses");
    assert_eq!(config.tick_interval().as_secs(), 1);
    assert_eq!(config.grace_period().as_secs(), 3);
    assert_eq!(config.method_delay().as_secs(), 2);
}
