//! Unit tests for restart-method name resolution.

use restart_herald::scheduler::executor::RestartMethod;

#[test]
fn resolves_known_methods() {
    assert_eq!(
        RestartMethod::resolve("graceful-shutdown"),
        RestartMethod::GracefulShutdown
    );
    assert_eq!(
        RestartMethod::resolve("native-restart"),
        RestartMethod::NativeRestart
    );
    assert_eq!(
        RestartMethod::resolve("commands-only"),
        RestartMethod::CommandsOnly
    );
}

#[test]
fn resolution_is_case_and_whitespace_insensitive() {
    assert_eq!(
        RestartMethod::resolve("  Graceful-Shutdown "),
        RestartMethod::GracefulShutdown
    );
    assert_eq!(
        RestartMethod::resolve("COMMANDS-ONLY"),
        RestartMethod::CommandsOnly
    );
}

#[test]
fn unknown_methods_fall_back_to_native_restart() {
    assert_eq!(
        RestartMethod::resolve("reboot-o-matic"),
        RestartMethod::NativeRestart
    );
    assert_eq!(RestartMethod::resolve(""), RestartMethod::NativeRestart);
}
