use crate::cli::support::waypath;
use predicates::prelude::*;

// ============================================================================
// Logging flag tests
// ============================================================================

#[test]
fn test_log_level_debug_shows_debug_messages() {
    waypath()
        .args(["--log-level", "debug", "heapsort", "1"])
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_level_warn_hides_debug_messages() {
    waypath()
        .args(["--log-level", "warn", "heapsort", "1"])
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    waypath()
        .args(["--verbose", "heapsort", "1"])
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_waypath_log_env_overrides_flags() {
    waypath()
        .args(["heapsort", "1"])
        .env("WAYPATH_LOG", "waypath=debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"));
}

#[test]
fn test_log_json_produces_valid_json() {
    let output = waypath()
        .args(["--log-json", "--log-level", "debug", "heapsort", "2", "1"])
        .env_remove("WAYPATH_LOG")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2 1\n");

    let stderr = String::from_utf8_lossy(&output.stderr);
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        serde_json::from_str::<serde_json::Value>(line).unwrap();
    }
}
