use crate::cli::support::{roam_alfred, Fixture};
use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    roam_alfred()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: roam-alfred"))
        .stdout(predicate::str::contains("nodes"))
        .stdout(predicate::str::contains("chrome"))
        .stdout(predicate::str::contains("capture"))
        .stdout(predicate::str::contains("translit"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    roam_alfred().arg("frobnicate").assert().code(2);
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--verbose", "translit", "da"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_level_is_quiet() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["translit", "da"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_renders_errors_as_json() {
    let fx = Fixture::new();
    let output = fx
        .cmd_with_db(&fx.dir.path().join("missing.db"))
        .args(["--log-json", "nodes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let line = stderr.lines().last().unwrap();
    let value: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(value["error"]["code"], 3);
    assert_eq!(value["error"]["type"], "store_unavailable");
}

#[test]
fn test_malformed_config_is_reported() {
    let fx = Fixture::new();
    std::fs::write(fx.config_dir().join("config.toml"), "automation_timeout_ms = [").unwrap();
    fx.cmd()
        .args(["translit", "da"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
