#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const ENV_KEYS: [&str; 4] = ["discord_token", "application_id", "guild_id", "user_id"];

/// A command with HOME and the working directory inside `home`, and no
/// configuration leaking in from the real environment.
fn discord_cli(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("discord_cli").unwrap();
    cmd.env("HOME", home).current_dir(home).env_remove("RUST_LOG");
    // Env keys match in any case, so clear whatever spelling the caller has.
    for (name, _) in std::env::vars_os() {
        let lossy = name.to_string_lossy();
        if ENV_KEYS.iter().any(|key| key.eq_ignore_ascii_case(lossy.trim())) {
            cmd.env_remove(&name);
        }
    }
    cmd
}

#[test]
fn missing_credentials_fail_before_any_command() {
    let temp = TempDir::new().unwrap();

    discord_cli(temp.path())
        .args(["guild", "commands", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Required configs are not set"));
}

#[test]
fn zero_application_id_is_rejected() {
    let temp = TempDir::new().unwrap();

    discord_cli(temp.path())
        .args(["-t", "tok", "-a", "0", "doctor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Required configs are not set"));
}

#[test]
fn flags_alone_are_enough() {
    let temp = TempDir::new().unwrap();

    discord_cli(temp.path())
        .args(["-t", "tok", "-a", "123", "doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"application_id\": 123"))
        .stdout(predicate::str::contains("Configuration OK"))
        .stderr(predicate::str::contains("Using config file").not());
}

#[test]
fn config_file_in_home_is_used_and_announced() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".discord_cli"),
        "discord_token: abc\napplication_id: 123\n",
    )
    .unwrap();

    discord_cli(temp.path())
        .arg("doctor")
        .assert()
        .success()
        .stderr(predicate::str::contains("Using config file:"))
        .stdout(predicate::str::contains("\"application_id\": 123"));
}

#[test]
fn env_beats_file_and_flags_beat_env() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".discord_cli"),
        "discord_token: abc\napplication_id: 1\nguild_id: 10\n",
    )
    .unwrap();

    discord_cli(temp.path())
        .env("APPLICATION_ID", "2")
        .env("GUILD_ID", "20")
        .args(["--guild_id", "30", "doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"application_id\": 2"))
        .stdout(predicate::str::contains("\"guild_id\": 30"));
}

#[test]
fn explicit_config_path_is_used() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("custom.yaml");
    fs::write(&custom, "discord_token: abc\napplication_id: 77\n").unwrap();

    discord_cli(temp.path())
        .args(["--config", custom.to_str().unwrap(), "doctor"])
        .assert()
        .success()
        .stderr(predicate::str::contains("custom.yaml"))
        .stdout(predicate::str::contains("\"application_id\": 77"));
}

#[test]
fn blank_env_var_does_not_break_config_commands() {
    let temp = TempDir::new().unwrap();

    discord_cli(temp.path())
        .env("GUILD_ID", "")
        .args(["config", "set", "guild_id", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("guild_id set to 7"));
}

#[test]
fn numeric_token_from_env_is_accepted() {
    let temp = TempDir::new().unwrap();

    discord_cli(temp.path())
        .env("DISCORD_TOKEN", "123456789")
        .args(["-a", "5", "doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK"));
}

#[test]
fn config_set_then_get_without_credentials() {
    let temp = TempDir::new().unwrap();

    discord_cli(temp.path())
        .args(["config", "set", "application_id", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("application_id set to 42"));

    assert!(temp.path().join(".discord_cli").exists());

    discord_cli(temp.path())
        .args(["config", "get", "application_id"])
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn config_set_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();

    discord_cli(temp.path())
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));
}

#[test]
fn malformed_config_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".discord_cli"), "application_id: [oops\n").unwrap();

    discord_cli(temp.path())
        .arg("doctor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config error"));
}

#[test]
fn no_subcommand_prints_usage() {
    let temp = TempDir::new().unwrap();

    discord_cli(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
