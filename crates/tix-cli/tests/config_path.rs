//! Integration tests for config and listing commands.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_config_path_respects_tix_home() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            temp_dir.path().join("config.toml").to_string_lossy().to_string(),
        ));
}

#[test]
fn test_config_init_creates_template() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    assert!(temp_dir.path().join("config.toml").exists());

    // Second run is a no-op
    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_set_url_persists() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["config", "set-url", "http://localhost:9000"])
        .assert()
        .success();

    let contents =
        std::fs::read_to_string(temp_dir.path().join("config.toml")).unwrap();
    assert!(contents.contains("base_url = \"http://localhost:9000\""));
}

#[test]
fn test_events_listing() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["events"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Midnight Parade Tour")
                .and(predicate::str::contains("Riverside Arena")),
        );
}

#[test]
fn test_hotels_listing() {
    let temp_dir = TempDir::new().unwrap();

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["hotels"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The Meridian"));
}

#[test]
fn test_help_lists_commands() {
    cargo_bin_cmd!("tix")
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("login")
                .and(predicate::str::contains("signup"))
                .and(predicate::str::contains("events")),
        );
}
