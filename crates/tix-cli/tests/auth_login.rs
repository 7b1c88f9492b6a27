//! Integration tests for non-interactive login and session storage.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_login_success_stores_session() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(serde_json::json!({
            "usernameOrEmail": "ada",
            "password": "secret1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok-abcdef123456",
            "user_id": 1,
            "username": "ada",
            "email": "ada@example.com",
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .env("TIX_BASE_URL", mock_server.uri())
        .args(["login", "--identifier", "ada", "--password", "secret1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as ada."));

    // The session file holds the payload fields
    let session_path = temp_dir.path().join("session.json");
    assert!(session_path.exists(), "session file should exist");

    let session: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&session_path).unwrap()).unwrap();
    assert_eq!(session["token"], "tok-abcdef123456");
    assert_eq!(session["user_id"], 1);
    assert_eq!(session["username"], "ada");
    assert_eq!(session["email"], "ada@example.com");
}

#[tokio::test]
async fn test_login_invalid_credentials_message() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "non_field_errors": ["Invalid credentials"],
        })))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .env("TIX_BASE_URL", mock_server.uri())
        .args(["login", "--identifier", "ada", "--password", "wrong-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid credentials"));

    // No session file on failure
    assert!(!temp_dir.path().join("session.json").exists());
}

#[tokio::test]
async fn test_login_validation_errors_skip_network() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    // Any request reaching the server is a test failure
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .env("TIX_BASE_URL", mock_server.uri())
        .args(["login", "--identifier", "  ", "--password", "123"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("Username or email is required.").and(
                predicate::str::contains("Password must be at least 6 characters long."),
            ),
        );
}

#[tokio::test]
async fn test_login_network_error_fixed_message() {
    let temp_dir = TempDir::new().unwrap();

    // Grab a port with nothing listening on it
    let dead_uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .env("TIX_BASE_URL", dead_uri)
        .args(["login", "--identifier", "ada", "--password", "secret1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Network Error. Please try again later.",
        ));
}

#[tokio::test]
async fn test_whoami_and_logout_roundtrip() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": "tok-abcdef123456",
            "username": "ada",
        })))
        .mount(&mock_server)
        .await;

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .env("TIX_BASE_URL", mock_server.uri())
        .args(["login", "--identifier", "ada", "--password", "secret1"])
        .assert()
        .success();

    // whoami shows the user and masks the token
    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Username: ada")
                .and(predicate::str::contains("tok-abcd"))
                .and(predicate::str::contains("tok-abcdef123456").not()),
        );

    // logout removes the session
    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(!temp_dir.path().join("session.json").exists());

    cargo_bin_cmd!("tix")
        .env("TIX_HOME", temp_dir.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}
