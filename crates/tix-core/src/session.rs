//! Session storage for a logged-in user.
//!
//! Stores the known fields of the login payload in `<TIX_HOME>/session.json`
//! with restricted permissions (0600). The token is never logged or
//! displayed in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::paths;

/// Session cache filename.
const SESSION_FILE: &str = "session.json";

/// A persisted login session.
///
/// Every field except `saved_at` comes from the backend's opaque login
/// payload and may be absent; nothing here is validated or interpreted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// When this session was saved.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Extracts the known session fields from a login payload.
    ///
    /// Unknown fields are ignored; missing fields stay `None`.
    pub fn from_payload(payload: &Value) -> Self {
        Self {
            token: payload
                .get("token")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            user_id: payload.get("user_id").and_then(Value::as_i64),
            username: payload
                .get("username")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            email: payload
                .get("email")
                .and_then(Value::as_str)
                .map(ToString::to_string),
            saved_at: Some(Utc::now()),
        }
    }

    /// Returns the path to the session file.
    pub fn cache_path() -> PathBuf {
        paths::tix_home().join(SESSION_FILE)
    }

    /// Loads the stored session from disk.
    /// Returns `None` if no session file exists.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load() -> Result<Option<Self>> {
        let path = Self::cache_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read session from {}", path.display()))?;

        let session = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", path.display()))?;
        Ok(Some(session))
    }

    /// Saves the session to disk with restricted permissions (0600).
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save(&self) -> Result<()> {
        let path = Self::cache_path();

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize session")?;

        // Write with restricted permissions
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&path)
                .with_context(|| format!("Failed to open {} for writing", path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&path, contents)
                .with_context(|| format!("Failed to write to {}", path.display()))?;
        }

        Ok(())
    }

    /// Removes the stored session.
    ///
    /// Returns true if a session file existed.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn clear() -> Result<bool> {
        let path = Self::cache_path();
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)
            .with_context(|| format!("Failed to remove {}", path.display()))?;
        Ok(true)
    }
}

/// Returns a masked version of a token for display (first 8 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.len() <= 12 {
        return "***".to_string();
    }
    format!("{}...", &token[..8])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Test: known fields are extracted from a login payload.
    #[test]
    fn test_from_payload_known_fields() {
        let payload = json!({"token": "t", "user_id": 1, "username": "u", "email": "e"});
        let session = Session::from_payload(&payload);

        assert_eq!(session.token.as_deref(), Some("t"));
        assert_eq!(session.user_id, Some(1));
        assert_eq!(session.username.as_deref(), Some("u"));
        assert_eq!(session.email.as_deref(), Some("e"));
        assert!(session.saved_at.is_some());
    }

    /// Test: payloads with missing or oddly-typed fields stay opaque.
    #[test]
    fn test_from_payload_partial() {
        let payload = json!({"token": 42, "extra": "ignored"});
        let session = Session::from_payload(&payload);

        assert!(session.token.is_none());
        assert!(session.user_id.is_none());
        assert!(session.username.is_none());
    }

    /// Test: session serialization roundtrip (in-memory, no fs).
    #[test]
    fn test_session_serialization() {
        let session = Session {
            token: Some("token-value".to_string()),
            user_id: Some(7),
            username: Some("ada".to_string()),
            email: None,
            saved_at: None,
        };

        let json = serde_json::to_string(&session).unwrap();
        let loaded: Session = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded.token.as_deref(), Some("token-value"));
        assert_eq!(loaded.user_id, Some(7));
        assert!(loaded.email.is_none());
    }

    /// Test: token masking.
    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("abcdefgh-long-token-here"), "abcdefgh...");
        assert_eq!(mask_token("short"), "***");
    }
}
