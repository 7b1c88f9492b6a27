//! Configuration management for tix.
//!
//! Loads configuration from ${TIX_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default backend base URL when neither env nor config provides one.
pub const DEFAULT_BASE_URL: &str = "https://fasticket.onrender.com";

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV_VAR: &str = "TIX_BASE_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
/// To update, edit default_config.toml directly.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Default value for serde when log_filter is missing.
fn default_log_filter() -> String {
    Config::DEFAULT_LOG_FILTER.to_string()
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend base URL (optional; env and built-in default also apply)
    pub base_url: Option<String>,

    /// Filter directive for the file log (overridden by RUST_LOG)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    const DEFAULT_LOG_FILTER: &str = "info";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the effective base URL with precedence: env > config > default.
    ///
    /// Env and config values are validated as URLs; trailing slashes are
    /// stripped so endpoint paths can be appended directly.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn resolve_base_url(&self) -> Result<String> {
        // Try env var first
        if let Ok(env_url) = std::env::var(BASE_URL_ENV_VAR) {
            let trimmed = env_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.trim_end_matches('/').to_string());
            }
        }

        // Try config value
        if let Some(config_url) = self.base_url.as_deref() {
            let trimmed = config_url.trim();
            if !trimmed.is_empty() {
                validate_url(trimmed)?;
                return Ok(trimmed.trim_end_matches('/').to_string());
            }
        }

        // Default
        Ok(DEFAULT_BASE_URL.to_string())
    }

    /// Saves only the base_url field to the config file.
    ///
    /// Creates the file if it doesn't exist.
    /// Preserves existing fields and comments using toml_edit.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save_base_url(base_url: &str) -> Result<()> {
        Self::save_base_url_to(&paths::config_path(), base_url)
    }

    /// Saves only the base_url field to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn save_base_url_to(path: &Path, base_url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        validate_url(base_url)?;

        // Start from template, merge user values if file exists
        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        // Parse as editable document
        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["base_url"] = value(base_url.trim_end_matches('/'));

        Self::write_config(path, &doc.to_string())
    }

    /// Writes the default config template to the config path if absent.
    ///
    /// Returns true if the file was created.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub fn init_default() -> Result<bool> {
        let path = paths::config_path();
        if path.exists() {
            return Ok(false);
        }
        Self::write_config(&path, default_config_template())?;
        Ok(true)
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid base URL: {url}"))?;
    Ok(())
}

/// Merges user config values into the default template.
///
/// This ensures new comments/sections from the template are always present,
/// while preserving user's customized values.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    // Parse the template as the base
    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;

    // Parse user's existing config
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    // Overlay user values onto template
    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Recursively merges items from source table into target table.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, value) in source.iter() {
        match value {
            Item::Value(v) => {
                // Scalar value: override in target
                target[key] = Item::Value(v.clone());
            }
            Item::Table(src_table) => {
                // Nested table: recursively merge
                if let Some(Item::Table(target_table)) = target.get_mut(key) {
                    merge_items(target_table, src_table);
                } else {
                    // Target doesn't have this table, copy it
                    target[key] = Item::Table(src_table.clone());
                }
            }
            Item::ArrayOfTables(src_arr) => {
                target[key] = Item::ArrayOfTables(src_arr.clone());
            }
            Item::None => {}
        }
    }
}

pub mod paths {
    //! Path resolution for tix configuration and data directories.
    //!
    //! TIX_HOME resolution order:
    //! 1. TIX_HOME environment variable (if set)
    //! 2. ~/.config/tix (default)

    use std::path::PathBuf;

    /// Returns the user's home directory.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }

    /// Returns the tix home directory.
    ///
    /// Checks TIX_HOME env var first, falls back to ~/.config/tix
    pub fn tix_home() -> PathBuf {
        if let Ok(home) = std::env::var("TIX_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("tix"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        tix_home().join("config.toml")
    }

    /// Returns the path to the log directory.
    pub fn logs_dir() -> PathBuf {
        tix_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test: defaults apply when the config file is missing.
    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();

        assert!(config.base_url.is_none());
        assert_eq!(config.log_filter, "info");
    }

    /// Test: a partial config file keeps defaults for missing fields.
    #[test]
    fn test_load_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"http://localhost:9000\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.log_filter, "info");
    }

    /// Test: config value wins over the built-in default.
    #[test]
    fn test_resolve_base_url_from_config() {
        let config = Config {
            base_url: Some("http://localhost:9000/".to_string()),
            ..Config::default()
        };
        // Trailing slash is stripped
        assert_eq!(config.resolve_base_url().unwrap(), "http://localhost:9000");
    }

    /// Test: built-in default applies when nothing is configured.
    #[test]
    fn test_resolve_base_url_default() {
        let config = Config {
            base_url: None,
            ..Config::default()
        };
        if std::env::var(BASE_URL_ENV_VAR).is_err() {
            assert_eq!(config.resolve_base_url().unwrap(), DEFAULT_BASE_URL);
        }
    }

    /// Test: malformed config URLs are rejected.
    #[test]
    fn test_resolve_base_url_invalid() {
        let config = Config {
            base_url: Some("not a url".to_string()),
            ..Config::default()
        };
        assert!(config.resolve_base_url().is_err());
    }

    /// Test: save_base_url creates a file from the template and sets the value.
    #[test]
    fn test_save_base_url_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::save_base_url_to(&path, "http://localhost:9000").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
    }

    /// Test: save_base_url preserves customized values in an existing file.
    #[test]
    fn test_save_base_url_preserves_user_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_filter = \"debug\"\n").unwrap();

        Config::save_base_url_to(&path, "http://localhost:9000").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.log_filter, "debug");
    }
}
