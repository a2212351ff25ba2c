//! Application settings loaded from `config.toml`.
//!
//! Every field is optional in the file. When the file is absent the defaults
//! are used as-is, and the `DATABASE_URL` environment variable (typically set
//! through `.env`) always wins over the file.

use crate::config::database::{DEFAULT_DATABASE_URL, database_url_from_env};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default location of the settings file
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Runtime settings for the expense tracker
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// `SeaORM` connection URL for the local database
    pub database_url: String,
    /// `chrono` format string used for the date column of the list
    pub date_format: String,
    /// Title shown above the form and the list
    pub heading: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            date_format: "%d/%m/%Y".to_string(),
            heading: "Easy Expense Tracker".to_string(),
        }
    }
}

impl Settings {
    /// Replaces the database URL with `DATABASE_URL` from the environment, if present.
    #[must_use]
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(url) = database_url_from_env() {
            self.database_url = url;
        }
        self
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a field has the wrong type
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load settings from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {path_ref:?}: {e}"),
    })
}

/// Loads settings from `./config.toml` when it exists, otherwise the defaults,
/// then applies environment overrides.
pub fn load_default_settings() -> Result<Settings> {
    let settings = if Path::new(DEFAULT_CONFIG_PATH).exists() {
        load_settings(DEFAULT_CONFIG_PATH)?
    } else {
        tracing::debug!("No {DEFAULT_CONFIG_PATH} found, using default settings");
        Settings::default()
    };
    Ok(settings.with_env_overrides())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_partial_settings() {
        let toml_str = r#"
            date_format = "%Y-%m-%d"
        "#;

        let settings: Settings = toml::from_str(toml_str).unwrap();
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.heading, "Easy Expense Tracker");
    }

    #[test]
    fn test_load_settings_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "database_url = \"sqlite::memory:\"\nheading = \"Despesas\""
        )
        .unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.database_url, "sqlite::memory:");
        assert_eq!(settings.heading, "Despesas");
        assert_eq!(settings.date_format, "%d/%m/%Y");
    }

    #[test]
    fn test_load_settings_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date_format = 42").unwrap();

        let result = load_settings(file.path());
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }

    #[test]
    fn test_load_settings_missing_file() {
        let result = load_settings("/nonexistent/config.toml");
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
