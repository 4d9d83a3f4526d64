//! Store configuration
//!
//! Loads backing-store settings from an optional `auth-core.toml` with
//! `AUTH_CORE_*` environment overrides. The persistence schema (table and
//! column names) is caller-configured; nothing here is fixed by the core.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Settings for the SQLite-backed person store
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Table holding identity records
    #[serde(default = "default_table")]
    pub table: String,

    /// Column used for login lookups
    #[serde(default = "default_email_column")]
    pub email_column: String,
}

fn default_database_path() -> String {
    "auth-core.db".to_string()
}

fn default_table() -> String {
    "persons".to_string()
}

fn default_email_column() -> String {
    "email".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            table: default_table(),
            email_column: default_email_column(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from auth-core.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("auth-core").required(false))
            .add_source(Environment::with_prefix("AUTH_CORE"))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    ///
    /// Table and column names are interpolated into SQL text by the
    /// repository, so they must be plain identifiers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database_path.is_empty() {
            return Err(ConfigError::Message(
                "database_path cannot be empty".into(),
            ));
        }

        if !is_sql_identifier(&self.table) {
            return Err(ConfigError::Message(format!(
                "table must be a plain SQL identifier, got {:?}",
                self.table
            )));
        }

        if !is_sql_identifier(&self.email_column) {
            return Err(ConfigError::Message(format!(
                "email_column must be a plain SQL identifier, got {:?}",
                self.email_column
            )));
        }

        Ok(())
    }
}

fn is_sql_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
