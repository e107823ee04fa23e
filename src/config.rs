//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the address book console.
#[derive(Debug, Clone)]
pub struct Config {
    /// Storage file shown in the welcome banner (default: "addressbook.txt")
    pub storage_file: String,

    /// Text shown in place of a private field's value (default: "[private]")
    pub private_placeholder: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    pub const DEFAULT_STORAGE_FILE: &'static str = "addressbook.txt";
    pub const DEFAULT_PRIVATE_PLACEHOLDER: &'static str = "[private]";

    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESSBOOK_STORAGE_FILE`: Storage file path (default: "addressbook.txt")
    /// - `ADDRESSBOOK_PRIVATE_PLACEHOLDER`: Placeholder for private fields (default: "[private]")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let storage_file = Self::env_or(
            "ADDRESSBOOK_STORAGE_FILE",
            Self::DEFAULT_STORAGE_FILE,
        )?;
        let private_placeholder = Self::env_or(
            "ADDRESSBOOK_PRIVATE_PLACEHOLDER",
            Self::DEFAULT_PRIVATE_PLACEHOLDER,
        )?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_file,
            private_placeholder,
            log_level,
        })
    }

    /// Read a non-blank environment variable, falling back to `default` when unset.
    fn env_or(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val),
            Err(env::VarError::NotPresent) => Ok(default.to_string()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must be valid UTF-8".to_string(),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_file: Self::DEFAULT_STORAGE_FILE.to_string(),
            private_placeholder: Self::DEFAULT_PRIVATE_PLACEHOLDER.to_string(),
            log_level: "error".to_string(),
        }
    }
}
