//! Configuration management for the rolodex prompt.
//!
//! This module handles loading and validating configuration from environment
//! variables. Everything has a sensible default; a `.env` file is honored
//! when present but never required.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Storage file used when `ADDRESS_BOOK_PATH` is not set.
pub const DEFAULT_STORAGE_PATH: &str = "address_book.dat";

/// Configuration for the rolodex prompt.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is persisted between sessions
    pub storage_path: PathBuf,

    /// Contacts shown per page by the paged listing (default: 5)
    pub contacts_per_page: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: storage file path (default: `address_book.dat`)
    /// - `CONTACTS_PER_PAGE`: page size for the contact listing (default: 5)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let storage_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORAGE_PATH));

        let contacts_per_page = Self::parse_env_usize("CONTACTS_PER_PAGE", 5)?;
        if contacts_per_page == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_PER_PAGE".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_path,
            contacts_per_page,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            contacts_per_page: 5,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.storage_path, PathBuf::from("address_book.dat"));
        assert_eq!(config.contacts_per_page, 5);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        env::remove_var("ADDRESS_BOOK_PATH");
        env::remove_var("CONTACTS_PER_PAGE");

        let config = Config::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from(DEFAULT_STORAGE_PATH));
        assert_eq!(config.contacts_per_page, 5);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_PATH", "/tmp/contacts.dat");
        guard.set("CONTACTS_PER_PAGE", "8");

        let config = Config::from_env().unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/contacts.dat"));
        assert_eq!(config.contacts_per_page, 8);
    }

    #[test]
    #[serial]
    fn test_config_rejects_zero_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_PER_PAGE", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "CONTACTS_PER_PAGE");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_page_size() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACTS_PER_PAGE", "lots");

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE", "42");

        let result = Config::parse_env_usize("TEST_USIZE", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_usize("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }
}
