//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use crate::services::BirthdayWindow;
use std::env;
use std::path::PathBuf;

/// Largest accepted birthday window half-width, in days.
const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the address book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON snapshot (default: "addressbook.json")
    pub address_book_path: PathBuf,

    /// Days either side of today that count as upcoming (default: 7)
    pub birthday_window_days: u32,

    /// Log level used when RUST_LOG is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PATH`: Snapshot file (default: "addressbook.json")
    /// - `BIRTHDAY_WINDOW_DAYS`: Window half-width, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let address_book_path = env::var("ADDRESS_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.address_book_path);

        if address_book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let birthday_window_days =
            Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;

        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            address_book_path,
            birthday_window_days,
            log_level,
        })
    }

    /// The birthday window described by this configuration.
    pub fn birthday_window(&self) -> BirthdayWindow {
        BirthdayWindow::new(self.birthday_window_days)
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
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
            address_book_path: PathBuf::from("addressbook.json"),
            birthday_window_days: BirthdayWindow::DEFAULT_DAYS,
            log_level: "warn".to_string(),
        }
    }
}
