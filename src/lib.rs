//! Address Book - a personal contact manager with birthday reminders.
//!
//! This library keeps contacts with their phone numbers and birthdays, and
//! works out who should be congratulated in the days around today.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: The contact record and the directory of records
//! - **services**: Upcoming birthday computation
//! - **repositories**: Saving and loading directory snapshots
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Command parsing and the interactive session loop

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use cli::{CommandHandler, Reply};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, RecordError, StorageError};
pub use models::{Directory, Listing, Record};
pub use repositories::{DirectoryRepository, JsonFileRepository};
pub use services::{upcoming_birthdays, BirthdayReport, BirthdayWindow, Congratulation};
