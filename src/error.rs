//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when changing a single contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The phone is already stored on the record
    #[error("Phone {0} already exists")]
    DuplicatePhone(String),

    /// No phone on the record has this value
    #[error("Phone {0} does not exist")]
    PhoneNotFound(String),

    /// A field value failed validation
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Errors that can occur while loading or saving a directory snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while parsing a line of user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing but whitespace was entered
    #[error("Please, enter not empty string!")]
    EmptyInput,

    /// The command was recognised but arguments are missing
    #[error("Please enter correct args. Example: '{usage}'")]
    MissingArguments { usage: &'static str },

    /// The command word is not known
    #[error("Invalid command '{0}'! Try again...")]
    Unknown(String),
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
