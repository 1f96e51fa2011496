//! Error types for the rolodex engine.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Domain validation errors live in [`crate::domain::errors`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by address book operations.
///
/// These are normal negative results: the book is left unchanged and the
/// caller renders them as a one-line message.
#[derive(Error, Debug)]
pub enum BookError {
    /// No record is filed under the given name.
    #[error("No contacts with name: \"{0}\" in the address book")]
    ContactNotFound(String),

    /// The record exists but does not hold the given phone number.
    #[error("Phone number {phone} not found for contact {name}")]
    PhoneNotFound { name: String, phone: String },

    /// The requested page is outside `1..=total`.
    #[error("Invalid page number. Please enter a number between 1 and {total}")]
    PageOutOfRange { page: usize, total: usize },
}

/// Errors that can occur while persisting or restoring the address book.
///
/// A missing storage file is NOT an error; [`crate::storage::load`] treats it
/// as first-run bootstrap and returns an empty book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying I/O failure (permission denied, disk full, etc.).
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a well-formed address book.
    #[error("corrupt address book at {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON serialization error (save path).
    #[error("failed to serialize address book: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
