//! Rolodex - a console address book with validated fields and durable storage.
//!
//! Contacts are filed by name and carry phone numbers and an optional
//! birthday. The engine supports lookup, mutation, substring search, and
//! paginated listing, and persists the whole book to disk between sessions.
//!
//! # Architecture
//!
//! - **domain**: validated value types (names, phones, birthdays)
//! - **models**: the contact record and its mutation semantics
//! - **book**: the keyed, insertion-ordered collection with search and pagination
//! - **storage**: atomic JSON persistence, plus the save-on-exit guard
//! - **config**: environment-driven settings
//! - **error**: typed error enums for book, storage, and config failures
//! - **repl**: the interactive prompt loop and command handlers

// Re-export commonly used types
pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use book::{AddOutcome, AddressBook, Page, DEFAULT_PAGE_SIZE};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, ConfigError, StorageError};
pub use models::Record;
pub use storage::SaveOnExit;
