//! Durable persistence for the address book.
//!
//! The on-disk format is an engine-owned JSON document: the ordered record
//! list, with every name, phone, and birthday round-tripping losslessly.
//! Saves are atomic with respect to partial writes: serialize → write a
//! `.tmp` sibling → `rename` over the target.

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Atomically save the whole book to `path`, replacing prior content.
///
/// # Errors
///
/// `StorageError::Serialize` if the book cannot be encoded,
/// `StorageError::Io` on any filesystem failure.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let json = serde_json::to_string_pretty(book)?;

    let tmp = tmp_sibling(path);
    fs::write(&tmp, json).map_err(|source| StorageError::Io {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "address book saved");
    Ok(())
}

/// Load a previously saved book from `path`.
///
/// A missing file is first-run bootstrap and yields an empty book.
///
/// # Errors
///
/// `StorageError::Io` when the file exists but cannot be read,
/// `StorageError::Corrupt` when it is not a well-formed address book
/// (malformed JSON, invalid field values, duplicate names).
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no saved address book, starting empty");
            return Ok(AddressBook::new());
        }
        Err(source) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// `.tmp` sibling in the same directory as the target (same filesystem,
/// so the final `rename` cannot cross devices).
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("address_book.dat"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Owns the live book and flushes it back to disk when dropped.
///
/// The binary keeps its book inside this guard so that state still reaches
/// disk when the prompt loop unwinds unexpectedly. The drop-time save is
/// best-effort: failures are logged, never propagated, and never panic.
/// Graceful shutdown should still call [`SaveOnExit::save`] so the error
/// is visible to the caller.
#[derive(Debug)]
pub struct SaveOnExit {
    book: AddressBook,
    path: PathBuf,
}

impl SaveOnExit {
    /// Wrap a book, remembering where to flush it.
    pub fn new(book: AddressBook, path: impl Into<PathBuf>) -> Self {
        Self {
            book,
            path: path.into(),
        }
    }

    /// Explicit flush, surfacing any error.
    pub fn save(&self) -> StorageResult<()> {
        save(&self.book, &self.path)
    }
}

impl Deref for SaveOnExit {
    type Target = AddressBook;

    fn deref(&self) -> &AddressBook {
        &self.book
    }
}

impl DerefMut for SaveOnExit {
    fn deref_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }
}

impl Drop for SaveOnExit {
    fn drop(&mut self) {
        if let Err(err) = save(&self.book, &self.path) {
            warn!("best-effort save on exit failed: {err}");
        }
    }
}
