//! Rolodex - main entry point.
//!
//! Wires configuration, storage, and the prompt loop together. The book is
//! loaded once at startup, owned by a save-on-exit guard for the lifetime of
//! the session, and flushed explicitly on graceful shutdown.

use anyhow::Result;
use rolodex::{repl, storage, AddressBook, Config, SaveOnExit};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr only; stdout belongs to the prompt.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(path = %config.storage_path.display(), "starting rolodex");

    // Corrupt or unreadable store: report once, start empty. A missing file
    // is first-run bootstrap and arrives here as an empty book already.
    let book = match storage::load(&config.storage_path) {
        Ok(book) => book,
        Err(err) => {
            error!("could not load saved contacts: {err}; starting with an empty book");
            AddressBook::new()
        }
    };
    info!(contacts = book.len(), "address book ready");

    let mut session = SaveOnExit::new(book, config.storage_path.clone());

    let stdin = io::stdin();
    repl::run(
        &mut session,
        config.contacts_per_page,
        stdin.lock(),
        io::stdout(),
    )?;

    // Explicit flush on graceful shutdown; the guard re-saves best-effort
    // when it drops, covering unexpected unwinds too.
    session.save()?;
    info!("shutdown complete");
    Ok(())
}
