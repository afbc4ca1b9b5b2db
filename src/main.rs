//! Address Book - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout. Logs go to stderr.

use address_book::cli::{run_session, CommandHandler};
use address_book::{Config, DirectoryRepository, JsonFileRepository};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        path = %config.address_book_path.display(),
        window_days = config.birthday_window_days,
        "Starting address book"
    );

    let repository = JsonFileRepository::new(&config.address_book_path);
    let directory = match repository.load() {
        Ok(directory) => directory,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            return Err(e.into());
        }
    };

    let mut handler = CommandHandler::new(directory, config.birthday_window());

    let stdin = io::stdin();
    run_session(&mut handler, &repository, stdin.lock(), io::stdout())?;

    info!("Address book saved, shutting down");
    Ok(())
}
