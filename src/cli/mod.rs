//! Interactive command loop for the address book.
//!
//! This module reads commands line by line, applies them to the directory,
//! and saves the directory through a repository when the session ends.

pub mod commands;
pub mod handlers;

pub use commands::{parse_command, Command};
pub use handlers::{CommandHandler, Reply};

use crate::repositories::DirectoryRepository;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const PROMPT: &str = ">>> ";

/// Run a session until an exit command or end of input, then save.
///
/// # Arguments
/// * `handler` - Command handler owning the directory
/// * `repository` - Where the directory is saved when the session ends
/// * `input` - Source of command lines
/// * `output` - Destination for prompts and replies
///
/// # Returns
/// An error if reading input, writing output, or saving fails
pub fn run_session<R, W>(
    handler: &mut CommandHandler,
    repository: &dyn DirectoryRepository,
    input: R,
    mut output: W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Welcome to the assistant bot! Type \"help\" to see the commands."
    )?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            info!("End of input");
            writeln!(output)?;
            break;
        };
        let line = line?;

        match parse_command(&line) {
            Ok(command) => {
                let reply = handler.handle(command);
                writeln!(output, "{}", reply.message)?;
                if reply.exit {
                    break;
                }
            }
            Err(e) => {
                warn!(input = %line, error = %e, "Could not parse command");
                writeln!(output, "{}", e)?;
            }
        }
    }

    repository.save(handler.directory())?;
    Ok(())
}
