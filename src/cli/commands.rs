//! Parsing of a single input line into a [`Command`].

use crate::error::CommandError;

/// Words that save the address book and end the session.
pub const EXIT_WORDS: [&str; 5] = ["q", "quit", "exit", "leave", "left"];

/// A parsed user request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Find { name: String },
    Birthdays,
    ShowBirthday { name: String },
    AddBirthday { name: String, date: String },
    Update { name: String, old_phone: String, new_phone: String },
    Delete { name: String },
    All,
    Help,
    Exit,
}

/// Split a line on whitespace and turn it into a command.
///
/// The command word is case-insensitive; arguments are kept as typed.
/// Extra trailing arguments are ignored.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let word = parts.next().ok_or(CommandError::EmptyInput)?.to_lowercase();
    let args: Vec<String> = parts.map(str::to_string).collect();

    let command = match word.as_str() {
        "hello" | "start" => Command::Hello,
        "add" | "create" => {
            let [name, phone] = take_args(args, "add Oleh 0932244555")?;
            Command::Add { name, phone }
        }
        "find" | "get" => {
            let [name] = take_args(args, "find Oleh")?;
            Command::Find { name }
        }
        "birthdays" | "b" => Command::Birthdays,
        "show_birthday" => {
            let [name] = take_args(args, "show_birthday Oleh")?;
            Command::ShowBirthday { name }
        }
        "add_birthday" => {
            let [name, date] = take_args(args, "add_birthday Oleh 22.03.2024")?;
            Command::AddBirthday { name, date }
        }
        "update" => {
            let [name, old_phone, new_phone] =
                take_args(args, "update Oleh 0932244555 05012345678")?;
            Command::Update {
                name,
                old_phone,
                new_phone,
            }
        }
        "delete" | "del" => {
            let [name] = take_args(args, "delete Oleh")?;
            Command::Delete { name }
        }
        "all" | "show" => Command::All,
        "help" | "info" => Command::Help,
        w if EXIT_WORDS.contains(&w) => Command::Exit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}

/// The first `N` arguments, or a usage error if fewer were given.
fn take_args<const N: usize>(
    args: Vec<String>,
    usage: &'static str,
) -> Result<[String; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArguments { usage });
    }
    let mut iter = args.into_iter();
    Ok(std::array::from_fn(|_| iter.next().unwrap_or_default()))
}

/// Summary of every command, shown by `help`.
pub fn help_text() -> &'static str {
    "Available commands:\n\
     - hello\n\
     - add <name> <number>\n\
     - find <name>\n\
     - birthdays\n\
     - show_birthday <name>\n\
     - add_birthday <name> <DD.MM.YYYY>\n\
     - update <name> <old_number> <new_number>\n\
     - delete <name>\n\
     - all (show all contacts)\n\
     - help\n\
     - exit"
}
