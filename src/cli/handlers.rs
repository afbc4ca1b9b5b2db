//! Command handlers for the interactive address book.
//!
//! The handler owns the directory for the whole session and turns each
//! [`Command`] into a [`Reply`] for the user.

use super::commands::{help_text, Command};
use crate::domain::{Name, Phone};
use crate::models::{Directory, Listing, Record};
use crate::services::BirthdayWindow;
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// What to show the user after a command, and whether the session ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub exit: bool,
}

impl Reply {
    fn say(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit: false,
        }
    }

    fn goodbye() -> Self {
        Self {
            message: "Bye!".to_string(),
            exit: true,
        }
    }
}

/// Applies commands to a directory.
pub struct CommandHandler {
    directory: Directory,
    window: BirthdayWindow,
    reference_date: Option<NaiveDate>,
}

impl CommandHandler {
    pub fn new(directory: Directory, window: BirthdayWindow) -> Self {
        Self {
            directory,
            window,
            reference_date: None,
        }
    }

    /// Pin "today" for birthday lookups instead of reading the clock.
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.reference_date = Some(today);
        self
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn into_directory(self) -> Directory {
        self.directory
    }

    fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn handle(&mut self, command: Command) -> Reply {
        debug!(?command, "Handling command");
        match command {
            Command::Hello => Reply::say("How can I help you?"),
            Command::Add { name, phone } => Reply::say(self.add(&name, &phone)),
            Command::Find { name } => Reply::say(self.find(&name)),
            Command::Birthdays => Reply::say(
                self.directory
                    .birthdays_with(self.window, self.today())
                    .to_string(),
            ),
            Command::ShowBirthday { name } => Reply::say(self.show_birthday(&name)),
            Command::AddBirthday { name, date } => Reply::say(self.add_birthday(&name, &date)),
            Command::Update {
                name,
                old_phone,
                new_phone,
            } => Reply::say(self.update(&name, &old_phone, &new_phone)),
            Command::Delete { name } => Reply::say(self.delete(&name)),
            Command::All => Reply::say(self.all()),
            Command::Help => Reply::say(help_text()),
            Command::Exit => Reply::goodbye(),
        }
    }

    fn add(&mut self, name: &str, phone: &str) -> String {
        let phone = match Phone::new(phone) {
            Ok(phone) => phone,
            Err(e) => return e.to_string(),
        };

        if let Some(record) = self.directory.find_record_mut(name) {
            return match record.add_phone(phone) {
                Ok(()) => "Contact updated.".to_string(),
                Err(e) => {
                    warn!(name, error = %e, "Phone not added");
                    e.to_string()
                }
            };
        }

        let name = match Name::new(name) {
            Ok(name) => name,
            Err(e) => return e.to_string(),
        };
        let mut record = Record::new(name);
        if let Err(e) = record.add_phone(phone) {
            return e.to_string();
        }
        self.directory.add_record(record);
        "Contact added.".to_string()
    }

    fn find(&self, name: &str) -> String {
        match self.directory.find_record(name) {
            Some(record) => record.to_string(),
            None => not_found(name),
        }
    }

    fn show_birthday(&self, name: &str) -> String {
        match self.directory.find_record(name) {
            Some(record) => match record.show_birthday() {
                Some(birthday) => format!("{} has birthday: {}", record.name(), birthday),
                None => format!("{} has no birthday set", record.name()),
            },
            None => not_found(name),
        }
    }

    fn add_birthday(&mut self, name: &str, date: &str) -> String {
        let Some(record) = self.directory.find_record_mut(name) else {
            return format!(
                "{} Please, add user first. Example: 'add_birthday Oleh 22.03.2024'",
                not_found(name)
            );
        };
        match record.add_birthday(date) {
            Ok(()) => "Birthday added.".to_string(),
            Err(e) => {
                warn!(name, date, error = %e, "Birthday rejected");
                e.to_string()
            }
        }
    }

    fn update(&mut self, name: &str, old_phone: &str, new_phone: &str) -> String {
        let Some(record) = self.directory.find_record_mut(name) else {
            return not_found(name);
        };
        let new = match Phone::new(new_phone) {
            Ok(phone) => phone,
            Err(e) => return e.to_string(),
        };
        match record.edit_phone(old_phone, new) {
            Ok(()) => format!("Phone {} edited to {}", old_phone, new_phone),
            Err(e) => e.to_string(),
        }
    }

    fn delete(&mut self, name: &str) -> String {
        if self.directory.remove(name) {
            format!("User {} has been deleted!", name)
        } else {
            not_found(name)
        }
    }

    fn all(&self) -> String {
        match self.directory.list_all() {
            Listing::Records(records) => records
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Listing::Empty => "No data exist!".to_string(),
        }
    }
}

fn not_found(name: &str) -> String {
    format!("User \"{}\" is not found.", name)
}
