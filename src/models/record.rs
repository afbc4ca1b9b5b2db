//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: a name, its phone numbers, and an optional birthday.
///
/// The name is fixed at creation. Phones keep the order they were added in
/// and never contain the same value twice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "RecordSnapshot")]
pub struct Record {
    name: Name,

    phones: Vec<Phone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// Wire form of a record. Converting from it re-applies the distinct-phones rule.
#[derive(Deserialize)]
struct RecordSnapshot {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default)]
    birthday: Option<Birthday>,
}

impl From<RecordSnapshot> for Record {
    fn from(snapshot: RecordSnapshot) -> Self {
        let mut record = Record::new(snapshot.name);
        for phone in snapshot.phones {
            // Repeated numbers are dropped
            let _ = record.add_phone(phone);
        }
        record.birthday = snapshot.birthday;
        record
    }
}

impl Record {
    /// Create a contact with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Look up a phone by its exact value.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Append a phone unless the record already has it.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DuplicatePhone` and leaves the record unchanged
    /// if the number is already stored.
    pub fn add_phone(&mut self, phone: Phone) -> RecordResult<()> {
        if self.find_phone(phone.as_str()).is_some() {
            debug!(name = %self.name, phone = %phone, "Phone already exists");
            return Err(RecordError::DuplicatePhone(phone.into_inner()));
        }
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// # Errors
    ///
    /// - `RecordError::PhoneNotFound` if no phone equals `old`
    /// - `RecordError::DuplicatePhone` if a different phone already equals `new`
    pub fn edit_phone(&mut self, old: &str, new: Phone) -> RecordResult<()> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        if old != new.as_str() && self.find_phone(new.as_str()).is_some() {
            return Err(RecordError::DuplicatePhone(new.into_inner()));
        }

        debug!(name = %self.name, old, new = %new, "Editing phone");
        self.phones[index] = new;
        Ok(())
    }

    /// Remove a phone by its exact value.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no phone equals `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> RecordResult<Phone> {
        let index = self
            .phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))?;
        Ok(self.phones.remove(index))
    }

    /// Parse a `DD.MM.YYYY` string and set it as the birthday.
    ///
    /// On failure the previous birthday (or its absence) is kept.
    pub fn add_birthday(&mut self, date: &str) -> RecordResult<()> {
        let birthday = Birthday::parse(date)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// The birthday as `DD.MM.YYYY`, if one is set.
    pub fn show_birthday(&self) -> Option<String> {
        self.birthday.as_ref().map(Birthday::format)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        let birthday = self.show_birthday().unwrap_or_else(|| "none".to_string());

        writeln!(f, "Contact name: {}", self.name)?;
        writeln!(f, "Phones: {}", phones)?;
        write!(f, "Birthday: {}", birthday)
    }
}
