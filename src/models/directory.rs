//! The directory of every contact, keyed by name.

use super::record::Record;
use crate::services::{upcoming_birthdays, BirthdayReport, BirthdayWindow};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// All contacts, in the order they were first added.
///
/// Each record is stored under its own name. Adding a record whose name
/// is already stored replaces the old one in place. Lookups and removal
/// ignore case; storage keeps the name exactly as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DirectorySnapshot")]
pub struct Directory {
    records: Vec<Record>,
}

/// Wire form of a directory. Converting from it re-applies the
/// one-record-per-name rule.
#[derive(Deserialize)]
struct DirectorySnapshot {
    #[serde(default)]
    records: Vec<Record>,
}

impl From<DirectorySnapshot> for Directory {
    fn from(snapshot: DirectorySnapshot) -> Self {
        let mut directory = Directory::new();
        for record in snapshot.records {
            directory.add_record(record);
        }
        directory
    }
}

/// Result of listing a directory.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    Records(Vec<&'a Record>),
    Empty,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Store a record under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        match self.records.iter_mut().find(|r| r.name() == record.name()) {
            Some(existing) => {
                debug!(name = %record.name(), "Replacing record");
                *existing = record;
            }
            None => {
                debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// Find a record by name, ignoring case.
    pub fn find_record(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().matches(name))
    }

    /// Mutable variant of [`Directory::find_record`].
    pub fn find_record_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().matches(name))
    }

    /// Delete the record with this name, ignoring case.
    ///
    /// Returns `false` and does nothing if no record matches.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.records.iter().position(|r| r.name().matches(name)) {
            Some(index) => {
                let removed = self.records.remove(index);
                debug!(name = %removed.name(), "Removed record");
                true
            }
            None => {
                debug!(name, "No record to remove");
                false
            }
        }
    }

    pub fn list_all(&self) -> Listing<'_> {
        if self.records.is_empty() {
            Listing::Empty
        } else {
            Listing::Records(self.records.iter().collect())
        }
    }

    /// Upcoming birthdays relative to the local date at the time of the call.
    pub fn birthdays(&self) -> BirthdayReport {
        self.birthdays_on(Local::now().date_naive())
    }

    /// Upcoming birthdays relative to `today` with the default window.
    pub fn birthdays_on(&self, today: NaiveDate) -> BirthdayReport {
        self.birthdays_with(BirthdayWindow::default(), today)
    }

    pub fn birthdays_with(&self, window: BirthdayWindow, today: NaiveDate) -> BirthdayReport {
        let congratulations = upcoming_birthdays(&self.records, today, window);
        debug!(
            today = %today,
            window_days = window.days(),
            count = congratulations.len(),
            "Computed upcoming birthdays"
        );
        BirthdayReport::from_congratulations(congratulations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Name, Phone};

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    #[test]
    fn test_find_record_ignores_case() {
        let mut dir = Directory::new();
        dir.add_record(record("Oleh"));

        assert_eq!(dir.find_record("Oleh"), dir.find_record("oleh"));
        assert_eq!(dir.find_record("OLEH").unwrap().name().as_str(), "Oleh");
        assert!(dir.find_record("Ole").is_none());
    }

    #[test]
    fn test_add_record_overwrites_same_name_in_place() {
        let mut dir = Directory::new();
        dir.add_record(record("Oleh"));
        dir.add_record(record("Anna"));

        let mut replacement = record("Oleh");
        replacement.add_phone(Phone::new("111").unwrap()).unwrap();
        dir.add_record(replacement);

        assert_eq!(dir.len(), 2);
        let names: Vec<&str> = dir.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["Oleh", "Anna"]);
        assert_eq!(dir.find_record("oleh").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_add_record_keys_are_case_sensitive() {
        let mut dir = Directory::new();
        dir.add_record(record("Oleh"));
        dir.add_record(record("oleh"));
        assert_eq!(dir.len(), 2);
    }

    #[test]
    fn test_find_record_mut() {
        let mut dir = Directory::new();
        dir.add_record(record("Oleh"));

        dir.find_record_mut("OLEH")
            .unwrap()
            .add_birthday("08.06.2000")
            .unwrap();
        assert_eq!(
            dir.find_record("Oleh").unwrap().show_birthday().as_deref(),
            Some("08.06.2000")
        );
    }

    #[test]
    fn test_remove_ignores_case() {
        let mut dir = Directory::new();
        dir.add_record(record("Oleh"));

        assert!(dir.remove("OLEH"));
        assert!(dir.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut dir = Directory::new();
        dir.add_record(record("Oleh"));

        assert!(!dir.remove("Anna"));
        assert_eq!(dir.len(), 1);
    }

    #[test]
    fn test_empty_directory_markers() {
        let dir = Directory::new();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        assert_eq!(dir.list_all(), Listing::Empty);
        assert_eq!(dir.birthdays_on(today), BirthdayReport::NoneUpcoming);
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let mut dir = Directory::new();
        dir.add_record(record("Zed"));
        dir.add_record(record("Amy"));

        match dir.list_all() {
            Listing::Records(records) => {
                let names: Vec<&str> = records.iter().map(|r| r.name().as_str()).collect();
                assert_eq!(names, vec!["Zed", "Amy"]);
            }
            Listing::Empty => panic!("Expected records"),
        }
    }

    #[test]
    fn test_birthdays_on_reference_date() {
        let mut dir = Directory::new();
        let mut oleh = record("Oleh");
        oleh.add_birthday("08.06.2000").unwrap();
        let mut anna = record("Anna");
        anna.add_birthday("20.06.1990").unwrap();
        dir.add_record(oleh);
        dir.add_record(anna);

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let report = dir.birthdays_on(today);
        assert_eq!(report.to_string(), "Oleh: 10.06.2024");
    }

    #[test]
    fn test_birthdays_with_wider_window() {
        let mut dir = Directory::new();
        let mut anna = record("Anna");
        anna.add_birthday("20.06.1990").unwrap();
        dir.add_record(anna);

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let report = dir.birthdays_with(BirthdayWindow::new(10), today);
        assert_eq!(report.to_string(), "Anna: 20.06.2024");
    }

    #[test]
    fn test_directory_deserialization_drops_repeated_phones() {
        let json = r#"{"records":[{"name":"Oleh","phones":["111","111"]}]}"#;
        let dir: Directory = serde_json::from_str(json).unwrap();

        let phones = dir.find_record("Oleh").unwrap().phones();
        assert_eq!(phones.len(), 1);
        assert_eq!(phones[0].as_str(), "111");
    }

    #[test]
    fn test_birthdays_with_unbounded_window() {
        let mut dir = Directory::new();
        let mut anna = record("Anna");
        anna.add_birthday("20.06.1990").unwrap();
        dir.add_record(anna);

        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let report = dir.birthdays_with(BirthdayWindow::new(u32::MAX), today);
        assert_eq!(report.to_string(), "Anna: 20.06.2024");
    }

    #[test]
    fn test_directory_serialization() {
        let mut dir = Directory::new();
        dir.add_record(record("Oleh"));

        let json = serde_json::to_string(&dir).unwrap();
        assert_eq!(json, r#"{"records":[{"name":"Oleh","phones":[]}]}"#);
    }

    #[test]
    fn test_directory_deserialization_collapses_duplicate_names() {
        let json = r#"{"records":[
            {"name":"Oleh","phones":["111"]},
            {"name":"Anna"},
            {"name":"Oleh","phones":["222"]}
        ]}"#;
        let dir: Directory = serde_json::from_str(json).unwrap();

        assert_eq!(dir.len(), 2);
        assert_eq!(dir.find_record("Oleh").unwrap().phones()[0].as_str(), "222");
    }
}
