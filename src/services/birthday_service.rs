//! Upcoming birthday computation.
//!
//! A contact is due a congratulation when this year's anniversary of their
//! birthday lies within a window of days around a reference date. Weekend
//! anniversaries are congratulated on the following Monday.

use crate::domain::DATE_FORMAT;
use crate::models::Record;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// Half-width of the birthday window in days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayWindow {
    days: u32,
}

impl BirthdayWindow {
    pub const DEFAULT_DAYS: u32 = 7;

    pub fn new(days: u32) -> Self {
        Self { days }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Inclusive first and last dates of the window around `today`,
    /// clamped to the supported calendar range.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let span = Duration::days(i64::from(self.days));
        let start = today.checked_sub_signed(span).unwrap_or(NaiveDate::MIN);
        let end = today.checked_add_signed(span).unwrap_or(NaiveDate::MAX);
        (start, end)
    }

    pub fn contains(&self, today: NaiveDate, date: NaiveDate) -> bool {
        let (start, end) = self.bounds(today);
        start <= date && date <= end
    }
}

impl Default for BirthdayWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DAYS)
    }
}

/// A contact to congratulate and the day to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Congratulation {
    pub name: String,

    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl Congratulation {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn formatted_date(&self) -> String {
        self.congratulation_date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Congratulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.formatted_date())
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
}

/// Outcome of asking a directory for upcoming birthdays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayReport {
    /// Congratulations in directory order
    Upcoming(Vec<Congratulation>),
    /// Nobody has a birthday inside the window
    NoneUpcoming,
}

impl BirthdayReport {
    pub fn from_congratulations(congratulations: Vec<Congratulation>) -> Self {
        if congratulations.is_empty() {
            Self::NoneUpcoming
        } else {
            Self::Upcoming(congratulations)
        }
    }

    /// The congratulations, empty when none are upcoming.
    pub fn congratulations(&self) -> &[Congratulation] {
        match self {
            Self::Upcoming(list) => list,
            Self::NoneUpcoming => &[],
        }
    }
}

impl fmt::Display for BirthdayReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoneUpcoming => write!(f, "No users with upcoming birthdays"),
            Self::Upcoming(list) => {
                let lines: Vec<String> = list.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            }
        }
    }
}

/// Move Saturday and Sunday to the following Monday.
///
/// A weekend at the very end of the calendar range is left as is.
pub fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    let days = match date.weekday() {
        Weekday::Sat => 2,
        Weekday::Sun => 1,
        _ => return date,
    };
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Congratulations for every record whose anniversary in `today`'s year
/// falls inside `window`, in the order the records are given.
///
/// Membership is decided on the unshifted anniversary; the weekend shift is
/// applied afterwards, so a shifted date may land past the window's end.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    today: NaiveDate,
    window: BirthdayWindow,
) -> Vec<Congratulation>
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .filter_map(|record| {
            let anniversary = record.birthday()?.anniversary_in(today.year())?;
            if !window.contains(today, anniversary) {
                return None;
            }
            Some(Congratulation {
                name: record.name().as_str().to_string(),
                congratulation_date: shift_off_weekend(anniversary),
            })
        })
        .collect()
}
