//! Application service layer.
//!
//! Services hold the business logic that works across many records.

pub mod birthday_service;

pub use birthday_service::{upcoming_birthdays, BirthdayReport, BirthdayWindow, Congratulation};
