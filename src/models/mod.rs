//! Data models for the address book.
//!
//! This module contains the contact record and the directory that owns
//! every record, keyed by name.

pub mod directory;
pub mod record;

pub use directory::{Directory, Listing};
pub use record::Record;
