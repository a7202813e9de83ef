//! A small personal contact book.
//!
//! [`ContactManager`](domain::ContactManager) owns the ordered contact list and
//! rewrites its backing store after every change. Contacts can be searched,
//! sorted by name and exported to CSV.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod storage;
