//! Domain models for account-service.

mod customer;
mod entry;

pub use customer::Customer;
pub use entry::{EntryType, StatementEntry};
