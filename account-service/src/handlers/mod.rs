//! HTTP handlers for account-service.

pub mod account;
pub mod health;
pub mod statement;
pub mod transaction;

pub use account::{create_account, get_account, update_account};
pub use health::{health_check, metrics_handler};
pub use statement::{get_balance, get_statement, get_statement_by_date};
pub use transaction::{deposit, withdraw};

/// `result` value of every successful response.
pub const SUCCESS: &str = "success";
