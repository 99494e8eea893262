//! Statement entry model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Entry direction (credit adds to the balance, debit subtracts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    Credit,
    Debit,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Credit => "credit",
            Self::Debit => "debit",
        }
    }
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Single line of a customer's statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl StatementEntry {
    /// Credit entry stamped with the current time.
    pub fn credit(amount: Decimal, description: Option<String>) -> Self {
        Self {
            entry_type: EntryType::Credit,
            amount,
            description,
            created_at: Utc::now(),
        }
    }

    /// Debit entry stamped with the current time.
    pub fn debit(amount: Decimal) -> Self {
        Self {
            entry_type: EntryType::Debit,
            amount,
            description: None,
            created_at: Utc::now(),
        }
    }

    /// Get signed amount (positive for credit, negative for debit).
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Credit => self.amount,
            EntryType::Debit => -self.amount,
        }
    }
}
