//! Customer account model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::StatementEntry;

/// Customer record. `cpf` and `id` never change after creation; `statement`
/// is append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub cpf: String,
    pub name: String,
    pub statement: Vec<StatementEntry>,
}

impl Customer {
    /// New customer with a fresh id and an empty statement.
    pub fn new(cpf: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            cpf: cpf.into(),
            name: name.into(),
            statement: Vec::new(),
        }
    }

    pub fn append(&mut self, entry: StatementEntry) {
        self.statement.push(entry);
    }
}
