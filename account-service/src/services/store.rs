//! In-memory ledger store for account-service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use super::metrics::STORE_OP_DURATION;
use super::statement;
use super::LedgerError;
use crate::models::{Customer, EntryType, StatementEntry};

/// Process-wide customer collection, unique by CPF.
///
/// Cloning yields another handle to the same collection. Every
/// read-modify-write goes through [`LedgerStore::update`], which holds the
/// write lock for the whole closure, so balance checks and appends cannot
/// interleave with another request.
#[derive(Clone, Default)]
pub struct LedgerStore {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered customers.
    pub async fn count(&self) -> usize {
        self.customers.read().await.len()
    }

    /// Look up a customer by CPF.
    #[instrument(skip(self))]
    pub async fn find_by_cpf(&self, cpf: &str) -> Option<Customer> {
        let timer = STORE_OP_DURATION
            .with_label_values(&["find_by_cpf"])
            .start_timer();

        let customer = self
            .customers
            .read()
            .await
            .iter()
            .find(|customer| customer.cpf == cpf)
            .cloned();

        timer.observe_duration();
        customer
    }

    /// Register a new customer. Fails without touching the existing record if
    /// the CPF is taken.
    #[instrument(skip(self, customer), fields(cpf = %customer.cpf))]
    pub async fn insert(&self, customer: Customer) -> Result<Customer, LedgerError> {
        let timer = STORE_OP_DURATION
            .with_label_values(&["insert"])
            .start_timer();

        let mut customers = self.customers.write().await;
        if customers.iter().any(|existing| existing.cpf == customer.cpf) {
            timer.observe_duration();
            return Err(LedgerError::DuplicateAccount(customer.cpf));
        }

        customers.push(customer.clone());
        timer.observe_duration();

        info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    /// Apply `mutator` to the customer owning `cpf` under the write lock.
    pub async fn update<R, F>(&self, cpf: &str, mutator: F) -> Result<R, LedgerError>
    where
        F: FnOnce(&mut Customer) -> Result<R, LedgerError>,
    {
        let mut customers = self.customers.write().await;
        let customer = customers
            .iter_mut()
            .find(|customer| customer.cpf == cpf)
            .ok_or_else(|| LedgerError::AccountNotFound(cpf.to_string()))?;

        mutator(customer)
    }

    /// Replace the display name.
    #[instrument(skip(self, name))]
    pub async fn rename(&self, cpf: &str, name: String) -> Result<Customer, LedgerError> {
        let timer = STORE_OP_DURATION
            .with_label_values(&["rename"])
            .start_timer();

        let result = self
            .update(cpf, |customer| {
                customer.name = name;
                Ok(customer.clone())
            })
            .await;

        timer.observe_duration();
        result
    }

    /// Append a credit entry and return the new balance. A credit that would
    /// overflow the balance is rejected and nothing is appended.
    #[instrument(skip(self, description))]
    pub async fn deposit(
        &self,
        cpf: &str,
        description: Option<String>,
        amount: Decimal,
    ) -> Result<Decimal, LedgerError> {
        let timer = STORE_OP_DURATION
            .with_label_values(&["deposit"])
            .start_timer();

        let result = self
            .update(cpf, |customer| {
                let current = statement::balance(&customer.statement)?;
                let balance = current
                    .checked_add(amount)
                    .ok_or_else(statement::balance_overflow)?;

                customer.append(StatementEntry::credit(amount, description));
                info!(entry_type = %EntryType::Credit, %balance, "Statement entry appended");
                Ok(balance)
            })
            .await;

        timer.observe_duration();
        result
    }

    /// Append a debit entry if the current balance covers `amount`, returning
    /// the new balance. On rejection nothing is appended.
    #[instrument(skip(self))]
    pub async fn withdraw(&self, cpf: &str, amount: Decimal) -> Result<Decimal, LedgerError> {
        let timer = STORE_OP_DURATION
            .with_label_values(&["withdraw"])
            .start_timer();

        let result = self
            .update(cpf, |customer| {
                let balance = statement::balance(&customer.statement)?;
                if balance < amount {
                    return Err(LedgerError::InsufficientFunds {
                        balance,
                        requested: amount,
                    });
                }

                let remaining = balance
                    .checked_sub(amount)
                    .ok_or_else(statement::balance_overflow)?;

                customer.append(StatementEntry::debit(amount));
                info!(entry_type = %EntryType::Debit, balance = %remaining, "Statement entry appended");
                Ok(remaining)
            })
            .await;

        timer.observe_duration();
        result
    }
}
