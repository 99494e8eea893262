use axum::{extract::Query, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::middleware::ResolvedAccount;
use crate::models::StatementEntry;
use crate::services::statement::{balance, filter_by_date, parse_statement_date};
use crate::services::LedgerError;

use super::SUCCESS;

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatementResponse {
    pub result: &'static str,
    pub message: String,
    pub statement: Vec<StatementEntry>,
    pub balance: Decimal,
}

#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    pub result: &'static str,
    pub message: String,
    pub balance: Decimal,
}

#[tracing::instrument(skip_all, fields(cpf = %account.cpf()))]
pub async fn get_statement(
    account: ResolvedAccount,
) -> Result<Json<StatementResponse>, LedgerError> {
    let statement = account.0.statement;
    let balance = balance(&statement)?;

    Ok(Json(StatementResponse {
        result: SUCCESS,
        message: "Statement retrieved".to_string(),
        statement,
        balance,
    }))
}

/// Entries of a single day. The balance covers the whole statement, not
/// only the returned entries.
#[tracing::instrument(skip_all, fields(cpf = %account.cpf()))]
pub async fn get_statement_by_date(
    account: ResolvedAccount,
    query: Result<Query<StatementDateQuery>, axum::extract::rejection::QueryRejection>,
) -> Result<Json<StatementResponse>, LedgerError> {
    let Query(query) = query?;
    let raw = query
        .date
        .ok_or_else(|| LedgerError::InvalidArgument("date query parameter is required".to_string()))?;
    let date = parse_statement_date(&raw)?;

    let full = account.0.statement;
    let total = balance(&full)?;
    let statement = filter_by_date(&full, date);

    tracing::debug!(%date, matched = statement.len(), total = full.len(), "Statement filtered by date");

    Ok(Json(StatementResponse {
        result: SUCCESS,
        message: format!("Statement for {}", date),
        statement,
        balance: total,
    }))
}

#[tracing::instrument(skip_all, fields(cpf = %account.cpf()))]
pub async fn get_balance(account: ResolvedAccount) -> Result<Json<BalanceResponse>, LedgerError> {
    Ok(Json(BalanceResponse {
        result: SUCCESS,
        message: "Balance retrieved".to_string(),
        balance: balance(&account.0.statement)?,
    }))
}
