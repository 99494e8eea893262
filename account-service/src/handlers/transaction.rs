use axum::{extract::State, http::StatusCode, Json};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::middleware::ResolvedAccount;
use crate::models::EntryType;
use crate::services::metrics::TRANSACTIONS_TOTAL;
use crate::services::LedgerError;
use crate::startup::AppState;
use crate::utils::ValidatedJson;

use super::SUCCESS;

#[derive(Debug, Deserialize, Validate)]
pub struct DepositRequest {
    pub description: Option<String>,
    #[validate(custom(function = "crate::utils::positive_amount"))]
    pub amount: Decimal,
}

#[derive(Debug, Deserialize, Validate)]
pub struct WithdrawRequest {
    #[validate(custom(function = "crate::utils::positive_amount"))]
    pub amount: Decimal,
}

#[derive(Debug, Serialize)]
pub struct DepositResponse {
    pub result: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct WithdrawResponse {
    pub result: &'static str,
    pub message: String,
    pub balance: Decimal,
}

#[tracing::instrument(skip_all, fields(cpf = %account.cpf(), amount = %request.amount))]
pub async fn deposit(
    State(state): State<AppState>,
    account: ResolvedAccount,
    ValidatedJson(request): ValidatedJson<DepositRequest>,
) -> Result<(StatusCode, Json<DepositResponse>), LedgerError> {
    let balance = state
        .store
        .deposit(account.cpf(), request.description, request.amount)
        .await?;

    TRANSACTIONS_TOTAL.with_label_values(&[EntryType::Credit.as_str(), "ok"]).inc();
    tracing::info!(%balance, "Deposit recorded");

    Ok((
        StatusCode::CREATED,
        Json(DepositResponse {
            result: SUCCESS,
            message: format!("Deposit of {} recorded", request.amount),
        }),
    ))
}

#[tracing::instrument(skip_all, fields(cpf = %account.cpf(), amount = %request.amount))]
pub async fn withdraw(
    State(state): State<AppState>,
    account: ResolvedAccount,
    ValidatedJson(request): ValidatedJson<WithdrawRequest>,
) -> Result<(StatusCode, Json<WithdrawResponse>), LedgerError> {
    match state.store.withdraw(account.cpf(), request.amount).await {
        Ok(balance) => {
            TRANSACTIONS_TOTAL.with_label_values(&[EntryType::Debit.as_str(), "ok"]).inc();
            tracing::info!(%balance, "Withdrawal recorded");

            Ok((
                StatusCode::CREATED,
                Json(WithdrawResponse {
                    result: SUCCESS,
                    message: format!("Withdrawal of {} recorded", request.amount),
                    balance,
                }),
            ))
        }
        Err(e) => {
            if let LedgerError::InsufficientFunds { balance, .. } = &e {
                TRANSACTIONS_TOTAL
                    .with_label_values(&[EntryType::Debit.as_str(), "rejected"])
                    .inc();
                tracing::warn!(%balance, "Withdrawal rejected: insufficient funds");
            }
            Err(e)
        }
    }
}
