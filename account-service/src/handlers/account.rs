use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::middleware::ResolvedAccount;
use crate::models::Customer;
use crate::services::metrics::ACCOUNTS_CREATED;
use crate::services::LedgerError;
use crate::startup::AppState;
use crate::utils::ValidatedJson;

use super::SUCCESS;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAccountRequest {
    #[validate(custom(function = "crate::utils::not_blank"))]
    pub cpf: String,
    #[validate(custom(function = "crate::utils::not_blank"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    #[validate(custom(function = "crate::utils::not_blank"))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub result: &'static str,
    pub message: String,
    pub customer: Customer,
}

impl AccountResponse {
    fn new(message: &str, customer: Customer) -> Self {
        Self {
            result: SUCCESS,
            message: message.to_string(),
            customer,
        }
    }
}

#[tracing::instrument(skip_all, fields(cpf = %request.cpf.trim()))]
pub async fn create_account(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateAccountRequest>,
) -> Result<(StatusCode, Json<AccountResponse>), LedgerError> {
    let customer = Customer::new(request.cpf.trim(), request.name.trim());
    let customer = state.store.insert(customer).await?;

    ACCOUNTS_CREATED.inc();

    Ok((
        StatusCode::CREATED,
        Json(AccountResponse::new("Account created", customer)),
    ))
}

#[tracing::instrument(skip_all, fields(cpf = %account.cpf()))]
pub async fn get_account(account: ResolvedAccount) -> Json<AccountResponse> {
    Json(AccountResponse::new("Account found", account.0))
}

#[tracing::instrument(skip_all, fields(cpf = %account.cpf()))]
pub async fn update_account(
    State(state): State<AppState>,
    account: ResolvedAccount,
    ValidatedJson(request): ValidatedJson<UpdateAccountRequest>,
) -> Result<Json<AccountResponse>, LedgerError> {
    let customer = state
        .store
        .rename(account.cpf(), request.name.trim().to_string())
        .await?;

    tracing::info!(customer_id = %customer.id, "Customer renamed");

    Ok(Json(AccountResponse::new("Account updated", customer)))
}
