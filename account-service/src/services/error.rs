use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use super::metrics::ERRORS_TOTAL;

/// Domain errors. Every variant is terminal for the request and is reported
/// as HTTP 400.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Customer already exists!")]
    DuplicateAccount(String),

    #[error("Customer not found")]
    AccountNotFound(String),

    #[error("Insufficient funds")]
    InsufficientFunds { balance: Decimal, requested: Decimal },

    #[error("{0}")]
    InvalidArgument(String),
}

impl LedgerError {
    /// Stable identifier rendered in the `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateAccount(_) => "duplicate_account",
            Self::AccountNotFound(_) => "account_not_found",
            Self::InsufficientFunds { .. } => "insufficient_funds",
            Self::InvalidArgument(_) => "invalid_argument",
        }
    }
}

impl From<validator::ValidationErrors> for LedgerError {
    fn from(err: validator::ValidationErrors) -> Self {
        LedgerError::InvalidArgument(err.to_string())
    }
}

impl From<JsonRejection> for LedgerError {
    fn from(rejection: JsonRejection) -> Self {
        LedgerError::InvalidArgument(rejection.body_text())
    }
}

impl From<QueryRejection> for LedgerError {
    fn from(rejection: QueryRejection) -> Self {
        LedgerError::InvalidArgument(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct LedgerErrorResponse {
    pub result: &'static str,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested: Option<Decimal>,
}

impl IntoResponse for LedgerError {
    fn into_response(self) -> Response {
        ERRORS_TOTAL.with_label_values(&[self.kind()]).inc();

        let (balance, requested) = match &self {
            LedgerError::InsufficientFunds { balance, requested } => {
                (Some(*balance), Some(*requested))
            }
            _ => (None, None),
        };

        let body = LedgerErrorResponse {
            result: "error",
            error: self.kind(),
            message: self.to_string(),
            balance,
            requested,
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
