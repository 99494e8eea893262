//! Account resolution for CPF-scoped routes.
//!
//! The middleware reads the `cpf` header, looks the customer up in the
//! [`LedgerStore`](crate::services::LedgerStore) and stores the result in the
//! request extensions. Handlers receive it through the [`ResolvedAccount`]
//! extractor. Unknown or missing CPFs short-circuit before the handler runs.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use service_core::error::AppError;

use crate::models::Customer;
use crate::services::LedgerError;
use crate::startup::AppState;

/// Header carrying the customer's CPF.
pub const CPF_HEADER: &str = "cpf";

/// Customer resolved for the current request.
#[derive(Debug, Clone)]
pub struct ResolvedAccount(pub Customer);

impl ResolvedAccount {
    pub fn cpf(&self) -> &str {
        &self.0.cpf
    }
}

/// Middleware to require a known CPF.
pub async fn account_resolver_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, LedgerError> {
    let cpf = req
        .headers()
        .get(CPF_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| LedgerError::InvalidArgument("cpf header is required".to_string()))?;

    let customer = state.store.find_by_cpf(&cpf).await.ok_or_else(|| {
        tracing::debug!(cpf = %cpf, "Customer not found");
        LedgerError::AccountNotFound(cpf.clone())
    })?;

    req.extensions_mut().insert(ResolvedAccount(customer));

    Ok(next.run(req).await)
}

#[async_trait]
impl<S> FromRequestParts<S> for ResolvedAccount
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ResolvedAccount>()
            .cloned()
            .ok_or_else(|| {
                AppError::InternalError(anyhow::anyhow!(
                    "Resolved account missing from request extensions"
                ))
            })
    }
}
