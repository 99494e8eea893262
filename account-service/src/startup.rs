//! Application startup and lifecycle management.

use crate::config::AccountConfig;
use crate::handlers;
use crate::middleware::{account_resolver_middleware, CPF_HEADER};
use crate::services::{init_metrics, LedgerStore};
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{http_trace_layer, request_id_middleware, REQUEST_ID_HEADER};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AccountConfig,
    pub store: LedgerStore,
}

impl AppState {
    pub fn new(config: AccountConfig, store: LedgerStore) -> Self {
        Self { config, store }
    }
}

pub fn build_router(state: AppState) -> Router {
    // Every route here needs a resolved customer
    let account_routes = Router::new()
        .route(
            "/account",
            get(handlers::get_account).put(handlers::update_account),
        )
        .route("/statement", get(handlers::get_statement))
        .route("/statement/date", get(handlers::get_statement_by_date))
        .route("/balance", get(handlers::get_balance))
        .route("/deposit", post(handlers::deposit))
        .route("/withdraw", post(handlers::withdraw))
        .layer(from_fn_with_state(
            state.clone(),
            account_resolver_middleware,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/account", post(handlers::create_account))
        .merge(account_routes)
        .with_state(state.clone())
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(cors_layer(&state.config.allowed_origins))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = if allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed_origins.iter().filter_map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|e| tracing::error!("Invalid CORS origin '{}': {}", o, e))
                .ok()
        }))
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(CPF_HEADER),
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AccountConfig) -> Result<Self, AppError> {
        init_metrics();

        let state = AppState::new(config.clone(), LedgerStore::new());

        // port 0 = random port for testing
        let address = config.common.bind_address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!(error = %e, address = %address, "Failed to bind HTTP listener");
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(port = port, "Account service listener bound");

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Get a handle to the ledger store.
    pub fn store(&self) -> &LedgerStore {
        &self.state.store
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        tracing::info!(
            service = %self.state.config.service_name,
            version = %self.state.config.service_version,
            port = self.port,
            "Service ready to accept connections"
        );

        let router = build_router(self.state);
        axum::serve(self.listener, router).await.map_err(|e| {
            tracing::error!(error = %e, "HTTP server error");
            std::io::Error::other(format!("HTTP server error: {}", e))
        })
    }
}
