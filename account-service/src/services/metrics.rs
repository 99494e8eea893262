//! Prometheus metrics for account-service.

use once_cell::sync::Lazy;
use prometheus::{
    register_counter_vec, register_histogram_vec, register_int_counter, CounterVec, HistogramVec,
    IntCounter, TextEncoder,
};

/// Accounts opened since start.
pub static ACCOUNTS_CREATED: Lazy<IntCounter> = Lazy::new(|| {
    register_int_counter!(
        "account_accounts_created_total",
        "Total number of customer accounts created"
    )
    .expect("Failed to register accounts_created")
});

/// Deposits and withdrawals by outcome.
pub static TRANSACTIONS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "account_transactions_total",
        "Total number of statement transactions",
        &["kind", "status"] // credit|debit, ok|rejected
    )
    .expect("Failed to register transactions_total")
});

/// Error counter for alerting.
pub static ERRORS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "account_errors_total",
        "Total number of errors by type",
        &["error_type"]
    )
    .expect("Failed to register errors_total")
});

/// Ledger store operation duration histogram.
pub static STORE_OP_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    register_histogram_vec!(
        "account_store_op_duration_seconds",
        "Ledger store operation duration in seconds",
        &["operation"],
        vec![0.00001, 0.00005, 0.0001, 0.0005, 0.001, 0.005, 0.01]
    )
    .expect("Failed to register store_op_duration")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&ACCOUNTS_CREATED);
    Lazy::force(&TRANSACTIONS_TOTAL);
    Lazy::force(&ERRORS_TOTAL);
    Lazy::force(&STORE_OP_DURATION);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
