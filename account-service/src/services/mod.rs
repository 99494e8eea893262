pub mod error;
pub mod metrics;
pub mod statement;
pub mod store;

pub use error::LedgerError;
pub use metrics::{get_metrics, init_metrics};
pub use store::LedgerStore;
