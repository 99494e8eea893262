pub mod account;

pub use account::{account_resolver_middleware, ResolvedAccount, CPF_HEADER};
