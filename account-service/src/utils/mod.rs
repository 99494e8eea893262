pub mod validation;

pub use validation::{not_blank, positive_amount, ValidatedJson};
