// In crates/risk/src/error.rs

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Account balance must be positive to express risk as a percentage, got {balance}")]
    NonPositiveAccountBalance { balance: Decimal },

    #[error("Arithmetic overflow while computing {operation}")]
    ArithmeticOverflow { operation: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
