// In crates/engine/src/error.rs

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] catalog::Error),

    #[error(transparent)]
    Risk(#[from] risk::Error),

    #[error("{field} must be at least {minimum}, got {value}")]
    InputOutOfBounds {
        field: &'static str,
        value: Decimal,
        minimum: Decimal,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
