// In crates/catalog/src/error.rs

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown instrument: {name}")]
    UnknownInstrument { name: String },

    #[error("Instrument '{name}' is defined more than once")]
    DuplicateInstrument { name: String },

    #[error("Instrument '{name}' has a non-positive point value ({point_value})")]
    InvalidPointValue { name: String, point_value: Decimal },

    #[error("An instrument catalog needs at least one entry")]
    EmptyCatalog,
}

pub type Result<T> = std::result::Result<T, Error>;
