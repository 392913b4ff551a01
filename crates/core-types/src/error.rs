// In crates/core-types/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Reward multiple must be a positive integer, got {0}")]
    InvalidRewardMultiple(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
