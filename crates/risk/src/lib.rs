// In crates/risk/src/lib.rs

use core_types::{AccountContext, RiskAssessment, SizingResult};
use rust_decimal::Decimal;

pub mod error;
pub mod evaluator;
pub mod scenarios;
pub mod sizer;
pub mod threshold_evaluator;
pub mod types;

// Re-export public types
pub use error::{Error, Result};
pub use evaluator::{classify, evaluate};
pub use scenarios::project;
pub use sizer::size;
pub use threshold_evaluator::ThresholdRiskEvaluator;
pub use types::RiskSettings;

/// The interface for judging how much of the account a sized position puts at risk.
///
/// A `RiskEvaluator` never changes the contract count; it only measures the sized
/// position against the account and classifies the result.
pub trait RiskEvaluator: Sync {
    /// The name of the evaluation policy.
    fn name(&self) -> &'static str;

    /// The risk percentage above which positions are flagged.
    fn threshold_percent(&self) -> Decimal;

    /// Measures `sizing` against `account`.
    ///
    /// # Returns
    ///
    /// * `Ok(RiskAssessment)`: The dollar risk, its share of the balance and its classification.
    /// * `Err(Error::NonPositiveAccountBalance)`: If the balance cannot express a percentage.
    fn evaluate(&self, sizing: &SizingResult, account: &AccountContext) -> Result<RiskAssessment>;
}
