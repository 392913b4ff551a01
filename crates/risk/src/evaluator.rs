// In crates/risk/src/evaluator.rs

use crate::{Error, Result};
use core_types::{AccountContext, RiskAssessment, RiskClassification, SizingResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Expresses a sized position's dollar risk as a percentage of the account and
/// classifies it against `threshold_percent`.
///
/// The balance has no effect on the contract count; it only scales the percentage.
/// A zero or negative balance is reported instead of dividing by it.
pub fn evaluate(
    sizing: &SizingResult,
    account: &AccountContext,
    threshold_percent: Decimal,
) -> Result<RiskAssessment> {
    if account.balance <= Decimal::ZERO {
        return Err(Error::NonPositiveAccountBalance {
            balance: account.balance,
        });
    }

    let actual_risk = Decimal::from(sizing.contracts)
        .checked_mul(sizing.risk_per_contract)
        .ok_or(Error::ArithmeticOverflow { operation: "actual risk" })?;

    let risk_percent = actual_risk
        .checked_div(account.balance)
        .and_then(|ratio| ratio.checked_mul(dec!(100)))
        .ok_or(Error::ArithmeticOverflow { operation: "risk percent" })?;

    Ok(RiskAssessment {
        actual_risk,
        risk_percent,
        classification: classify(risk_percent, sizing.contracts, threshold_percent),
    })
}

/// First match wins: over the threshold, then unaffordable, then acceptable.
pub fn classify(risk_percent: Decimal, contracts: u64, threshold_percent: Decimal) -> RiskClassification {
    if risk_percent > threshold_percent {
        RiskClassification::OverThreshold
    } else if contracts == 0 {
        RiskClassification::ZeroContracts
    } else {
        RiskClassification::Acceptable
    }
}
