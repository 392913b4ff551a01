// In crates/risk/src/scenarios.rs

use crate::{Error, Result};
use core_types::{ProfitScenario, RewardMultiple};
use rust_decimal::Decimal;

/// Projects the profit of `contracts` at each reward multiple, keeping the order of
/// `multiples`.
///
/// Every value scales with `contracts`, so a zero-contract projection is all zeros;
/// callers usually skip it in that case.
pub fn project(
    contracts: u64,
    stop_loss_points: Decimal,
    point_value: Decimal,
    multiples: &[RewardMultiple],
) -> Result<Vec<ProfitScenario>> {
    let contracts = Decimal::from(contracts);

    multiples
        .iter()
        .map(|&reward_multiple| {
            let target_points = stop_loss_points
                .checked_mul(reward_multiple.into())
                .ok_or(Error::ArithmeticOverflow { operation: "target points" })?;
            let potential_profit = contracts
                .checked_mul(target_points)
                .and_then(|p| p.checked_mul(point_value))
                .ok_or(Error::ArithmeticOverflow { operation: "potential profit" })?;

            Ok(ProfitScenario {
                reward_multiple,
                target_points,
                potential_profit,
            })
        })
        .collect()
}
