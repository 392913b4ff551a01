// In crates/risk/src/sizer.rs

use crate::{Error, Result};
use core_types::{SizingRequest, SizingResult};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

/// Sizes a position: the most whole contracts whose combined stop-loss risk fits
/// inside `total_risk_dollars`.
///
/// A zero or negative stop distance or point value is not an error; it yields the
/// degenerate result of zero contracts and zero risk per contract. A non-positive
/// budget yields zero contracts.
///
/// The contract count is always rounded down, so `actual_risk` never exceeds the budget.
pub fn size(request: &SizingRequest) -> Result<SizingResult> {
    if request.is_degenerate() {
        return Ok(SizingResult::degenerate());
    }

    let risk_per_contract = request
        .stop_loss_points
        .checked_mul(request.point_value)
        .ok_or(Error::ArithmeticOverflow { operation: "risk per contract" })?;

    // Both factors are positive but the product can underflow Decimal's scale.
    if risk_per_contract.is_zero() {
        return Ok(SizingResult::degenerate());
    }

    let budget = request.total_risk_dollars;
    let mut contracts = floor_contracts(budget, risk_per_contract)?;

    // The quotient is rounded to 28 significant digits; nudge the count by one
    // contract if that rounding landed on the wrong side of an integer.
    if cost(contracts, risk_per_contract).is_none_or(|c| c > budget) {
        contracts = contracts.saturating_sub(1);
    } else if contracts < u64::MAX
        && cost(contracts + 1, risk_per_contract).is_some_and(|c| c <= budget)
    {
        contracts += 1;
    }

    let actual_risk = cost(contracts, risk_per_contract)
        .ok_or(Error::ArithmeticOverflow { operation: "actual risk" })?;

    Ok(SizingResult {
        contracts,
        risk_per_contract,
        actual_risk,
    })
}

/// `max(0, floor(budget / risk_per_contract))`, saturating at `u64::MAX`.
fn floor_contracts(budget: Decimal, risk_per_contract: Decimal) -> Result<u64> {
    let ratio = budget
        .checked_div(risk_per_contract)
        .ok_or(Error::ArithmeticOverflow { operation: "contract count" })?
        .floor();

    if ratio <= Decimal::ZERO {
        return Ok(0);
    }
    Ok(ratio.to_u64().unwrap_or(u64::MAX))
}

fn cost(contracts: u64, risk_per_contract: Decimal) -> Option<Decimal> {
    Decimal::from(contracts).checked_mul(risk_per_contract)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sized(total: Decimal, stop: Decimal, point_value: Decimal) -> SizingResult {
        size(&SizingRequest::new(total, stop, point_value)).unwrap()
    }

    #[test]
    fn mes_with_twelve_point_stop() {
        let result = sized(dec!(300), dec!(12), dec!(5));
        assert_eq!(result.risk_per_contract, dec!(60));
        assert_eq!(result.contracts, 5);
        assert_eq!(result.actual_risk, dec!(300));
    }

    #[test]
    fn rounds_down_to_whole_contracts() {
        let result = sized(dec!(300), dec!(12), dec!(2));
        assert_eq!(result.risk_per_contract, dec!(24));
        assert_eq!(result.contracts, 12);
        assert_eq!(result.actual_risk, dec!(288));
    }

    #[test]
    fn fractional_stop_distances() {
        // 0.25 * 5 = 1.25 per contract; 10 / 1.25 = 8 exactly.
        let result = sized(dec!(10), dec!(0.25), dec!(5));
        assert_eq!(result.contracts, 8);
        assert_eq!(result.actual_risk, dec!(10));
    }

    #[test]
    fn quotient_rounded_up_to_an_integer_is_corrected_down() {
        // 8.999...9 / 3 rounds to exactly 3 at 28 significant digits, but 3 contracts cost 9.
        let budget = dec!(8.999999999999999999999999999);
        let result = sized(budget, dec!(1), dec!(3));
        assert_eq!(result.contracts, 2);
        assert_eq!(result.actual_risk, dec!(6));
        assert!(result.actual_risk <= budget);
    }

    #[test]
    fn budget_below_one_contract_sizes_zero() {
        let result = sized(dec!(50), dec!(12), dec!(5));
        assert_eq!(result.contracts, 0);
        assert_eq!(result.risk_per_contract, dec!(60));
        assert_eq!(result.actual_risk, Decimal::ZERO);
    }

    #[test]
    fn negative_budget_clamps_to_zero_contracts() {
        let result = sized(dec!(-300), dec!(12), dec!(5));
        assert_eq!(result.contracts, 0);
        assert_eq!(result.risk_per_contract, dec!(60));
    }

    #[test]
    fn degenerate_inputs_fall_back_to_zero() {
        for (stop, point_value) in [
            (dec!(0), dec!(5)),
            (dec!(-1), dec!(5)),
            (dec!(12), dec!(0)),
            (dec!(12), dec!(-2)),
        ] {
            let result = sized(dec!(300), stop, point_value);
            assert_eq!(result, SizingResult::degenerate(), "stop={stop} pv={point_value}");
        }
    }

    #[test]
    fn underflowing_risk_per_contract_is_degenerate() {
        let tiny = Decimal::new(1, 20);
        assert_eq!(sized(dec!(300), tiny, tiny), SizingResult::degenerate());
    }

    #[test]
    fn overflowing_risk_per_contract_is_reported() {
        let err = size(&SizingRequest::new(dec!(300), Decimal::MAX, dec!(10))).unwrap_err();
        assert_eq!(err, Error::ArithmeticOverflow { operation: "risk per contract" });
    }
}
