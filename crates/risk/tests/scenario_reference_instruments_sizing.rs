//! Scenario: sizing a $300 budget with a 12 point stop across the reference
//! micro contracts, then measuring it against the account.
//!
//! # Invariants under test
//!
//! 1. MES (5.0/pt)  → 60 per contract, 5 contracts, $300 at risk.
//! 2. MNQ (2.0/pt)  → 24 per contract, 12 contracts, $288 at risk.
//! 3. MGC (10.0/pt) → 120 per contract, 2 contracts, $240 at risk.
//! 4. A $50 budget cannot afford one MES contract → ZeroContracts at 0%.
//! 5. $240 of MGC risk on a $1000 account is 24% → OverThreshold.
//!
//! All tests are pure in-process.

use core_types::{AccountContext, RiskClassification, SizingRequest};
use risk::{RiskEvaluator, ThresholdRiskEvaluator, evaluate, size};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ---------------------------------------------------------------------------
// 1-3. Reference instruments
// ---------------------------------------------------------------------------

#[test]
fn reference_instruments_size_to_expected_contracts() {
    let cases = [
        (dec!(5), dec!(60), 5, dec!(300)),
        (dec!(2), dec!(24), 12, dec!(288)),
        (dec!(10), dec!(120), 2, dec!(240)),
    ];

    for (point_value, risk_per_contract, contracts, actual_risk) in cases {
        let result = size(&SizingRequest::new(dec!(300), dec!(12), point_value)).unwrap();
        assert_eq!(result.risk_per_contract, risk_per_contract, "point value {point_value}");
        assert_eq!(result.contracts, contracts, "point value {point_value}");
        assert_eq!(result.actual_risk, actual_risk, "point value {point_value}");
    }
}

// ---------------------------------------------------------------------------
// 4. Budget too small for one contract
// ---------------------------------------------------------------------------

#[test]
fn tight_budget_is_zero_contracts() {
    let sizing = size(&SizingRequest::new(dec!(50), dec!(12), dec!(5))).unwrap();
    assert_eq!(sizing.contracts, 0);
    assert_eq!(sizing.risk_per_contract, dec!(60));
    assert_eq!(sizing.actual_risk, Decimal::ZERO);

    let assessment = ThresholdRiskEvaluator::default()
        .evaluate(&sizing, &AccountContext::new(dec!(25000)))
        .unwrap();
    assert_eq!(assessment.risk_percent, Decimal::ZERO);
    assert_eq!(assessment.classification, RiskClassification::ZeroContracts);
}

// ---------------------------------------------------------------------------
// 5. Small account, large risk
// ---------------------------------------------------------------------------

#[test]
fn small_account_is_over_threshold() {
    let sizing = size(&SizingRequest::new(dec!(300), dec!(12), dec!(10))).unwrap();
    let assessment = evaluate(&sizing, &AccountContext::new(dec!(1000)), dec!(2.0)).unwrap();

    assert_eq!(assessment.actual_risk, dec!(240));
    assert_eq!(assessment.risk_percent, dec!(24.0));
    assert_eq!(assessment.classification, RiskClassification::OverThreshold);
}

#[test]
fn balance_never_changes_contract_count() {
    let sizing = size(&SizingRequest::new(dec!(300), dec!(12), dec!(5))).unwrap();
    let evaluator = ThresholdRiskEvaluator::default();

    let small = evaluator.evaluate(&sizing, &AccountContext::new(dec!(1000))).unwrap();
    let large = evaluator.evaluate(&sizing, &AccountContext::new(dec!(1000000))).unwrap();

    assert_eq!(small.actual_risk, large.actual_risk);
    assert_eq!(small.classification, RiskClassification::OverThreshold);
    assert_eq!(large.classification, RiskClassification::Acceptable);
}
