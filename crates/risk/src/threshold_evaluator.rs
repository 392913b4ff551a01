// In crates/risk/src/threshold_evaluator.rs

use crate::evaluator;
use crate::types::RiskSettings;
use crate::{Result, RiskEvaluator};
use core_types::{AccountContext, RiskAssessment, SizingResult};
use rust_decimal::Decimal;

/// A risk evaluator that flags any position risking more than a fixed percentage
/// of the account balance.
#[derive(Debug, Clone)]
pub struct ThresholdRiskEvaluator {
    /// The configuration for this evaluator instance.
    settings: RiskSettings,
}

impl ThresholdRiskEvaluator {
    /// Creates a new `ThresholdRiskEvaluator` instance from its settings.
    pub fn new(settings: RiskSettings) -> Self {
        Self { settings }
    }
}

impl Default for ThresholdRiskEvaluator {
    fn default() -> Self {
        Self::new(RiskSettings::default())
    }
}

impl RiskEvaluator for ThresholdRiskEvaluator {
    fn name(&self) -> &'static str {
        "ThresholdRiskEvaluator"
    }

    fn threshold_percent(&self) -> Decimal {
        self.settings.threshold_percent
    }

    fn evaluate(&self, sizing: &SizingResult, account: &AccountContext) -> Result<RiskAssessment> {
        evaluator::evaluate(sizing, account, self.settings.threshold_percent)
    }
}
