// In crates/engine/src/lib.rs

pub mod advisory;
pub mod error;

use app_config::{InputBounds, Settings};
use catalog::InstrumentCatalog;
use core_types::{
    AccountContext, ProfitScenario, RewardMultiple, RiskClassification, SizingRequest,
};
use risk::{RiskEvaluator, ThresholdRiskEvaluator};
use rust_decimal::Decimal;
use serde::Serialize;

pub use advisory::{Advisory, Severity};
pub use error::{Error, Result};

/// The raw values collected from the user for one calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationInput {
    /// Catalog name or ticker.
    pub instrument: String,
    pub account_balance: Decimal,
    pub total_risk_dollars: Decimal,
    pub stop_loss_points: Decimal,
}

/// Everything the presentation layer renders after a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    /// Full catalog name of the selected instrument.
    pub instrument: String,
    pub point_value: Decimal,
    pub contracts: u64,
    pub risk_per_contract: Decimal,
    pub actual_risk: Decimal,
    pub risk_percent: Decimal,
    /// Budget left over after rounding down to whole contracts.
    pub unused_risk: Decimal,
    pub classification: RiskClassification,
    pub advisory: Advisory,
    /// Empty when no contract is affordable.
    pub scenarios: Vec<ProfitScenario>,
}

/// Runs the sizing pipeline: bounds, instrument lookup, sizing, risk evaluation
/// and profit projection.
///
/// Holds only immutable configuration; every call to `calculate` is an
/// independent pass over its input.
pub struct Calculator {
    catalog: InstrumentCatalog,
    evaluator: Box<dyn RiskEvaluator + Send>,
    bounds: InputBounds,
    reward_multiples: Vec<RewardMultiple>,
}

impl Calculator {
    pub fn new(
        catalog: InstrumentCatalog,
        evaluator: Box<dyn RiskEvaluator + Send>,
        bounds: InputBounds,
        reward_multiples: Vec<RewardMultiple>,
    ) -> Self {
        Self {
            catalog,
            evaluator,
            bounds,
            reward_multiples,
        }
    }

    /// Builds a calculator over `catalog` with the risk policy and bounds from `settings`.
    pub fn from_settings(catalog: InstrumentCatalog, settings: &Settings) -> Self {
        Self::new(
            catalog,
            Box::new(ThresholdRiskEvaluator::new(settings.risk.clone())),
            settings.bounds.clone(),
            settings.risk.reward_multiples.clone(),
        )
    }

    pub fn catalog(&self) -> &InstrumentCatalog {
        &self.catalog
    }

    pub fn bounds(&self) -> &InputBounds {
        &self.bounds
    }

    /// Rejects input below the configured minimums, then calculates.
    pub fn calculate(&self, input: &CalculationInput) -> Result<DisplayRecord> {
        self.check_bounds(input)?;
        self.calculate_unbounded(input)
    }

    /// Calculates without enforcing input bounds. Degenerate stops and budgets are
    /// sized to zero contracts rather than rejected.
    pub fn calculate_unbounded(&self, input: &CalculationInput) -> Result<DisplayRecord> {
        let instrument = self.catalog.get(&input.instrument)?;

        let request = SizingRequest::new(
            input.total_risk_dollars,
            input.stop_loss_points,
            instrument.point_value,
        );
        let sizing = risk::size(&request)?;
        let assessment = self
            .evaluator
            .evaluate(&sizing, &AccountContext::new(input.account_balance))?;

        let scenarios = if sizing.contracts > 0 {
            risk::project(
                sizing.contracts,
                request.stop_loss_points,
                request.point_value,
                &self.reward_multiples,
            )?
        } else {
            Vec::new()
        };

        tracing::debug!(
            instrument = %instrument.symbol,
            contracts = sizing.contracts,
            risk_per_contract = %sizing.risk_per_contract,
            risk_percent = %assessment.risk_percent,
            classification = %assessment.classification,
            evaluator = self.evaluator.name(),
            "Position sized."
        );
        if assessment.classification == RiskClassification::OverThreshold {
            tracing::warn!(
                risk_percent = %assessment.risk_percent,
                threshold = %self.evaluator.threshold_percent(),
                "Sized position exceeds the account risk threshold."
            );
        }

        Ok(DisplayRecord {
            instrument: instrument.name.clone(),
            point_value: instrument.point_value,
            contracts: sizing.contracts,
            risk_per_contract: sizing.risk_per_contract,
            actual_risk: assessment.actual_risk,
            risk_percent: assessment.risk_percent,
            unused_risk: input.total_risk_dollars - assessment.actual_risk,
            classification: assessment.classification,
            advisory: Advisory::for_assessment(&assessment, self.evaluator.threshold_percent()),
            scenarios,
        })
    }

    fn check_bounds(&self, input: &CalculationInput) -> Result<()> {
        let checks = [
            ("account balance", input.account_balance, self.bounds.min_account_balance),
            ("total dollar risk", input.total_risk_dollars, self.bounds.min_total_risk),
            ("stop loss points", input.stop_loss_points, self.bounds.min_stop_loss_points),
        ];

        for (field, value, minimum) in checks {
            if value < minimum {
                return Err(Error::InputOutOfBounds {
                    field,
                    value,
                    minimum,
                });
            }
        }
        Ok(())
    }
}
