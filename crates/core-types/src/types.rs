// In crates/core-types/src/types.rs

use crate::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

// --- Instrument ---

/// A tradeable futures contract and the dollar value of one point of price movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Human-readable identifier, unique within a catalog (e.g. "MES (Micro S&P 500)").
    pub name: String,
    /// Short ticker (e.g. "MES").
    pub symbol: String,
    /// Dollars gained or lost per one point of price movement, per contract.
    pub point_value: Decimal,
}

impl Instrument {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, point_value: Decimal) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            point_value,
        }
    }

    /// The caption shown beside the instrument selector.
    pub fn point_value_caption(&self) -> String {
        format!("Point Value: ${:.2} per point", self.point_value.round_dp(2))
    }
}

// --- Sizing ---

/// One position sizing calculation. Built fresh on every recalculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizingRequest {
    /// The most the trader is willing to lose on the trade.
    pub total_risk_dollars: Decimal,
    /// Distance from entry to stop, in price points.
    pub stop_loss_points: Decimal,
    /// Copied from the selected instrument.
    pub point_value: Decimal,
}

impl SizingRequest {
    pub fn new(total_risk_dollars: Decimal, stop_loss_points: Decimal, point_value: Decimal) -> Self {
        Self {
            total_risk_dollars,
            stop_loss_points,
            point_value,
        }
    }

    /// A zero or negative stop or point value leaves per-contract risk undefined.
    pub fn is_degenerate(&self) -> bool {
        self.stop_loss_points <= Decimal::ZERO || self.point_value <= Decimal::ZERO
    }
}

/// The outcome of sizing a `SizingRequest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizingResult {
    /// Maximum whole contracts affordable.
    pub contracts: u64,
    /// `stop_loss_points * point_value`, or zero for degenerate input.
    pub risk_per_contract: Decimal,
    /// `contracts * risk_per_contract`. Never exceeds the requested budget.
    pub actual_risk: Decimal,
}

impl SizingResult {
    /// The fallback for a zero/negative stop or point value.
    pub const fn degenerate() -> Self {
        Self {
            contracts: 0,
            risk_per_contract: Decimal::ZERO,
            actual_risk: Decimal::ZERO,
        }
    }
}

// --- Account & Risk ---

/// The hypothetical account the risk percentage is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountContext {
    pub balance: Decimal,
}

impl AccountContext {
    pub fn new(balance: Decimal) -> Self {
        Self { balance }
    }
}

/// How a sized position compares to the safety threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskClassification {
    /// Risk percent is above the configured threshold.
    OverThreshold,
    /// The budget cannot afford a single contract.
    ZeroContracts,
    Acceptable,
}

impl fmt::Display for RiskClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskClassification::OverThreshold => "over threshold",
            RiskClassification::ZeroContracts => "zero contracts",
            RiskClassification::Acceptable => "acceptable",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RiskAssessment {
    pub actual_risk: Decimal,
    /// `actual_risk / balance * 100`.
    pub risk_percent: Decimal,
    pub classification: RiskClassification,
}

// --- Profit Scenarios ---

/// Ratio of target distance to stop distance. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RewardMultiple(NonZeroU32);

impl RewardMultiple {
    pub fn new(value: u32) -> Result<Self> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(Error::InvalidRewardMultiple(value))
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The canonical `[1, 2, 3]` sequence.
    pub fn defaults() -> Vec<Self> {
        [1, 2, 3]
            .into_iter()
            .filter_map(NonZeroU32::new)
            .map(Self)
            .collect()
    }
}

impl TryFrom<u32> for RewardMultiple {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<RewardMultiple> for u32 {
    fn from(multiple: RewardMultiple) -> Self {
        multiple.get()
    }
}

impl From<RewardMultiple> for Decimal {
    fn from(multiple: RewardMultiple) -> Self {
        Decimal::from(multiple.get())
    }
}

/// Renders as the risk:reward label, e.g. `1:2`.
impl fmt::Display for RewardMultiple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1:{}", self.get())
    }
}

/// Projected profit if price reaches `reward_multiple` times the stop distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfitScenario {
    pub reward_multiple: RewardMultiple,
    /// `stop_loss_points * reward_multiple`.
    pub target_points: Decimal,
    /// `contracts * target_points * point_value`.
    pub potential_profit: Decimal,
}
