// In crates/risk/src/types.rs

use core_types::RewardMultiple;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Risk percentage above which a position is flagged. Conservative and prop firm
/// guidance is to risk at most 1-2% of the account per trade.
pub const DEFAULT_THRESHOLD_PERCENT: Decimal = dec!(2.0);

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RiskSettings {
    /// Risk percent of the account balance above which a position is `OverThreshold`.
    #[serde(default = "default_threshold_percent")]
    pub threshold_percent: Decimal,

    /// Reward multiples to project profit at, in display order.
    #[serde(default = "RewardMultiple::defaults")]
    pub reward_multiples: Vec<RewardMultiple>,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_THRESHOLD_PERCENT,
            reward_multiples: RewardMultiple::defaults(),
        }
    }
}

fn default_threshold_percent() -> Decimal {
    DEFAULT_THRESHOLD_PERCENT
}
