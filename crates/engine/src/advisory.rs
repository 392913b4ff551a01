// In crates/engine/src/advisory.rs

use core_types::{RiskAssessment, RiskClassification};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARNING",
            Severity::Success => "OK",
        };
        f.write_str(label)
    }
}

/// The message shown under the sizing metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advisory {
    pub severity: Severity,
    pub message: String,
}

impl Advisory {
    pub fn for_assessment(assessment: &RiskAssessment, threshold_percent: Decimal) -> Self {
        match assessment.classification {
            RiskClassification::OverThreshold => Self {
                severity: Severity::Error,
                message: format!(
                    "SAFETY WARNING: You are risking {:.2}% of your account balance. \
                     Standard recommendation is below {}%.",
                    assessment.risk_percent.round_dp(2),
                    threshold_label(threshold_percent)
                ),
            },
            RiskClassification::ZeroContracts => Self {
                severity: Severity::Warning,
                message: "Risk is too tight for the selected stop loss. You cannot afford 1 contract."
                    .to_string(),
            },
            RiskClassification::Acceptable => Self {
                severity: Severity::Success,
                message: "Risk is within acceptable parameters.".to_string(),
            },
        }
    }
}

/// Whole-number thresholds keep one decimal place (`2.0`) however they were configured.
fn threshold_label(threshold_percent: Decimal) -> String {
    let threshold = threshold_percent.normalize();
    if threshold.scale() == 0 {
        format!("{threshold:.1}")
    } else {
        threshold.to_string()
    }
}
