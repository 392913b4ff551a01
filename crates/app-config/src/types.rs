// In crates/app-config/src/types.rs

use crate::{Error, Result};
use catalog::InstrumentCatalog;
use core_types::Instrument;
use risk::RiskSettings;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    /// The application's general settings.
    #[serde(default)]
    pub app: AppSettings,
    /// Safety threshold and reward multiples.
    #[serde(default)]
    pub risk: RiskSettings,
    /// Lower bounds every input must satisfy before a calculation runs.
    #[serde(default)]
    pub bounds: InputBounds,
    /// Values used when an input is not supplied.
    #[serde(default)]
    pub defaults: InputDefaults,
    /// The instruments offered for selection, in display order.
    #[serde(default = "catalog::reference_instruments")]
    pub instruments: Vec<Instrument>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings::default(),
            risk: RiskSettings::default(),
            bounds: InputBounds::default(),
            defaults: InputDefaults::default(),
            instruments: catalog::reference_instruments(),
        }
    }
}

impl Settings {
    /// Builds the immutable instrument catalog described by these settings.
    pub fn catalog(&self) -> Result<InstrumentCatalog> {
        Ok(InstrumentCatalog::new(self.instruments.clone())?)
    }

    /// Checks the semantic rules a TOML schema cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.risk.threshold_percent <= Decimal::ZERO {
            return Err(Error::Invalid(format!(
                "risk.threshold_percent must be positive, got {}",
                self.risk.threshold_percent
            )));
        }
        if self.risk.reward_multiples.is_empty() {
            return Err(Error::Invalid(
                "risk.reward_multiples needs at least one multiple".to_string(),
            ));
        }

        let bounds = [
            ("bounds.min_account_balance", self.bounds.min_account_balance),
            ("bounds.min_total_risk", self.bounds.min_total_risk),
            ("bounds.min_stop_loss_points", self.bounds.min_stop_loss_points),
        ];
        if let Some((name, value)) = bounds.iter().find(|(_, v)| *v < Decimal::ZERO) {
            return Err(Error::Invalid(format!("{name} must not be negative, got {value}")));
        }
        if self.bounds.min_account_balance.is_zero() {
            return Err(Error::Invalid(
                "bounds.min_account_balance must be positive".to_string(),
            ));
        }

        let defaults = [
            ("defaults.account_balance", self.defaults.account_balance, self.bounds.min_account_balance),
            ("defaults.total_risk", self.defaults.total_risk, self.bounds.min_total_risk),
            ("defaults.stop_loss_points", self.defaults.stop_loss_points, self.bounds.min_stop_loss_points),
        ];
        for (name, value, minimum) in defaults {
            if value < minimum {
                return Err(Error::Invalid(format!(
                    "{name} ({value}) is below its minimum of {minimum}"
                )));
            }
        }

        let catalog = self.catalog()?;
        if let Some(name) = &self.defaults.instrument {
            catalog.get(name)?;
        }

        Ok(())
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    /// The environment the application is running in (e.g., "development", "production").
    #[serde(default = "default_environment")]
    pub environment: String,
    /// The log level for the application.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            log_level: default_log_level(),
        }
    }
}

/// Minimums enforced on user input.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InputBounds {
    #[serde(default = "default_min_account_balance")]
    pub min_account_balance: Decimal,
    #[serde(default = "default_min_total_risk")]
    pub min_total_risk: Decimal,
    #[serde(default = "default_min_stop_loss_points")]
    pub min_stop_loss_points: Decimal,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_account_balance: default_min_account_balance(),
            min_total_risk: default_min_total_risk(),
            min_stop_loss_points: default_min_stop_loss_points(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct InputDefaults {
    #[serde(default = "default_account_balance")]
    pub account_balance: Decimal,
    #[serde(default = "default_total_risk")]
    pub total_risk: Decimal,
    #[serde(default = "default_stop_loss_points")]
    pub stop_loss_points: Decimal,
    /// Name or ticker; the first catalog entry when unset.
    #[serde(default)]
    pub instrument: Option<String>,
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            account_balance: default_account_balance(),
            total_risk: default_total_risk(),
            stop_loss_points: default_stop_loss_points(),
            instrument: None,
        }
    }
}

/// A standalone instrument file, e.g. `instruments.toml` with `[[instruments]]` tables.
#[derive(Deserialize, Debug, Clone)]
pub struct InstrumentsFile {
    pub instruments: Vec<Instrument>,
}

/// Helper functions for serde defaults
fn default_environment() -> String { "development".to_string() }
fn default_log_level() -> String { "warn".to_string() }
fn default_min_account_balance() -> Decimal { dec!(1000) }
fn default_min_total_risk() -> Decimal { dec!(10) }
fn default_min_stop_loss_points() -> Decimal { dec!(0.25) }
fn default_account_balance() -> Decimal { dec!(25000) }
fn default_total_risk() -> Decimal { dec!(300) }
fn default_stop_loss_points() -> Decimal { dec!(12) }

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::RewardMultiple;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.risk.reward_multiples, RewardMultiple::defaults());
    }

    #[test]
    fn empty_instrument_list_is_rejected() {
        let settings = Settings {
            instruments: vec![],
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::CatalogError(catalog::Error::EmptyCatalog))
        ));
    }

    #[test]
    fn default_below_bound_is_rejected() {
        let mut settings = Settings::default();
        settings.defaults.stop_loss_points = dec!(0.1);
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("defaults.stop_loss_points"), "{err}");
    }

    #[test]
    fn unknown_default_instrument_is_rejected() {
        let mut settings = Settings::default();
        settings.defaults.instrument = Some("ZB".to_string());
        assert!(matches!(
            settings.validate(),
            Err(Error::CatalogError(catalog::Error::UnknownInstrument { .. }))
        ));
    }
}
