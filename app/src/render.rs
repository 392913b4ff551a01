// In app/src/render.rs

use catalog::InstrumentCatalog;
use engine::DisplayRecord;
use rust_decimal::Decimal;
use std::fmt;

/// Formats a dollar amount to cents, e.g. `$1234.50` or `-$12.00`.
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${:.2}", rounded.abs())
    } else {
        format!("${:.2}", rounded.abs())
    }
}

/// Renders the sizing metrics, the advisory and the profit table.
pub struct Record<'a>(pub &'a DisplayRecord);

impl fmt::Display for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;

        writeln!(f, "{}", record.instrument)?;
        writeln!(f, "Point Value: {} per point", currency(record.point_value))?;
        writeln!(f)?;
        writeln!(f, "--- Position Sizing ---")?;
        writeln!(f, "{:<18}{}", "Max Contracts", record.contracts)?;
        writeln!(f, "{:<18}{}", "Risk / Contract", currency(record.risk_per_contract))?;
        writeln!(f, "{:<18}{}", "Actual Risk ($)", currency(record.actual_risk))?;
        writeln!(f, "{:<18}{:.2}%", "Account Risk %", record.risk_percent.round_dp(2))?;
        writeln!(f, "{:<18}{}", "Unused Budget", currency(record.unused_risk))?;
        writeln!(f)?;
        writeln!(f, "[{}] {}", record.advisory.severity, record.advisory.message)?;

        if record.scenarios.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "--- Profit Scenarios (R:R) ---")?;
        writeln!(f, "{:<14}{:>16}{:>24}", "Risk:Reward", "Target (Points)", "Potential Profit ($)")?;
        for scenario in &record.scenarios {
            writeln!(
                f,
                "{:<14}{:>16}{:>24}",
                scenario.reward_multiple.to_string(),
                format!("{:.2}", scenario.target_points.round_dp(2)),
                currency(scenario.potential_profit)
            )?;
        }
        Ok(())
    }
}

/// Lists every selectable instrument with its point value.
pub struct Instruments<'a>(pub &'a InstrumentCatalog);

impl fmt::Display for Instruments<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for instrument in self.0 {
            writeln!(
                f,
                "{:<6}{:<28}{}",
                instrument.symbol,
                instrument.name,
                instrument.point_value_caption()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_config::Settings;
    use engine::{CalculationInput, Calculator};
    use rust_decimal_macros::dec;

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(currency(dec!(300)), "$300.00");
        assert_eq!(currency(dec!(1234.567)), "$1234.57");
        assert_eq!(currency(dec!(-12)), "-$12.00");
        assert_eq!(currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn record_renders_profit_table() {
        let settings = Settings::default();
        let calculator = Calculator::from_settings(settings.catalog().unwrap(), &settings);
        let rendered = Record(
            &calculator
                .calculate(&CalculationInput {
                    instrument: "MES".to_string(),
                    account_balance: dec!(25000),
                    total_risk_dollars: dec!(300),
                    stop_loss_points: dec!(12),
                })
                .unwrap(),
        )
        .to_string();

        assert!(rendered.contains("Max Contracts     5"), "{rendered}");
        assert!(rendered.contains("Account Risk %    1.20%"), "{rendered}");
        assert!(rendered.contains("[OK] Risk is within acceptable parameters."));
        assert!(rendered.contains("1:3"));
        assert!(rendered.contains("36.00"));
        assert!(rendered.contains("$900.00"));
    }

    #[test]
    fn zero_contract_record_has_no_table() {
        let settings = Settings::default();
        let calculator = Calculator::from_settings(settings.catalog().unwrap(), &settings);
        let rendered = Record(
            &calculator
                .calculate(&CalculationInput {
                    instrument: "MES".to_string(),
                    account_balance: dec!(25000),
                    total_risk_dollars: dec!(50),
                    stop_loss_points: dec!(12),
                })
                .unwrap(),
        )
        .to_string();

        assert!(rendered.contains("[WARNING]"));
        assert!(!rendered.contains("Profit Scenarios"));
    }

    #[test]
    fn record_lines_follow_display_order() {
        let settings = Settings::default();
        let calculator = Calculator::from_settings(settings.catalog().unwrap(), &settings);
        let record = calculator
            .calculate(&CalculationInput {
                instrument: "MNQ".to_string(),
                account_balance: dec!(1007),
                total_risk_dollars: dec!(300),
                stop_loss_points: dec!(12),
            })
            .unwrap();
        let rendered = format!("{}", Record(&record));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "MNQ (Micro Nasdaq 100)");
        assert_eq!(lines[1], "Point Value: $2.00 per point");
        assert_eq!(lines[7], "Account Risk %    28.60%");
        assert!(lines[10].starts_with("[ERROR] SAFETY WARNING"), "{rendered}");
        assert!(lines[10].contains("28.60%"), "{rendered}");
        assert_eq!(lines.len(), 17);
        assert!(lines[16].starts_with("1:3"));
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn instrument_listing_keeps_catalog_order() {
        let listing = Instruments(&InstrumentCatalog::reference()).to_string();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("MES"));
        assert!(lines[2].ends_with("Point Value: $10.00 per point"));
    }
}
