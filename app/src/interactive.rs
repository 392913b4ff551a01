// In app/src/interactive.rs

use crate::render;
use engine::{CalculationInput, Calculator};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};
use std::str::FromStr;

const HELP: &str = "\
Change an input with key=value and the position is recalculated:
  instrument=<name or ticker>   balance=<dollars>   risk=<dollars>   stop=<points>
Other commands: show, instruments, help, quit";

/// Reads `key=value` edits from `input` and re-renders after every change.
///
/// Each edit replaces one field of the current input and triggers a full
/// recalculation. Rejected input is reported and leaves the previous values in place.
pub fn run<R: BufRead, W: Write>(
    calculator: &Calculator,
    mut state: CalculationInput,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    writeln!(output, "{HELP}\n")?;
    show(calculator, &state, output)?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        match line {
            "" => continue,
            "quit" | "exit" | "q" => break,
            "help" => writeln!(output, "{HELP}")?,
            "show" => {
                show(calculator, &state, output)?;
            }
            "instruments" => write!(output, "{}", render::Instruments(calculator.catalog()))?,
            edit => {
                let mut candidate = state.clone();
                if let Err(message) = apply(&mut candidate, edit) {
                    writeln!(output, "! {message}")?;
                } else if show(calculator, &candidate, output)? {
                    state = candidate;
                }
            }
        }
    }

    Ok(())
}

/// Renders one calculation. Returns whether `state` was accepted.
fn show<W: Write>(calculator: &Calculator, state: &CalculationInput, output: &mut W) -> anyhow::Result<bool> {
    let accepted = match calculator.calculate(state) {
        Ok(record) => {
            write!(output, "{}", render::Record(&record))?;
            true
        }
        Err(err) => {
            tracing::debug!(error = %err, "Calculation rejected.");
            writeln!(output, "! {err}")?;
            false
        }
    };
    writeln!(output)?;
    Ok(accepted)
}

/// Applies a single `key=value` edit to `state`.
fn apply(state: &mut CalculationInput, edit: &str) -> Result<(), String> {
    let (key, value) = edit
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{edit}' (type 'help')"))?;
    let (key, value) = (key.trim(), value.trim());

    match key {
        "instrument" | "i" => state.instrument = value.to_string(),
        "balance" | "b" => state.account_balance = parse_amount(key, value)?,
        "risk" | "r" => state.total_risk_dollars = parse_amount(key, value)?,
        "stop" | "s" => state.stop_loss_points = parse_amount(key, value)?,
        other => return Err(format!("unknown input '{other}' (type 'help')")),
    }
    Ok(())
}

fn parse_amount(key: &str, value: &str) -> Result<Decimal, String> {
    Decimal::from_str(value.trim_start_matches('$')).map_err(|e| format!("{key}: {e}"))
}
