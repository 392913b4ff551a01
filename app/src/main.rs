// In app/src/main.rs

use anyhow::Result;
use app_config::Settings;
use catalog::InstrumentCatalog;
use clap::{Parser, Subcommand};
use engine::{CalculationInput, Calculator};
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::prelude::*;

mod interactive;
mod render;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "A futures position size calculator.")]
struct Cli {
    /// Directory holding base.toml and the per-environment overrides.
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,

    /// A TOML file of [[instruments]] that replaces the configured catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sizes a position once and prints the result.
    Size {
        /// Instrument name or ticker (e.g. "MES"). Defaults to the configured instrument.
        #[arg(short, long)]
        instrument: Option<String>,

        /// Hypothetical account balance in dollars.
        #[arg(short, long)]
        balance: Option<Decimal>,

        /// Total dollar risk for the trade.
        #[arg(short, long)]
        risk: Option<Decimal>,

        /// Stop loss distance in points.
        #[arg(short, long)]
        stop: Option<Decimal>,

        /// Print the result as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Lists the selectable instruments and their point values.
    Instruments,

    /// Recalculates after every `key=value` edit read from stdin.
    Interactive,
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    // Parse command-line arguments.
    let cli = Cli::parse();

    let settings = match &cli.config_dir {
        Some(dir) => app_config::load_settings_from(dir)?,
        None => app_config::load_settings()?,
    };

    // Logs go to stderr so the rendered result on stdout stays clean.
    let level = tracing::Level::from_str(&settings.app.log_level).unwrap_or(tracing::Level::WARN);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();

    tracing::info!(environment = %settings.app.environment, "Starting position sizer");

    let catalog = load_catalog(&settings, cli.catalog.as_deref())?;
    let calculator = Calculator::from_settings(catalog, &settings);

    // Match on the parsed command and call the appropriate handler.
    match cli.command {
        Commands::Size {
            instrument,
            balance,
            risk,
            stop,
            json,
        } => {
            let mut input = default_input(&settings, &calculator);
            if let Some(instrument) = instrument {
                input.instrument = instrument;
            }
            input.account_balance = balance.unwrap_or(input.account_balance);
            input.total_risk_dollars = risk.unwrap_or(input.total_risk_dollars);
            input.stop_loss_points = stop.unwrap_or(input.stop_loss_points);

            handle_size(&calculator, &input, json)?;
        }
        Commands::Instruments => {
            print!("{}", render::Instruments(calculator.catalog()));
        }
        Commands::Interactive => {
            let input = default_input(&settings, &calculator);
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            interactive::run(&calculator, input, stdin.lock(), &mut stdout)?;
        }
    }

    Ok(())
}

/// Handles the logic for the `size` subcommand.
fn handle_size(calculator: &Calculator, input: &CalculationInput, json: bool) -> Result<()> {
    let record = calculator.calculate(input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        print!("{}", render::Record(&record));
    }
    Ok(())
}

/// Builds the catalog from `--catalog` when given, otherwise from the settings.
fn load_catalog(settings: &Settings, catalog_file: Option<&Path>) -> Result<InstrumentCatalog> {
    match catalog_file {
        Some(path) => {
            let file = app_config::load_instruments_file(path)?;
            tracing::info!(path = %path.display(), count = file.instruments.len(), "Loaded instrument file.");
            Ok(InstrumentCatalog::new(file.instruments)?)
        }
        None => Ok(settings.catalog()?),
    }
}

/// The values a fresh calculator session starts from.
fn default_input(settings: &Settings, calculator: &Calculator) -> CalculationInput {
    let catalog = calculator.catalog();
    let instrument = match &settings.defaults.instrument {
        Some(name) if catalog.get(name).is_ok() => name.clone(),
        Some(name) => {
            tracing::warn!(instrument = %name, "Default instrument is not in the catalog; using the first entry.");
            catalog.first().name.clone()
        }
        None => catalog.first().name.clone(),
    };

    CalculationInput {
        instrument,
        account_balance: settings.defaults.account_balance,
        total_risk_dollars: settings.defaults.total_risk,
        stop_loss_points: settings.defaults.stop_loss_points,
    }
}
