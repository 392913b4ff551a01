// In crates/app-config/src/lib.rs

use config::{Config, Environment, File};
use std::path::Path;

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::{AppSettings, InputBounds, InputDefaults, InstrumentsFile, Settings};

/// The directory `load_settings` reads from.
pub const CONFIG_DIR: &str = "config";

/// Loads the application settings from the default `config/` directory.
pub fn load_settings() -> Result<Settings> {
    load_settings_from(Path::new(CONFIG_DIR))
}

/// Loads the application settings from various sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Reads from a `base.toml` file, if present.
/// 2. Merges settings from an environment-specific file (e.g., `development.toml`).
/// 3. Merges settings from environment variables.
///
/// Anything left unset falls back to the built-in defaults, so the calculator runs
/// without any configuration files at all.
pub fn load_settings_from(dir: &Path) -> Result<Settings> {
    // Get the current environment. Default to "development" if not set.
    let environment = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".into());

    let settings = Config::builder()
        // 1. Load the base configuration file.
        .add_source(File::with_name(&dir.join("base").to_string_lossy()).required(false))
        // 2. Load the environment-specific configuration file.
        .add_source(File::with_name(&dir.join(&environment).to_string_lossy()).required(false))
        // 3. Load settings from environment variables (e.g., `APP_RISK__THRESHOLD_PERCENT=1.5`).
        // The prefix is `APP`, separator is `__`.
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("risk.reward_multiples")
                .try_parsing(true),
        )
        .build()?;

    // Deserialize the configuration into our `Settings` struct.
    let settings: Settings = settings.try_deserialize()?;
    settings.validate()?;

    Ok(settings)
}

/// Loads an instrument list from a standalone TOML file.
pub fn load_instruments_file(path: &Path) -> Result<InstrumentsFile> {
    let content = std::fs::read_to_string(path)?;

    let file: InstrumentsFile = toml::from_str(&content)?;
    catalog::InstrumentCatalog::new(file.instruments.clone())?;
    Ok(file)
}
