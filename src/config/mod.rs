pub mod types;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use std::path::Path;
pub use types::*;

/// Load configuration from an optional TOML file, layered under `LEADWIRE__*`
/// environment variables (e.g. `LEADWIRE__UPSTREAM__API_KEY`,
/// `LEADWIRE__HTTP__PORT`). Environment values win over file values.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();

    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("LEADWIRE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("Failed to load config from: {}", path.display()))?;

    let app_config: AppConfig = config
        .try_deserialize()
        .context("Failed to deserialize configuration")?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// Validate the loaded configuration
fn validate_config(config: &AppConfig) -> Result<()> {
    // The upstream credential is the one hard requirement
    if config.upstream.api_key.trim().is_empty() {
        anyhow::bail!("upstream.api_key must be set (LEADWIRE__UPSTREAM__API_KEY)");
    }

    url::Url::parse(&config.upstream.base_url).with_context(|| {
        format!(
            "upstream.base_url '{}' is not a valid URL",
            config.upstream.base_url
        )
    })?;

    if config.upstream.timeout_secs == 0 {
        anyhow::bail!("upstream.timeout_secs must be greater than zero");
    }

    // Validate log level
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.logging.level.as_str()) {
        anyhow::bail!(
            "Invalid log level '{}'. Valid levels: {}",
            config.logging.level,
            valid_levels.join(", ")
        );
    }

    // Validate log format
    let valid_formats = ["pretty", "json"];
    if !valid_formats.contains(&config.logging.format.as_str()) {
        anyhow::bail!(
            "Invalid log format '{}'. Valid formats: {}",
            config.logging.format,
            valid_formats.join(", ")
        );
    }

    Ok(())
}
