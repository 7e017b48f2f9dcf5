//! Application configuration loading from `order_desk.toml`.
//!
//! Every key is optional and a missing file means "use the defaults". A file
//! that exists but does not parse is an error.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "order_desk.toml";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`]
pub const CONFIG_PATH_VAR: &str = "ORDER_DESK_CONFIG";

/// Configuration structure representing the entire `order_desk.toml` file
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Database URL, overridden by `DATABASE_URL` when set
    pub database_url: String,
    /// Report settings
    pub reports: ReportConfig,
    /// Export settings
    pub export: ExportConfig,
}

/// Settings for the analysis reports
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// How many clients the ranked chart shows
    pub top_clients: usize,
    /// Year of the default daily-report window
    pub window_year: i32,
    /// Month (1-12) of the default daily-report window
    pub window_month: u32,
}

/// Settings for file exports
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Where `order export` writes when no path is given
    pub orders_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: super::database::DEFAULT_DATABASE_URL.to_string(),
            reports: ReportConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_clients: 5,
            window_year: 2025,
            window_month: 8,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            orders_file: PathBuf::from("orders_export.csv"),
        }
    }
}

impl AppConfig {
    /// Parses configuration from TOML text and checks value ranges.
    ///
    /// # Errors
    /// Returns [`Error::Config`] if the TOML is malformed, has unknown keys, or
    /// holds an out-of-range value.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse configuration: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(1..=12).contains(&self.reports.window_month) {
            return Err(Error::Config {
                message: format!(
                    "reports.window_month must be between 1 and 12, got {}",
                    self.reports.window_month
                ),
            });
        }
        if self.reports.top_clients == 0 {
            return Err(Error::Config {
                message: "reports.top_clients must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Loads configuration from a TOML file
///
/// # Returns
/// * `Ok(AppConfig)` - Parsed configuration, or defaults if the file is absent
/// * `Err(Error)` - The file exists but could not be read or parsed
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::info!(path = %path.display(), "No configuration file, using defaults");
        return Ok(AppConfig::default());
    }

    tracing::debug!(path = %path.display(), "Loading configuration");
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path.display()),
    })?;
    AppConfig::from_toml(&contents)
}

/// Loads configuration from `ORDER_DESK_CONFIG`, or `./order_desk.toml`.
///
/// `DATABASE_URL` in the environment replaces the configured database URL.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let mut config = load_config(&path)?;
    if let Ok(url) = std::env::var(super::database::DATABASE_URL_VAR) {
        config.database_url = url;
    }
    Ok(config)
}
