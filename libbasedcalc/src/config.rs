//! Configuration management for basedcalc

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::donation::{DonationSummary, DEFAULT_BENEFICIARY, DEFAULT_PAYMENT_URL};
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub donation: DonationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event poll timeout in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_true")]
    pub colors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationConfig {
    #[serde(default = "default_payment_url")]
    pub payment_url: String,
    /// Fundraising goal in dollars
    #[serde(default = "default_goal")]
    pub goal: f64,
    #[serde(default = "default_beneficiary")]
    pub beneficiary: String,
    /// Local JSON file in the donor feed's shape
    #[serde(default)]
    pub donors_file: Option<String>,
}

/// Lower bound for the event poll timeout; zero would spin the UI loop
pub const MIN_TICK_RATE_MS: u64 = 10;

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_payment_url() -> String {
    DEFAULT_PAYMENT_URL.to_string()
}

fn default_goal() -> f64 {
    1000.0
}

fn default_beneficiary() -> String {
    DEFAULT_BENEFICIARY.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            colors: true,
        }
    }
}

impl Default for DonationConfig {
    fn default() -> Self {
        Self {
            payment_url: default_payment_url(),
            goal: default_goal(),
            beneficiary: default_beneficiary(),
            donors_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_or_default(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let mut config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.ui.tick_rate_ms = config.ui.tick_rate_ms.max(MIN_TICK_RATE_MS);
        Ok(config)
    }

    /// Like [`Config::load_from_path`], but a missing file yields defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(path)
    }

    /// Apply `NO_COLOR`, `BASEDCALC_NO_COLOR` and `BASEDCALC_TICK_MS`
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var("NO_COLOR").is_ok() || std::env::var("BASEDCALC_NO_COLOR").is_ok() {
            self.ui.colors = false;
        }

        if let Some(tick_rate_ms) = std::env::var("BASEDCALC_TICK_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.ui.tick_rate_ms = tick_rate_ms.max(MIN_TICK_RATE_MS);
        }

        self
    }

    /// Donor summary from the configured file, or the seeded placeholder
    pub fn donation_summary(&self) -> Result<DonationSummary> {
        let Some(ref donors_file) = self.donation.donors_file else {
            return Ok(DonationSummary::seeded());
        };

        let path = shellexpand::tilde(donors_file).to_string();
        let content = std::fs::read_to_string(&path).map_err(ConfigError::ReadError)?;
        let summary = DonationSummary::from_json(&content).map_err(ConfigError::DonorFeed)?;
        debug!("Loaded {} donors from {}", summary.donors.len(), path);
        Ok(summary)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("BASEDCALC_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("basedcalc").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory spec
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("basedcalc"))
}
