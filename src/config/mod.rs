use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::{CashflowError, Result},
    forecast::MetricsConfig,
    utils::{app_data_dir, ensure_dir, write_atomic},
};

const CONFIG_FILE: &str = "config.json";

/// User settings for rendering forecasts and tuning the metric heuristics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_opening_balance: Option<f64>,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency: "USD".into(),
            default_opening_balance: None,
            metrics: MetricsConfig::default(),
        }
    }
}

impl Config {
    /// Rejects settings that would make the runway heuristic meaningless.
    pub fn validate(&self) -> Result<()> {
        let multiplier = self.metrics.runway_revenue_multiplier;
        if !multiplier.is_finite() || multiplier < 0.0 {
            return Err(CashflowError::Config(format!(
                "runway_revenue_multiplier must be a non-negative number, got {}",
                multiplier
            )));
        }
        if self.metrics.fallback_runway_months < 0 {
            return Err(CashflowError::Config(format!(
                "fallback_runway_months must not be negative, got {}",
                self.metrics.fallback_runway_months
            )));
        }
        if let Some(balance) = self.default_opening_balance {
            if !balance.is_finite() {
                return Err(CashflowError::Config(
                    "default_opening_balance must be finite".into(),
                ));
            }
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Loads the stored settings, or the defaults when nothing is stored yet.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        tracing::debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "saved config");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
