use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{StoreError, StoreResult};

pub const PLACEHOLDER_IMAGE_ENV: &str = "MARBLE_ADMIN_PLACEHOLDER_IMAGE";
pub const STOCK_POLICY_ENV: &str = "MARBLE_ADMIN_STOCK_POLICY";

/// How a product's status relates to its stock levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatusPolicy {
    /// Status is whatever was last set by hand.
    #[default]
    Manual,
    /// Status is recomputed from `stock` and `minStock` on every save.
    Derived,
}

impl std::str::FromStr for StockStatusPolicy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manual" => Ok(StockStatusPolicy::Manual),
            "derived" => Ok(StockStatusPolicy::Derived),
            other => Err(StoreError::Config(format!(
                "unknown stock status policy {other:?} (expected \"manual\" or \"derived\")"
            ))),
        }
    }
}

fn default_placeholder_image() -> String {
    "/placeholder.svg".to_string()
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

fn default_time_formats() -> Vec<String> {
    vec!["%I:%M %p".to_string(), "%H:%M".to_string()]
}

fn default_activity_capacity() -> usize {
    20
}

/// Dashboard settings, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Image shown when a record has no image URL.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    #[serde(default)]
    pub stock_status_policy: StockStatusPolicy,

    /// chrono formats tried, in order, when reading appointment times.
    #[serde(default = "default_time_formats")]
    pub calendar_time_formats: Vec<String>,

    /// Number of entries the recent-activity feed keeps.
    #[serde(default = "default_activity_capacity")]
    pub activity_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
            currency_symbol: default_currency_symbol(),
            stock_status_policy: StockStatusPolicy::default(),
            calendar_time_formats: default_time_formats(),
            activity_capacity: default_activity_capacity(),
        }
    }
}

impl DashboardConfig {
    /// Reads `path`, falling back to defaults when the file does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: DashboardConfig = toml::from_str(&content)?;
        config.check()?;
        log::info!("loaded dashboard config from {}", path.display());
        Ok(config)
    }

    /// Applies `MARBLE_ADMIN_*` environment overrides on top of `self`.
    pub fn with_env_overrides(mut self) -> StoreResult<Self> {
        if let Ok(image) = std::env::var(PLACEHOLDER_IMAGE_ENV) {
            self.placeholder_image = image;
        }
        if let Ok(policy) = std::env::var(STOCK_POLICY_ENV) {
            self.stock_status_policy = policy.parse()?;
        }
        self.check()?;
        Ok(self)
    }

    pub fn to_toml(&self) -> StoreResult<String> {
        toml::to_string_pretty(self).map_err(|e| StoreError::Config(e.to_string()))
    }

    fn check(&self) -> StoreResult<()> {
        if self.calendar_time_formats.is_empty() {
            return Err(StoreError::Config(
                "calendar_time_formats must list at least one format".to_string(),
            ));
        }
        if self.activity_capacity == 0 {
            return Err(StoreError::Config(
                "activity_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
