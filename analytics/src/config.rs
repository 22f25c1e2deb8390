//! Configuration management for the farm analytics engine
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with FARM_ANALYTICS_ prefix

use std::collections::HashMap;

use config::{Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Crop used when a caller names none
pub const DEFAULT_CROP: &str = "rice";

/// Target GDD for the default crop (rice)
pub const DEFAULT_TARGET_GDD: Decimal = Decimal::from_parts(1400, 0, 0, false, 0);

/// Default number of memoized summaries
pub const DEFAULT_CACHE_CAPACITY: u64 = 1024;

/// Main engine configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyticsConfig {
    /// Current environment (development, production)
    pub environment: String,

    /// Harvest target configuration
    pub harvest: HarvestConfig,

    /// Summary cache configuration
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HarvestConfig {
    /// Crop whose target applies to unknown crop identifiers
    pub default_crop: String,

    /// Accumulated GDD at which each crop is harvest-ready
    pub targets: HashMap<String, Decimal>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached summaries
    pub capacity: u64,
}

impl AnalyticsConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> AnalyticsResult<Self> {
        dotenvy::dotenv().ok();
        let environment =
            std::env::var("FARM_ANALYTICS_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("harvest.default_crop", DEFAULT_CROP)?
            .set_default(&format!("harvest.targets.{}", DEFAULT_CROP), 1400)?
            .set_default("cache.capacity", DEFAULT_CACHE_CAPACITY as i64)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ANALYTICS_ prefix)
            .add_source(
                Environment::with_prefix("FARM_ANALYTICS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded: AnalyticsConfig = config.try_deserialize()?;
        loaded.validate()?;

        tracing::info!(
            environment = %loaded.environment,
            crops = loaded.harvest.targets.len(),
            "Analytics configuration loaded"
        );

        Ok(loaded)
    }

    /// Reject targets that would make readiness meaningless
    pub fn validate(&self) -> AnalyticsResult<()> {
        if let Some((crop, _)) = self
            .harvest
            .targets
            .iter()
            .find(|(_, target)| **target <= Decimal::ZERO)
        {
            return Err(AnalyticsError::Configuration(format!(
                "Target GDD for crop '{}' must be positive",
                crop
            )));
        }
        if self.cache.capacity == 0 {
            return Err(AnalyticsError::Configuration(
                "Cache capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl HarvestConfig {
    /// Target GDD for a crop, falling back to the default crop's entry
    pub fn target_gdd(&self, crop: &str) -> Decimal {
        let key = crop.trim().to_lowercase();
        if let Some(target) = self.targets.get(&key) {
            return *target;
        }

        tracing::debug!(crop = %crop, default_crop = %self.default_crop, "No GDD target for crop, using default");
        self.targets
            .get(&self.default_crop.trim().to_lowercase())
            .copied()
            .unwrap_or(DEFAULT_TARGET_GDD)
    }

    /// Add or replace a crop's target
    pub fn with_target(mut self, crop: &str, target_gdd: Decimal) -> Self {
        self.targets.insert(crop.trim().to_lowercase(), target_gdd);
        self
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            harvest: HarvestConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Default for HarvestConfig {
    fn default() -> Self {
        let mut targets = HashMap::new();
        targets.insert(DEFAULT_CROP.to_string(), DEFAULT_TARGET_GDD);
        Self {
            default_crop: DEFAULT_CROP.to_string(),
            targets,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_target_is_rice() {
        let harvest = HarvestConfig::default();
        assert_eq!(harvest.target_gdd("rice"), Decimal::from(1400));
        assert_eq!(harvest.target_gdd("Rice "), Decimal::from(1400));
    }

    #[test]
    fn unknown_crop_falls_back_to_default() {
        let harvest = HarvestConfig::default().with_target("Maize", Decimal::from(1500));
        assert_eq!(harvest.target_gdd("maize"), Decimal::from(1500));
        assert_eq!(harvest.target_gdd("quinoa"), Decimal::from(1400));
    }

    #[test]
    fn missing_default_entry_uses_constant() {
        let harvest = HarvestConfig {
            default_crop: "sorghum".to_string(),
            targets: HashMap::new(),
        };
        assert_eq!(harvest.target_gdd("anything"), DEFAULT_TARGET_GDD);
    }

    #[test]
    fn non_positive_target_is_rejected() {
        let mut config = AnalyticsConfig::default();
        config.harvest = config.harvest.with_target("wheat", Decimal::ZERO);
        assert!(matches!(
            config.validate(),
            Err(AnalyticsError::Configuration(_))
        ));
    }

    #[test]
    fn default_config_is_valid() {
        assert!(AnalyticsConfig::default().validate().is_ok());
    }
}
