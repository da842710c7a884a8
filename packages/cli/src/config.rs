//! Pricing configuration loading.
//!
//! The active tier table, flat rate, and per-visit minimum normally live
//! in account settings; the CLI stands in for that store with a TOML
//! file. The shipped default is embedded at compile time and used when
//! no `--config` is given.

use std::path::Path;

use lawnquote_pricing_models::PricingTier;
use serde::Deserialize;

/// The embedded default configuration.
const DEFAULT_PRICING_TOML: &str = include_str!("../config/default_pricing.toml");

/// One tier as written in a configuration file.
#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    /// Cumulative upper bound in square feet; omit for the final,
    /// uncapped tier.
    pub up_to_square_feet: Option<f64>,
    /// Price per square foot within this bracket, in dollars.
    pub rate_per_square_foot: f64,
}

/// Pricing configuration loaded from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Whether the tiered path is active; `false` falls back to
    /// `flat_rate`.
    #[serde(default = "default_true")]
    pub use_tiered: bool,
    /// Flat rate in dollars per square foot.
    pub flat_rate: Option<f64>,
    /// Per-visit minimum price in dollars.
    pub minimum: Option<f64>,
    /// The tier table.
    #[serde(default)]
    pub tiers: Vec<TierConfig>,
}

const fn default_true() -> bool {
    true
}

impl PricingConfig {
    /// Loads a configuration file, or the embedded default when `path`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid
    /// pricing TOML.
    pub fn load(path: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)?;
                Ok(toml::de::from_str(&raw)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// The configured tier table as pricing tiers.
    #[must_use]
    pub fn pricing_tiers(&self) -> Vec<PricingTier> {
        self.tiers
            .iter()
            .map(|tier| PricingTier {
                up_to_square_feet: tier.up_to_square_feet,
                rate_per_square_foot: tier.rate_per_square_foot,
            })
            .collect()
    }
}

impl Default for PricingConfig {
    /// The embedded default configuration.
    ///
    /// Malformed embedded TOML is unreachable; the default config ships
    /// inside the binary and is covered by tests.
    fn default() -> Self {
        toml::de::from_str(DEFAULT_PRICING_TOML)
            .unwrap_or_else(|e| panic!("Failed to parse embedded pricing config: {e}"))
    }
}
