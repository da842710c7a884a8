#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Tiered pricing configuration, result, and snapshot types.
//!
//! A quote's price comes from either a flat rate or a tax-bracket-style
//! walk over area tiers. These types describe the configuration (tiers,
//! rates), the computed result with its itemized breakdown, and the
//! immutable snapshot stored alongside a quote so that later
//! configuration changes never retroactively alter historical prices.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// One pricing bracket: a rate applied to the area up to a bound.
///
/// A tier with no upper bound covers everything beyond the previous
/// tier; a valid tier set has exactly one, sorted last.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    /// Cumulative upper bound in square feet; `None` means unbounded.
    pub up_to_square_feet: Option<f64>,
    /// Price per square foot within this bracket, in dollars.
    pub rate_per_square_foot: f64,
}

impl PricingTier {
    /// A bracket capped at `up_to_square_feet`.
    #[must_use]
    pub const fn bounded(up_to_square_feet: f64, rate_per_square_foot: f64) -> Self {
        Self {
            up_to_square_feet: Some(up_to_square_feet),
            rate_per_square_foot,
        }
    }

    /// The final, uncapped bracket.
    #[must_use]
    pub const fn unbounded(rate_per_square_foot: f64) -> Self {
        Self {
            up_to_square_feet: None,
            rate_per_square_foot,
        }
    }

    /// Returns `true` if this tier has no upper bound.
    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.up_to_square_feet.is_none()
    }
}

/// Which pricing path produced a quote.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PricingMode {
    /// One rate applied to the whole area.
    Flat,
    /// Bracketed blended rate.
    Tiered,
}

/// One line of an itemized price breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierLine {
    /// Start of the covered range, in square feet.
    pub range_start: f64,
    /// End of the covered range; `None` for the unbounded bracket.
    pub range_end: Option<f64>,
    /// Square footage charged on this line.
    pub square_feet: f64,
    /// Rate applied, in dollars per square foot (0 for uplift lines).
    pub rate: f64,
    /// Dollar subtotal for this line.
    pub subtotal: f64,
    /// Human-readable description for quote display.
    pub label: String,
}

/// The computed price for a quote. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult {
    /// Final price in dollars, rounded to the cent.
    pub total_price: f64,
    /// Itemized per-bracket breakdown (plus an uplift line when the
    /// minimum was applied).
    pub breakdown: Vec<TierLine>,
    /// Whether the per-visit minimum replaced the computed price.
    pub minimum_applied: bool,
}

/// The exact pricing inputs and result persisted with a quote.
///
/// Stored verbatim by the quote record so re-running the calculator with
/// a changed configuration never alters an already-priced quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingSnapshot {
    /// Which pricing path was used.
    pub mode: PricingMode,
    /// The area that was priced, in square feet.
    pub area_square_feet: f64,
    /// The tier table in effect (tiered mode only).
    pub tiers: Option<Vec<PricingTier>>,
    /// The flat rate in effect (flat mode only).
    pub flat_rate: Option<f64>,
    /// The per-visit minimum in effect, if any.
    pub minimum: Option<f64>,
    /// The computed result.
    pub result: PricingResult,
}

/// Informational flat-vs-tiered comparison for display; never on the
/// pricing-of-record path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatComparison {
    /// Price under the tiered table.
    pub tiered_price: f64,
    /// Price at the flat rate.
    pub flat_price: f64,
    /// `flat_price - tiered_price` (negative when tiered costs more).
    pub savings: f64,
    /// Savings as a percentage of the flat price (0 when flat is 0).
    pub savings_percent: f64,
}

/// A single tier-set configuration violation.
///
/// `tier` numbers are 1-based positions in the bound-sorted order, which
/// is how the settings UI lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TierSetViolation {
    /// The tier set has no tiers at all.
    #[error("At least one pricing tier is required")]
    Empty,

    /// A tier's rate is zero, negative, or not a finite number.
    #[error("Tier {tier}: rate per square foot must be a positive number")]
    NonPositiveRate {
        /// 1-based tier position.
        tier: usize,
    },

    /// A bounded tier's upper bound is zero, negative, or not finite.
    #[error("Tier {tier}: upper bound must be a positive number")]
    NonPositiveBound {
        /// 1-based tier position.
        tier: usize,
    },

    /// A bounded tier's upper bound does not strictly exceed the
    /// previous tier's.
    #[error("Tier {tier}: upper bound must be greater than the previous tier's")]
    NonIncreasingBound {
        /// 1-based tier position.
        tier: usize,
    },

    /// More than one tier has no upper bound.
    #[error("Only one tier may be unbounded")]
    MultipleUnbounded,

    /// No tier is unbounded, so arbitrarily large areas would be
    /// uncovered.
    #[error("The last tier must be unbounded so any area is covered")]
    NoUnbounded,
}

/// The complete outcome of validating a tier set.
///
/// Collects every violation, never just the first, so a settings UI can
/// surface all configuration problems at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierSetReport {
    /// All violations found, in detection order.
    pub violations: Vec<TierSetViolation>,
}

impl TierSetReport {
    /// Returns `true` if no violations were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation messages for display.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use super::*;

    #[test]
    fn pricing_mode_round_trips_through_strings() {
        assert_eq!(PricingMode::Tiered.to_string(), "tiered");
        assert_eq!(PricingMode::from_str("flat").unwrap(), PricingMode::Flat);
    }

    #[test]
    fn tier_constructors() {
        assert!(PricingTier::unbounded(0.005).is_unbounded());
        assert!(!PricingTier::bounded(5_000.0, 0.012).is_unbounded());
    }

    #[test]
    fn snapshot_serializes_to_camel_case() {
        let snapshot = PricingSnapshot {
            mode: PricingMode::Flat,
            area_square_feet: 3_000.0,
            tiers: None,
            flat_rate: Some(0.01),
            minimum: None,
            result: PricingResult {
                total_price: 30.0,
                breakdown: vec![],
                minimum_applied: false,
            },
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"areaSquareFeet\":3000.0"));
        assert!(json.contains("\"flatRate\":0.01"));
        assert!(json.contains("\"mode\":\"flat\""));
    }

    #[test]
    fn violations_have_distinct_messages() {
        let messages = [
            TierSetViolation::Empty.to_string(),
            TierSetViolation::NonPositiveRate { tier: 1 }.to_string(),
            TierSetViolation::NonPositiveBound { tier: 1 }.to_string(),
            TierSetViolation::NonIncreasingBound { tier: 2 }.to_string(),
            TierSetViolation::MultipleUnbounded.to_string(),
            TierSetViolation::NoUnbounded.to_string(),
        ];

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_report_is_valid() {
        assert!(TierSetReport::default().is_valid());
        assert!(TierSetReport::default().messages().is_empty());
    }
}
