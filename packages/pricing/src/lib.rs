#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Flat and tiered blended-rate price calculation for quotes.
//!
//! Pure data transforms: a total area plus a pricing configuration in, a
//! [`PricingResult`](lawnquote_pricing_models::PricingResult) out. The
//! tiered path walks rate brackets the way progressive tax brackets work,
//! so larger lawns get a lower blended rate on the excess footage, never
//! on the whole area. Results are immutable; callers persist them as
//! snapshots so historical quotes survive configuration changes.

pub mod calc;
pub mod validate;

use lawnquote_pricing_models::{PricingTier, TierSetReport};
use thiserror::Error;

/// Errors that can occur during price calculation.
#[derive(Debug, Error)]
pub enum PricingError {
    /// The tier configuration failed validation; the report carries
    /// every violation, not just the first.
    #[error("Invalid pricing configuration: {}", .report.messages().join("; "))]
    InvalidConfiguration {
        /// The complete validation report.
        report: TierSetReport,
    },
}

/// The tier table quoting flows ship with: a declining blended rate with
/// volume, uncapped past 20,000 sq ft.
#[must_use]
pub fn default_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier::bounded(5_000.0, 0.012),
        PricingTier::bounded(20_000.0, 0.008),
        PricingTier::unbounded(0.005),
    ]
}
