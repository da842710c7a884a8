#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Property classification and lawn auto-estimation types.
//!
//! The auto-estimator synthesizes a plausible lawn boundary from a
//! geocoded address point alone. These types carry its inputs (property
//! classification, heuristic policy constants) and its output (the
//! synthesized polygons plus target and measured footage).

use lawnquote_geometry_models::{Polygon, SessionSummary};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Classification of the property being quoted.
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
pub enum PropertyClass {
    /// Single-family residential lot.
    Residential,
    /// Commercial property (storefront, office, HOA common area).
    Commercial,
}

/// Compass bearing from the estimated front of a lot toward the street,
/// in degrees, normalized to `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoadOrientation(f64);

impl RoadOrientation {
    /// Street to the north of the lot.
    pub const NORTH: Self = Self(0.0);
    /// Street to the east.
    pub const EAST: Self = Self(90.0);
    /// Street to the south. Absent any signal, lots are assumed to face
    /// south toward the road — a documented assumption, not a geocoded
    /// fact.
    pub const SOUTH: Self = Self(180.0);
    /// Street to the west.
    pub const WEST: Self = Self(270.0);

    /// Creates an orientation, normalizing the angle into `[0, 360)`.
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        Self(degrees.rem_euclid(360.0))
    }

    /// The bearing in degrees.
    #[must_use]
    pub const fn degrees(self) -> f64 {
        self.0
    }
}

impl Default for RoadOrientation {
    fn default() -> Self {
        Self::SOUTH
    }
}

/// Policy constants for the auto-estimation heuristics.
///
/// Every value is overridable — the rotation/offset math never reads a
/// hard constant — but the defaults are the ones the quoting flow ships
/// with. Partial TOML/JSON overrides deserialize against the same
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimatorConfig {
    /// Default lawn area for residential lots, in square feet.
    pub residential_default_sqft: f64,
    /// Default lawn area for commercial properties, in square feet.
    pub commercial_default_sqft: f64,
    /// Residential targets above this get a front/back yard split.
    pub multi_polygon_threshold_sqft: f64,
    /// Share of a split target assigned to the front yard.
    pub front_yard_fraction: f64,
    /// Share of a split target assigned to the back yard.
    pub back_yard_fraction: f64,
    /// Width-to-height ratio for front yards (wide and shallow).
    pub front_aspect_ratio: f64,
    /// Width-to-height ratio for back yards (closer to square).
    pub back_aspect_ratio: f64,
    /// Width-to-height ratio for single-polygon estimates.
    pub single_aspect_ratio: f64,
    /// Assumed lot depth in meters, used to separate the front and back
    /// yard centers along the road axis.
    pub lot_depth_meters: f64,
    /// Road orientation used when the street name carries no directional
    /// signal.
    pub default_road_orientation: RoadOrientation,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            residential_default_sqft: 8_000.0,
            commercial_default_sqft: 15_000.0,
            multi_polygon_threshold_sqft: 5_000.0,
            front_yard_fraction: 0.30,
            back_yard_fraction: 0.70,
            front_aspect_ratio: 2.5,
            back_aspect_ratio: 1.2,
            single_aspect_ratio: 1.3,
            lot_depth_meters: 40.0,
            default_road_orientation: RoadOrientation::SOUTH,
        }
    }
}

impl EstimatorConfig {
    /// The default target area for a property classification.
    #[must_use]
    pub const fn default_area_for(&self, class: PropertyClass) -> f64 {
        match class {
            PropertyClass::Residential => self.residential_default_sqft,
            PropertyClass::Commercial => self.commercial_default_sqft,
        }
    }
}

/// The outcome of one auto-estimation.
///
/// `measured` is what the area calculator reports over the synthesized
/// polygons; rectangle rounding means it can differ slightly from
/// `target_square_feet`, and that difference is expected, not corrected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LawnEstimate {
    /// Classification the estimate was produced for.
    pub property_class: PropertyClass,
    /// Road orientation the synthesis used.
    pub road_orientation: RoadOrientation,
    /// Target area looked up from the defaults table, in square feet.
    pub target_square_feet: f64,
    /// Synthesized boundary polygons (front yard first when split).
    pub polygons: Vec<Polygon>,
    /// Measured footage of the synthesized polygons.
    pub measured: SessionSummary,
}
