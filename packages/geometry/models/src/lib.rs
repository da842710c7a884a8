#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Service-area boundary and measurement types.
//!
//! These types describe the lawn boundaries a customer traces (or the
//! estimator synthesizes) and the square footage derived from them. They
//! carry no behavior beyond construction; all measurement lives in
//! `lawnquote_geometry`.

use serde::{Deserialize, Serialize};

/// A geographic point in WGS84 degrees.
///
/// Plain value type — freely copied, never owned by the core between
/// calls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl GeoPoint {
    /// Creates a point from latitude/longitude degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// A simple closed boundary ring.
///
/// The last point implicitly connects back to the first; callers never
/// repeat the first point at the end. A well-formed ring has at least 3
/// points — `lawnquote_geometry` rejects anything shorter. Rings are
/// *not* checked for self-intersection; a self-crossing boundary measures
/// to whatever the shoelace-style formula yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    /// Boundary vertices in ring order.
    pub points: Vec<GeoPoint>,
}

impl Polygon {
    /// Creates a polygon from a vertex ring.
    #[must_use]
    pub const fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Number of vertices in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the ring has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Derived measurement state for one editing session.
///
/// Recomputed synchronously after every boundary mutation; the entry at
/// index `i` of [`polygon_square_feet`](Self::polygon_square_feet) is the
/// footage of the session's polygon `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Sum of all polygon areas, in square feet.
    pub total_square_feet: u64,
    /// Per-polygon area breakdown, in session order.
    pub polygon_square_feet: Vec<u64>,
}
