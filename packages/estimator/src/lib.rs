#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Heuristic lawn boundary synthesis from a geocoded address point.
//!
//! Given only a geocoded point and a property classification, produces
//! one or two rectangular polygons approximating the lawn, so a customer
//! gets a starting boundary without tracing anything:
//!
//! 1. Look up the target area for the classification in
//!    [`EstimatorConfig`].
//! 2. Residential lots above the split threshold get a front/back yard
//!    decomposition (30/70 by default); everything else is one polygon.
//! 3. Infer which way the street lies from directional tokens in the
//!    street name ([`bearing`]); default to a south-facing lot.
//! 4. Offset the yard centers along the road axis and synthesize rotated
//!    rectangles of the required areas ([`synth`]).
//!
//! The estimator is deterministic: identical inputs produce identical
//! polygons. Unparseable street strings degrade silently to the default
//! orientation — the only hard failure is a missing geocoded point.

pub mod bearing;
pub mod synth;

use lawnquote_estimator_models::{EstimatorConfig, LawnEstimate, PropertyClass};
use lawnquote_geometry::{GeometryError, session::ServiceAreaSession};
use lawnquote_geometry_models::{GeoPoint, Polygon};
use thiserror::Error;

/// Errors that can occur during lawn estimation.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Auto-estimation was requested before the address was geocoded.
    #[error("Missing geometry: no geocoded point for the address")]
    MissingGeometry,

    /// A synthesized polygon failed measurement.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Synthesizes a lawn estimate for a geocoded address.
///
/// `street` is the address's street-name component, used only for the
/// road-direction heuristic; pass `None` when unavailable.
///
/// # Errors
///
/// Returns [`EstimateError::MissingGeometry`] if `point` is `None`.
pub fn estimate(
    point: Option<GeoPoint>,
    class: PropertyClass,
    street: Option<&str>,
    config: &EstimatorConfig,
) -> Result<LawnEstimate, EstimateError> {
    let center = point.ok_or(EstimateError::MissingGeometry)?;

    let target = config.default_area_for(class);
    let orientation = bearing::road_orientation(street, config);

    let polygons = if class == PropertyClass::Residential
        && target > config.multi_polygon_threshold_sqft
    {
        log::debug!(
            "Splitting {target} sq ft residential target into front/back yards \
             (road bearing {}\u{b0})",
            orientation.degrees()
        );
        split_yards(center, target, orientation.degrees(), config)
    } else {
        log::debug!(
            "Single-polygon estimate for {target} sq ft {class} target \
             (road bearing {}\u{b0})",
            orientation.degrees()
        );
        vec![synth::rectangle_polygon(
            center,
            target,
            config.single_aspect_ratio,
            orientation.degrees(),
        )]
    };

    let session = ServiceAreaSession::with_polygons(polygons)?;

    Ok(LawnEstimate {
        property_class: class,
        road_orientation: orientation,
        target_square_feet: target,
        polygons: session.polygons().to_vec(),
        measured: session.summary().clone(),
    })
}

/// Seeds a boundary editing session from an estimate, so the customer
/// can refine the synthesized polygons by hand.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if the estimate's polygons
/// are malformed (they never are when produced by [`estimate`]).
pub fn seed_session(estimate: &LawnEstimate) -> Result<ServiceAreaSession, GeometryError> {
    ServiceAreaSession::with_polygons(estimate.polygons.clone())
}

/// Front/back yard decomposition for larger residential lots.
///
/// The geocoded point is taken as the lot center; the front yard center
/// sits a quarter lot depth toward the road, the back yard center a
/// quarter lot depth away from it.
fn split_yards(
    center: GeoPoint,
    target: f64,
    road_bearing: f64,
    config: &EstimatorConfig,
) -> Vec<Polygon> {
    let offset = config.lot_depth_meters / 4.0;

    let front_center = synth::offset_point(center, road_bearing, offset);
    let back_center = synth::offset_point(center, road_bearing + 180.0, offset);

    vec![
        synth::rectangle_polygon(
            front_center,
            target * config.front_yard_fraction,
            config.front_aspect_ratio,
            road_bearing,
        ),
        synth::rectangle_polygon(
            back_center,
            target * config.back_yard_fraction,
            config.back_aspect_ratio,
            road_bearing,
        ),
    ]
}
