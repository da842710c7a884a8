//! Polygon area measurement on a spherical earth.
//!
//! The measurement path is: boundary ring → `geo` polygon →
//! Chamberlain–Duquette spherical-excess area in square meters → square
//! feet, rounded to the nearest foot. Self-intersecting rings are not
//! detected; the shoelace-style result stands. That matches how the
//! measurement behaves in the map UI and is a documented limitation, not
//! a defect.

use geo::{ChamberlainDuquetteArea, Coord, LineString};
use lawnquote_geometry_models::Polygon;

use crate::GeometryError;

/// Square feet per square meter.
pub const SQ_METERS_TO_SQ_FEET: f64 = 10.7639;

/// Minimum number of vertices for a measurable ring.
pub const MIN_RING_POINTS: usize = 3;

/// Measures a polygon's enclosed area in square feet.
///
/// Degenerate rings (collinear points) measure to 0 rather than failing.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] if the ring has fewer than
/// [`MIN_RING_POINTS`] vertices.
pub fn polygon_square_feet(polygon: &Polygon) -> Result<u64, GeometryError> {
    if polygon.len() < MIN_RING_POINTS {
        return Err(GeometryError::InvalidGeometry {
            message: format!(
                "polygon requires at least {MIN_RING_POINTS} points, got {}",
                polygon.len()
            ),
        });
    }

    Ok(to_square_feet(square_meters(polygon)))
}

/// Spherical-excess area of a ring in square meters.
fn square_meters(polygon: &Polygon) -> f64 {
    let ring: Vec<Coord<f64>> = polygon
        .points
        .iter()
        .map(|p| Coord {
            x: p.longitude,
            y: p.latitude,
        })
        .collect();

    geo::Polygon::new(LineString::from(ring), vec![]).chamberlain_duquette_unsigned_area()
}

/// Converts square meters to whole square feet.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_square_feet(square_meters: f64) -> u64 {
    let square_feet = square_meters * SQ_METERS_TO_SQ_FEET;
    if square_feet.is_finite() && square_feet > 0.0 {
        square_feet.round() as u64
    } else {
        0
    }
}
