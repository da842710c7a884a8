//! Rectangle synthesis primitives.
//!
//! Offsets and rotations happen in a local tangent frame: one degree of
//! latitude is a fixed 111,320 m, one degree of longitude shrinks by the
//! cosine of the latitude. At lawn scale (tens of meters) that keeps the
//! synthesized rectangles metrically true without projecting.

use lawnquote_geometry::area::SQ_METERS_TO_SQ_FEET;
use lawnquote_geometry_models::{GeoPoint, Polygon};

/// Meters per degree of latitude.
pub const METERS_PER_DEGREE_LATITUDE: f64 = 111_320.0;

/// Displaces a point by `distance_meters` along a compass bearing
/// (degrees, 0 = north, 90 = east).
#[must_use]
pub fn offset_point(center: GeoPoint, bearing_degrees: f64, distance_meters: f64) -> GeoPoint {
    let bearing = bearing_degrees.to_radians();
    let north_meters = distance_meters * bearing.cos();
    let east_meters = distance_meters * bearing.sin();

    GeoPoint::new(
        center.latitude + north_meters / METERS_PER_DEGREE_LATITUDE,
        center.longitude
            + east_meters / (METERS_PER_DEGREE_LATITUDE * center.latitude.to_radians().cos()),
    )
}

/// Rotates points about a center by `angle_degrees` (counterclockwise in
/// the local tangent frame).
#[must_use]
pub fn rotate_around_point(points: &[GeoPoint], center: GeoPoint, angle_degrees: f64) -> Vec<GeoPoint> {
    let cos_lat = center.latitude.to_radians().cos();
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();

    points
        .iter()
        .map(|p| {
            let east = (p.longitude - center.longitude) * cos_lat;
            let north = p.latitude - center.latitude;

            let rotated_east = east * cos_a - north * sin_a;
            let rotated_north = east * sin_a + north * cos_a;

            GeoPoint::new(
                center.latitude + rotated_north,
                center.longitude + rotated_east / cos_lat,
            )
        })
        .collect()
}

/// Synthesizes a rectangle of `area_square_feet` centered on `center`.
///
/// With aspect ratio `r`, height = sqrt(A / r) and width = r × height, so
/// `r > 1` yields a rectangle wider than it is deep. The corners are then
/// rotated about the center by `bearing_degrees` so the rectangle faces
/// the road.
#[must_use]
pub fn rectangle_polygon(
    center: GeoPoint,
    area_square_feet: f64,
    aspect_ratio: f64,
    bearing_degrees: f64,
) -> Polygon {
    let area_square_meters = area_square_feet / SQ_METERS_TO_SQ_FEET;
    let height_meters = (area_square_meters / aspect_ratio).sqrt();
    let width_meters = height_meters * aspect_ratio;

    let half_height_deg = height_meters / 2.0 / METERS_PER_DEGREE_LATITUDE;
    let half_width_deg =
        width_meters / 2.0 / (METERS_PER_DEGREE_LATITUDE * center.latitude.to_radians().cos());

    let corners = [
        GeoPoint::new(center.latitude - half_height_deg, center.longitude - half_width_deg),
        GeoPoint::new(center.latitude - half_height_deg, center.longitude + half_width_deg),
        GeoPoint::new(center.latitude + half_height_deg, center.longitude + half_width_deg),
        GeoPoint::new(center.latitude + half_height_deg, center.longitude - half_width_deg),
    ];

    Polygon::new(rotate_around_point(&corners, center, bearing_degrees))
}
