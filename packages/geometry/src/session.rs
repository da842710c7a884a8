//! Boundary editing session with synchronously derived totals.
//!
//! A [`ServiceAreaSession`] is owned by one active quoting flow: created
//! when the user starts defining a property boundary, reset when a new
//! address is selected. Every mutation (polygon add/remove, vertex
//! insert/move/delete) triggers a full O(n) recompute of the per-polygon
//! breakdown and total — vertex counts are interactive-scale, so there is
//! no incremental caching.

use lawnquote_geometry_models::{GeoPoint, Polygon, SessionSummary};

use crate::{
    GeometryError,
    area::{MIN_RING_POINTS, polygon_square_feet},
};

/// The polygons of one active editing flow plus their derived totals.
#[derive(Debug, Clone, Default)]
pub struct ServiceAreaSession {
    polygons: Vec<Polygon>,
    summary: SessionSummary,
}

impl ServiceAreaSession {
    /// Creates an empty session (total 0, no polygons).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session pre-populated with polygons.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if any ring has fewer
    /// than 3 points.
    pub fn with_polygons(polygons: Vec<Polygon>) -> Result<Self, GeometryError> {
        let mut session = Self::new();
        for polygon in polygons {
            session.add_polygon(polygon)?;
        }
        Ok(session)
    }

    /// The session's polygons, in insertion order.
    #[must_use]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// The current derived totals.
    #[must_use]
    pub const fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Total measured area across all polygons, in square feet.
    #[must_use]
    pub const fn total_square_feet(&self) -> u64 {
        self.summary.total_square_feet
    }

    /// Discards all polygons, e.g. when a new address is selected.
    pub fn reset(&mut self) {
        self.polygons.clear();
        self.recompute();
    }

    /// Adds a polygon and refreshes the totals.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if the ring has fewer
    /// than 3 points. Validating here keeps every stored ring measurable.
    pub fn add_polygon(&mut self, polygon: Polygon) -> Result<&SessionSummary, GeometryError> {
        if polygon.len() < MIN_RING_POINTS {
            return Err(GeometryError::InvalidGeometry {
                message: format!(
                    "polygon requires at least {MIN_RING_POINTS} points, got {}",
                    polygon.len()
                ),
            });
        }
        self.polygons.push(polygon);
        Ok(self.recompute())
    }

    /// Removes the polygon at `index` and refreshes the totals.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if `index` is out of
    /// range.
    pub fn remove_polygon(&mut self, index: usize) -> Result<&SessionSummary, GeometryError> {
        self.check_polygon_index(index)?;
        self.polygons.remove(index);
        Ok(self.recompute())
    }

    /// Inserts a vertex before position `vertex` of polygon `polygon`
    /// (`vertex == len` appends) and refreshes the totals.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if either index is out
    /// of range.
    pub fn insert_vertex(
        &mut self,
        polygon: usize,
        vertex: usize,
        point: GeoPoint,
    ) -> Result<&SessionSummary, GeometryError> {
        self.check_polygon_index(polygon)?;
        let ring = &mut self.polygons[polygon].points;
        if vertex > ring.len() {
            return Err(vertex_out_of_range(polygon, vertex, ring.len()));
        }
        ring.insert(vertex, point);
        Ok(self.recompute())
    }

    /// Moves the vertex at position `vertex` of polygon `polygon` to a
    /// new location and refreshes the totals.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if either index is out
    /// of range.
    pub fn move_vertex(
        &mut self,
        polygon: usize,
        vertex: usize,
        point: GeoPoint,
    ) -> Result<&SessionSummary, GeometryError> {
        self.check_polygon_index(polygon)?;
        let ring = &mut self.polygons[polygon].points;
        if vertex >= ring.len() {
            return Err(vertex_out_of_range(polygon, vertex, ring.len()));
        }
        ring[vertex] = point;
        Ok(self.recompute())
    }

    /// Deletes the vertex at position `vertex` of polygon `polygon` and
    /// refreshes the totals.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] if either index is out
    /// of range, or if the deletion would leave the ring with fewer than
    /// 3 points — remove the whole polygon instead.
    pub fn delete_vertex(
        &mut self,
        polygon: usize,
        vertex: usize,
    ) -> Result<&SessionSummary, GeometryError> {
        self.check_polygon_index(polygon)?;
        let ring = &mut self.polygons[polygon].points;
        if vertex >= ring.len() {
            return Err(vertex_out_of_range(polygon, vertex, ring.len()));
        }
        if ring.len() <= MIN_RING_POINTS {
            return Err(GeometryError::InvalidGeometry {
                message: format!(
                    "deleting a vertex would leave polygon {polygon} with fewer than \
                     {MIN_RING_POINTS} points"
                ),
            });
        }
        ring.remove(vertex);
        Ok(self.recompute())
    }

    /// Re-measures every polygon and refreshes the summary.
    ///
    /// Mutating methods call this automatically; it is public so a host
    /// that throttles live-drag updates can trigger a final refresh.
    pub fn recompute(&mut self) -> &SessionSummary {
        let per_polygon: Vec<u64> = self
            .polygons
            .iter()
            // Rings are validated before they enter the session, so a
            // measurement failure cannot occur here.
            .map(|p| polygon_square_feet(p).unwrap_or(0))
            .collect();

        self.summary = SessionSummary {
            total_square_feet: per_polygon.iter().sum(),
            polygon_square_feet: per_polygon,
        };

        log::debug!(
            "Session recomputed: {} polygon(s), {} sq ft",
            self.polygons.len(),
            self.summary.total_square_feet
        );

        &self.summary
    }

    fn check_polygon_index(&self, index: usize) -> Result<(), GeometryError> {
        if index >= self.polygons.len() {
            return Err(GeometryError::InvalidGeometry {
                message: format!(
                    "polygon index {index} out of range for session with {} polygon(s)",
                    self.polygons.len()
                ),
            });
        }
        Ok(())
    }
}

fn vertex_out_of_range(polygon: usize, vertex: usize, len: usize) -> GeometryError {
    GeometryError::InvalidGeometry {
        message: format!("vertex index {vertex} out of range for polygon {polygon} with {len} points"),
    }
}
