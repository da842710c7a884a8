#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Spherical service-area measurement and boundary editing sessions.
//!
//! Converts customer-traced (or estimator-synthesized) lawn boundaries
//! into square footage. Area is measured on a sphere of mean earth radius
//! using the Chamberlain–Duquette spherical-excess algorithm from the
//! `geo` crate, then converted to square feet.
//!
//! [`session::ServiceAreaSession`] holds the polygons of one active
//! editing flow and keeps the derived totals in sync after every
//! mutation. Sessions are single-writer: one user editing one boundary at
//! a time, no locking, no I/O.

pub mod area;
pub mod session;

use thiserror::Error;

/// Errors that can occur during geometry operations.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// A polygon or edit was structurally malformed (too few points,
    /// out-of-range index).
    #[error("Invalid geometry: {message}")]
    InvalidGeometry {
        /// Description of what went wrong.
        message: String,
    },
}
