//! Core geodesic generation algorithms
//!
//! Subdivides seed polyhedra onto the unit sphere and builds their Goldberg
//! duals from the resulting triangle lists.

mod adjacency;
mod dual;
mod interpolation;
mod subdivision;

pub use adjacency::{AdjacencyIndex, Corner};
pub use dual::{dualize, dualize_mesh, dualize_with, DualClass, DualMesh, RawFace};
pub use interpolation::{arc_angle, interpolate, rotate_about_axis, Interpolation};
pub use subdivision::{subdivide, subdivide_with, MAX_COMPLEXITY};

use crate::config::GeodesicConfig;
use crate::error::Result;
use crate::sphere::SphereMesh;

/// Subdivide the configured seed shape
///
/// Uses the configuration's shape, complexity and interpolation policy.
pub fn generate_geodesic(config: &GeodesicConfig) -> Result<SphereMesh> {
    subdivide_with(config.shape, config.complexity, config.interpolation)
}

/// Subdivide and dualize the configured seed shape
///
/// # Errors
///
/// Returns `UnsupportedSeed` if the configured shape is the cube.
pub fn generate_dual(config: &GeodesicConfig) -> Result<DualMesh> {
    dualize_with(
        config.shape,
        config.dual_class,
        config.complexity,
        config.interpolation,
    )
}
