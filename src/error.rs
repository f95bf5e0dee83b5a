//! Error types for geodesic and Goldberg sphere generation

use thiserror::Error;

use crate::seed::SeedShape;

/// Errors that can occur during sphere generation
///
/// Generation either returns a complete mesh or one of these errors; partially
/// built meshes are never exposed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeodesicError {
    /// Complexity is larger than the supported maximum
    #[error("invalid complexity: {complexity} (must be <= {max})")]
    InvalidComplexity {
        /// Requested complexity
        complexity: usize,
        /// Largest accepted complexity
        max: usize,
    },

    /// No dual mapping exists for this seed shape
    #[error("unsupported seed for dual construction: {0:?}")]
    UnsupportedSeed(SeedShape),

    /// Internal invariant violated: the mesh is not a closed, consistently wound manifold
    #[error("inconsistent mesh: {0}")]
    InconsistentMesh(String),

    /// Interpolation endpoints are coincident or antipodal, so the arc is undefined
    #[error("degenerate arc: endpoints are coincident or antipodal")]
    DegenerateArc,

    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for geodesic operations
pub type Result<T> = std::result::Result<T, GeodesicError>;
