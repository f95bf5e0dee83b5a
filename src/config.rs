//! Geodesic Sphere Configuration and Builder
//!
//! This module provides configuration types for deterministic sphere generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeodesicError, Result};
use crate::generation::{DualClass, Interpolation, MAX_COMPLEXITY};
use crate::seed::SeedShape;

/// Configuration for geodesic and Goldberg sphere generation
///
/// Generation is a pure function of this configuration: the same configuration
/// always produces the identical mesh.
///
/// # Example
///
/// ```rust
/// use rust_geodesic_sphere::*;
///
/// let config = GeodesicConfigBuilder::new()
///     .shape(SeedShape::Octahedron)
///     .complexity(3)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// // Config is serializable (with "serde" feature)
/// # #[cfg(feature = "serde")]
/// # {
/// let json = serde_json::to_string(&config).unwrap();
/// let restored: GeodesicConfig = serde_json::from_str(&json).unwrap();
/// assert_eq!(config, restored);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicConfig {
    /// Seed polyhedron to subdivide
    pub shape: SeedShape,

    /// New vertices inserted on every seed edge
    ///
    /// - 0: the seed itself
    /// - n: every triangular seed face becomes `(n+1)²` triangles
    pub complexity: usize,

    /// Point placement along great-circle arcs
    pub interpolation: Interpolation,

    /// Dual vertex placement used when a Goldberg polyhedron is generated
    pub dual_class: DualClass,

    /// Sphere radius applied when exporting render buffers
    ///
    /// Generated meshes always live on the unit sphere.
    pub radius: f32,
}

impl Default for GeodesicConfig {
    fn default() -> Self {
        Self {
            shape: SeedShape::default(),
            complexity: 4,
            interpolation: Interpolation::default(),
            dual_class: DualClass::default(),
            radius: 1.0,
        }
    }
}

/// Builder for creating GeodesicConfig with validation
///
/// # Example
///
/// ```rust
/// use rust_geodesic_sphere::*;
///
/// // Use defaults
/// let config = GeodesicConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = GeodesicConfigBuilder::new()
///     .shape(SeedShape::Tetrahedron)
///     .complexity(6)
///     .unwrap()
///     .interpolation(Interpolation::ArcExact)
///     .dual_class(DualClass::Class2)
///     .radius(25.0)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct GeodesicConfigBuilder {
    config: GeodesicConfig,
}

impl GeodesicConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - shape: Icosahedron
    /// - complexity: 4
    /// - interpolation: Projected
    /// - dual_class: Class1
    /// - radius: 1.0
    pub fn new() -> Self {
        Self {
            config: GeodesicConfig::default(),
        }
    }

    /// Set the seed polyhedron
    pub fn shape(mut self, shape: SeedShape) -> Self {
        self.config.shape = shape;
        self
    }

    /// Set the number of new vertices per seed edge
    ///
    /// # Errors
    ///
    /// Returns `InvalidComplexity` if complexity > `MAX_COMPLEXITY`
    pub fn complexity(mut self, complexity: usize) -> Result<Self> {
        if complexity > MAX_COMPLEXITY {
            return Err(GeodesicError::InvalidComplexity {
                complexity,
                max: MAX_COMPLEXITY,
            });
        }
        self.config.complexity = complexity;
        Ok(self)
    }

    /// Set the interpolation policy
    pub fn interpolation(mut self, interpolation: Interpolation) -> Self {
        self.config.interpolation = interpolation;
        self
    }

    /// Set the dual class
    pub fn dual_class(mut self, dual_class: DualClass) -> Self {
        self.config.dual_class = dual_class;
        self
    }

    /// Set the export radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius is not a positive finite number
    pub fn radius(mut self, radius: f32) -> Result<Self> {
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GeodesicError::InvalidConfig(format!(
                "Radius must be positive and finite (got {})",
                radius
            )));
        }
        self.config.radius = radius;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<GeodesicConfig> {
        Ok(self.config)
    }
}

impl Default for GeodesicConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = GeodesicConfigBuilder::new().build().unwrap();
        assert_eq!(config.shape, SeedShape::Icosahedron);
        assert_eq!(config.complexity, 4);
        assert_eq!(config.interpolation, Interpolation::Projected);
        assert_eq!(config.dual_class, DualClass::Class1);
        assert_eq!(config.radius, 1.0);
        assert_eq!(config, GeodesicConfig::default());
    }

    #[test]
    fn test_builder_custom() {
        let config = GeodesicConfigBuilder::new()
            .shape(SeedShape::Cube)
            .complexity(7)
            .unwrap()
            .interpolation(Interpolation::ArcExact)
            .dual_class(DualClass::Class2)
            .radius(12.5)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.shape, SeedShape::Cube);
        assert_eq!(config.complexity, 7);
        assert_eq!(config.interpolation, Interpolation::ArcExact);
        assert_eq!(config.dual_class, DualClass::Class2);
        assert_eq!(config.radius, 12.5);
    }

    #[test]
    fn test_builder_complexity_limit() {
        assert!(GeodesicConfigBuilder::new().complexity(MAX_COMPLEXITY).is_ok());

        let result = GeodesicConfigBuilder::new().complexity(MAX_COMPLEXITY + 1);
        assert!(matches!(
            result,
            Err(GeodesicError::InvalidComplexity { .. })
        ));
    }

    #[test]
    fn test_builder_invalid_radius() {
        for radius in [0.0, -5.0, f32::NAN, f32::INFINITY] {
            let result = GeodesicConfigBuilder::new().radius(radius);
            assert!(matches!(result, Err(GeodesicError::InvalidConfig(_))));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = GeodesicConfigBuilder::new()
            .shape(SeedShape::Tetrahedron)
            .dual_class(DualClass::Class2)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: GeodesicConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
