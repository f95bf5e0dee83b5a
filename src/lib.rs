//! Geodesic sphere and Goldberg polyhedron generation
//!
//! A standalone library for subdividing seed polyhedra onto the unit sphere and
//! building their hexagon-dominated duals, suitable for use with any game engine
//! (Bevy, Godot, etc.)
//!
//! # Quick Start
//!
//! ```rust
//! use rust_geodesic_sphere::*;
//!
//! // A geodesic sphere: 20 * 4² triangles
//! let sphere = subdivide(SeedShape::Icosahedron, 3).unwrap();
//! assert_eq!(sphere.triangle_count(), 320);
//!
//! // Its Goldberg dual: 12 pentagons plus hexagons
//! let config = GeodesicConfigBuilder::new()
//!     .shape(SeedShape::Icosahedron)
//!     .complexity(3).unwrap()
//!     .radius(10.0).unwrap()
//!     .build().unwrap();
//!
//! let polyhedron = GoldbergPolyhedron::generate(config).unwrap();
//! assert_eq!(polyhedron.faces_of_kind(FaceKind::Pentagon).count(), 12);
//!
//! // Generate mesh for rendering
//! let mesh = generate_mesh(&polyhedron, &BasicColorMapper);
//! println!("Generated {} triangles", mesh.triangle_count());
//! ```
//!
//! # Features
//!
//! - `spatial-index` (default): Enables O(log n) direction-to-face lookups using KD-tree
//! - `serde`: Enables serialization support for configuration, meshes and faces

// Modules
pub mod error;
pub mod config;
pub mod seed;
pub mod sphere;
pub mod face;
pub mod generation;
pub mod polyhedron;
pub mod mesh;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{GeodesicError, Result};
pub use config::{GeodesicConfig, GeodesicConfigBuilder};
pub use seed::{SeedFaces, SeedShape, SeedTable};
pub use sphere::SphereMesh;
pub use face::{FaceKind, FaceOrigin, GoldbergFace};
pub use generation::{
    arc_angle, dualize, dualize_mesh, dualize_with, generate_dual, generate_geodesic, interpolate,
    rotate_about_axis, subdivide, subdivide_with, DualClass, DualMesh, Interpolation, MAX_COMPLEXITY,
};
pub use polyhedron::GoldbergPolyhedron;
pub use mesh::{MeshData, generate_mesh, generate_geodesic_mesh, ColorMapper, BasicColorMapper, CustomColorMapper, FaceColor};

#[cfg(feature = "spatial-index")]
pub use spatial::SpatialIndex;

// Re-export glam::Vec3 for convenience
pub use glam::Vec3;
