//! Render buffer export
//!
//! Generates engine-agnostic mesh data from geodesic spheres and Goldberg polyhedra.

mod colors;

pub use colors::{BasicColorMapper, ColorMapper, CustomColorMapper, FaceColor};

use crate::face::{FaceKind, GoldbergFace};
use crate::polyhedron::GoldbergPolyhedron;
use crate::sphere::SphereMesh;
use glam::Vec3;

/// Engine-agnostic mesh data output
///
/// Contains raw vertex data suitable for any rendering engine:
/// - Bevy: Convert to `Mesh` with attributes
/// - Godot: Convert to `ArrayMesh`
/// - wgpu: Use directly as vertex buffers
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions, scaled to the sphere radius
    pub positions: Vec<[f32; 3]>,
    /// Vertex normals (unit direction from sphere center)
    pub normals: Vec<[f32; 3]>,
    /// Vertex colors (RGBA)
    pub colors: Vec<[f32; 4]>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    fn push_vertex(&mut self, unit: Vec3, radius: f32, color: FaceColor) {
        self.positions.push((unit * radius).to_array());
        self.normals.push(unit.to_array());
        self.colors.push(color);
    }
}

/// Generate flat-colored mesh data from a Goldberg polyhedron
///
/// Every face gets its own center and corner vertices so faces can be colored
/// independently; vertices are scaled by the configured radius.
///
/// # Example
///
/// ```rust
/// use rust_geodesic_sphere::*;
///
/// let polyhedron = GoldbergPolyhedron::generate(GeodesicConfig::default()).unwrap();
/// let mesh = generate_mesh(&polyhedron, &BasicColorMapper);
/// println!("Generated {} triangles", mesh.triangle_count());
/// ```
pub fn generate_mesh<C>(polyhedron: &GoldbergPolyhedron, color_mapper: &C) -> MeshData
where
    C: ColorMapper<FaceKind>,
{
    let mut mesh = MeshData::default();
    let radius = polyhedron.radius();

    for face in polyhedron.faces() {
        let color = color_mapper.map_color(&face.kind);
        triangulate_face(face, radius, color, &mut mesh);
    }

    mesh
}

/// Generate uniformly colored mesh data from a subdivided sphere
///
/// Vertices are shared between triangles, as in the source mesh.
pub fn generate_geodesic_mesh(sphere: &SphereMesh, radius: f32, color: FaceColor) -> MeshData {
    let mut mesh = MeshData::default();

    for &vertex in &sphere.vertices {
        mesh.push_vertex(vertex, radius, color);
    }
    mesh.indices = sphere.indices();

    mesh
}

/// Triangulate a single face as a triangle fan
fn triangulate_face(face: &GoldbergFace, radius: f32, color: FaceColor, mesh: &mut MeshData) {
    let base_idx = mesh.positions.len() as u32;

    mesh.push_vertex(face.center, radius, color);
    for &corner in &face.corners {
        mesh.push_vertex(corner, radius, color);
    }

    let corner_count = face.corners.len();
    for i in 0..corner_count {
        let next_i = (i + 1) % corner_count;
        mesh.indices.push(base_idx); // Center
        mesh.indices.push(base_idx + 1 + i as u32);
        mesh.indices.push(base_idx + 1 + next_i as u32);
    }
}
