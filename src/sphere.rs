//! Triangulated unit-sphere mesh
//!
//! The in-memory mesh produced by subdivision and dual construction. It stores
//! positions and index triples only; adjacency is re-derived when needed.

use glam::Vec3;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Vertices on the unit sphere plus triangles indexing into them
///
/// Triangles are wound counter-clockwise when seen from outside the sphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SphereMesh {
    /// Unit-length vertex positions; a vertex's index is its position in this list
    pub vertices: Vec<Vec3>,
    /// Triangle corner indices into `vertices`
    pub triangles: Vec<[u32; 3]>,
}

impl SphereMesh {
    /// Create a mesh from vertices and triangles
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Count distinct undirected edges
    pub fn edge_count(&self) -> usize {
        let mut edges = HashSet::with_capacity(self.triangles.len() * 3 / 2);
        for tri in &self.triangles {
            for k in 0..3 {
                let a = tri[k];
                let b = tri[(k + 1) % 3];
                edges.insert((a.min(b), a.max(b)));
            }
        }
        edges.len()
    }

    /// `V - E + F`; 2 for any closed genus-0 mesh
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.triangle_count() as i64
    }

    /// Sum of signed tetrahedron volumes spanned by the origin and every triangle
    ///
    /// Positive when all triangles face outward.
    pub fn signed_volume(&self) -> f32 {
        self.triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
                a.dot(b.cross(c)) / 6.0
            })
            .sum()
    }

    /// Flatten triangles into a single index buffer
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn octahedron() -> SphereMesh {
        SphereMesh::new(
            vec![Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z],
            vec![
                [0, 2, 4],
                [2, 1, 4],
                [1, 3, 4],
                [3, 0, 4],
                [2, 0, 5],
                [1, 2, 5],
                [3, 1, 5],
                [0, 3, 5],
            ],
        )
    }

    #[test]
    fn test_counts() {
        let mesh = octahedron();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.edge_count(), 12);
        assert_eq!(mesh.euler_characteristic(), 2);
        assert_eq!(mesh.indices().len(), 24);
        assert!(!mesh.is_empty());
        assert!(SphereMesh::default().is_empty());
    }

    #[test]
    fn test_signed_volume_sign_follows_winding() {
        let mesh = octahedron();
        // Regular octahedron inscribed in the unit sphere has volume 4/3
        assert!((mesh.signed_volume() - 4.0 / 3.0).abs() < 1e-5);

        let flipped = SphereMesh::new(
            mesh.vertices.clone(),
            mesh.triangles.iter().map(|&[a, b, c]| [a, c, b]).collect(),
        );
        assert!(flipped.signed_volume() < 0.0);
    }
}
