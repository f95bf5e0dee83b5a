//! Vertex-corner adjacency index
//!
//! A [`SphereMesh`] stores no adjacency, so the rotational order of triangles
//! around each vertex is rebuilt from winding order alone. The index is built in
//! one pass over the triangles; each ring walk then only touches the corners of
//! a single vertex.

use tracing::warn;

use crate::error::{GeodesicError, Result};
use crate::sphere::SphereMesh;

/// One occurrence of a vertex as a triangle corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    /// Triangle index
    pub face: usize,
    /// Corner immediately before the pivot vertex in the triangle's winding
    pub previous: usize,
    /// Corner immediately after the pivot vertex in the triangle's winding
    pub next: usize,
}

/// Map from vertex index to every triangle corner at that vertex
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    corners: Vec<Vec<Corner>>,
}

impl AdjacencyIndex {
    /// Build the index in one pass over the triangles
    pub fn build(mesh: &SphereMesh) -> Self {
        let mut corners = vec![Vec::with_capacity(6); mesh.vertex_count()];

        for (face, tri) in mesh.triangles.iter().enumerate() {
            let [a, b, c] = tri.map(|i| i as usize);
            corners[a].push(Corner {
                face,
                previous: c,
                next: b,
            });
            corners[b].push(Corner {
                face,
                previous: a,
                next: c,
            });
            corners[c].push(Corner {
                face,
                previous: b,
                next: a,
            });
        }

        Self { corners }
    }

    /// Number of indexed vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.corners.len()
    }

    /// Number of triangles incident to `vertex`
    #[inline]
    pub fn valence(&self, vertex: usize) -> usize {
        self.corners.get(vertex).map_or(0, Vec::len)
    }

    /// Corners around `vertex` in rotational order
    ///
    /// Starting from the first recorded corner, the walk repeatedly jumps to the
    /// corner whose `next` equals the current corner's `previous`, which is the
    /// triangle sharing the current triangle's trailing edge. For an outward-wound
    /// mesh the result runs counter-clockwise seen from outside, and consecutive
    /// corners satisfy `ring[k + 1].next == ring[k].previous`.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentMesh` if the vertex has no triangles, a corner has no
    /// neighbor, or the walk does not close after visiting every corner exactly once.
    pub fn ring(&self, vertex: usize) -> Result<Vec<Corner>> {
        let corners = self.corners.get(vertex).map(Vec::as_slice).unwrap_or(&[]);
        let first = *corners
            .first()
            .ok_or_else(|| inconsistent(format!("vertex {} belongs to no triangle", vertex)))?;

        let mut ring = Vec::with_capacity(corners.len());
        let mut current = first;

        // Bounded by the corner count so an open fan can never loop forever
        for _ in 0..corners.len() {
            ring.push(current);
            current = *corners
                .iter()
                .find(|c| c.face != current.face && c.next == current.previous)
                .ok_or_else(|| {
                    inconsistent(format!(
                        "ring around vertex {} is open at triangle {}",
                        vertex, current.face
                    ))
                })?;
            if current.face == first.face {
                break;
            }
        }

        if current.face != first.face || ring.len() != corners.len() {
            return Err(inconsistent(format!(
                "ring around vertex {} visits {} of {} triangles",
                vertex,
                ring.len(),
                corners.len()
            )));
        }

        Ok(ring)
    }
}

fn inconsistent(message: String) -> GeodesicError {
    warn!("{}", message);
    GeodesicError::InconsistentMesh(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::subdivision::subdivide;
    use crate::seed::SeedShape;

    #[test]
    fn test_tetrahedron_rings() {
        let mesh = subdivide(SeedShape::Tetrahedron, 0).unwrap();
        let index = AdjacencyIndex::build(&mesh);

        for vertex in 0..4 {
            let ring = index.ring(vertex).unwrap();
            assert_eq!(ring.len(), 3);
            assert_eq!(index.valence(vertex), 3);
        }
    }

    #[test]
    fn test_ring_order_is_linked() {
        let mesh = subdivide(SeedShape::Icosahedron, 2).unwrap();
        let index = AdjacencyIndex::build(&mesh);

        for vertex in 0..index.vertex_count() {
            let ring = index.ring(vertex).unwrap();
            for k in 0..ring.len() {
                let following = ring[(k + 1) % ring.len()];
                assert_eq!(following.next, ring[k].previous);
            }

            // Seed vertices keep valence 5, new ones are 6-valent
            let expected = if vertex < 12 { 5 } else { 6 };
            assert_eq!(ring.len(), expected);
        }
    }

    #[test]
    fn test_ring_runs_counter_clockwise() {
        let mesh = subdivide(SeedShape::Octahedron, 1).unwrap();
        let index = AdjacencyIndex::build(&mesh);

        for vertex in 0..index.vertex_count() {
            let pivot = mesh.vertices[vertex];
            let ring = index.ring(vertex).unwrap();
            for k in 0..ring.len() {
                let here = mesh.vertices[ring[k].next] - pivot;
                let there = mesh.vertices[ring[(k + 1) % ring.len()].next] - pivot;
                assert!(here.cross(there).dot(pivot) > 0.0);
            }
        }
    }

    #[test]
    fn test_open_fan_is_rejected() {
        let mut mesh = subdivide(SeedShape::Octahedron, 0).unwrap();
        mesh.triangles.pop();
        let index = AdjacencyIndex::build(&mesh);

        // Vertices of the removed triangle now have an open fan
        let removed = [0usize, 3, 5];
        for vertex in removed {
            assert!(matches!(
                index.ring(vertex),
                Err(GeodesicError::InconsistentMesh(_))
            ));
        }
        assert!(index.ring(4).is_ok());
    }

    #[test]
    fn test_isolated_vertex_is_rejected() {
        let mut mesh = subdivide(SeedShape::Tetrahedron, 0).unwrap();
        mesh.vertices.push(glam::Vec3::X);
        let index = AdjacencyIndex::build(&mesh);

        assert!(index.ring(4).is_err());
        assert_eq!(index.valence(4), 0);
    }
}
