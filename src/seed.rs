//! Seed polyhedra
//!
//! Vertex, edge and face tables for the four shapes a geodesic sphere can be
//! subdivided from. All vertices lie on the unit sphere and every face is wound
//! counter-clockwise when seen from outside.

use glam::Vec3;
use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Seed polyhedron a geodesic sphere is built from
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeedShape {
    /// 4 vertices, 6 edges, 4 triangles
    Tetrahedron,
    /// 8 vertices, 12 edges, 6 quadrilaterals
    Cube,
    /// 6 vertices, 12 edges, 8 triangles
    Octahedron,
    /// 12 vertices, 30 edges, 20 triangles
    #[default]
    Icosahedron,
}

impl SeedShape {
    /// All supported seed shapes
    pub const ALL: [SeedShape; 4] = [
        SeedShape::Tetrahedron,
        SeedShape::Cube,
        SeedShape::Octahedron,
        SeedShape::Icosahedron,
    ];

    /// Build the vertex/edge/face table for this shape
    pub fn table(self) -> SeedTable {
        match self {
            SeedShape::Tetrahedron => SeedTable::from_triangles(
                &[
                    [1.0, 1.0, 1.0],
                    [1.0, -1.0, -1.0],
                    [-1.0, 1.0, -1.0],
                    [-1.0, -1.0, 1.0],
                ],
                &[[0, 1, 2], [0, 3, 1], [0, 2, 3], [1, 3, 2]],
            ),
            SeedShape::Cube => SeedTable::from_quads(
                &[
                    [-1.0, -1.0, -1.0],
                    [1.0, -1.0, -1.0],
                    [1.0, 1.0, -1.0],
                    [-1.0, 1.0, -1.0],
                    [-1.0, -1.0, 1.0],
                    [1.0, -1.0, 1.0],
                    [1.0, 1.0, 1.0],
                    [-1.0, 1.0, 1.0],
                ],
                &[
                    [0, 3, 2, 1],
                    [4, 5, 6, 7],
                    [0, 1, 5, 4],
                    [2, 3, 7, 6],
                    [1, 2, 6, 5],
                    [3, 0, 4, 7],
                ],
            ),
            SeedShape::Octahedron => SeedTable::from_triangles(
                &[
                    [1.0, 0.0, 0.0],
                    [-1.0, 0.0, 0.0],
                    [0.0, 1.0, 0.0],
                    [0.0, -1.0, 0.0],
                    [0.0, 0.0, 1.0],
                    [0.0, 0.0, -1.0],
                ],
                &[
                    [0, 2, 4],
                    [2, 1, 4],
                    [1, 3, 4],
                    [3, 0, 4],
                    [2, 0, 5],
                    [1, 2, 5],
                    [3, 1, 5],
                    [0, 3, 5],
                ],
            ),
            SeedShape::Icosahedron => {
                let phi = (1.0 + 5.0_f32.sqrt()) / 2.0;
                SeedTable::from_triangles(
                    &[
                        [-1.0, phi, 0.0],
                        [1.0, phi, 0.0],
                        [-1.0, -phi, 0.0],
                        [1.0, -phi, 0.0],
                        [0.0, -1.0, phi],
                        [0.0, 1.0, phi],
                        [0.0, -1.0, -phi],
                        [0.0, 1.0, -phi],
                        [phi, 0.0, -1.0],
                        [phi, 0.0, 1.0],
                        [-phi, 0.0, -1.0],
                        [-phi, 0.0, 1.0],
                    ],
                    &[
                        [0, 11, 5],
                        [0, 5, 1],
                        [0, 1, 7],
                        [0, 7, 10],
                        [0, 10, 11],
                        [1, 5, 9],
                        [5, 11, 4],
                        [11, 10, 2],
                        [10, 7, 6],
                        [7, 1, 8],
                        [3, 9, 4],
                        [3, 4, 2],
                        [3, 2, 6],
                        [3, 6, 8],
                        [3, 8, 9],
                        [4, 9, 5],
                        [2, 4, 11],
                        [6, 2, 10],
                        [8, 6, 7],
                        [9, 8, 1],
                    ],
                )
            }
        }
    }

    /// Whether a dual (Goldberg) construction is defined for this shape
    ///
    /// Only the triangle-faced seeds have one; the cube is quad-faced at seed level.
    #[inline]
    pub fn has_dual(self) -> bool {
        !matches!(self, SeedShape::Cube)
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            SeedShape::Tetrahedron => "Tetrahedron",
            SeedShape::Cube => "Cube",
            SeedShape::Octahedron => "Octahedron",
            SeedShape::Icosahedron => "Icosahedron",
        }
    }
}

/// Faces of a seed shape
#[derive(Debug, Clone, PartialEq)]
pub enum SeedFaces {
    /// Triangular faces as index triples
    Triangles(Vec<[usize; 3]>),
    /// Quadrilateral faces as index quadruples in cyclic order
    Quads(Vec<[usize; 4]>),
}

/// Immutable vertex/edge/face table of a seed shape
#[derive(Debug, Clone, PartialEq)]
pub struct SeedTable {
    /// Unit-length vertex positions
    pub vertices: Vec<Vec3>,
    /// Unique unordered edges, lower index first, in order of first appearance
    pub edges: Vec<[usize; 2]>,
    /// Faces, wound counter-clockwise seen from outside
    pub faces: SeedFaces,
}

impl SeedTable {
    fn from_triangles(points: &[[f32; 3]], faces: &[[usize; 3]]) -> Self {
        let vertices = normalize_points(points);
        let faces: Vec<[usize; 3]> = faces
            .iter()
            .map(|&[a, b, c]| {
                if is_outward(&vertices, &[a, b, c]) {
                    [a, b, c]
                } else {
                    [a, c, b]
                }
            })
            .collect();
        let edges = collect_edges(faces.iter().map(|f| f.as_slice()));

        Self {
            vertices,
            edges,
            faces: SeedFaces::Triangles(faces),
        }
    }

    fn from_quads(points: &[[f32; 3]], faces: &[[usize; 4]]) -> Self {
        let vertices = normalize_points(points);
        let faces: Vec<[usize; 4]> = faces
            .iter()
            .map(|&[a, b, c, d]| {
                if is_outward(&vertices, &[a, b, c, d]) {
                    [a, b, c, d]
                } else {
                    [a, d, c, b]
                }
            })
            .collect();
        let edges = collect_edges(faces.iter().map(|f| f.as_slice()));

        Self {
            vertices,
            edges,
            faces: SeedFaces::Quads(faces),
        }
    }

    /// Number of seed faces (quads count once)
    pub fn face_count(&self) -> usize {
        match &self.faces {
            SeedFaces::Triangles(faces) => faces.len(),
            SeedFaces::Quads(faces) => faces.len(),
        }
    }

    /// Faces as triangles, splitting every quad `[a, b, c, d]` into `[a, b, c]` and `[a, c, d]`
    pub fn triangles(&self) -> Vec<[usize; 3]> {
        match &self.faces {
            SeedFaces::Triangles(faces) => faces.clone(),
            SeedFaces::Quads(faces) => faces
                .iter()
                .flat_map(|&[a, b, c, d]| [[a, b, c], [a, c, d]])
                .collect(),
        }
    }
}

fn normalize_points(points: &[[f32; 3]]) -> Vec<Vec3> {
    points
        .iter()
        .map(|&p| Vec3::from_array(p).normalize())
        .collect()
}

/// A convex face around the origin points outward when its normal agrees with its centroid
fn is_outward(vertices: &[Vec3], face: &[usize]) -> bool {
    let a = vertices[face[0]];
    let b = vertices[face[1]];
    let c = vertices[face[2]];
    let centroid: Vec3 = face.iter().map(|&i| vertices[i]).sum();
    (b - a).cross(c - a).dot(centroid) > 0.0
}

fn collect_edges<'a>(faces: impl Iterator<Item = &'a [usize]>) -> Vec<[usize; 2]> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for face in faces {
        for k in 0..face.len() {
            let a = face[k];
            let b = face[(k + 1) % face.len()];
            let edge = [a.min(b), a.max(b)];
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }

    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        let expected = [
            (SeedShape::Tetrahedron, 4, 6, 4),
            (SeedShape::Cube, 8, 12, 6),
            (SeedShape::Octahedron, 6, 12, 8),
            (SeedShape::Icosahedron, 12, 30, 20),
        ];

        for (shape, v, e, f) in expected {
            let table = shape.table();
            assert_eq!(table.vertices.len(), v, "{} vertices", shape.name());
            assert_eq!(table.edges.len(), e, "{} edges", shape.name());
            assert_eq!(table.face_count(), f, "{} faces", shape.name());
            // Euler characteristic of a convex polyhedron
            assert_eq!(v as i64 - e as i64 + f as i64, 2);
        }
    }

    #[test]
    fn test_seed_vertices_are_unit() {
        for shape in SeedShape::ALL {
            for v in &shape.table().vertices {
                assert!((v.length() - 1.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_seed_faces_point_outward() {
        for shape in SeedShape::ALL {
            let table = shape.table();
            for tri in table.triangles() {
                let [a, b, c] = tri.map(|i| table.vertices[i]);
                let normal = (b - a).cross(c - a);
                assert!(
                    normal.dot(a + b + c) > 0.0,
                    "{} face {:?} is wound inward",
                    shape.name(),
                    tri
                );
            }
        }
    }

    #[test]
    fn test_edges_are_canonical_and_unique() {
        for shape in SeedShape::ALL {
            let table = shape.table();
            let unique: HashSet<_> = table.edges.iter().collect();
            assert_eq!(unique.len(), table.edges.len());
            assert!(table.edges.iter().all(|[a, b]| a < b));
        }
    }

    #[test]
    fn test_cube_quads_split_into_triangles() {
        let table = SeedShape::Cube.table();
        assert!(matches!(table.faces, SeedFaces::Quads(_)));
        assert_eq!(table.triangles().len(), 12);
    }

    #[test]
    fn test_has_dual() {
        assert!(SeedShape::Tetrahedron.has_dual());
        assert!(SeedShape::Octahedron.has_dual());
        assert!(SeedShape::Icosahedron.has_dual());
        assert!(!SeedShape::Cube.has_dual());
    }
}
