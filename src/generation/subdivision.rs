//! Spherical subdivision of seed polyhedra
//!
//! Every seed edge receives `complexity` new vertices, then each face interior is
//! filled with a triangulated grid whose rows are interpolated along great circles.
//!
//! # Vertex layout
//!
//! 1. Seed vertices, unchanged
//! 2. Edge vertices: edge `k` owns `seed_count + k * complexity ..` (length
//!    `complexity`), ordered from its lower seed index toward its higher one
//! 3. Face interior vertices, face by face, row by row

use glam::Vec3;
use std::collections::HashMap;
use std::iter::once;
use tracing::{debug, warn};

use crate::error::{GeodesicError, Result};
use crate::generation::interpolation::Interpolation;
use crate::seed::{SeedFaces, SeedShape, SeedTable};
use crate::sphere::SphereMesh;

/// Largest accepted complexity (new vertices per seed edge)
///
/// Keeps every vertex index of the dual meshes within `u32`.
pub const MAX_COMPLEXITY: usize = 1024;

/// Subdivide a seed shape using projected interpolation
///
/// `complexity` is the number of new vertices inserted on every seed edge; zero
/// returns the seed itself (quads split into two triangles).
///
/// # Errors
///
/// Returns `InvalidComplexity` if `complexity > MAX_COMPLEXITY`.
///
/// # Example
///
/// ```rust
/// use rust_geodesic_sphere::*;
///
/// let mesh = subdivide(SeedShape::Icosahedron, 1).unwrap();
/// assert_eq!(mesh.vertex_count(), 42);
/// assert_eq!(mesh.triangle_count(), 80);
/// ```
pub fn subdivide(shape: SeedShape, complexity: usize) -> Result<SphereMesh> {
    subdivide_with(shape, complexity, Interpolation::Projected)
}

/// Subdivide a seed shape with an explicit interpolation policy
///
/// # Errors
///
/// Returns `InvalidComplexity` if `complexity > MAX_COMPLEXITY`.
pub fn subdivide_with(
    shape: SeedShape,
    complexity: usize,
    interpolation: Interpolation,
) -> Result<SphereMesh> {
    check_complexity(complexity)?;

    debug!(
        "Subdividing {}: complexity {} using {:?}",
        shape.name(),
        complexity,
        interpolation
    );

    let mesh = subdivide_table(&shape.table(), complexity, interpolation)?;

    debug!(
        "Subdivided {}: {} vertices, {} triangles",
        shape.name(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

fn check_complexity(complexity: usize) -> Result<()> {
    if complexity > MAX_COMPLEXITY {
        return Err(GeodesicError::InvalidComplexity {
            complexity,
            max: MAX_COMPLEXITY,
        });
    }
    Ok(())
}

/// Subdivide an arbitrary seed table
fn subdivide_table(
    table: &SeedTable,
    complexity: usize,
    interpolation: Interpolation,
) -> Result<SphereMesh> {
    if complexity == 0 {
        let triangles = table
            .triangles()
            .into_iter()
            .map(|tri| tri.map(|i| i as u32))
            .collect();
        return Ok(SphereMesh::new(table.vertices.clone(), triangles));
    }

    let mut subdivider = Subdivider::new(table, complexity, interpolation);
    subdivider.insert_edge_vertices()?;

    match &table.faces {
        SeedFaces::Triangles(faces) => {
            for &face in faces {
                subdivider.fill_triangle(face)?;
            }
        }
        SeedFaces::Quads(faces) => {
            for &face in faces {
                subdivider.fill_quad(face)?;
            }
        }
    }

    Ok(subdivider.finish())
}

/// Mesh under construction for one subdivision call
struct Subdivider<'a> {
    table: &'a SeedTable,
    complexity: usize,
    interpolation: Interpolation,
    /// Canonical `[low, high]` seed edge to its position in the edge list
    edge_lookup: HashMap<[usize; 2], usize>,
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl<'a> Subdivider<'a> {
    fn new(table: &'a SeedTable, complexity: usize, interpolation: Interpolation) -> Self {
        let n = complexity;
        let (interior, per_face) = match table.faces {
            SeedFaces::Triangles(_) => (n * n.saturating_sub(1) / 2, (n + 1) * (n + 1)),
            SeedFaces::Quads(_) => (n * n, 2 * (n + 1) * (n + 1)),
        };
        let face_count = table.face_count();

        let mut vertices =
            Vec::with_capacity(table.vertices.len() + table.edges.len() * n + face_count * interior);
        vertices.extend_from_slice(&table.vertices);

        let edge_lookup = table
            .edges
            .iter()
            .enumerate()
            .map(|(k, &edge)| (edge, k))
            .collect();

        Self {
            table,
            complexity,
            interpolation,
            edge_lookup,
            vertices,
            triangles: Vec::with_capacity(face_count * per_face),
        }
    }

    /// Step 1: densify every seed edge in table order
    fn insert_edge_vertices(&mut self) -> Result<()> {
        let table = self.table;
        for &[a, b] in &table.edges {
            self.push_arc(a, b, self.complexity)?;
        }
        Ok(())
    }

    /// Indices of the vertices inserted on seed edge `from`-`to`, ordered from `from` to `to`
    fn side(&self, from: usize, to: usize) -> Result<Vec<usize>> {
        let key = [from.min(to), from.max(to)];
        let k = *self.edge_lookup.get(&key).ok_or_else(|| {
            warn!("No seed edge joins face vertices {} and {}", from, to);
            GeodesicError::InconsistentMesh(format!(
                "no seed edge joins vertices {} and {}",
                from, to
            ))
        })?;

        let first = self.table.vertices.len() + k * self.complexity;
        let mut side: Vec<usize> = (first..first + self.complexity).collect();
        if from > to {
            side.reverse();
        }
        Ok(side)
    }

    /// Append `count` fresh vertices strictly between two existing ones
    fn push_arc(&mut self, start: usize, end: usize, count: usize) -> Result<Vec<usize>> {
        let points = self
            .interpolation
            .interpolate(self.vertices[start], self.vertices[end], count)?;
        let first = self.vertices.len();
        self.vertices.extend(points);
        Ok((first..self.vertices.len()).collect())
    }

    fn push_triangle(&mut self, a: usize, b: usize, c: usize) {
        self.triangles.push([a as u32, b as u32, c as u32]);
    }

    /// Step 2: triangular face, rows shrinking from the `v1`-`v2` edge up to `v3`
    fn fill_triangle(&mut self, [v1, v2, v3]: [usize; 3]) -> Result<()> {
        let n = self.complexity;
        let bottom = self.side(v1, v2)?;
        let left = self.side(v1, v3)?;
        let right = self.side(v2, v3)?;

        let mut lower: Vec<usize> = once(v1).chain(bottom).chain(once(v2)).collect();
        for r in 1..=n + 1 {
            let upper: Vec<usize> = if r == n + 1 {
                vec![v3]
            } else {
                let (start, end) = (left[r - 1], right[r - 1]);
                let interior = self.push_arc(start, end, n - r)?;
                once(start).chain(interior).chain(once(end)).collect()
            };
            self.stitch_rows(&lower, &upper);
            lower = upper;
        }

        Ok(())
    }

    /// Stitch a row to the next one, which is exactly one vertex shorter
    fn stitch_rows(&mut self, lower: &[usize], upper: &[usize]) {
        debug_assert_eq!(lower.len(), upper.len() + 1);

        for j in 0..upper.len() {
            // Pointed-top
            self.push_triangle(lower[j], lower[j + 1], upper[j]);
            if j + 1 < upper.len() {
                // Flat-top
                self.push_triangle(lower[j + 1], upper[j + 1], upper[j]);
            }
        }
    }

    /// Step 3: quadrilateral face, equal-length rows from the `v1`-`v2` edge to the `v4`-`v3` edge
    fn fill_quad(&mut self, [v1, v2, v3, v4]: [usize; 4]) -> Result<()> {
        let n = self.complexity;
        let bottom = self.side(v1, v2)?;
        let top = self.side(v4, v3)?;
        let left = self.side(v1, v4)?;
        let right = self.side(v2, v3)?;

        let mut rows: Vec<Vec<usize>> = Vec::with_capacity(n + 2);
        rows.push(once(v1).chain(bottom).chain(once(v2)).collect());
        for r in 0..n {
            let (start, end) = (left[r], right[r]);
            let interior = self.push_arc(start, end, n)?;
            rows.push(once(start).chain(interior).chain(once(end)).collect());
        }
        rows.push(once(v4).chain(top).chain(once(v3)).collect());

        for (r, pair) in rows.windows(2).enumerate() {
            let (lower, upper) = (&pair[0], &pair[1]);
            for c in 0..=n {
                let (a, b) = (lower[c], lower[c + 1]);
                let (d, e) = (upper[c], upper[c + 1]);
                // Alternate the diagonal so cells do not all lean the same way
                if (r + c) % 2 == 0 {
                    self.push_triangle(a, b, e);
                    self.push_triangle(a, e, d);
                } else {
                    self.push_triangle(a, b, d);
                    self.push_triangle(b, e, d);
                }
            }
        }

        Ok(())
    }

    fn finish(self) -> SphereMesh {
        SphereMesh::new(self.vertices, self.triangles)
    }
}
