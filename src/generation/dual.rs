//! Dual (Goldberg) construction
//!
//! Turns a subdivided triangle-seed mesh into its Goldberg polyhedron:
//!
//! 1. Rebuild the rotational order of triangles around every vertex
//! 2. Classify each vertex by valence (3, 4, 5 or 6)
//! 3. Place dual corners, either at triangle centroids (Class 1) or one third of
//!    the way along every directed edge (Class 2)
//! 4. Close each polygon with a center vertex and fan-triangulate it

use glam::Vec3;
use std::collections::HashMap;
use tracing::{debug, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeodesicError, Result};
use crate::face::{FaceKind, FaceOrigin};
use crate::generation::adjacency::{AdjacencyIndex, Corner};
use crate::generation::interpolation::Interpolation;
use crate::generation::subdivision::subdivide_with;
use crate::seed::SeedShape;
use crate::sphere::SphereMesh;

/// Dual vertex placement convention
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DualClass {
    /// `(m,0)`: one corner per triangle, at its centroid
    #[default]
    Class1,
    /// `(m,m)`: one corner per directed edge, one third of the way along it;
    /// every triangle additionally becomes a hexagon
    Class2,
}

/// A dual polygon without derived geometry
///
/// This is an intermediate representation used during generation; the
/// [`GoldbergPolyhedron`](crate::GoldbergPolyhedron) turns it into a [`GoldbergFace`](crate::GoldbergFace).
#[derive(Debug, Clone, PartialEq)]
pub struct RawFace {
    /// Face identifier, its position in [`DualMesh::faces`]
    pub id: usize,
    /// Polygon kind
    pub kind: FaceKind,
    /// Mesh vertex or triangle this face was built around
    pub origin: FaceOrigin,
    /// Corner indices into [`DualMesh::mesh`] vertices, counter-clockwise
    pub corners: Vec<usize>,
    /// Index of the fan center in [`DualMesh::mesh`] vertices
    pub center: usize,
    /// `neighbors[k]` is the face across the edge `corners[k]`-`corners[k + 1]`
    pub neighbors: Vec<usize>,
}

/// Result of dual construction
#[derive(Debug, Clone)]
pub struct DualMesh {
    /// Number of polygon corners; they occupy `mesh.vertices[..corner_count]`
    pub corner_count: usize,
    /// Dual polygons in ascending corner count
    pub faces: Vec<RawFace>,
    /// Fan triangulation of every polygon; face centers follow the corners
    pub mesh: SphereMesh,
}

impl DualMesh {
    /// Get the number of dual faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of polygon edges (each shared by two faces)
    pub fn edge_count(&self) -> usize {
        self.faces.iter().map(|f| f.corners.len()).sum::<usize>() / 2
    }

    /// Positions of the polygon corners
    pub fn corners(&self) -> &[Vec3] {
        &self.mesh.vertices[..self.corner_count]
    }

    /// Count faces of the given kind
    pub fn count_kind(&self, kind: FaceKind) -> usize {
        self.faces.iter().filter(|f| f.kind == kind).count()
    }
}

/// Subdivide a seed, dualize it, and return the triangulated dual mesh
///
/// # Errors
///
/// Returns `UnsupportedSeed` for the cube and `InvalidComplexity` if
/// `complexity > MAX_COMPLEXITY`.
///
/// # Example
///
/// ```rust
/// use rust_geodesic_sphere::*;
///
/// // Truncated icosahedron: 12 pentagons and 20 hexagons fanned into 120 triangles
/// let mesh = dualize(SeedShape::Icosahedron, DualClass::Class2, 0).unwrap();
/// assert_eq!(mesh.triangle_count(), 12 * 5 + 20 * 6);
/// ```
pub fn dualize(shape: SeedShape, class: DualClass, complexity: usize) -> Result<SphereMesh> {
    Ok(dualize_with(shape, class, complexity, Interpolation::Projected)?.mesh)
}

/// Subdivide a seed with the given interpolation policy, then dualize it
///
/// # Errors
///
/// Returns `UnsupportedSeed` for the cube and `InvalidComplexity` if
/// `complexity > MAX_COMPLEXITY`.
pub fn dualize_with(
    shape: SeedShape,
    class: DualClass,
    complexity: usize,
    interpolation: Interpolation,
) -> Result<DualMesh> {
    if !shape.has_dual() {
        return Err(GeodesicError::UnsupportedSeed(shape));
    }

    let mesh = subdivide_with(shape, complexity, interpolation)?;
    dualize_mesh(&mesh, class)
}

/// Build the dual of a closed, outward-wound triangle mesh
///
/// # Errors
///
/// Returns `InconsistentMesh` if a vertex ring is open or malformed, a vertex has
/// a valence outside `3..=6`, or a dual edge is not shared by exactly two faces.
pub fn dualize_mesh(mesh: &SphereMesh, class: DualClass) -> Result<DualMesh> {
    debug!(
        "Dualizing mesh: {} vertices, {} triangles, {:?}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        class
    );

    // Step A: rotational order around every vertex
    let index = AdjacencyIndex::build(mesh);
    let rings = (0..index.vertex_count())
        .map(|vertex| index.ring(vertex))
        .collect::<Result<Vec<_>>>()?;

    // Step B: valence decides the polygon kind
    for (vertex, ring) in rings.iter().enumerate() {
        if FaceKind::from_degree(ring.len()).is_none() {
            warn!("Vertex {} has unsupported valence {}", vertex, ring.len());
            return Err(GeodesicError::InconsistentMesh(format!(
                "vertex {} has valence {}",
                vertex,
                ring.len()
            )));
        }
    }

    // Step C: corner placement
    let (corners, mut polygons) = match class {
        DualClass::Class1 => centroid_polygons(mesh, &rings),
        DualClass::Class2 => third_point_polygons(mesh, &rings)?,
    };

    // Bucket by degree; stable, so origin order is kept within a bucket
    polygons.sort_by_key(|polygon| polygon.corners.len());

    // Step D: closure and triangulation
    let dual = close_polygons(corners, polygons)?;

    debug!(
        "Dualized mesh: {} faces, {} corners, {} triangles",
        dual.face_count(),
        dual.corner_count,
        dual.mesh.triangle_count()
    );

    Ok(dual)
}

/// Polygon corners before closure
struct Polygon {
    origin: FaceOrigin,
    corners: Vec<usize>,
}

/// Class 1: corner `t` is the centroid of triangle `t`, read around each vertex ring
fn centroid_polygons(mesh: &SphereMesh, rings: &[Vec<Corner>]) -> (Vec<Vec3>, Vec<Polygon>) {
    let corners = mesh
        .triangles
        .iter()
        .map(|tri| {
            tri.iter()
                .map(|&i| mesh.vertices[i as usize])
                .sum::<Vec3>()
                .normalize()
        })
        .collect();

    let polygons = rings
        .iter()
        .enumerate()
        .map(|(vertex, ring)| Polygon {
            origin: FaceOrigin::Vertex(vertex),
            corners: ring.iter().map(|corner| corner.face).collect(),
        })
        .collect();

    (corners, polygons)
}

/// Class 2: one corner per directed edge, a polygon per vertex and a hexagon per triangle
fn third_point_polygons(
    mesh: &SphereMesh,
    rings: &[Vec<Corner>],
) -> Result<(Vec<Vec3>, Vec<Polygon>)> {
    let directed_count: usize = rings.iter().map(Vec::len).sum();
    let mut corners = Vec::with_capacity(directed_count);
    let mut third_points: HashMap<(usize, usize), usize> = HashMap::with_capacity(directed_count);
    let mut polygons = Vec::with_capacity(rings.len() + mesh.triangle_count());

    for (vertex, ring) in rings.iter().enumerate() {
        let origin = mesh.vertices[vertex];
        let polygon = ring
            .iter()
            .map(|corner| {
                let toward = mesh.vertices[corner.next];
                let index = corners.len();
                corners.push((origin + (toward - origin) / 3.0).normalize());
                third_points.insert((vertex, corner.next), index);
                index
            })
            .collect();
        polygons.push(Polygon {
            origin: FaceOrigin::Vertex(vertex),
            corners: polygon,
        });
    }

    for (face, tri) in mesh.triangles.iter().enumerate() {
        let [a, b, c] = tri.map(|i| i as usize);
        let hexagon = [(a, b), (b, a), (b, c), (c, b), (c, a), (a, c)]
            .iter()
            .map(|edge| {
                third_points.get(edge).copied().ok_or_else(|| {
                    warn!("Triangle {} edge {:?} was not walked by any ring", face, edge);
                    GeodesicError::InconsistentMesh(format!(
                        "triangle {} has no dual corner for edge {}-{}",
                        face, edge.0, edge.1
                    ))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        polygons.push(Polygon {
            origin: FaceOrigin::Triangle(face),
            corners: hexagon,
        });
    }

    Ok((corners, polygons))
}

/// Add a center vertex per polygon, fan-triangulate, and link neighbors
fn close_polygons(corners: Vec<Vec3>, polygons: Vec<Polygon>) -> Result<DualMesh> {
    let corner_count = corners.len();
    let fan_count: usize = polygons.iter().map(|p| p.corners.len()).sum();

    let mut vertices = corners;
    vertices.reserve(polygons.len());
    let mut triangles = Vec::with_capacity(fan_count);
    let mut faces = Vec::with_capacity(polygons.len());

    for (id, polygon) in polygons.into_iter().enumerate() {
        let degree = polygon.corners.len();
        let kind = FaceKind::from_degree(degree).ok_or_else(|| {
            GeodesicError::InconsistentMesh(format!("dual face {} has {} corners", id, degree))
        })?;

        let center = polygon
            .corners
            .iter()
            .map(|&i| vertices[i])
            .sum::<Vec3>()
            .normalize();
        let center_index = vertices.len();
        vertices.push(center);

        for k in 0..degree {
            triangles.push([
                center_index as u32,
                polygon.corners[k] as u32,
                polygon.corners[(k + 1) % degree] as u32,
            ]);
        }

        faces.push(RawFace {
            id,
            kind,
            origin: polygon.origin,
            corners: polygon.corners,
            center: center_index,
            neighbors: Vec::with_capacity(degree),
        });
    }

    link_neighbors(&mut faces)?;

    Ok(DualMesh {
        corner_count,
        faces,
        mesh: SphereMesh::new(vertices, triangles),
    })
}

/// Fill `neighbors` from shared polygon edges
fn link_neighbors(faces: &mut [RawFace]) -> Result<()> {
    let mut edge_faces: HashMap<(usize, usize), Vec<usize>> = HashMap::new();
    for face in faces.iter() {
        for (a, b) in polygon_edges(&face.corners) {
            edge_faces.entry((a.min(b), a.max(b))).or_default().push(face.id);
        }
    }

    for face in faces.iter_mut() {
        for (a, b) in polygon_edges(&face.corners) {
            let sharing = &edge_faces[&(a.min(b), a.max(b))];
            let other = match sharing.as_slice() {
                [first, second] if *first == face.id => *second,
                [first, second] if *second == face.id => *first,
                _ => {
                    warn!("Dual edge {}-{} is shared by {} faces", a, b, sharing.len());
                    return Err(GeodesicError::InconsistentMesh(format!(
                        "dual edge {}-{} is shared by {} faces",
                        a,
                        b,
                        sharing.len()
                    )));
                }
            };
            face.neighbors.push(other);
        }
    }

    Ok(())
}

fn polygon_edges(corners: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let k = corners.len();
    (0..k).map(move |i| (corners[i], corners[(i + 1) % k]))
}
