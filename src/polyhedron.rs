//! GoldbergPolyhedron main structure

use glam::Vec3;
use std::collections::{BTreeMap, HashSet};
use tracing::info;

use crate::config::GeodesicConfig;
use crate::error::Result;
use crate::face::{FaceKind, GoldbergFace};
use crate::generation::{generate_dual, DualMesh};
use crate::sphere::SphereMesh;

#[cfg(feature = "spatial-index")]
use crate::spatial::SpatialIndex;

/// A complete Goldberg polyhedron on the unit sphere
///
/// Holds every dual face for queries (neighbors, kinds, hop searches) together
/// with the fan-triangulated mesh used for rendering.
///
/// # Examples
///
/// ```
/// use rust_geodesic_sphere::*;
///
/// let config = GeodesicConfigBuilder::new()
///     .shape(SeedShape::Icosahedron)
///     .complexity(2)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// let polyhedron = GoldbergPolyhedron::generate(config).unwrap();
/// println!("Generated {} faces", polyhedron.face_count());
///
/// // The 12 pentagons come first
/// assert_eq!(polyhedron.get_face(0).unwrap().kind, FaceKind::Pentagon);
/// ```
#[derive(Clone)]
pub struct GoldbergPolyhedron {
    /// Configuration used to generate this polyhedron
    config: GeodesicConfig,

    /// All faces, indexed by face ID
    faces: Vec<GoldbergFace>,

    /// Fan triangulation of every face; corners come first, then face centers
    mesh: SphereMesh,

    /// Number of polygon corners at the start of `mesh.vertices`
    corner_count: usize,

    /// Spatial index over face centers (requires spatial-index feature)
    #[cfg(feature = "spatial-index")]
    spatial_index: SpatialIndex,
}

impl GoldbergPolyhedron {
    /// Generate a polyhedron from configuration
    ///
    /// Subdivides the configured seed, then dualizes it with the configured class.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedSeed` if the configured shape is the cube.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_geodesic_sphere::*;
    ///
    /// let config = GeodesicConfigBuilder::new()
    ///     .shape(SeedShape::Cube)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert!(GoldbergPolyhedron::generate(config).is_err());
    /// ```
    pub fn generate(config: GeodesicConfig) -> Result<Self> {
        let dual = generate_dual(&config)?;
        let polyhedron = Self::from_dual(config, dual);

        info!(
            "Generated {} Goldberg polyhedron: {} faces, {} corners, {} triangles",
            config.shape.name(),
            polyhedron.face_count(),
            polyhedron.corner_count,
            polyhedron.mesh.triangle_count()
        );

        Ok(polyhedron)
    }

    fn from_dual(config: GeodesicConfig, dual: DualMesh) -> Self {
        let DualMesh {
            corner_count,
            faces,
            mesh,
        } = dual;

        let faces: Vec<GoldbergFace> = faces
            .into_iter()
            .map(|raw| {
                let corners = raw.corners.iter().map(|&i| mesh.vertices[i]).collect();
                GoldbergFace::new(
                    raw.id,
                    raw.kind,
                    raw.origin,
                    mesh.vertices[raw.center],
                    corners,
                    raw.neighbors,
                )
            })
            .collect();

        #[cfg(feature = "spatial-index")]
        let spatial_index = {
            let centers: Vec<Vec3> = faces.iter().map(|f| f.center).collect();
            SpatialIndex::new(&centers)
        };

        Self {
            config,
            faces,
            mesh,
            corner_count,
            #[cfg(feature = "spatial-index")]
            spatial_index,
        }
    }

    /// Get the configuration used to generate this polyhedron
    #[inline]
    pub fn config(&self) -> &GeodesicConfig {
        &self.config
    }

    /// Get the number of faces
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the configured export radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.config.radius
    }

    /// Get a face by ID
    ///
    /// Returns `None` if the face ID is out of bounds.
    #[inline]
    pub fn get_face(&self, id: usize) -> Option<&GoldbergFace> {
        self.faces.get(id)
    }

    /// Get all faces as a slice
    #[inline]
    pub fn faces(&self) -> &[GoldbergFace] {
        &self.faces
    }

    /// Get neighbor IDs for a face
    ///
    /// Returns an empty slice if the face ID is invalid.
    pub fn get_neighbors(&self, face_id: usize) -> &[usize] {
        self.faces
            .get(face_id)
            .map(|f| f.neighbors.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate over faces of one kind
    pub fn faces_of_kind(&self, kind: FaceKind) -> impl Iterator<Item = &GoldbergFace> + '_ {
        self.faces.iter().filter(move |f| f.kind == kind)
    }

    /// Count faces per kind; kinds that do not occur are omitted
    ///
    /// # Example
    ///
    /// ```
    /// # use rust_geodesic_sphere::*;
    /// let config = GeodesicConfigBuilder::new()
    ///     .shape(SeedShape::Octahedron)
    ///     .complexity(2)
    ///     .unwrap()
    ///     .build()
    ///     .unwrap();
    /// let polyhedron = GoldbergPolyhedron::generate(config).unwrap();
    ///
    /// let histogram = polyhedron.kind_histogram();
    /// assert_eq!(histogram[&FaceKind::Square], 6);
    /// assert_eq!(histogram[&FaceKind::Hexagon], 32);
    /// ```
    pub fn kind_histogram(&self) -> BTreeMap<FaceKind, usize> {
        let mut histogram = BTreeMap::new();
        for face in &self.faces {
            *histogram.entry(face.kind).or_insert(0) += 1;
        }
        histogram
    }

    /// Fan-triangulated mesh of all faces
    #[inline]
    pub fn mesh(&self) -> &SphereMesh {
        &self.mesh
    }

    /// Consume the polyhedron, keeping only its triangulated mesh
    pub fn into_mesh(self) -> SphereMesh {
        self.mesh
    }

    /// Polygon corner positions shared between faces
    pub fn corners(&self) -> &[Vec3] {
        &self.mesh.vertices[..self.corner_count]
    }

    /// Find the face whose center is nearest to a direction (requires spatial-index feature)
    ///
    /// The direction does not need to be normalized. Near face boundaries the
    /// nearest center can differ from the face actually containing the point.
    ///
    /// # Example
    ///
    /// ```
    /// # use rust_geodesic_sphere::*;
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let polyhedron = GoldbergPolyhedron::generate(GeodesicConfig::default()).unwrap();
    /// let face_id = polyhedron.find_face_at(Vec3::new(0.0, 3.0, 0.0));
    /// println!("Direction +Y lands on face {}", face_id);
    /// # }
    /// ```
    #[cfg(feature = "spatial-index")]
    pub fn find_face_at(&self, direction: Vec3) -> usize {
        self.spatial_index.find_nearest(direction.normalize_or_zero())
    }

    /// Find faces within a given hop count from a center face (BFS)
    ///
    /// Returns face IDs in breadth-first order, starting with the center face.
    /// Returns an empty vec if `center_id` is invalid.
    pub fn find_faces_within_hops(&self, center_id: usize, hops: usize) -> Vec<usize> {
        if center_id >= self.faces.len() {
            return vec![];
        }

        let mut visited = HashSet::new();
        visited.insert(center_id);
        let mut found = vec![center_id];
        let mut frontier_start = 0;

        for _ in 0..hops {
            let frontier_end = found.len();
            for i in frontier_start..frontier_end {
                for &neighbor in self.get_neighbors(found[i]) {
                    if visited.insert(neighbor) {
                        found.push(neighbor);
                    }
                }
            }
            if found.len() == frontier_end {
                break;
            }
            frontier_start = frontier_end;
        }

        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeodesicError;
    use crate::face::FaceOrigin;
    use crate::generation::{DualClass, Interpolation};
    use crate::seed::SeedShape;
    use crate::GeodesicConfigBuilder;

    fn icosahedral(complexity: usize, class: DualClass) -> GoldbergPolyhedron {
        let config = GeodesicConfigBuilder::new()
            .shape(SeedShape::Icosahedron)
            .complexity(complexity)
            .unwrap()
            .dual_class(class)
            .build()
            .unwrap();
        GoldbergPolyhedron::generate(config).unwrap()
    }

    #[test]
    fn test_polyhedron_generation() {
        let polyhedron = icosahedral(3, DualClass::Class1);

        // GP(4,0): 10T + 2 faces with T = 16
        assert_eq!(polyhedron.face_count(), 162);
        assert_eq!(polyhedron.kind_histogram()[&FaceKind::Pentagon], 12);
        assert_eq!(polyhedron.kind_histogram()[&FaceKind::Hexagon], 150);
        assert_eq!(polyhedron.mesh().euler_characteristic(), 2);
        assert_eq!(polyhedron.corners().len(), 320);
    }

    #[test]
    fn test_class2_generation() {
        let polyhedron = icosahedral(1, DualClass::Class2);

        // GP(2,2): 10T + 2 faces with T = 12
        assert_eq!(polyhedron.face_count(), 122);
        assert_eq!(polyhedron.faces_of_kind(FaceKind::Pentagon).count(), 12);
        assert!(polyhedron
            .faces()
            .iter()
            .any(|f| matches!(f.origin, FaceOrigin::Triangle(_))));
    }

    #[test]
    fn test_get_face() {
        let polyhedron = icosahedral(1, DualClass::Class1);

        assert!(polyhedron.get_face(0).is_some());
        assert!(polyhedron.get_face(polyhedron.face_count()).is_none());
    }

    #[test]
    fn test_face_geometry() {
        let polyhedron = icosahedral(2, DualClass::Class1);

        for face in polyhedron.faces() {
            assert_eq!(face.corner_count(), face.kind.degree());
            assert_eq!(face.neighbor_count(), face.kind.degree());
            assert!((face.center.length() - 1.0).abs() < 1e-5);
            assert!(face.fan_area() > 0.0);
            for &neighbor in &face.neighbors {
                assert!(polyhedron.get_face(neighbor).unwrap().is_neighbor_of(face.id));
            }
        }
    }

    #[test]
    fn test_get_neighbors() {
        let polyhedron = icosahedral(2, DualClass::Class1);

        assert_eq!(polyhedron.get_neighbors(0).len(), 5);
        assert!(polyhedron.get_neighbors(999_999).is_empty());
    }

    #[cfg(feature = "spatial-index")]
    #[test]
    fn test_find_face_at() {
        let polyhedron = icosahedral(2, DualClass::Class1);

        for face in polyhedron.faces() {
            assert_eq!(polyhedron.find_face_at(face.center * 4.0), face.id);
        }
    }

    #[test]
    fn test_find_faces_within_hops() {
        let polyhedron = icosahedral(3, DualClass::Class1);

        let hops_0 = polyhedron.find_faces_within_hops(0, 0);
        assert_eq!(hops_0, vec![0]);

        let hops_1 = polyhedron.find_faces_within_hops(0, 1);
        assert_eq!(hops_1.len(), 1 + polyhedron.get_neighbors(0).len());

        let hops_2 = polyhedron.find_faces_within_hops(0, 2);
        assert!(hops_2.len() > hops_1.len());
        assert_eq!(&hops_2[..hops_1.len()], hops_1.as_slice());

        // Enough hops reach every face exactly once
        let all = polyhedron.find_faces_within_hops(0, 1_000);
        assert_eq!(all.len(), polyhedron.face_count());

        assert!(polyhedron.find_faces_within_hops(999_999, 3).is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let config = GeodesicConfigBuilder::new()
            .shape(SeedShape::Tetrahedron)
            .complexity(3)
            .unwrap()
            .interpolation(Interpolation::ArcExact)
            .build()
            .unwrap();

        let a = GoldbergPolyhedron::generate(config).unwrap();
        let b = GoldbergPolyhedron::generate(config).unwrap();
        assert_eq!(a.mesh(), b.mesh());
        assert_eq!(a.config(), b.config());
    }

    #[test]
    fn test_cube_is_rejected() {
        let config = GeodesicConfigBuilder::new()
            .shape(SeedShape::Cube)
            .build()
            .unwrap();

        assert_eq!(
            GoldbergPolyhedron::generate(config).err(),
            Some(GeodesicError::UnsupportedSeed(SeedShape::Cube))
        );
    }
}
