//! Goldberg polyhedron faces
//!
//! A face of the dual mesh: its polygon kind, where it came from in the
//! subdivided mesh, its corner ring and the faces across each of its edges.

use glam::Vec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generation::arc_angle;

/// Polygon kind of a dual face, named by its corner count
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FaceKind {
    /// 3 corners; around the tetrahedron's seed vertices
    Triangle,
    /// 4 corners; around the octahedron's seed vertices
    Square,
    /// 5 corners; around the icosahedron's seed vertices
    Pentagon,
    /// 6 corners; everywhere else
    Hexagon,
}

impl FaceKind {
    /// All face kinds in ascending corner count
    pub const ALL: [FaceKind; 4] = [
        FaceKind::Triangle,
        FaceKind::Square,
        FaceKind::Pentagon,
        FaceKind::Hexagon,
    ];

    /// Classify a polygon by its corner count
    ///
    /// Returns `None` for degrees no built-in seed can produce.
    pub fn from_degree(degree: usize) -> Option<Self> {
        match degree {
            3 => Some(FaceKind::Triangle),
            4 => Some(FaceKind::Square),
            5 => Some(FaceKind::Pentagon),
            6 => Some(FaceKind::Hexagon),
            _ => None,
        }
    }

    /// Number of corners
    #[inline]
    pub fn degree(self) -> usize {
        match self {
            FaceKind::Triangle => 3,
            FaceKind::Square => 4,
            FaceKind::Pentagon => 5,
            FaceKind::Hexagon => 6,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            FaceKind::Triangle => "Triangle",
            FaceKind::Square => "Square",
            FaceKind::Pentagon => "Pentagon",
            FaceKind::Hexagon => "Hexagon",
        }
    }
}

/// Element of the subdivided mesh a dual face was built around
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceOrigin {
    /// Polygon around a mesh vertex (both classes)
    Vertex(usize),
    /// Hexagon inside a mesh triangle (Class 2 only)
    Triangle(usize),
}

/// A single face of a Goldberg polyhedron
///
/// Faces are ordered by kind: every non-hexagonal face comes before the first
/// hexagon, so the 12 pentagons of an icosahedral polyhedron are faces `0..12`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct GoldbergFace {
    /// Face identifier (0 to face_count-1)
    pub id: usize,

    /// Polygon kind
    pub kind: FaceKind,

    /// Mesh vertex or triangle this face was built around
    pub origin: FaceOrigin,

    /// Unit center, the normalized mean of the corners
    pub center: Vec3,

    /// Unit corner positions, counter-clockwise seen from outside
    pub corners: Vec<Vec3>,

    /// `neighbors[k]` is the face across the edge from `corners[k]` to `corners[k + 1]`
    pub neighbors: Vec<usize>,
}

impl GoldbergFace {
    /// Create a new face
    ///
    /// This is typically called during polyhedron generation, not by user code.
    pub fn new(
        id: usize,
        kind: FaceKind,
        origin: FaceOrigin,
        center: Vec3,
        corners: Vec<Vec3>,
        neighbors: Vec<usize>,
    ) -> Self {
        Self {
            id,
            kind,
            origin,
            center,
            corners,
            neighbors,
        }
    }

    /// Get the number of neighboring faces
    #[inline]
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Check if this face shares an edge with another face
    #[inline]
    pub fn is_neighbor_of(&self, other_face_id: usize) -> bool {
        self.neighbors.contains(&other_face_id)
    }

    /// Get the corner count
    #[inline]
    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Area of the flat fan spanned by the center and the corners, on the unit sphere
    ///
    /// Slightly smaller than the spherical polygon it approximates.
    pub fn fan_area(&self) -> f32 {
        let k = self.corners.len();
        (0..k)
            .map(|i| {
                let a = self.corners[i] - self.center;
                let b = self.corners[(i + 1) % k] - self.center;
                a.cross(b).length() * 0.5
            })
            .sum()
    }

    /// Great-circle distance between face centers on a sphere of the given radius
    pub fn distance_to(&self, other: &GoldbergFace, sphere_radius: f32) -> f32 {
        sphere_radius * arc_angle(self.center, other.center)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_face() -> GoldbergFace {
        let corners = vec![
            Vec3::new(1.0, 0.1, 0.0).normalize(),
            Vec3::new(1.0, 0.0, 0.1).normalize(),
            Vec3::new(1.0, -0.1, 0.0).normalize(),
            Vec3::new(1.0, 0.0, -0.1).normalize(),
        ];
        GoldbergFace::new(0, FaceKind::Square, FaceOrigin::Vertex(0), Vec3::X, corners, vec![1, 2, 3, 4])
    }

    #[test]
    fn test_face_kind_degrees() {
        for kind in FaceKind::ALL {
            assert_eq!(FaceKind::from_degree(kind.degree()), Some(kind));
        }
        assert_eq!(FaceKind::from_degree(2), None);
        assert_eq!(FaceKind::from_degree(7), None);
        assert!(FaceKind::Pentagon < FaceKind::Hexagon);
    }

    #[test]
    fn test_face_creation() {
        let face = square_face();
        assert_eq!(face.id, 0);
        assert_eq!(face.neighbor_count(), 4);
        assert_eq!(face.corner_count(), 4);
        assert!(face.is_neighbor_of(3));
        assert!(!face.is_neighbor_of(99));
    }

    #[test]
    fn test_fan_area() {
        let face = square_face();
        // Roughly a square with diagonals of length 0.2
        let area = face.fan_area();
        assert!((area - 0.02).abs() < 0.001, "area {area}");
    }

    #[test]
    fn test_distance_to() {
        let a = GoldbergFace::new(0, FaceKind::Hexagon, FaceOrigin::Vertex(0), Vec3::X, vec![], vec![]);
        let b = GoldbergFace::new(1, FaceKind::Hexagon, FaceOrigin::Vertex(1), Vec3::Y, vec![], vec![]);

        let distance = a.distance_to(&b, 10.0);
        let expected = 10.0 * std::f32::consts::FRAC_PI_2;
        assert!((distance - expected).abs() < 0.01);
    }
}
