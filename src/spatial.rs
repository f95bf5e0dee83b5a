//! Spatial indexing for fast direction-to-face lookups
//!
//! This module is only available with the `spatial-index` feature.

#[cfg(feature = "spatial-index")]
use kiddo::immutable::float::kdtree::ImmutableKdTree;
#[cfg(feature = "spatial-index")]
use kiddo::SquaredEuclidean;
#[cfg(feature = "spatial-index")]
use glam::Vec3;

/// Wrapper around KD-tree for nearest-center queries
///
/// Face centers lie on the unit sphere, so the nearest center in Euclidean
/// distance is also the nearest along the surface.
///
/// # Performance
///
/// - Construction: O(n log n)
/// - Query: O(log n)
#[cfg(feature = "spatial-index")]
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 3, 32>,
}

#[cfg(feature = "spatial-index")]
impl SpatialIndex {
    /// Build spatial index from face centers
    ///
    /// # Example
    ///
    /// ```
    /// use rust_geodesic_sphere::*;
    ///
    /// # #[cfg(feature = "spatial-index")]
    /// # {
    /// let centers = vec![Vec3::X, Vec3::Y, Vec3::Z];
    ///
    /// let index = SpatialIndex::new(&centers);
    /// assert_eq!(index.find_nearest(Vec3::new(1.0, 0.1, 0.0).normalize()), 0);
    /// # }
    /// ```
    pub fn new(centers: &[Vec3]) -> Self {
        let points: Vec<[f32; 3]> = centers.iter().map(|c| c.to_array()).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Index of the center nearest to `position`
    pub fn find_nearest(&self, position: Vec3) -> usize {
        let result = self.tree.nearest_one::<SquaredEuclidean>(&position.to_array());
        result.item as usize
    }
}
