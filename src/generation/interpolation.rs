//! Great-circle edge interpolation
//!
//! Produces evenly spaced points between two unit vectors. Two policies share the
//! same contract:
//!
//! - [`Interpolation::Projected`]: split the chord linearly, then push each point
//!   back onto the sphere. Cheap, spacing is only approximately even.
//! - [`Interpolation::ArcExact`]: rotate the start point about `a × b`, giving exactly
//!   even angular spacing.

use glam::{Quat, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GeodesicError, Result};

/// Endpoints whose cross product is shorter than this have no defined arc
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Point placement policy along a great-circle arc
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Interpolation {
    /// Linear chord subdivision, then normalization
    #[default]
    Projected,
    /// Exact angular subdivision by rotation about the arc's axis
    ArcExact,
}

impl Interpolation {
    /// Interpolate `n` points strictly between `a` and `b`
    ///
    /// See [`interpolate`].
    pub fn interpolate(self, a: Vec3, b: Vec3, n: usize) -> Result<Vec<Vec3>> {
        interpolate(a, b, n, self)
    }
}

/// Interpolate `n` unit points strictly between `a` and `b`, ordered from `a` toward `b`
///
/// Requesting zero points returns an empty vector without inspecting the endpoints.
///
/// # Errors
///
/// Returns `DegenerateArc` if `a` and `b` are coincident or antipodal.
///
/// # Example
///
/// ```rust
/// use rust_geodesic_sphere::{interpolate, Interpolation, Vec3};
///
/// let points = interpolate(Vec3::X, Vec3::Y, 1, Interpolation::ArcExact).unwrap();
/// let midpoint = Vec3::new(1.0, 1.0, 0.0).normalize();
/// assert!(points[0].distance(midpoint) < 1e-5);
/// ```
pub fn interpolate(a: Vec3, b: Vec3, n: usize, policy: Interpolation) -> Result<Vec<Vec3>> {
    if n == 0 {
        return Ok(Vec::new());
    }

    let axis = a.cross(b);
    if axis.length() < DEGENERATE_EPSILON {
        return Err(GeodesicError::DegenerateArc);
    }

    let steps = (n + 1) as f32;
    let points = match policy {
        Interpolation::Projected => {
            let chord = b - a;
            (1..=n)
                .map(|i| (a + chord * (i as f32 / steps)).normalize())
                .collect()
        }
        Interpolation::ArcExact => {
            let axis = axis.normalize();
            let theta = arc_angle(a, b);
            (1..=n)
                .map(|i| rotate_about_axis(a, axis, theta * i as f32 / steps))
                .collect()
        }
    };

    Ok(points)
}

/// Angle between two unit vectors, derived from their chord length
///
/// `2·asin(|a - b| / 2)` stays accurate for small angles where `acos(a·b)` loses precision.
pub fn arc_angle(a: Vec3, b: Vec3) -> f32 {
    let half_chord = ((a - b).length() / 2.0).min(1.0);
    2.0 * half_chord.asin()
}

/// Rotate `v` by `angle` radians about the unit `axis`, returning a unit vector
pub fn rotate_about_axis(v: Vec3, axis: Vec3, angle: f32) -> Vec3 {
    (Quat::from_axis_angle(axis, angle) * v).normalize()
}
