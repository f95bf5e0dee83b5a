//! Color mapping for face kinds

use crate::face::FaceKind;

/// RGBA color type
pub type FaceColor = [f32; 4];

/// Trait for mapping face data to colors
pub trait ColorMapper<T> {
    /// Map a value to an RGBA color
    fn map_color(&self, value: &T) -> FaceColor;
}

/// Default color mapper for FaceKind
///
/// Hexagons share one neutral tone so the handful of irregular faces stand out.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicColorMapper;

impl ColorMapper<FaceKind> for BasicColorMapper {
    fn map_color(&self, kind: &FaceKind) -> FaceColor {
        match kind {
            FaceKind::Triangle => [0.9, 0.3, 0.2, 1.0], // Red
            FaceKind::Square => [0.9, 0.7, 0.2, 1.0],   // Amber
            FaceKind::Pentagon => [0.2, 0.4, 0.8, 1.0], // Blue
            FaceKind::Hexagon => [0.8, 0.8, 0.8, 1.0],  // Light gray
        }
    }
}

/// Custom color mapper that allows setting colors for each face kind
#[derive(Debug, Clone)]
pub struct CustomColorMapper {
    pub triangle: FaceColor,
    pub square: FaceColor,
    pub pentagon: FaceColor,
    pub hexagon: FaceColor,
}

impl Default for CustomColorMapper {
    fn default() -> Self {
        let basic = BasicColorMapper;
        Self {
            triangle: basic.map_color(&FaceKind::Triangle),
            square: basic.map_color(&FaceKind::Square),
            pentagon: basic.map_color(&FaceKind::Pentagon),
            hexagon: basic.map_color(&FaceKind::Hexagon),
        }
    }
}

impl ColorMapper<FaceKind> for CustomColorMapper {
    fn map_color(&self, kind: &FaceKind) -> FaceColor {
        match kind {
            FaceKind::Triangle => self.triangle,
            FaceKind::Square => self.square,
            FaceKind::Pentagon => self.pentagon,
            FaceKind::Hexagon => self.hexagon,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_defaults_match_basic() {
        let custom = CustomColorMapper::default();
        for kind in FaceKind::ALL {
            assert_eq!(custom.map_color(&kind), BasicColorMapper.map_color(&kind));
        }
    }

    #[test]
    fn test_custom_override() {
        let custom = CustomColorMapper {
            pentagon: [1.0, 0.0, 1.0, 1.0],
            ..Default::default()
        };
        assert_eq!(custom.map_color(&FaceKind::Pentagon), [1.0, 0.0, 1.0, 1.0]);
        assert_ne!(
            custom.map_color(&FaceKind::Hexagon),
            custom.map_color(&FaceKind::Pentagon)
        );
    }
}
