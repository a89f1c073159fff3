//! Math utilities and types
//!
//! Provides the 2D math types used by the tile world. World coordinates are
//! measured in tiles: the tile `(x, y)` covers the unit cell
//! `[x, x + 1] × [y, y + 1]`.

use serde::{Deserialize, Serialize};

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Integer coordinate of a tile in the world grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileCoord {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl TileCoord {
    /// Create a new tile coordinate
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Tile containing the given world-space point
    #[allow(clippy::cast_possible_truncation)]
    pub fn containing(point: Point2) -> Self {
        Self {
            x: point.x.floor() as i32,
            y: point.y.floor() as i32,
        }
    }

    /// World-space position of the tile's minimum corner
    #[allow(clippy::cast_precision_loss)]
    pub fn origin(self) -> Point2 {
        Point2::new(self.x as f32, self.y as f32)
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Edge length of a tile in world units
    pub const TILE_SIZE: f32 = 1.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Unit vector pointing along `angle` (radians, 0 = +X, counter-clockwise)
    pub fn direction_vector(angle: f32) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }

    /// Wrap an angle into `[0, TAU)`
    pub fn wrap_angle(angle: f32) -> f32 {
        angle.rem_euclid(constants::TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tile_containing_negative_coordinates() {
        assert_eq!(TileCoord::containing(Point2::new(0.5, 0.5)), TileCoord::new(0, 0));
        assert_eq!(TileCoord::containing(Point2::new(-0.1, 2.0)), TileCoord::new(-1, 2));
    }

    #[test]
    fn test_direction_vector() {
        let right = utils::direction_vector(0.0);
        assert_relative_eq!(right, Vec2::new(1.0, 0.0), epsilon = 1e-6);

        let up = utils::direction_vector(constants::PI * 0.5);
        assert_relative_eq!(up, Vec2::new(0.0, 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_wrap_angle() {
        assert_relative_eq!(utils::wrap_angle(-constants::PI * 0.5), constants::PI * 1.5, epsilon = 1e-5);
        assert_relative_eq!(utils::wrap_angle(constants::TAU + 1.0), 1.0, epsilon = 1e-5);
    }
}
