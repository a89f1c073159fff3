//! Primitive collision shapes and separation algorithms
//!
//! Provides the two world-space primitives of the tile world (circles and
//! axis-aligned rectangles) together with the signed separation between
//! every pair of them. Separation is negative when the primitives overlap,
//! zero when they touch and positive when a gap remains.

use crate::foundation::math::{Point2, TileCoord, Vec2};

/// A circle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// The center position of the circle
    pub center: Point2,
    /// The radius of the circle
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle with the given center and radius
    pub fn new(center: Point2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Smallest rectangle containing the circle
    pub fn bounding_rectangle(&self) -> RectangleF {
        RectangleF::from_center_extents(self.center, Vec2::new(self.radius, self.radius))
    }

    /// Signed separation between two circles
    pub fn separation(&self, other: &Circle) -> f32 {
        (self.center - other.center).magnitude() - self.radius - other.radius
    }

    /// Signed separation between this circle and a rectangle
    pub fn separation_from_rectangle(&self, rectangle: &RectangleF) -> f32 {
        rectangle.signed_distance(self.center) - self.radius
    }
}

/// Axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleF {
    /// Minimum corner of the rectangle
    pub min: Point2,
    /// Maximum corner of the rectangle
    pub max: Point2,
}

impl RectangleF {
    /// Create a new rectangle from min and max points
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its minimum corner and size
    pub fn from_position_size(position: Point2, size: Vec2) -> Self {
        Self {
            min: position,
            max: position + size,
        }
    }

    /// Create a rectangle centered at a point with given half extents
    pub fn from_center_extents(center: Point2, extents: Vec2) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Footprint of a single tile
    pub fn from_tile(tile: TileCoord) -> Self {
        use crate::foundation::math::constants::TILE_SIZE;
        let origin = tile.origin() * TILE_SIZE;
        Self::from_position_size(origin, Vec2::new(TILE_SIZE, TILE_SIZE))
    }

    /// Get the center of the rectangle
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Get the extents (half-size) of the rectangle
    pub fn extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Check if this rectangle overlaps or touches another rectangle
    pub fn overlaps(&self, other: &RectangleF) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Signed distance from a point to the rectangle boundary (negative inside)
    pub fn signed_distance(&self, point: Point2) -> f32 {
        let offset = (point - self.center()).abs() - self.extents();
        let outside = Vec2::new(offset.x.max(0.0), offset.y.max(0.0)).magnitude();
        let inside = offset.x.max(offset.y).min(0.0);
        outside + inside
    }

    /// Signed separation between two rectangles
    ///
    /// When the rectangles overlap on both axes this is minus the smaller
    /// overlap, otherwise the Euclidean length of the gap.
    pub fn separation(&self, other: &RectangleF) -> f32 {
        let gap_x = (self.min.x - other.max.x).max(other.min.x - self.max.x);
        let gap_y = (self.min.y - other.max.y).max(other.min.y - self.max.y);

        if gap_x < 0.0 && gap_y < 0.0 {
            gap_x.max(gap_y)
        } else {
            Vec2::new(gap_x.max(0.0), gap_y.max(0.0)).magnitude()
        }
    }

    /// Every tile whose cell overlaps or touches this rectangle
    pub fn tile_range(&self) -> impl Iterator<Item = TileCoord> {
        let min = TileCoord::containing(self.min);
        let max = TileCoord::containing(self.max);
        (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| TileCoord::new(x, y)))
    }
}
