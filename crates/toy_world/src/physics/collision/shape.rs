//! High-level collision shape abstractions
//!
//! Shapes are stored in model space (centered on their owner's position)
//! and placed into world space on demand for collision tests.

use serde::{Deserialize, Serialize};

use super::primitives::{Circle, RectangleF};
use crate::foundation::math::{Point2, TileCoord, Vec2};

/// Collision shape types (stored in MODEL SPACE)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// A circular shape (radius only, position from the owning entity)
    Circle {
        /// Radius in world units
        radius: f32,
    },
    /// An axis-aligned rectangular footprint centered on the owner
    Rectangle {
        /// Full width and height in world units
        size: Vec2,
    },
}

impl Shape {
    /// Creates a circular shape with given radius
    pub fn circle(radius: f32) -> Self {
        Self::Circle { radius }
    }

    /// Creates a rectangular shape with given size
    pub fn rectangle(size: Vec2) -> Self {
        Self::Rectangle { size }
    }

    /// Grow the shape by `delta` in every direction (shrink for negative values)
    ///
    /// A circle's radius and a rectangle's half extents change by `delta`,
    /// so `resize(d)` followed by `resize(-d)` restores the shape.
    pub fn resize(&mut self, delta: f32) {
        match self {
            Self::Circle { radius } => *radius += delta,
            Self::Rectangle { size } => *size += Vec2::new(2.0 * delta, 2.0 * delta),
        }
    }

    /// Copy of this shape grown by `delta`, with extents clamped at zero
    pub fn dilated(&self, delta: f32) -> Self {
        match *self {
            Self::Circle { radius } => Self::Circle {
                radius: (radius + delta).max(0.0),
            },
            Self::Rectangle { size } => Self::Rectangle {
                size: Vec2::new(
                    (size.x + 2.0 * delta).max(0.0),
                    (size.y + 2.0 * delta).max(0.0),
                ),
            },
        }
    }

    /// Radius of the smallest centered circle containing the shape
    pub fn bounding_radius(&self) -> f32 {
        match self {
            Self::Circle { radius } => *radius,
            Self::Rectangle { size } => size.magnitude() * 0.5,
        }
    }

    /// Whether a radius or a side length is below zero
    pub fn has_negative_extent(&self) -> bool {
        match self {
            Self::Circle { radius } => *radius < 0.0,
            Self::Rectangle { size } => size.x < 0.0 || size.y < 0.0,
        }
    }

    /// Place this shape into world space at `position`
    pub fn at(&self, position: Point2) -> WorldShape {
        match *self {
            Self::Circle { radius } => WorldShape::Circle(Circle::new(position, radius)),
            Self::Rectangle { size } => {
                WorldShape::Rectangle(RectangleF::from_center_extents(position, size * 0.5))
            }
        }
    }
}

/// World-space collision shape (temporary, for testing only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorldShape {
    /// World-space circle
    Circle(Circle),
    /// World-space rectangle
    Rectangle(RectangleF),
}

impl WorldShape {
    /// Get center position
    pub fn center(&self) -> Point2 {
        match self {
            Self::Circle(circle) => circle.center,
            Self::Rectangle(rect) => rect.center(),
        }
    }

    /// Get the axis-aligned bounding rectangle
    pub fn bounding_rectangle(&self) -> RectangleF {
        match self {
            Self::Circle(circle) => circle.bounding_rectangle(),
            Self::Rectangle(rect) => *rect,
        }
    }

    /// Signed separation between two world shapes
    ///
    /// One routine per pair of shape kinds; the mixed pairs share a single
    /// routine so the result does not depend on argument order.
    pub fn separation(&self, other: &WorldShape) -> f32 {
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => a.separation(b),

            (Self::Circle(circle), Self::Rectangle(rect))
            | (Self::Rectangle(rect), Self::Circle(circle)) => {
                circle.separation_from_rectangle(rect)
            }

            (Self::Rectangle(a), Self::Rectangle(b)) => a.separation(b),
        }
    }

    /// Test if this shape intersects another shape, widened by `eps`
    ///
    /// Shapes intersect when their separation is strictly below `eps`;
    /// shapes that merely touch do not intersect at `eps == 0`.
    pub fn intersects(&self, other: &WorldShape, eps: f32) -> bool {
        self.separation(other) < eps
    }

    /// Tiles whose cell this shape overlaps
    pub fn cover_tiles(&self) -> Vec<TileCoord> {
        self.bounding_rectangle()
            .tile_range()
            .filter(|&tile| {
                let cell = WorldShape::Rectangle(RectangleF::from_tile(tile));
                self.intersects(&cell, 0.0)
            })
            .collect()
    }
}

impl From<Circle> for WorldShape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<RectangleF> for WorldShape {
    fn from(rect: RectangleF) -> Self {
        Self::Rectangle(rect)
    }
}
