//! Physical entities
//!
//! A physical entity is the collision body of exactly one game object: a
//! shape bound to a position, optionally able to move forward along a
//! heading. Entities are mutated in place every tick by movement code
//! outside the collision core; everything derived from position and shape
//! (world shape, cover tiles) is recomputed on each request.

use serde::{Deserialize, Serialize};

use super::collision::{Shape, WorldShape};
use crate::foundation::math::{utils, Point2, TileCoord, Vec2};

/// Forward movement capability of a movable entity
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ForwardMotion {
    /// Distance travelled per tick along `direction`
    pub speed: f32,

    /// Heading in radians (0 = +X, counter-clockwise)
    pub direction: f32,

    /// Change of heading per tick in radians
    pub rotation_speed: f32,
}

impl ForwardMotion {
    /// Create a motion heading along `direction` at `speed`
    pub fn new(speed: f32, direction: f32) -> Self {
        Self {
            speed,
            direction: utils::wrap_angle(direction),
            rotation_speed: 0.0,
        }
    }

    /// Displacement produced by one tick at the current heading
    pub fn velocity(&self) -> Vec2 {
        utils::direction_vector(self.direction) * self.speed
    }
}

/// Collision body of a game object
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalEntity {
    /// World-space position of the shape's center
    pub position: Point2,

    /// Collision shape in model space
    pub shape: Shape,

    /// Bounces off on contact instead of stopping (read by gameplay response only)
    pub elastic_collision: bool,

    /// Present for entities that can move by themselves
    pub motion: Option<ForwardMotion>,
}

impl PhysicalEntity {
    /// Create a static entity
    pub fn new(position: Point2, shape: Shape) -> Self {
        Self {
            position,
            shape,
            elastic_collision: false,
            motion: None,
        }
    }

    /// Circular body fitted inside a sprite footprint of the given size
    pub fn circle(position: Point2, size: Vec2) -> Self {
        Self::new(position, Shape::circle(size.x.min(size.y) * 0.5))
    }

    /// Rectangular body matching a sprite footprint of the given size
    pub fn rectangle(position: Point2, size: Vec2) -> Self {
        Self::new(position, Shape::rectangle(size))
    }

    /// Mark this entity as bouncing on contact
    pub fn with_elastic_collision(mut self, elastic: bool) -> Self {
        self.elastic_collision = elastic;
        self
    }

    /// Give this entity forward movement
    pub fn with_motion(mut self, motion: ForwardMotion) -> Self {
        self.motion = Some(motion);
        self
    }

    /// Whether this entity can move by itself
    pub fn is_movable(&self) -> bool {
        self.motion.is_some()
    }

    /// Shape placed at the current position
    pub fn world_shape(&self) -> WorldShape {
        self.shape.at(self.position)
    }

    /// Radius of the smallest circle around `position` containing the shape
    pub fn bounding_radius(&self) -> f32 {
        self.shape.bounding_radius()
    }

    /// Tiles overlapped by the shape at the current position
    pub fn cover_tiles(&self) -> Vec<TileCoord> {
        self.world_shape().cover_tiles()
    }

    /// Test whether this entity's shape intersects another's, widened by `eps`
    pub fn intersects(&self, other: &PhysicalEntity, eps: f32) -> bool {
        self.world_shape().intersects(&other.world_shape(), eps)
    }

    /// Copy of this entity with its shape grown by `eps`
    pub fn dilated(&self, eps: f32) -> Self {
        Self {
            shape: self.shape.dilated(eps),
            ..self.clone()
        }
    }

    /// Advance one tick: turn by `rotation_speed`, then move `speed` along the heading
    ///
    /// `max_speed` caps the distance travelled. Static entities are left untouched.
    pub fn move_forward(&mut self, max_speed: f32) {
        let Some(motion) = self.motion.as_mut() else {
            return;
        };

        motion.direction = utils::wrap_angle(motion.direction + motion.rotation_speed);
        motion.speed = motion.speed.clamp(-max_speed, max_speed);
        self.position += motion.velocity();
    }

    /// Position this entity would occupy after one call to [`Self::move_forward`]
    pub fn predicted_position(&self, max_speed: f32) -> Point2 {
        let mut next = self.clone();
        next.move_forward(max_speed);
        next.position
    }
}
