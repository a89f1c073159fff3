//! Physics module for collision detection
//!
//! Provides the collision shapes of the tile world, the physical entities
//! that carry them, and the [`CollisionChecker`] answering terrain and
//! entity collision queries with a broad phase followed by an exact
//! narrow phase.

pub mod collision;
pub mod collision_checker;
pub mod entity;
pub mod error;

#[cfg(test)]
mod tests;

pub use collision::{Circle, RectangleF, Shape, WorldShape};
pub use collision_checker::CollisionChecker;
pub use entity::{ForwardMotion, PhysicalEntity};
pub use error::PhysicsError;
