//! # Toy World
//!
//! Collision core of a 2D tile-based world.
//!
//! ## Features
//!
//! - **Terrain**: tile layers answering whether a tile blocks movement
//! - **Object layer**: storage and exact range queries for free-moving entities
//! - **Collision checking**: entity against terrain, entity against entity,
//!   groups of entities and collision threats with a tolerance
//! - **Broad phase**: linear scan or a uniform grid giving identical results
//!
//! ## Quick Start
//!
//! ```rust
//! use toy_world::prelude::*;
//!
//! fn main() -> Result<(), PhysicsError> {
//!     let config = PhysicsConfig::default();
//!     let mut atlas = Atlas::from_obstacle_rows(&["....", "..#.", "...."], &config);
//!
//!     if let Some(objects) = atlas.object_layer_mut() {
//!         objects.add(PhysicalEntity::new(Point2::new(0.5, 0.5), Shape::circle(0.4)));
//!     }
//!
//!     let checker = CollisionChecker::new(&atlas, &config)?;
//!     let visitor = PhysicalEntity::new(Point2::new(2.5, 1.5), Shape::circle(0.3));
//!     assert!(checker.collides_with_tile(&visitor));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Shared configuration
pub mod config;
pub mod core;

pub mod foundation;
pub mod physics;
pub mod spatial;
pub mod world;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        core::{BroadPhaseKind, Config, ConfigError, PhysicsConfig},
        foundation::{
            collections::EntityKey,
            math::{Point2, TileCoord, Vec2},
        },
        physics::{
            Circle, CollisionChecker, ForwardMotion, PhysicalEntity, PhysicsError, RectangleF,
            Shape, WorldShape,
        },
        world::{Atlas, Layer, LayerKind, ObjectLayer, TileLayer, TileMap},
    };
}
