//! Collision checker
//!
//! Answers the collision questions asked by game logic every tick:
//!
//! - does an entity overlap collidable terrain,
//! - does it overlap any other entity of the object layer,
//! - which of a set of candidates threaten a target.
//!
//! Entity queries follow the usual two-phase split. The broad phase asks the
//! object layer for everything inside a circle around the entity, sized from
//! the system-wide maximum object radius so that no intersecting entity can
//! be missed. The narrow phase runs the exact shape test on each candidate.
//!
//! A checker only borrows the world, so it is cheap to build and is usually
//! created once per tick after movement has been applied.

use super::collision::Circle;
use super::error::PhysicsError;
use super::PhysicalEntity;
use crate::core::PhysicsConfig;
use crate::foundation::logging::{debug, trace};
use crate::world::{Atlas, Layer, LayerKind, ObjectLayer, TileMap};

/// Collision queries over an object layer and a tile map
#[derive(Clone, Copy)]
pub struct CollisionChecker<'a> {
    objects: &'a ObjectLayer,
    tiles: &'a dyn TileMap,
    max_object_radius: f32,
    max_object_speed: f32,
    broad_phase_radius: f32,
}

impl<'a> CollisionChecker<'a> {
    /// Create a checker over the object layer and collidable terrain of `atlas`
    ///
    /// # Errors
    ///
    /// - [`PhysicsError::Config`] when `config` does not validate
    /// - [`PhysicsError::ObjectLayerMissing`] when the atlas has no object slot
    /// - [`PhysicsError::WrongLayerKind`] when the object slot holds tiles
    pub fn new(atlas: &'a Atlas, config: &PhysicsConfig) -> Result<Self, PhysicsError> {
        config.validate()?;

        let objects = match atlas.layer(LayerKind::Object) {
            Some(Layer::Object(objects)) => objects,
            Some(other) => {
                return Err(PhysicsError::WrongLayerKind {
                    slot: LayerKind::Object,
                    found: other.kind_name(),
                })
            }
            None => return Err(PhysicsError::ObjectLayerMissing),
        };

        debug!("Collision checker attached to object layer with {} entities", objects.len());
        Ok(Self::with_parts(objects, atlas, config))
    }

    /// Create a checker from explicit collaborators
    pub fn with_parts(objects: &'a ObjectLayer, tiles: &'a dyn TileMap, config: &PhysicsConfig) -> Self {
        Self {
            objects,
            tiles,
            max_object_radius: config.max_object_radius,
            max_object_speed: config.max_object_speed,
            broad_phase_radius: config.broad_phase_radius(),
        }
    }

    /// Largest bounding radius of any entity
    pub fn max_object_radius(&self) -> f32 {
        self.max_object_radius
    }

    /// Largest distance an entity travels in one tick
    pub fn max_object_speed(&self) -> f32 {
        self.max_object_speed
    }

    /// Whether any tile covered by the entity is collidable
    pub fn collides_with_tile(&self, entity: &PhysicalEntity) -> bool {
        entity
            .cover_tiles()
            .into_iter()
            .any(|tile| self.tiles.is_tile_colliding(tile))
    }

    /// Whether the entity grown by `eps` would touch collidable terrain
    ///
    /// Tests a dilated copy; `entity` itself is never modified.
    pub fn collides_with_tile_eps(&self, entity: &PhysicalEntity, eps: f32) -> bool {
        self.collides_with_tile(&entity.dilated(eps))
    }

    /// Whether the entity overlaps another entity of the object layer
    ///
    /// The entity itself is skipped when it is one of the layer's entities.
    pub fn collides_with_physical_entity(&self, entity: &PhysicalEntity) -> bool {
        // Layer entities are at most `max_object_radius` wide, so anything
        // touching `entity` reaches into this circle.
        let reach = self
            .broad_phase_radius
            .max(entity.bounding_radius() + self.max_object_radius);
        let candidates = self.objects.query_circle(&Circle::new(entity.position, reach));
        trace!("Broad phase around {:?} found {} candidates", entity.position, candidates.len());

        candidates
            .into_iter()
            .filter(|&other| !std::ptr::eq(other, entity))
            .any(|other| entity.intersects(other, 0.0))
    }

    /// Whether the entity overlaps terrain or another entity
    pub fn collides(&self, entity: &PhysicalEntity) -> bool {
        self.collides_with_tile(entity) || self.collides_with_physical_entity(entity)
    }

    /// Whether any two members of the group overlap
    pub fn collides_with_each_other(&self, group: &[&PhysicalEntity]) -> bool {
        group.iter().enumerate().any(|(i, a)| {
            group[i + 1..].iter().any(|b| a.intersects(b, 0.0))
        })
    }

    /// Whether any member of the group hits terrain or another member
    pub fn collides_group(&self, group: &[&PhysicalEntity]) -> bool {
        group.iter().any(|entity| self.collides_with_tile(entity)) || self.collides_with_each_other(group)
    }

    /// Candidates that intersect `target` when shapes are widened by `eps`
    ///
    /// `target` is never reported, and a candidate listed twice is reported
    /// once. Order is unspecified.
    pub fn collision_threat<'e>(
        &self,
        target: &PhysicalEntity,
        candidates: &[&'e PhysicalEntity],
        eps: f32,
    ) -> Vec<&'e PhysicalEntity> {
        let mut threats: Vec<&'e PhysicalEntity> = Vec::new();
        for &candidate in candidates {
            if std::ptr::eq(candidate, target) || threats.iter().any(|&seen| std::ptr::eq(seen, candidate)) {
                continue;
            }
            if target.intersects(candidate, eps) {
                threats.push(candidate);
            }
        }
        threats
    }

    /// Groups of entities that may collide with each other
    ///
    /// Always a single group holding every entity of the layer; an empty
    /// layer yields one empty group.
    // TODO: split into clusters of entities within 2 * max_object_radius + max_object_speed
    pub fn collision_groups(&self) -> Vec<Vec<&'a PhysicalEntity>> {
        vec![self.objects.get_all()]
    }
}

impl std::fmt::Debug for CollisionChecker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollisionChecker")
            .field("objects", self.objects)
            .field("max_object_radius", &self.max_object_radius)
            .field("max_object_speed", &self.max_object_speed)
            .field("broad_phase_radius", &self.broad_phase_radius)
            .finish_non_exhaustive()
    }
}
