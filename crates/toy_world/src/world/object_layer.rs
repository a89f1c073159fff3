//! Object layer
//!
//! Authoritative container of every physical entity in the object layer of
//! the world. Range queries return exactly the entities whose shape
//! intersects the queried region, whichever broad-phase strategy is active:
//!
//! - [`BroadPhaseKind::Linear`] tests every entity.
//! - [`BroadPhaseKind::Grid`] narrows candidates with a [`UniformGrid`] and
//!   applies the same exact test. Entities handed out through
//!   [`ObjectLayer::get_mut`] may move, so the grid is marked stale and
//!   queries scan linearly until [`ObjectLayer::refresh_index`] runs.

use crate::core::{BroadPhaseKind, PhysicsConfig};
use crate::foundation::collections::{EntityKey, EntityMap};
use crate::foundation::logging::{debug, trace, warn};
use crate::physics::collision::{Circle, RectangleF, WorldShape};
use crate::physics::PhysicalEntity;
use crate::spatial::{SpatialQuery, UniformGrid};

/// Reason an entity was refused by [`ObjectLayer::add`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rejection {
    /// The layer already holds `max_objects` entities
    Full,
    /// The entity's bounding radius exceeds the system-wide maximum
    TooLarge {
        /// Bounding radius of the refused entity
        radius: f32,
    },
    /// Position or shape contains NaN or infinity
    NotFinite,
    /// A circle radius or a rectangle side is below zero
    NegativeExtent,
}

/// Container of all physical entities of the object layer
pub struct ObjectLayer {
    entities: EntityMap<PhysicalEntity>,
    index: Option<UniformGrid>,
    index_stale: bool,
    max_objects: usize,
    max_object_radius: f32,
}

impl ObjectLayer {
    /// Create an empty layer with the placement policy and broad phase of `config`
    pub fn new(config: &PhysicsConfig) -> Self {
        let index = match config.broad_phase.kind {
            BroadPhaseKind::Linear => None,
            BroadPhaseKind::Grid => Some(UniformGrid::new(config.broad_phase.cell_size)),
        };

        Self {
            entities: EntityMap::with_key(),
            index,
            index_stale: false,
            max_objects: config.max_objects,
            max_object_radius: config.max_object_radius,
        }
    }

    /// Check the placement policy without inserting
    pub fn check_placement(&self, entity: &PhysicalEntity) -> Result<(), Rejection> {
        let radius = entity.bounding_radius();
        if !(entity.position.x.is_finite() && entity.position.y.is_finite() && radius.is_finite()) {
            return Err(Rejection::NotFinite);
        }
        if entity.shape.has_negative_extent() {
            return Err(Rejection::NegativeExtent);
        }
        if radius > self.max_object_radius {
            return Err(Rejection::TooLarge { radius });
        }
        if self.entities.len() >= self.max_objects {
            return Err(Rejection::Full);
        }
        Ok(())
    }

    /// Insert an entity if the placement policy allows it
    ///
    /// Returns the entity's key, or `None` with the layer left unchanged.
    pub fn add(&mut self, entity: PhysicalEntity) -> Option<EntityKey> {
        if let Err(rejection) = self.check_placement(&entity) {
            warn!("Object layer refused entity at {:?}: {:?}", entity.position, rejection);
            return None;
        }

        let bounds = entity.world_shape().bounding_rectangle();
        let key = self.entities.insert(entity);
        if !self.index_stale {
            if let Some(index) = self.index.as_mut() {
                index.insert(key, bounds);
            }
        }
        Some(key)
    }

    /// Remove an entity (picked up or destroyed)
    pub fn remove(&mut self, key: EntityKey) -> Option<PhysicalEntity> {
        let entity = self.entities.remove(key)?;
        if let Some(index) = self.index.as_mut() {
            index.remove(key);
        }
        Some(entity)
    }

    /// Get an entity by key
    pub fn get(&self, key: EntityKey) -> Option<&PhysicalEntity> {
        self.entities.get(key)
    }

    /// Get an entity for in-place mutation
    ///
    /// Marks the broad-phase index stale until [`Self::refresh_index`].
    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut PhysicalEntity> {
        let entity = self.entities.get_mut(key)?;
        if self.index.is_some() {
            self.index_stale = true;
        }
        Some(entity)
    }

    /// Iterate over every entity with its key
    pub fn iter(&self) -> impl Iterator<Item = (EntityKey, &PhysicalEntity)> {
        self.entities.iter()
    }

    /// Every entity of the layer
    pub fn get_all(&self) -> Vec<&PhysicalEntity> {
        self.entities.values().collect()
    }

    /// Whether `key` refers to a live entity
    pub fn contains(&self, key: EntityKey) -> bool {
        self.entities.contains_key(key)
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the layer holds no entity
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Largest bounding radius the layer accepts
    pub fn max_object_radius(&self) -> f32 {
        self.max_object_radius
    }

    /// Whether queries currently go through the grid index
    pub fn is_index_active(&self) -> bool {
        self.index.is_some() && !self.index_stale
    }

    /// Rebuild the broad-phase index from current positions
    pub fn refresh_index(&mut self) {
        let Some(index) = self.index.as_mut() else {
            return;
        };

        index.clear();
        for (key, entity) in &self.entities {
            index.insert(key, entity.world_shape().bounding_rectangle());
        }
        self.index_stale = false;
        debug!("Rebuilt object layer index with {} entities", self.entities.len());
    }

    /// Advance every movable entity by one tick and keep the index current
    ///
    /// A fresh index is updated entry by entry; a stale one is rebuilt.
    pub fn move_entities(&mut self, max_speed: f32) {
        let mut index = if self.index_stale { None } else { self.index.as_mut() };
        let mut moved = 0usize;
        for (key, entity) in &mut self.entities {
            if !entity.is_movable() {
                continue;
            }
            entity.move_forward(max_speed);
            moved += 1;
            if let Some(index) = index.as_mut() {
                index.update(key, entity.world_shape().bounding_rectangle());
            }
        }
        trace!("Moved {} entities", moved);

        if self.index_stale {
            self.refresh_index();
        }
    }

    /// Keys of the entities whose shape intersects `region`
    fn query_keys(&self, region: WorldShape) -> Vec<EntityKey> {
        let hits = |entity: &PhysicalEntity| entity.world_shape().intersects(&region, 0.0);

        let keys: Vec<EntityKey> = match self.index.as_ref() {
            Some(index) if !self.index_stale => index
                .query_rectangle(&region.bounding_rectangle())
                .into_iter()
                .filter(|&key| self.entities.get(key).is_some_and(hits))
                .collect(),
            _ => self
                .entities
                .iter()
                .filter(|(_, entity)| hits(entity))
                .map(|(key, _)| key)
                .collect(),
        };

        trace!("Object layer query {:?} matched {} entities", region, keys.len());
        keys
    }

    fn resolve(&self, keys: Vec<EntityKey>) -> Vec<&PhysicalEntity> {
        keys.into_iter().filter_map(|key| self.entities.get(key)).collect()
    }

    /// Keys of the entities intersecting a rectangle
    pub fn query_rectangle_keys(&self, rectangle: &RectangleF) -> Vec<EntityKey> {
        self.query_keys(WorldShape::Rectangle(*rectangle))
    }

    /// Keys of the entities intersecting a circle
    pub fn query_circle_keys(&self, circle: &Circle) -> Vec<EntityKey> {
        self.query_keys(WorldShape::Circle(*circle))
    }

    /// Entities intersecting a rectangle
    pub fn query_rectangle(&self, rectangle: &RectangleF) -> Vec<&PhysicalEntity> {
        self.resolve(self.query_rectangle_keys(rectangle))
    }

    /// Entities intersecting a circle
    pub fn query_circle(&self, circle: &Circle) -> Vec<&PhysicalEntity> {
        self.resolve(self.query_circle_keys(circle))
    }
}

impl Default for ObjectLayer {
    fn default() -> Self {
        Self::new(&PhysicsConfig::default())
    }
}

impl std::fmt::Debug for ObjectLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectLayer")
            .field("entities", &self.entities.len())
            .field("index_active", &self.is_index_active())
            .field("max_objects", &self.max_objects)
            .field("max_object_radius", &self.max_object_radius)
            .finish()
    }
}
