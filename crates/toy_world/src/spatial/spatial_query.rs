//! Abstract spatial query interface for broad-phase filtering
//!
//! This abstraction allows swapping spatial partitioning schemes without
//! changing the object layer. Implementations only have to be conservative:
//! every entity whose bounds overlap or touch the queried region must be
//! among the candidates. The object layer applies the exact shape test
//! afterwards, so extra candidates never change a query's result.

use crate::foundation::collections::EntityKey;
use crate::physics::collision::RectangleF;

/// Interface for spatial partitioning used by object layer range queries
pub trait SpatialQuery: Send + Sync {
    /// Insert an entity with its world-space bounds
    fn insert(&mut self, key: EntityKey, bounds: RectangleF);

    /// Remove an entity from the spatial structure
    fn remove(&mut self, key: EntityKey);

    /// Update an entity's bounds in the spatial structure
    fn update(&mut self, key: EntityKey, bounds: RectangleF) {
        self.remove(key);
        self.insert(key, bounds);
    }

    /// Candidate entities whose bounds may overlap `region`, without duplicates
    fn query_rectangle(&self, region: &RectangleF) -> Vec<EntityKey>;

    /// Clear all entities from the spatial structure
    fn clear(&mut self);

    /// Get the number of entities in the structure
    fn entity_count(&self) -> usize;
}
