//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Stable handle of a physical entity inside an object layer
    pub struct EntityKey;
}

/// Handle-based map of entities with stable keys
pub type EntityMap<T> = SlotMap<EntityKey, T>;
