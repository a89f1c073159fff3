//! Physics errors

use thiserror::Error;

use crate::config::ConfigError;
use crate::world::LayerKind;

/// Errors raised while setting up the collision core
///
/// Queries never fail once a checker exists; these only surface at
/// construction time.
#[derive(Error, Debug)]
pub enum PhysicsError {
    /// The world has no object layer
    #[error("Object layer not found")]
    ObjectLayerMissing,

    /// The object layer slot holds a layer of another kind
    #[error("Layer registered as {slot:?} is a {found} layer, expected an object layer")]
    WrongLayerKind {
        /// Slot that was looked up
        slot: LayerKind,
        /// What the slot actually holds
        found: &'static str,
    },

    /// Physics configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
