//! World atlas
//!
//! The atlas owns every layer of the world, keyed by [`LayerKind`]. The
//! collision core looks up the object layer here and treats the atlas as
//! a [`TileMap`] that merges the collidable tile layers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::object_layer::ObjectLayer;
use super::tile_layer::{TileLayer, TileMap};
use crate::core::PhysicsConfig;
use crate::foundation::logging::debug;
use crate::foundation::math::TileCoord;

/// Slot of a layer in the atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Ground tiles drawn below everything
    Background,
    /// Decoration lying on the ground
    OnBackground,
    /// Walls and other blocking terrain
    Obstacle,
    /// Blocking terrain that actors can act on (doors, switches)
    ObstacleInteractable,
    /// Free-moving physical entities
    Object,
    /// Tiles drawn over everything
    Foreground,
}

impl LayerKind {
    /// Whether tiles of this layer block movement
    pub fn is_collidable(self) -> bool {
        matches!(self, Self::Obstacle | Self::ObstacleInteractable)
    }
}

/// A layer stored in the atlas
#[derive(Debug)]
pub enum Layer {
    /// Container of physical entities
    Object(ObjectLayer),
    /// Static grid of tiles
    Tiles(TileLayer),
}

impl Layer {
    /// Short name of the layer's variant, used in error messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Object(_) => "object",
            Self::Tiles(_) => "tile",
        }
    }
}

impl From<ObjectLayer> for Layer {
    fn from(layer: ObjectLayer) -> Self {
        Self::Object(layer)
    }
}

impl From<TileLayer> for Layer {
    fn from(layer: TileLayer) -> Self {
        Self::Tiles(layer)
    }
}

/// All layers of a world
#[derive(Debug, Default)]
pub struct Atlas {
    layers: HashMap<LayerKind, Layer>,
}

impl Atlas {
    /// Create an atlas without layers
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an atlas holding an empty object layer and an obstacle layer
    ///
    /// Obstacles are given as rows with `#` marking a wall (see
    /// [`TileLayer::from_rows`]); tiles outside the rows follow
    /// `config.out_of_bounds_colliding`.
    pub fn from_obstacle_rows(rows: &[&str], config: &PhysicsConfig) -> Self {
        let mut atlas = Self::new();
        atlas.insert_layer(
            LayerKind::Obstacle,
            TileLayer::from_rows(rows, config.out_of_bounds_colliding),
        );
        atlas.insert_layer(LayerKind::Object, ObjectLayer::new(config));
        atlas
    }

    /// Put a layer into a slot, returning the layer it replaces
    pub fn insert_layer(&mut self, kind: LayerKind, layer: impl Into<Layer>) -> Option<Layer> {
        let layer = layer.into();
        debug!("Atlas slot {:?} now holds a {} layer", kind, layer.kind_name());
        self.layers.insert(kind, layer)
    }

    /// Remove the layer of a slot
    pub fn remove_layer(&mut self, kind: LayerKind) -> Option<Layer> {
        self.layers.remove(&kind)
    }

    /// Layer stored in a slot
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.get(&kind)
    }

    /// Mutable layer stored in a slot
    pub fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut Layer> {
        self.layers.get_mut(&kind)
    }

    /// The object layer, if the object slot holds one
    pub fn object_layer(&self) -> Option<&ObjectLayer> {
        match self.layer(LayerKind::Object)? {
            Layer::Object(layer) => Some(layer),
            Layer::Tiles(_) => None,
        }
    }

    /// Mutable object layer, if the object slot holds one
    pub fn object_layer_mut(&mut self) -> Option<&mut ObjectLayer> {
        match self.layer_mut(LayerKind::Object)? {
            Layer::Object(layer) => Some(layer),
            Layer::Tiles(_) => None,
        }
    }

    /// Tile layer of a slot, if that slot holds one
    pub fn tile_layer(&self, kind: LayerKind) -> Option<&TileLayer> {
        match self.layer(kind)? {
            Layer::Tiles(layer) => Some(layer),
            Layer::Object(_) => None,
        }
    }

    /// Mutable tile layer of a slot, if that slot holds one
    pub fn tile_layer_mut(&mut self, kind: LayerKind) -> Option<&mut TileLayer> {
        match self.layer_mut(kind)? {
            Layer::Tiles(layer) => Some(layer),
            Layer::Object(_) => None,
        }
    }
}

/// A tile collides when any collidable tile layer says so
///
/// With no collidable tile layer nothing collides.
impl TileMap for Atlas {
    fn is_tile_colliding(&self, coord: TileCoord) -> bool {
        self.layers.iter().any(|(kind, layer)| match layer {
            Layer::Tiles(tiles) => kind.is_collidable() && tiles.is_tile_colliding(coord),
            Layer::Object(_) => false,
        })
    }
}
