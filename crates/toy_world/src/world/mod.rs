//! World model consumed by the collision core
//!
//! Terrain is answered through [`TileMap`], entities live in the
//! [`ObjectLayer`], and the [`Atlas`] ties the layers together.

pub mod atlas;
pub mod object_layer;
pub mod tile_layer;

pub use atlas::{Atlas, Layer, LayerKind};
pub use object_layer::{ObjectLayer, Rejection};
pub use tile_layer::{TileLayer, TileMap};
