//! Spatial partitioning data structures
//!
//! Provides broad-phase indexing for object layer range queries.

pub mod spatial_query;
mod grid;

pub use grid::UniformGrid;
pub use spatial_query::SpatialQuery;
