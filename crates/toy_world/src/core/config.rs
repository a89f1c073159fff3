//! # Physics Configuration
//!
//! Tunables for the collision core: the system-wide object bounds used by
//! the broad phase, the object layer's placement policy, the terrain
//! default outside the map, and the choice of broad-phase index.
//!
//! All structures load from TOML or RON through the [`Config`] trait and
//! fall back to defaults for missing fields.

use serde::{Serialize, Deserialize};

// Re-export from the config module for convenience
pub use crate::config::{Config, ConfigError};

/// Strategy used by an object layer to answer range queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BroadPhaseKind {
    /// Scan every entity of the layer
    #[default]
    Linear,
    /// Uniform grid keyed by cell, rebuilt on demand
    Grid,
}

/// # Broad-Phase Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BroadPhaseConfig {
    /// Index used for object layer range queries
    pub kind: BroadPhaseKind,
    /// Grid cell edge length in world units (only used by [`BroadPhaseKind::Grid`])
    pub cell_size: f32,
}

impl Default for BroadPhaseConfig {
    fn default() -> Self {
        Self {
            kind: BroadPhaseKind::Linear,
            cell_size: 10.0,
        }
    }
}

/// # Physics Configuration
///
/// `max_object_radius` is an upper bound on the bounding radius of any single
/// entity. The collision checker's broad phase searches a circle of twice
/// that radius, so the object layer refuses entities that exceed it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Largest bounding radius any entity may have
    pub max_object_radius: f32,
    /// Largest distance an entity may travel in a single tick
    pub max_object_speed: f32,
    /// Capacity of an object layer
    pub max_objects: usize,
    /// Value reported for tiles outside the map
    pub out_of_bounds_colliding: bool,
    /// Broad-phase index settings
    pub broad_phase: BroadPhaseConfig,
}

impl PhysicsConfig {
    /// Use a uniform grid broad phase with the given cell size
    pub fn with_grid(mut self, cell_size: f32) -> Self {
        self.broad_phase = BroadPhaseConfig {
            kind: BroadPhaseKind::Grid,
            cell_size,
        };
        self
    }

    /// Set the object layer capacity
    pub fn with_max_objects(mut self, max_objects: usize) -> Self {
        self.max_objects = max_objects;
        self
    }

    /// Radius of the circle searched around an entity during the broad phase
    pub fn broad_phase_radius(&self) -> f32 {
        2.0 * self.max_object_radius
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.max_object_radius.is_finite() && self.max_object_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_object_radius must be positive, got {}",
                self.max_object_radius
            )));
        }
        if !(self.max_object_speed.is_finite() && self.max_object_speed >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_object_speed must be non-negative, got {}",
                self.max_object_speed
            )));
        }
        if self.broad_phase.kind == BroadPhaseKind::Grid {
            let cell_size = self.broad_phase.cell_size;
            // Smaller cells would still be exact, but defeat the point of the grid.
            if !cell_size.is_finite() || cell_size < self.broad_phase_radius() {
                return Err(ConfigError::Invalid(format!(
                    "grid cell_size {} must be at least 2 * max_object_radius ({})",
                    cell_size,
                    self.broad_phase_radius()
                )));
            }
        }
        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            max_object_radius: 5.0,
            max_object_speed: 1.0,
            max_objects: 4096,
            out_of_bounds_colliding: true,
            broad_phase: BroadPhaseConfig::default(),
        }
    }
}

impl Config for PhysicsConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = PhysicsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.broad_phase_radius(), 10.0);
    }

    #[test]
    fn test_grid_cell_too_small_rejected() {
        let config = PhysicsConfig::default().with_grid(4.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = PhysicsConfig::default().with_grid(10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_positive_radius_rejected() {
        let config = PhysicsConfig {
            max_object_radius: 0.0,
            ..PhysicsConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PhysicsConfig::default().with_grid(12.0).with_max_objects(16);
        let text = config.to_string_with_format("physics.toml").unwrap();
        let parsed = PhysicsConfig::from_str_with_format(&text, "physics.toml").unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_ron_partial_uses_defaults() {
        let parsed = PhysicsConfig::from_str_with_format(
            "(max_object_radius: 2.5, broad_phase: (kind: grid))",
            "physics.ron",
        )
        .unwrap();
        assert_eq!(parsed.max_object_radius, 2.5);
        assert_eq!(parsed.broad_phase.kind, BroadPhaseKind::Grid);
        assert_eq!(parsed.broad_phase.cell_size, 10.0);
        assert_eq!(parsed.max_objects, PhysicsConfig::default().max_objects);
    }

    #[test]
    fn test_unsupported_format() {
        let result = PhysicsConfig::from_str_with_format("", "physics.json");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
