//! Uniform grid spatial index
//!
//! Divides the plane into square cells of a fixed size. An entity is stored
//! in every cell its bounding rectangle touches, so two rectangles that
//! overlap or touch always share at least one cell.
//!
//! A query spanning more cells than there are stored entities tests the
//! stored bounds directly, so its cost never exceeds a scan of the entries.

use std::collections::{HashMap, HashSet};

use super::spatial_query::SpatialQuery;
use crate::foundation::collections::EntityKey;
use crate::physics::collision::RectangleF;

type CellKey = (i32, i32);

/// Uniform grid keyed by integer cell coordinates
#[derive(Debug, Clone)]
pub struct UniformGrid {
    cell_size: f32,
    cells: HashMap<CellKey, Vec<EntityKey>>,
    /// Bounds of every stored entity, needed to find its cells on removal
    entries: HashMap<EntityKey, RectangleF>,
}

impl UniformGrid {
    /// Create an empty grid
    ///
    /// `cell_size` is expected to be positive and finite; callers validate
    /// it through [`crate::core::PhysicsConfig::validate`].
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: HashMap::new(),
            entries: HashMap::new(),
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell_key(&self, x: f32, y: f32) -> CellKey {
        (
            (x / self.cell_size).floor() as i32,
            (y / self.cell_size).floor() as i32,
        )
    }

    fn cells_of(&self, bounds: &RectangleF) -> impl Iterator<Item = CellKey> {
        let (min_x, min_y) = self.cell_key(bounds.min.x, bounds.min.y);
        let (max_x, max_y) = self.cell_key(bounds.max.x, bounds.max.y);
        (min_y..=max_y).flat_map(move |y| (min_x..=max_x).map(move |x| (x, y)))
    }

    fn cell_count(&self, bounds: &RectangleF) -> u64 {
        let (min_x, min_y) = self.cell_key(bounds.min.x, bounds.min.y);
        let (max_x, max_y) = self.cell_key(bounds.max.x, bounds.max.y);
        let span = |min: i32, max: i32| u64::try_from(i64::from(max) - i64::from(min) + 1).unwrap_or(0);
        span(min_x, max_x).saturating_mul(span(min_y, max_y))
    }
}

impl SpatialQuery for UniformGrid {
    fn insert(&mut self, key: EntityKey, bounds: RectangleF) {
        if self.entries.contains_key(&key) {
            self.remove(key);
        }
        let cells: Vec<CellKey> = self.cells_of(&bounds).collect();
        for cell in cells {
            self.cells.entry(cell).or_default().push(key);
        }
        self.entries.insert(key, bounds);
    }

    fn remove(&mut self, key: EntityKey) {
        let Some(bounds) = self.entries.remove(&key) else {
            return;
        };
        let cells: Vec<CellKey> = self.cells_of(&bounds).collect();
        for cell in cells {
            if let Some(keys) = self.cells.get_mut(&cell) {
                keys.retain(|&k| k != key);
                if keys.is_empty() {
                    self.cells.remove(&cell);
                }
            }
        }
    }

    fn query_rectangle(&self, region: &RectangleF) -> Vec<EntityKey> {
        if self.cell_count(region) > u64::try_from(self.entries.len()).unwrap_or(u64::MAX) {
            return self
                .entries
                .iter()
                .filter(|(_, bounds)| bounds.overlaps(region))
                .map(|(&key, _)| key)
                .collect();
        }

        let mut seen = HashSet::new();
        let mut result = Vec::new();
        for cell in self.cells_of(region) {
            if let Some(keys) = self.cells.get(&cell) {
                for &key in keys {
                    if seen.insert(key) {
                        result.push(key);
                    }
                }
            }
        }
        result
    }

    fn clear(&mut self) {
        self.cells.clear();
        self.entries.clear();
    }

    fn entity_count(&self) -> usize {
        self.entries.len()
    }
}
