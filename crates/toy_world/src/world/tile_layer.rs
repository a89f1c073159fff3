//! Static terrain
//!
//! The collision core consumes terrain through the single question
//! "is this tile collidable". [`TileLayer`] is the dense grid
//! implementation used by the atlas.

use std::collections::HashSet;

use crate::foundation::math::TileCoord;

/// Source of terrain collision data
///
/// Implementations must answer for every coordinate, including ones
/// outside the map, and must not change their answer between calls
/// unless the terrain itself is edited.
pub trait TileMap {
    /// Whether the tile at `coord` blocks movement
    fn is_tile_colliding(&self, coord: TileCoord) -> bool;
}

/// Sparse terrain: exactly the listed tiles collide
impl TileMap for HashSet<TileCoord> {
    fn is_tile_colliding(&self, coord: TileCoord) -> bool {
        self.contains(&coord)
    }
}

/// Dense rectangular grid of tiles anchored at tile `(0, 0)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    width: u32,
    height: u32,
    colliding: Vec<bool>,
    out_of_bounds_colliding: bool,
}

impl TileLayer {
    /// Create a layer of `width` x `height` free tiles
    ///
    /// Tiles outside the layer report `out_of_bounds_colliding`.
    pub fn new(width: u32, height: u32, out_of_bounds_colliding: bool) -> Self {
        Self {
            width,
            height,
            colliding: vec![false; width as usize * height as usize],
            out_of_bounds_colliding,
        }
    }

    /// Build a layer from rows of characters, `#` marking a collidable tile
    ///
    /// The first row is `y = 0`. Rows shorter than the widest one are
    /// padded with free tiles.
    pub fn from_rows(rows: &[&str], out_of_bounds_colliding: bool) -> Self {
        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);
        let mut layer = Self::new(
            u32::try_from(width).unwrap_or(u32::MAX),
            u32::try_from(rows.len()).unwrap_or(u32::MAX),
            out_of_bounds_colliding,
        );
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
                        layer.set_colliding(TileCoord::new(x, y), true);
                    }
                }
            }
        }
        layer
    }

    /// Layer width in tiles
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Layer height in tiles
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether `coord` lies inside the layer
    pub fn contains(&self, coord: TileCoord) -> bool {
        self.index(coord).is_some()
    }

    fn index(&self, coord: TileCoord) -> Option<usize> {
        let x = u32::try_from(coord.x).ok()?;
        let y = u32::try_from(coord.y).ok()?;
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Mark a tile as collidable or free
    ///
    /// Returns `false` and changes nothing when `coord` is outside the layer.
    pub fn set_colliding(&mut self, coord: TileCoord, colliding: bool) -> bool {
        match self.index(coord) {
            Some(index) => {
                self.colliding[index] = colliding;
                true
            }
            None => false,
        }
    }

    /// Number of collidable tiles inside the layer
    pub fn colliding_count(&self) -> usize {
        self.colliding.iter().filter(|&&c| c).count()
    }
}

impl TileMap for TileLayer {
    fn is_tile_colliding(&self, coord: TileCoord) -> bool {
        match self.index(coord) {
            Some(index) => self.colliding[index],
            None => self.out_of_bounds_colliding,
        }
    }
}
