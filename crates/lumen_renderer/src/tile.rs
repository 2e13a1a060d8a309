//! Tile partitioning of the supersample grid.
//!
//! The grid is cut into full-width row bands so that every tile maps to one
//! contiguous slice of the row-major supersample buffer. Tiles can then be
//! rendered independently and in parallel without sharing any pixels.

/// A rectangular region of the supersample grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of tile's top-left corner
    pub x: u32,
    /// Y coordinate of tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Index of this tile in submission order
    pub index: usize,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Rows per band so that `height` splits into about `target_count` bands.
pub fn band_height(height: u32, target_count: usize) -> u32 {
    let target = target_count.max(1) as u32;
    height.div_ceil(target).max(1)
}

/// Cut a `width` x `height` grid into full-width bands of `rows` rows each.
/// The last band takes whatever rows remain.
pub fn generate_bands(width: u32, height: u32, rows: u32) -> Vec<Tile> {
    let rows = rows.max(1);
    let mut tiles = Vec::new();

    let mut y = 0;
    while y < height {
        let h = rows.min(height - y);
        tiles.push(Tile::new(0, y, width, h, tiles.len()));
        y += rows;
    }

    tiles
}
