/// One glyph on the display grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub x: i32,
    pub y: i32,
    pub glyph: char,

    /// Colour slot allocated by the render pass
    pub slot: u16,
}

/// Tiles of one render pass in drawing order. Later tiles cover earlier
/// ones on the same cell.
#[derive(Debug, Clone, Default)]
pub struct TileBuffer {
    tiles: Vec<Tile>,
}

impl TileBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// The visible tile at a cell, if any
    pub fn top_at(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tiles.iter().rev().find(|tile| tile.x == x && tile.y == y)
    }
}
