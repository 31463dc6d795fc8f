//! Fixed-size tile grid addressed by `Pos`, stored row-major.

use std::ops::Range;

use crate::tiles::TileKind;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, kind: TileKind) -> Self {
        Self { width, height, tiles: vec![kind; width * height] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Reads outside the grid see solid rock.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        match self.index_of(pos) {
            Some(index) => self.tiles[index],
            None => TileKind::WallMedium,
        }
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.tile_at(pos).walkable()
    }

    pub fn set(&mut self, pos: Pos, kind: TileKind) {
        if let Some(index) = self.index_of(pos) {
            self.tiles[index] = kind;
        }
    }

    pub fn fill_rows(&mut self, rows: Range<usize>, kind: TileKind) {
        let start = rows.start.min(self.height) * self.width;
        let end = rows.end.min(self.height) * self.width;
        if start < end {
            self.tiles[start..end].fill(kind);
        }
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    pub fn walkable_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.walkable()).count()
    }

    pub fn positions_of(&self, kind: TileKind) -> Vec<Pos> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| **tile == kind)
            .map(|(index, _)| self.pos_of(index))
            .collect()
    }

    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width * 3 + 1) * self.height);
        for row in self.tiles.chunks(self.width.max(1)) {
            out.extend(row.iter().map(|tile| tile.glyph()));
            out.push('\n');
        }
        out
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.tiles.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        bytes.extend(self.tiles.iter().map(|tile| tile.code()));
        bytes
    }

    fn index_of(&self, pos: Pos) -> Option<usize> {
        self.in_bounds(pos).then(|| (pos.y as usize) * self.width + (pos.x as usize))
    }

    fn pos_of(&self, index: usize) -> Pos {
        Pos { y: (index / self.width) as i32, x: (index % self.width) as i32 }
    }
}
