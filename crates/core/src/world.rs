//! Finished levels and the ordered stack that forms a world.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::grid::Grid;
use crate::tiles::TileKind;
use crate::types::{LevelKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    pub depth: usize,
    pub kind: LevelKind,
    pub grid: Grid,
    pub stairs_down: Pos,
    /// Bottom cell of every shaft carved from the surface; empty below it.
    pub shafts: Vec<Pos>,
}

impl Level {
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.grid.tile_at(pos)
    }

    /// First walkable cell scanning columns left to right, rows top to bottom.
    pub fn explorer_start(&self) -> Option<Pos> {
        (0..self.grid.width())
            .flat_map(|x| (0..self.grid.height()).map(move |y| Pos::new(x as i32, y as i32)))
            .find(|&pos| self.grid.tile_at(pos).walkable())
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.depth as u32).to_le_bytes());
        bytes.push(match self.kind {
            LevelKind::Surface => 0,
            LevelKind::Cave => 1,
        });
        bytes.extend(self.grid.canonical_bytes());
        bytes.extend(self.stairs_down.y.to_le_bytes());
        bytes.extend(self.stairs_down.x.to_le_bytes());
        bytes.extend((self.shafts.len() as u32).to_le_bytes());
        for shaft in &self.shafts {
            bytes.extend(shaft.y.to_le_bytes());
            bytes.extend(shaft.x.to_le_bytes());
        }
        bytes
    }

    pub fn summary(&self) -> LevelSummary {
        LevelSummary {
            depth: self.depth,
            kind: self.kind,
            walkable_cells: self.grid.walkable_count(),
            stairs_down: self.stairs_down,
            shafts: self.shafts.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    levels: Vec<Level>,
}

impl World {
    pub(crate) fn from_levels(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, depth: usize) -> Option<&Level> {
        self.levels.get(depth)
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn surface(&self) -> Option<&Level> {
        self.levels.first()
    }

    /// Missing levels read as solid rock, like out-of-range cells.
    pub fn tile_at(&self, depth: usize, pos: Pos) -> TileKind {
        self.level(depth).map_or(TileKind::WallMedium, |level| level.tile_at(pos))
    }

    pub fn explorer_start(&self, depth: usize) -> Option<Pos> {
        self.level(depth).and_then(Level::explorer_start)
    }

    pub fn fingerprint(&self) -> u64 {
        let bytes: Vec<u8> = self.levels.iter().flat_map(Level::canonical_bytes).collect();
        xxh3_64(&bytes)
    }

    /// `0x` followed by exactly 16 lowercase hex digits.
    pub fn fingerprint_hex(&self) -> String {
        format!("0x{:016x}", self.fingerprint())
    }

    pub fn summary(&self) -> WorldSummary {
        WorldSummary {
            fingerprint: self.fingerprint_hex(),
            levels: self.levels.iter().map(Level::summary).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LevelSummary {
    pub depth: usize,
    pub kind: LevelKind,
    pub walkable_cells: usize,
    pub stairs_down: Pos,
    pub shafts: Vec<Pos>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WorldSummary {
    pub fingerprint: String,
    pub levels: Vec<LevelSummary>,
}
