//! Fixed tile catalog: walkability, glyph and color for every terrain kind.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const COLOR_GRASS: Rgb = Rgb(100, 180, 60);
pub const COLOR_TREE: Rgb = Rgb(20, 120, 20);
pub const COLOR_WATER: Rgb = Rgb(40, 80, 180);
pub const COLOR_DIRT: Rgb = Rgb(120, 90, 60);
pub const COLOR_WALL: Rgb = Rgb(100, 100, 100);
pub const COLOR_STAIRS: Rgb = Rgb(200, 160, 120);
pub const COLOR_EXPLORER: Rgb = Rgb(255, 255, 220);
pub const COLOR_STATUS: Rgb = Rgb(200, 200, 200);

pub const EXPLORER_GLYPH: char = '☻';

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    GrassFloor,
    DirtFloor,
    Water,
    Tree,
    WallLight,
    WallMedium,
    WallHeavy,
    StairsUp,
    StairsDown,
}

impl TileKind {
    pub const ALL: [TileKind; 9] = [
        TileKind::GrassFloor,
        TileKind::DirtFloor,
        TileKind::Water,
        TileKind::Tree,
        TileKind::WallLight,
        TileKind::WallMedium,
        TileKind::WallHeavy,
        TileKind::StairsUp,
        TileKind::StairsDown,
    ];

    pub const fn walkable(self) -> bool {
        matches!(
            self,
            TileKind::GrassFloor | TileKind::DirtFloor | TileKind::StairsUp | TileKind::StairsDown
        )
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, TileKind::WallLight | TileKind::WallMedium | TileKind::WallHeavy)
    }

    pub const fn glyph(self) -> char {
        match self {
            TileKind::GrassFloor => ',',
            TileKind::DirtFloor => '·',
            TileKind::Water => '≈',
            TileKind::Tree => '♣',
            TileKind::WallLight => '▒',
            TileKind::WallMedium => '▓',
            TileKind::WallHeavy => '█',
            TileKind::StairsUp => '<',
            TileKind::StairsDown => '>',
        }
    }

    pub const fn color(self) -> Rgb {
        match self {
            TileKind::GrassFloor => COLOR_GRASS,
            TileKind::DirtFloor => COLOR_DIRT,
            TileKind::Water => COLOR_WATER,
            TileKind::Tree => COLOR_TREE,
            TileKind::WallLight | TileKind::WallMedium | TileKind::WallHeavy => COLOR_WALL,
            TileKind::StairsUp | TileKind::StairsDown => COLOR_STAIRS,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            TileKind::GrassFloor => "grass",
            TileKind::DirtFloor => "dirt",
            TileKind::Water => "water",
            TileKind::Tree => "tree",
            TileKind::WallLight => "light wall",
            TileKind::WallMedium => "medium wall",
            TileKind::WallHeavy => "heavy wall",
            TileKind::StairsUp => "stairs up",
            TileKind::StairsDown => "stairs down",
        }
    }

    /// Stable byte used by canonical serialization; never reorder.
    pub const fn code(self) -> u8 {
        match self {
            TileKind::GrassFloor => 0,
            TileKind::DirtFloor => 1,
            TileKind::Water => 2,
            TileKind::Tree => 3,
            TileKind::WallLight => 4,
            TileKind::WallMedium => 5,
            TileKind::WallHeavy => 6,
            TileKind::StairsUp => 7,
            TileKind::StairsDown => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn walls_are_never_walkable() {
        for kind in TileKind::ALL {
            if kind.is_wall() {
                assert!(!kind.walkable(), "{} must block movement", kind.name());
            }
        }
    }

    #[test]
    fn only_floors_and_stairs_are_walkable() {
        let walkable: Vec<_> = TileKind::ALL.into_iter().filter(|kind| kind.walkable()).collect();
        assert_eq!(
            walkable,
            vec![
                TileKind::GrassFloor,
                TileKind::DirtFloor,
                TileKind::StairsUp,
                TileKind::StairsDown
            ]
        );
    }

    #[test]
    fn glyphs_and_codes_are_unique() {
        let glyphs: BTreeSet<_> = TileKind::ALL.iter().map(|kind| kind.glyph()).collect();
        let codes: BTreeSet<_> = TileKind::ALL.iter().map(|kind| kind.code()).collect();
        assert_eq!(glyphs.len(), TileKind::ALL.len());
        assert_eq!(codes.len(), TileKind::ALL.len());
    }

    #[test]
    fn wall_variants_share_the_stone_color() {
        assert_eq!(TileKind::WallLight.color(), COLOR_WALL);
        assert_eq!(TileKind::WallHeavy.color(), TileKind::WallMedium.color());
    }
}
