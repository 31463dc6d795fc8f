//! Cosmetic wall shading by orthogonal wall-neighbour count.

use crate::grid::Grid;
use crate::tiles::TileKind;
use crate::types::Pos;

pub fn relief_for(wall_neighbors: usize) -> TileKind {
    match wall_neighbors {
        0 | 1 => TileKind::WallLight,
        2 | 3 => TileKind::WallMedium,
        _ => TileKind::WallHeavy,
    }
}

/// Relabels every wall cell inside the border, from `y_start` down.
///
/// Any non-walkable neighbour counts as a wall, trees and water included,
/// but only wall tiles are ever rewritten.
/// Must run after all carving for the level is done.
pub fn apply_wall_relief(grid: &mut Grid, y_start: usize) {
    let width = grid.width();
    let height = grid.height();
    if width < 3 || height < 2 {
        return;
    }

    for x in 1..width - 1 {
        for y in y_start..height - 1 {
            let pos = Pos::new(x as i32, y as i32);
            if !grid.tile_at(pos).is_wall() {
                continue;
            }
            let walls =
                pos.neighbors4().into_iter().filter(|&next| !grid.tile_at(next).walkable()).count();
            grid.set(pos, relief_for(walls));
        }
    }
}
