//! Dirt-floor carving primitives shared by every level generator.

use crate::grid::Grid;
use crate::tiles::TileKind;
use crate::types::Pos;

use super::rooms::RoomRect;

/// Carves an L-shaped corridor: along x on `start.y` first, then along y on `end.x`.
pub fn carve_corridor(grid: &mut Grid, start: Pos, end: Pos) {
    let mut cursor = start;
    while cursor.x != end.x {
        grid.set(cursor, TileKind::DirtFloor);
        cursor.x += step_toward(cursor.x, end.x);
    }
    while cursor.y != end.y {
        grid.set(cursor, TileKind::DirtFloor);
        cursor.y += step_toward(cursor.y, end.y);
    }
    grid.set(cursor, TileKind::DirtFloor);
}

/// Carves column `x` from `y_top` to `y_bottom`, both inclusive.
pub fn carve_vertical_shaft(grid: &mut Grid, x: i32, y_top: i32, y_bottom: i32) {
    debug_assert!(y_top <= y_bottom);
    for y in y_top..=y_bottom {
        grid.set(Pos { y, x }, TileKind::DirtFloor);
    }
}

pub fn carve_room(grid: &mut Grid, room: &RoomRect) {
    for pos in room.cells() {
        grid.set(pos, TileKind::DirtFloor);
    }
}

fn step_toward(from: i32, to: i32) -> i32 {
    if from < to { 1 } else { -1 }
}
