//! Random room placement and sequential corridor chaining.

use crate::config::RoomSpan;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::types::Pos;

use super::carve::{carve_corridor, carve_room};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl RoomRect {
    fn right(self) -> usize {
        self.x + self.width - 1
    }

    fn bottom(self) -> usize {
        self.y + self.height - 1
    }

    pub fn contains(self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 {
            return false;
        }
        let px = pos.x as usize;
        let py = pos.y as usize;
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (self.y..=self.bottom())
            .flat_map(move |y| (self.x..=self.right()).map(move |x| Pos::new(x as i32, y as i32)))
    }

    pub fn area(self) -> usize {
        self.width * self.height
    }

    /// Uniform pick over the room's cells.
    pub fn random_cell(self, rng: &mut impl RandomSource) -> Pos {
        let index = rng.range_inclusive(0, self.area() - 1);
        Pos::new((self.x + index % self.width) as i32, (self.y + index / self.width) as i32)
    }
}

/// Bounds a room's top-left corner: `x` in `[min_x, limit_x - width]`,
/// `y` in `[min_y, limit_y - height]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacementWindow {
    pub min_x: usize,
    pub min_y: usize,
    pub limit_x: usize,
    pub limit_y: usize,
}

pub struct RoomSizes {
    pub width: RoomSpan,
    pub height: RoomSpan,
}

pub fn place_rooms(
    grid: &mut Grid,
    rng: &mut impl RandomSource,
    count: usize,
    sizes: &RoomSizes,
    window: PlacementWindow,
) -> Vec<RoomRect> {
    let mut rooms = Vec::with_capacity(count);
    for _ in 0..count {
        let width = rng.range_inclusive(sizes.width.min, sizes.width.max);
        let height = rng.range_inclusive(sizes.height.min, sizes.height.max);
        let x = rng.range_inclusive(window.min_x, window.limit_x - width);
        let y = rng.range_inclusive(window.min_y, window.limit_y - height);

        let room = RoomRect { x, y, width, height };
        carve_room(grid, &room);
        rooms.push(room);
    }
    rooms
}

/// Joins each room to the one placed before it.
pub fn chain_rooms(grid: &mut Grid, rng: &mut impl RandomSource, rooms: &[RoomRect]) {
    for pair in rooms.windows(2) {
        let from = pair[0].random_cell(rng);
        let to = pair[1].random_cell(rng);
        carve_corridor(grid, from, to);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ChaChaSource;
    use crate::tiles::TileKind;

    fn sizes() -> RoomSizes {
        RoomSizes { width: RoomSpan { min: 4, max: 10 }, height: RoomSpan { min: 4, max: 8 } }
    }

    #[test]
    fn rooms_stay_inside_the_placement_window() {
        let mut grid = Grid::filled(80, 45, TileKind::WallMedium);
        let mut rng = ChaChaSource::seeded(42);
        let window = PlacementWindow { min_x: 2, min_y: 19, limit_x: 77, limit_y: 42 };

        let rooms = place_rooms(&mut grid, &mut rng, 200, &sizes(), window);
        assert_eq!(rooms.len(), 200);
        for room in rooms {
            assert!(room.x >= 2 && room.x + room.width <= 77, "{room:?}");
            assert!(room.y >= 19 && room.y + room.height <= 42, "{room:?}");
            assert!((4..=10).contains(&room.width));
            assert!((4..=8).contains(&room.height));
        }
    }

    #[test]
    fn placed_rooms_are_carved() {
        let mut grid = Grid::filled(40, 30, TileKind::WallMedium);
        let mut rng = ChaChaSource::seeded(5);
        let window = PlacementWindow { min_x: 2, min_y: 2, limit_x: 37, limit_y: 27 };

        let rooms = place_rooms(&mut grid, &mut rng, 3, &sizes(), window);
        for room in rooms {
            assert!(room.cells().all(|pos| grid.tile_at(pos) == TileKind::DirtFloor));
        }
    }

    #[test]
    fn random_cell_lands_inside_the_room() {
        let room = RoomRect { x: 10, y: 20, width: 4, height: 3 };
        let mut rng = ChaChaSource::seeded(8);
        for _ in 0..200 {
            assert!(room.contains(room.random_cell(&mut rng)));
        }
        assert_eq!(room.cells().count(), room.area());
    }

    #[test]
    fn chaining_connects_consecutive_rooms() {
        let mut grid = Grid::filled(40, 30, TileKind::WallMedium);
        let rooms = [
            RoomRect { x: 2, y: 2, width: 4, height: 4 },
            RoomRect { x: 30, y: 20, width: 4, height: 4 },
        ];
        for room in &rooms {
            carve_room(&mut grid, room);
        }
        let before = grid.walkable_count();

        chain_rooms(&mut grid, &mut ChaChaSource::seeded(1), &rooms);
        assert!(grid.walkable_count() > before);
    }
}
