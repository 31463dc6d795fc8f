//! Self-contained cave level: rooms and corridors cut from solid rock.

use tracing::debug;

use crate::config::{ROOM_EDGE_INSET, WorldConfig};
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::tiles::TileKind;
use crate::types::LevelKind;
use crate::world::Level;

use super::region::largest_connected_region;
use super::relief::apply_wall_relief;
use super::rooms::{PlacementWindow, RoomSizes, chain_rooms, place_rooms};

pub fn generate_cave_level(
    config: &WorldConfig,
    depth: usize,
    rng: &mut impl RandomSource,
) -> Result<Level, GenerationError> {
    let width = config.map_width;
    let height = config.map_height;
    let mut grid = Grid::filled(width, height, TileKind::WallMedium);

    let window = PlacementWindow {
        min_x: ROOM_EDGE_INSET,
        min_y: ROOM_EDGE_INSET,
        limit_x: width - ROOM_EDGE_INSET - 1,
        limit_y: height - ROOM_EDGE_INSET - 1,
    };
    let sizes = RoomSizes { width: config.room_width, height: config.room_height };
    let rooms = place_rooms(&mut grid, rng, config.cave_rooms, &sizes, window);
    chain_rooms(&mut grid, rng, &rooms);

    let cave = largest_connected_region(&grid, 0);
    let Some(&stairs_down) = rng.choose(cave.cells()) else {
        return Err(GenerationError::EmptyRegion { depth });
    };
    grid.set(stairs_down, TileKind::StairsDown);

    apply_wall_relief(&mut grid, 0);

    debug!(
        depth,
        rooms = rooms.len(),
        region = cave.len(),
        stairs_x = stairs_down.x,
        stairs_y = stairs_down.y,
        "cave level generated"
    );

    Ok(Level { depth, kind: LevelKind::Cave, grid, stairs_down, shafts: Vec::new() })
}
