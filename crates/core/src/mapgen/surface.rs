//! Surface level: scattered forest over a buried cave network reached by shafts.

use tracing::debug;

use crate::config::{CAVE_ROOF_DEPTH, ROOM_EDGE_INSET, WorldConfig};
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::tiles::TileKind;
use crate::types::{LevelKind, Pos};
use crate::world::Level;

use super::carve::carve_vertical_shaft;
use super::region::largest_connected_region;
use super::relief::apply_wall_relief;
use super::rooms::{PlacementWindow, RoomSizes, chain_rooms, place_rooms};

/// Cells shallower than this many rows under the surface never get a shaft.
const SHAFT_MIN_DEPTH: usize = 2;

pub const SURFACE_DEPTH: usize = 0;

pub fn generate_surface_level(
    config: &WorldConfig,
    rng: &mut impl RandomSource,
) -> Result<Level, GenerationError> {
    let width = config.map_width;
    let height = config.map_height;
    let surface_limit = config.surface_limit();

    let mut grid = Grid::filled(width, height, TileKind::GrassFloor);
    scatter_forest(&mut grid, config, rng);
    grid.fill_rows(surface_limit..height, TileKind::WallMedium);

    let window = PlacementWindow {
        min_x: ROOM_EDGE_INSET,
        min_y: surface_limit + CAVE_ROOF_DEPTH,
        limit_x: width - ROOM_EDGE_INSET - 1,
        limit_y: height - ROOM_EDGE_INSET - 1,
    };
    let sizes = RoomSizes { width: config.room_width, height: config.room_height };
    let rooms = place_rooms(&mut grid, rng, config.surface_rooms, &sizes, window);
    chain_rooms(&mut grid, rng, &rooms);

    let mut cave = largest_connected_region(&grid, surface_limit).into_cells();
    if cave.is_empty() {
        return Err(GenerationError::EmptyRegion { depth: SURFACE_DEPTH });
    }

    rng.shuffle(&mut cave);
    let shafts = carve_shafts(&mut grid, &cave, surface_limit, config.max_shafts);

    let Some(&stairs_down) = rng.choose(&cave) else {
        return Err(GenerationError::EmptyRegion { depth: SURFACE_DEPTH });
    };
    grid.set(stairs_down, TileKind::StairsDown);

    apply_wall_relief(&mut grid, surface_limit);

    debug!(
        rooms = rooms.len(),
        region = cave.len(),
        shafts = shafts.len(),
        stairs_x = stairs_down.x,
        stairs_y = stairs_down.y,
        "surface level generated"
    );

    Ok(Level { depth: SURFACE_DEPTH, kind: LevelKind::Surface, grid, stairs_down, shafts })
}

/// Independent per-cell draw over the surface rows: tree, then water, else grass.
fn scatter_forest(grid: &mut Grid, config: &WorldConfig, rng: &mut impl RandomSource) {
    let water_threshold = config.tree_chance + config.water_chance;
    for x in 0..config.map_width {
        for y in 0..config.surface_limit() {
            let roll = rng.next_f64();
            let kind = if roll < config.tree_chance {
                TileKind::Tree
            } else if roll < water_threshold {
                TileKind::Water
            } else {
                TileKind::GrassFloor
            };
            grid.set(Pos::new(x as i32, y as i32), kind);
        }
    }
}

/// Walks the shuffled region and sinks a shaft from the last surface row down
/// to each sufficiently deep cell, stopping at `max_shafts`.
fn carve_shafts(grid: &mut Grid, cave: &[Pos], surface_limit: usize, max_shafts: usize) -> Vec<Pos> {
    let min_depth = (surface_limit + SHAFT_MIN_DEPTH) as i32;
    let shaft_top = surface_limit as i32 - 1;

    let mut shafts = Vec::with_capacity(max_shafts);
    for &pos in cave {
        if shafts.len() >= max_shafts {
            break;
        }
        if pos.y > min_depth {
            carve_vertical_shaft(grid, pos.x, shaft_top, pos.y);
            shafts.push(pos);
        }
    }
    shafts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ChaChaSource;

    #[test]
    fn surface_rows_hold_only_forest_terrain_outside_shafts() {
        let config = WorldConfig::default();
        let level = generate_surface_level(&config, &mut ChaChaSource::seeded(7)).expect("surface");
        let surface_limit = config.surface_limit() as i32;
        let shaft_columns: Vec<i32> = level.shafts.iter().map(|pos| pos.x).collect();

        for y in 0..surface_limit {
            for x in 0..config.map_width as i32 {
                let tile = level.tile_at(Pos::new(x, y));
                if y == surface_limit - 1 && shaft_columns.contains(&x) {
                    assert_eq!(tile, TileKind::DirtFloor);
                    continue;
                }
                assert!(
                    matches!(tile, TileKind::GrassFloor | TileKind::Tree | TileKind::Water),
                    "unexpected {tile:?} at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn shafts_run_from_the_surface_to_their_cave_cell() {
        let config = WorldConfig::default();
        let level = generate_surface_level(&config, &mut ChaChaSource::seeded(11)).expect("surface");
        assert!((1..=config.max_shafts).contains(&level.shafts.len()));

        let top = config.surface_limit() as i32 - 1;
        for shaft in &level.shafts {
            assert!(shaft.y > config.surface_limit() as i32 + 2);
            for y in top..=shaft.y {
                assert!(level.tile_at(Pos::new(shaft.x, y)).walkable(), "gap at y={y}");
            }
        }
    }

    #[test]
    fn forest_density_follows_configured_chances() {
        let config = WorldConfig { tree_chance: 1.0, water_chance: 0.0, ..WorldConfig::default() };
        let level = generate_surface_level(&config, &mut ChaChaSource::seeded(3)).expect("surface");
        assert_eq!(level.tile_at(Pos::new(0, 0)), TileKind::Tree);
        assert_eq!(level.grid.count(TileKind::GrassFloor), 0);
        assert_eq!(level.grid.count(TileKind::Water), 0);
    }

    #[test]
    fn shallow_regions_get_no_shafts() {
        let mut grid = Grid::filled(10, 12, TileKind::WallMedium);
        let cave = [Pos::new(3, 5), Pos::new(4, 6)];
        let shafts = carve_shafts(&mut grid, &cave, 4, 2);
        assert!(shafts.is_empty());
        assert_eq!(grid.walkable_count(), 0);
    }

    #[test]
    fn shaft_count_is_capped() {
        let mut grid = Grid::filled(10, 20, TileKind::WallMedium);
        let cave = [Pos::new(1, 12), Pos::new(2, 13), Pos::new(3, 14)];
        let shafts = carve_shafts(&mut grid, &cave, 4, 2);
        assert_eq!(shafts, vec![Pos::new(1, 12), Pos::new(2, 13)]);
        assert_eq!(grid.tile_at(Pos::new(1, 3)), TileKind::DirtFloor);
        assert_eq!(grid.tile_at(Pos::new(3, 14)), TileKind::WallMedium);
    }
}
