//! Structural checks every generated world must pass.

use anyhow::{Result, ensure};
use strata::mapgen::{largest_connected_region, relief_for};
use strata::{Level, LevelKind, Pos, TileKind, World, WorldConfig};

pub fn check_world(world: &World, config: &WorldConfig) -> Result<()> {
    ensure!(
        world.level_count() == config.z_levels,
        "expected {} levels, found {}",
        config.z_levels,
        world.level_count()
    );
    for level in world.levels() {
        check_level(level, config)?;
    }
    Ok(())
}

pub fn check_level(level: &Level, config: &WorldConfig) -> Result<()> {
    let depth = level.depth;
    let grid = &level.grid;
    ensure!(
        grid.width() == config.map_width && grid.height() == config.map_height,
        "depth {depth}: grid is {}x{}",
        grid.width(),
        grid.height()
    );

    let stairs = grid.positions_of(TileKind::StairsDown);
    ensure!(stairs.len() == 1, "depth {depth}: {} stairs-down cells", stairs.len());
    ensure!(
        stairs[0] == level.stairs_down,
        "depth {depth}: stairs_down {:?} is not the stairs cell {:?}",
        level.stairs_down,
        stairs[0]
    );

    let y_start = stratum_start(level, config);
    let region = largest_connected_region(grid, y_start);
    ensure!(
        region.contains(level.stairs_down),
        "depth {depth}: stairs {:?} outside the largest region",
        level.stairs_down
    );

    check_relief(level, y_start)?;
    match level.kind {
        LevelKind::Surface => check_surface(level, config),
        LevelKind::Cave => {
            ensure!(level.shafts.is_empty(), "depth {depth}: cave level has shafts");
            Ok(())
        }
    }
}

fn stratum_start(level: &Level, config: &WorldConfig) -> usize {
    match level.kind {
        LevelKind::Surface => config.surface_limit(),
        LevelKind::Cave => 0,
    }
}

fn check_relief(level: &Level, y_start: usize) -> Result<()> {
    let grid = &level.grid;
    for y in y_start..grid.height() {
        for x in 0..grid.width() {
            let pos = Pos::new(x as i32, y as i32);
            let tile = grid.tile_at(pos);
            if tile.walkable() {
                continue;
            }
            let name = tile.name();
            ensure!(tile.is_wall(), "depth {}: {name} at {pos:?} below ground", level.depth);

            let interior = x > 0 && x + 1 < grid.width() && y + 1 < grid.height();
            if interior {
                let walls = pos
                    .neighbors4()
                    .into_iter()
                    .filter(|&next| !grid.tile_at(next).walkable())
                    .count();
                ensure!(
                    tile == relief_for(walls),
                    "depth {}: {} at {pos:?} has {walls} wall neighbours",
                    level.depth,
                    tile.name()
                );
            }
        }
    }
    Ok(())
}

fn check_surface(level: &Level, config: &WorldConfig) -> Result<()> {
    let grid = &level.grid;
    let surface_limit = config.surface_limit();
    let shafts = level.shafts.len();
    ensure!(
        (1..=config.max_shafts).contains(&shafts),
        "surface has {shafts} shafts, expected 1..={}",
        config.max_shafts
    );

    let shaft_top = surface_limit as i32 - 1;
    for y in 0..surface_limit {
        for x in 0..grid.width() {
            let pos = Pos::new(x as i32, y as i32);
            let tile = grid.tile_at(pos);
            let is_shaft_top =
                pos.y == shaft_top && level.shafts.iter().any(|shaft| shaft.x == pos.x);
            let allowed = match tile {
                TileKind::GrassFloor | TileKind::Tree | TileKind::Water => true,
                TileKind::DirtFloor => is_shaft_top,
                _ => false,
            };
            ensure!(allowed, "surface row {y} holds {} at {pos:?}", tile.name());
        }
    }

    for shaft in &level.shafts {
        let open = (shaft_top..=shaft.y).all(|y| grid.is_walkable(Pos::new(shaft.x, y)));
        ensure!(open, "shaft at {shaft:?} is blocked");
    }
    Ok(())
}
