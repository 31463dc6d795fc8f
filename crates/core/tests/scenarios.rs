use std::collections::{BTreeSet, VecDeque};

use strata::mapgen::{carve_corridor, generate_cave_level, largest_connected_region};
use strata::{ChaChaSource, Grid, Level, Pos, TileKind, WorldConfig};

fn reachable_from(level: &Level, start: Pos) -> BTreeSet<Pos> {
    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(pos) = open.pop_front() {
        for next in pos.neighbors4() {
            if level.grid.is_walkable(next) && seen.insert(next) {
                open.push_back(next);
            }
        }
    }
    seen
}

#[test]
fn seeded_cave_level_has_one_stairs_reaching_most_walkable_cells() {
    let config = WorldConfig::default();
    for seed in [1_u64, 42, 2_024, 77_777] {
        let level = generate_cave_level(&config, 1, &mut ChaChaSource::seeded(seed))
            .expect("cave level generates");

        assert_eq!(level.grid.positions_of(TileKind::StairsDown), vec![level.stairs_down]);

        let reached = reachable_from(&level, level.stairs_down);
        let walkable = level.grid.walkable_count();
        assert!(
            reached.len() * 20 >= walkable,
            "seed={seed}: reached {} of {walkable} walkable cells",
            reached.len()
        );
    }
}

#[test]
fn corridor_on_solid_rock_is_a_dogleg() {
    let mut grid = Grid::filled(20, 12, TileKind::WallMedium);
    carve_corridor(&mut grid, Pos::new(5, 5), Pos::new(10, 8));

    for x in 5..=10 {
        assert_eq!(grid.tile_at(Pos::new(x, 5)), TileKind::DirtFloor);
    }
    for y in 5..=8 {
        assert_eq!(grid.tile_at(Pos::new(10, y)), TileKind::DirtFloor);
    }
    assert_eq!(grid.tile_at(Pos::new(5, 8)), TileKind::WallMedium);
}

#[test]
fn largest_region_wins_over_two_small_islands() {
    let mut grid = Grid::filled(12, 8, TileKind::WallMedium);
    let small_a = [Pos::new(1, 1), Pos::new(2, 1), Pos::new(3, 1)];
    let small_b = [Pos::new(1, 4), Pos::new(1, 5), Pos::new(1, 6)];
    let large = [
        Pos::new(6, 2),
        Pos::new(7, 2),
        Pos::new(8, 2),
        Pos::new(8, 3),
        Pos::new(8, 4),
        Pos::new(9, 4),
        Pos::new(10, 4),
    ];
    for pos in small_a.iter().chain(&small_b).chain(&large) {
        grid.set(*pos, TileKind::DirtFloor);
    }

    let region = largest_connected_region(&grid, 0);
    let cells: BTreeSet<_> = region.cells().iter().copied().collect();
    assert_eq!(cells, large.into_iter().collect::<BTreeSet<_>>());
}
