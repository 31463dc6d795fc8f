//! Connectivity analysis: the largest 4-connected walkable region of a stratum.

use crate::grid::Grid;
use crate::types::Pos;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    cells: Vec<Pos>,
}

impl Region {
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Pos> {
        self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.contains(&pos)
    }
}

/// Scans rows `y_start..height` column by column and returns the biggest
/// walkable region found there. Ties keep the region discovered first; an
/// area without walkable cells yields an empty region.
pub fn largest_connected_region(grid: &Grid, y_start: usize) -> Region {
    let width = grid.width();
    let height = grid.height();
    let mut visited = vec![false; width * height];
    let mut largest = Region::default();

    for x in 0..width {
        for y in y_start..height {
            let seed = Pos::new(x as i32, y as i32);
            if visited[y * width + x] || !grid.tile_at(seed).walkable() {
                continue;
            }
            let region = flood_region(grid, y_start, seed, &mut visited);
            if region.len() > largest.len() {
                largest = region;
            }
        }
    }

    largest
}

fn flood_region(grid: &Grid, y_start: usize, seed: Pos, visited: &mut [bool]) -> Region {
    let width = grid.width();
    let inside = |pos: Pos| pos.y >= y_start as i32 && grid.is_walkable(pos);

    let mut cells = Vec::new();
    let mut stack = vec![seed];
    visited[(seed.y as usize) * width + (seed.x as usize)] = true;

    while let Some(pos) = stack.pop() {
        cells.push(pos);
        for next in pos.neighbors4() {
            if !inside(next) {
                continue;
            }
            let index = (next.y as usize) * width + (next.x as usize);
            if visited[index] {
                continue;
            }
            visited[index] = true;
            stack.push(next);
        }
    }

    Region { cells }
}
