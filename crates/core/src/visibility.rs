//! Fixed-radius visibility around the explorer.
//! Cells are visible by Manhattan distance alone; walls do not occlude.

use crate::grid::Grid;
use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Visibility {
    width: usize,
    visible: Vec<bool>,
}

impl Visibility {
    pub fn is_visible(&self, pos: Pos) -> bool {
        if pos.x < 0 || pos.y < 0 || pos.x as usize >= self.width {
            return false;
        }
        self.visible.get((pos.y as usize) * self.width + pos.x as usize).copied().unwrap_or(false)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|&&visible| visible).count()
    }
}

pub fn compute_visibility(grid: &Grid, origin: Pos, radius: u32) -> Visibility {
    let width = grid.width();
    let mut visible = vec![false; width * grid.height()];
    for (index, cell) in visible.iter_mut().enumerate() {
        let pos = Pos { y: (index / width) as i32, x: (index % width) as i32 };
        *cell = pos.manhattan(origin) <= radius;
    }
    Visibility { width, visible }
}
