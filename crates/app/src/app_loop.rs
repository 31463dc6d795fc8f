use macroquad::prelude::KeyCode;
use strata::{Pos, TileKind, Visibility, World, compute_visibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Exploring,
    Quit,
}

/// Where the explorer stands in the world and whether the viewer keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub mode: AppMode,
    pub depth: usize,
    pub explorer: Pos,
}

impl AppState {
    /// Places the explorer on the surface; `None` if the surface has no walkable cell.
    pub fn new(world: &World) -> Option<Self> {
        let explorer = world.explorer_start(0)?;
        Some(Self { mode: AppMode::Exploring, depth: 0, explorer })
    }

    /// Applies this frame's key presses in order.
    pub fn tick(&mut self, world: &World, keys_pressed: &[KeyCode]) {
        for &key in keys_pressed {
            if self.mode == AppMode::Quit {
                return;
            }
            match key {
                KeyCode::W | KeyCode::Up => self.try_step(world, 0, -1),
                KeyCode::S | KeyCode::Down => self.try_step(world, 0, 1),
                KeyCode::A | KeyCode::Left => self.try_step(world, -1, 0),
                KeyCode::D | KeyCode::Right => self.try_step(world, 1, 0),
                KeyCode::Period => self.try_descend(world),
                KeyCode::Escape => self.mode = AppMode::Quit,
                _ => {}
            }
        }
    }

    pub fn visibility(&self, world: &World, radius: u32) -> Option<Visibility> {
        world.level(self.depth).map(|level| compute_visibility(&level.grid, self.explorer, radius))
    }

    fn try_step(&mut self, world: &World, dx: i32, dy: i32) {
        let target = self.explorer.offset(dx, dy);
        let Some(level) = world.level(self.depth) else {
            return;
        };
        if level.grid.is_walkable(target) {
            self.explorer = target;
        }
    }

    fn try_descend(&mut self, world: &World) {
        if world.tile_at(self.depth, self.explorer) != TileKind::StairsDown {
            return;
        }
        let next_depth = self.depth + 1;
        if let Some(start) = world.explorer_start(next_depth) {
            self.depth = next_depth;
            self.explorer = start;
        }
    }
}
