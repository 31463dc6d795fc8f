//! Draws the visible part of the current level, the explorer and the status line.

use crate::window_config::{CELL_HEIGHT, CELL_WIDTH};
use app::app_loop::AppState;
use app::{depth_label, format_seed};
use macroquad::prelude::*;
use strata::tiles::{COLOR_EXPLORER, COLOR_STATUS, EXPLORER_GLYPH};
use strata::{Pos, Rgb, World};

const FONT_SIZE: f32 = 16.0;
const STATUS_FONT_SIZE: f32 = 18.0;

pub fn draw_frame(world: &World, app_state: &AppState, seed: u64, fov_radius: u32) {
    let Some(level) = world.level(app_state.depth) else {
        return;
    };
    let Some(view) = app_state.visibility(world, fov_radius) else {
        return;
    };

    let mut glyph_buf = [0_u8; 4];
    for y in 0..level.grid.height() {
        for x in 0..level.grid.width() {
            let pos = Pos::new(x as i32, y as i32);
            if !view.is_visible(pos) {
                continue;
            }
            let tile = level.tile_at(pos);
            draw_glyph(tile.glyph().encode_utf8(&mut glyph_buf), pos, tile.color());
        }
    }
    draw_glyph(EXPLORER_GLYPH.encode_utf8(&mut glyph_buf), app_state.explorer, COLOR_EXPLORER);

    let status = format!("{}  seed {}", depth_label(app_state.depth), format_seed(seed));
    let status_y = (level.grid.height() as f32 + 1.0) * CELL_HEIGHT;
    draw_text(&status, CELL_WIDTH, status_y, STATUS_FONT_SIZE, to_color(COLOR_STATUS));
}

fn draw_glyph(glyph: &str, pos: Pos, rgb: Rgb) {
    let x = pos.x as f32 * CELL_WIDTH;
    // draw_text positions the baseline, not the top of the cell.
    let y = (pos.y as f32 + 1.0) * CELL_HEIGHT - 3.0;
    draw_text(glyph, x, y, FONT_SIZE, to_color(rgb));
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::from_rgba(r, g, b, 255)
}
