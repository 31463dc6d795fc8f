//! Window configuration for the desktop viewer.

use app::APP_NAME;
use macroquad::window::Conf;
use strata::{MAP_H, MAP_W};

pub const CELL_WIDTH: f32 = 12.0;
pub const CELL_HEIGHT: f32 = 16.0;
/// Rows below the map reserved for the status line.
pub const STATUS_ROWS: usize = 2;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: (MAP_W as f32 * CELL_WIDTH) as i32,
        window_height: ((MAP_H + STATUS_ROWS) as f32 * CELL_HEIGHT) as i32,
        // Linux desktop sessions may not scale low-DPI framebuffers automatically.
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn enables_high_dpi_rendering() {
        assert!(build_window_conf().high_dpi);
    }

    #[test]
    fn window_fits_the_map_and_status_line() {
        let conf = build_window_conf();
        assert_eq!(conf.window_width, 960);
        assert_eq!(conf.window_height, 752);
    }
}
