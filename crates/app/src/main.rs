mod frame_input;
mod ui_render;
mod window_config;

use app::app_loop::{AppMode, AppState};
use app::last_world_file::LastWorldFile;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use frame_input::capture_frame_input;
use macroquad::prelude::*;
use macroquad::window::Conf;
use std::env;
use std::process;
use strata::{WorldConfig, generate_world};
use window_config::build_window_conf;

fn window_conf() -> Conf {
    build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice.value(),
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let config = WorldConfig::default();
    let world = match generate_world(seed, &config) {
        Ok(world) => world,
        Err(err) => {
            eprintln!("world generation failed for seed {seed}: {err}");
            process::exit(1);
        }
    };

    if let Some(path) = LastWorldFile::get_default_path()
        && let Err(err) = LastWorldFile::for_world(seed, &world).write_atomic(&path)
    {
        eprintln!("could not record last world at {}: {err}", path.display());
    }

    let Some(mut app_state) = AppState::new(&world) else {
        eprintln!("surface of seed {seed} has no walkable cell");
        process::exit(1);
    };

    loop {
        let input = capture_frame_input();
        app_state.tick(&world, &input.keys_pressed);
        if app_state.mode == AppMode::Quit {
            break;
        }

        clear_background(BLACK);
        ui_render::draw_frame(&world, &app_state, seed, config.fov_radius);
        next_frame().await
    }
}
