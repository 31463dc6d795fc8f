use app::app_loop::{AppMode, AppState};
use macroquad::prelude::KeyCode;
use strata::{FOV_RADIUS, Pos, World, WorldConfig, generate_world};

fn world() -> World {
    generate_world(12345, &WorldConfig::default()).expect("default world generates")
}

#[test]
fn explorer_starts_on_the_surface_at_the_spawn_cell() {
    let world = world();
    let app = AppState::new(&world).expect("surface has a walkable cell");

    assert_eq!(app.mode, AppMode::Exploring);
    assert_eq!(app.depth, 0);
    assert_eq!(Some(app.explorer), world.explorer_start(0));
}

#[test]
fn spawn_cell_is_boxed_in_to_the_left_and_above() {
    // The spawn is the first walkable cell of its column, so neither move can succeed.
    let world = world();
    let mut app = AppState::new(&world).expect("spawn");
    let start = app.explorer;

    app.tick(&world, &[KeyCode::Left, KeyCode::A, KeyCode::Up, KeyCode::W]);
    assert_eq!(app.explorer, start);
}

#[test]
fn walking_moves_onto_walkable_neighbors_only() {
    let world = world();
    let surface = world.level(0).expect("surface");
    let mut app = AppState::new(&world).expect("spawn");
    let start = app.explorer;

    app.tick(&world, &[KeyCode::Right]);
    let east = start.offset(1, 0);
    let expected = if surface.grid.is_walkable(east) { east } else { start };
    assert_eq!(app.explorer, expected);
}

#[test]
fn period_on_stairs_descends_to_the_next_level_spawn() {
    let world = world();
    let mut app = AppState::new(&world).expect("spawn");
    app.explorer = world.level(0).expect("surface").stairs_down;

    app.tick(&world, &[KeyCode::Period]);

    assert_eq!(app.depth, 1);
    assert_eq!(Some(app.explorer), world.explorer_start(1));
}

#[test]
fn period_off_stairs_does_nothing() {
    let world = world();
    let mut app = AppState::new(&world).expect("spawn");
    let before = app.clone();

    app.tick(&world, &[KeyCode::Period]);
    assert_eq!(app, before);
}

#[test]
fn deepest_stairs_lead_nowhere() {
    let world = world();
    let last = world.level_count() - 1;
    let mut app = AppState::new(&world).expect("spawn");
    app.depth = last;
    app.explorer = world.level(last).expect("deepest level").stairs_down;

    app.tick(&world, &[KeyCode::Period]);
    assert_eq!(app.depth, last);
}

#[test]
fn escape_quits_and_ignores_later_keys() {
    let world = world();
    let mut app = AppState::new(&world).expect("spawn");
    app.explorer = world.level(0).expect("surface").stairs_down;

    app.tick(&world, &[KeyCode::Escape, KeyCode::Period]);

    assert_eq!(app.mode, AppMode::Quit);
    assert_eq!(app.depth, 0);
}

#[test]
fn visibility_is_centered_on_the_explorer() {
    let world = world();
    let app = AppState::new(&world).expect("spawn");
    let view = app.visibility(&world, FOV_RADIUS).expect("current level exists");

    assert!(view.is_visible(app.explorer));
    assert!(!view.is_visible(Pos::new(app.explorer.x + FOV_RADIUS as i32 + 1, app.explorer.y)));
}
