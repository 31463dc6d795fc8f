//! Keyboard input collection for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const VIEWER_KEYS: [KeyCode; 10] = [
    KeyCode::W,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::Up,
    KeyCode::Left,
    KeyCode::Down,
    KeyCode::Right,
    KeyCode::Period,
    KeyCode::Escape,
];

#[derive(Default)]
pub struct FrameInput {
    pub keys_pressed: Vec<KeyCode>,
}

pub fn capture_frame_input() -> FrameInput {
    let keys_pressed = VIEWER_KEYS.into_iter().filter(|&key| is_key_pressed(key)).collect();
    FrameInput { keys_pressed }
}
