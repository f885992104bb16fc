//! Keyboard input mapping
//!
//! Translates logical key transitions into paddle velocity assignments and
//! the quit flag. The left paddle (`players[0]`) owns W/S, the right paddle
//! (`players[1]`) owns the arrow keys. The last event wins; there is no
//! repeat or opposite-key arbitration.

use super::state::GameState;

/// Logical keys the game reacts to. The windowing layer translates its own
/// key codes into these before dispatching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Escape,
    Q,
}

const LEFT: usize = 0;
const RIGHT: usize = 1;

/// Apply a key-down transition to the session.
pub fn key_down(state: &mut GameState, key: Key) {
    match key {
        Key::W => set_speed(state, LEFT, -1),
        Key::S => set_speed(state, LEFT, 1),
        Key::Up => set_speed(state, RIGHT, -1),
        Key::Down => set_speed(state, RIGHT, 1),
        Key::Escape | Key::Q => state.should_run = false,
    }
}

/// Apply a key-up transition: movement keys release their paddle, quit keys
/// do nothing.
pub fn key_up(state: &mut GameState, key: Key) {
    match key {
        Key::W | Key::S => set_speed(state, LEFT, 0),
        Key::Up | Key::Down => set_speed(state, RIGHT, 0),
        Key::Escape | Key::Q => {}
    }
}

fn set_speed(state: &mut GameState, index: usize, speed: i32) {
    if let Some(paddle) = state.players.get_mut(index) {
        paddle.set_speed(speed);
    }
}
