use maze_shooter::Game;
use maze_shooter::core::input::InputState;
use maze_shooter::core::session::Phase;
use raylib::prelude::*;

/// Maps keyboard/mouse state onto the game for this frame and drives the
/// phase controls (start, pause on focus loss, restart).
pub fn process_events(window: &mut RaylibHandle, game: &mut Game) {
    let clicked = window.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);
    match game.phase() {
        Phase::NotStarted => {
            if clicked || window.is_key_pressed(KeyboardKey::KEY_ENTER) {
                window.disable_cursor();
                game.start();
            }
        }
        Phase::Playing => {
            if !window.is_window_focused() || window.is_key_pressed(KeyboardKey::KEY_P) {
                window.enable_cursor();
                game.focus_lost();
                return;
            }
            game.set_input(InputState {
                forward: window.is_key_down(KeyboardKey::KEY_W) || window.is_key_down(KeyboardKey::KEY_UP),
                backward: window.is_key_down(KeyboardKey::KEY_S) || window.is_key_down(KeyboardKey::KEY_DOWN),
                left: window.is_key_down(KeyboardKey::KEY_A) || window.is_key_down(KeyboardKey::KEY_LEFT),
                right: window.is_key_down(KeyboardKey::KEY_D) || window.is_key_down(KeyboardKey::KEY_RIGHT),
                jump: window.is_key_pressed(KeyboardKey::KEY_SPACE),
                fire: clicked,
            });
            let sens = game.config().player.look_sensitivity;
            let delta = window.get_mouse_delta();
            game.look(-delta.x * sens, -delta.y * sens);
        }
        Phase::Paused => {
            if window.is_window_focused() && (clicked || window.is_key_pressed(KeyboardKey::KEY_P)) {
                window.disable_cursor();
                game.focus_gained();
            }
        }
        Phase::GameOver => {
            if window.is_key_pressed(KeyboardKey::KEY_R) {
                window.enable_cursor();
                game.restart();
            }
        }
    }
}
