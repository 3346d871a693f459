use tracing::debug;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{Key, NamedKey};

use crate::input::input_state::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Snapshot,
    Quit,
}

/// Maps a key press to an action. Releases and auto-repeats map to nothing.
#[must_use]
pub fn key_action(key: &Key, state: ElementState, repeat: bool) -> Option<KeyAction> {
    if state != ElementState::Pressed || repeat {
        return None;
    }

    match key {
        Key::Named(NamedKey::Space) => Some(KeyAction::Snapshot),
        Key::Character(c) if c.eq_ignore_ascii_case("q") => Some(KeyAction::Quit),
        _ => None,
    }
}

fn apply_key(input: &mut InputState, event: &KeyEvent) {
    match key_action(&event.logical_key, event.state, event.repeat) {
        Some(KeyAction::Snapshot) => {
            debug!("Snapshot requested");
            input.request_capture();
        }
        Some(KeyAction::Quit) => {
            debug!("Quit requested");
            input.request_quit();
        }
        None => {}
    }
}

/// Records `event` into `input`. Surface resizing is left to the caller.
pub fn apply_window_event(input: &mut InputState, event: &WindowEvent) {
    match event {
        WindowEvent::CloseRequested => input.request_quit(),
        WindowEvent::Resized(size) => input.on_resize(size.width, size.height),
        WindowEvent::CursorMoved { position, .. } => {
            input.on_pointer_moved(position.x, position.y);
        }
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => input.on_pointer_button(*state == ElementState::Pressed),
        WindowEvent::KeyboardInput { event, .. } => apply_key(input, event),
        _ => {}
    }
}
