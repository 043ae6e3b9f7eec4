use glam::Vec2;

use crate::action::Action;
use crate::state::{InputState, Key};

/// Key bindings: which keys drive each action.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub left: Vec<Key>,
    pub right: Vec<Key>,
    pub up: Vec<Key>,
    pub down: Vec<Key>,
    pub back: Vec<Key>,
    pub confirm: Vec<Key>,
    pub deny: Vec<Key>,
    pub inspector: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: vec![Key::Left, Key::A],
            right: vec![Key::Right, Key::D],
            up: vec![Key::Up, Key::W],
            down: vec![Key::Down, Key::S],
            back: vec![Key::Escape],
            confirm: vec![Key::Y, Key::Enter],
            deny: vec![Key::N],
            inspector: vec![Key::F1],
        }
    }
}

impl KeyBindings {
    /// Held-key movement direction. Axes are independent, so a diagonal has
    /// length `sqrt(2)`; opposite keys cancel out.
    pub fn movement(&self, input: &InputState) -> Vec2 {
        let held = |keys: &[Key]| keys.iter().any(|k| input.is_down(*k));
        let mut dir = Vec2::ZERO;
        if held(&self.right) {
            dir.x += 1.0;
        }
        if held(&self.left) {
            dir.x -= 1.0;
        }
        if held(&self.up) {
            dir.y -= 1.0;
        }
        if held(&self.down) {
            dir.y += 1.0;
        }
        dir
    }

    /// Translate the frame's input state into actions.
    pub fn actions(&self, input: &InputState) -> Vec<Action> {
        let pressed = |keys: &[Key]| keys.iter().any(|k| input.is_pressed(*k));
        let mut actions = Vec::new();

        if input.close_requested() {
            actions.push(Action::CloseRequested);
        }
        if pressed(&self.back) {
            actions.push(Action::Back);
        }
        if pressed(&self.confirm) {
            actions.push(Action::Confirm);
        }
        if pressed(&self.deny) {
            actions.push(Action::Deny);
        }
        if pressed(&self.inspector) {
            actions.push(Action::ToggleInspector);
        }

        let dir = self.movement(input);
        if dir != Vec2::ZERO {
            actions.push(Action::Move(dir));
        }

        if !actions.is_empty() {
            tracing::trace!(?actions, "input actions");
        }
        actions
    }
}
