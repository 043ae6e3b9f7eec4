use std::collections::HashSet;

/// Keys the game reacts to. Backends map their own key codes onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Y,
    N,
    Enter,
    Escape,
    F1,
}

/// Keyboard state for the current frame.
///
/// Tracks keys held down across frames plus the edge-triggered presses and
/// close requests collected since the last [`InputState::end_frame`].
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pressed: HashSet<Key>,
    close_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. Auto-repeat presses of a held key do not
    /// count as new presses.
    pub fn handle_key(&mut self, key: Key, down: bool) {
        if down {
            if self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Record a window close request.
    pub fn request_close(&mut self) {
        self.close_requested = true;
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// True if the key went down since the last frame ended.
    pub fn is_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }

    pub fn close_requested(&self) -> bool {
        self.close_requested
    }

    /// Clear edge-triggered state. Call once after each frame's update.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.close_requested = false;
    }

    /// Release every held key, e.g. when the window loses focus. Presses
    /// and a close request not yet handled this frame are kept.
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}
