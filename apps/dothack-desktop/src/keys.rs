use dothack_input::Key;
use winit::keyboard::KeyCode;

/// Translate a physical key into a game key. Keys the game never reads map
/// to `None`.
pub fn map_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyN => Key::N,
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::F1 => Key::F1,
        _ => return None,
    };
    Some(key)
}
