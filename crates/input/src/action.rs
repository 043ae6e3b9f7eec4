use glam::Vec2;

/// A high-level action produced by input for one frame.
///
/// Actions are context free: the same key always yields the same action, and
/// the loop state machine decides what `Back` means in its current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Move the player. Each axis is in `-1.0..=1.0`, y grows downward.
    Move(Vec2),
    /// The window asked to close.
    CloseRequested,
    /// Escape was pressed.
    Back,
    /// Affirmative answer (Y or Enter).
    Confirm,
    /// Negative answer (N).
    Deny,
    /// Toggle the developer inspector.
    ToggleInspector,
}

impl Action {
    /// Sum of all movement actions in a frame's action list.
    pub fn movement(actions: &[Action]) -> Vec2 {
        actions
            .iter()
            .filter_map(|a| match a {
                Action::Move(dir) => Some(*dir),
                _ => None,
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_move_is_constructible() {
        let a = Action::Move(Vec2::new(1.0, 0.0));
        assert!(matches!(a, Action::Move(_)));
    }

    #[test]
    fn movement_sums_only_move_actions() {
        let actions = [
            Action::Move(Vec2::X),
            Action::Back,
            Action::Move(Vec2::Y),
            Action::Confirm,
        ];
        assert_eq!(Action::movement(&actions), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn movement_of_no_actions_is_zero() {
        assert_eq!(Action::movement(&[]), Vec2::ZERO);
    }
}
