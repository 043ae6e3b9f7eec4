use dothack_input::Action;
use serde::{Deserialize, Serialize};

/// Top-level state of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoopState {
    #[default]
    Running,
    /// The "are you sure" prompt is on screen.
    ExitConfirmPending,
    /// Terminal: the driver should stop looping and release resources.
    Exited,
}

/// Exit-confirmation state machine.
///
/// ```text
/// Running --(close | Back)--> ExitConfirmPending
/// ExitConfirmPending --Confirm--> Exited
/// ExitConfirmPending --(Deny | Back)--> Running
/// ```
///
/// At most one transition happens per frame, and while pending a
/// confirmation wins over a cancellation in the same frame.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: LoopState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state != LoopState::Exited
    }

    pub fn exit_prompt_visible(&self) -> bool {
        self.state == LoopState::ExitConfirmPending
    }

    /// Apply one frame's actions. Returns the new state if it changed.
    pub fn handle(&mut self, actions: &[Action]) -> Option<LoopState> {
        let has = |wanted: &[Action]| actions.iter().any(|a| wanted.contains(a));
        let next = match self.state {
            LoopState::Running if has(&[Action::CloseRequested, Action::Back]) => {
                LoopState::ExitConfirmPending
            }
            LoopState::ExitConfirmPending if has(&[Action::Confirm]) => LoopState::Exited,
            LoopState::ExitConfirmPending if has(&[Action::Deny, Action::Back]) => {
                LoopState::Running
            }
            _ => return None,
        };
        tracing::debug!(from = ?self.state, to = ?next, "loop state transition");
        self.state = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let s = Session::new();
        assert_eq!(s.state(), LoopState::Running);
        assert!(s.is_running());
        assert!(!s.exit_prompt_visible());
    }

    #[test]
    fn escape_twice_cancels() {
        let mut s = Session::new();
        assert_eq!(s.handle(&[Action::Back]), Some(LoopState::ExitConfirmPending));
        assert_eq!(s.handle(&[Action::Back]), Some(LoopState::Running));
        assert!(s.is_running());
    }

    #[test]
    fn close_then_confirm_exits() {
        let mut s = Session::new();
        s.handle(&[Action::CloseRequested]);
        assert!(s.exit_prompt_visible());
        assert_eq!(s.handle(&[Action::Confirm]), Some(LoopState::Exited));
        assert!(!s.is_running());
    }

    #[test]
    fn deny_cancels() {
        let mut s = Session::new();
        s.handle(&[Action::Back]);
        assert_eq!(s.handle(&[Action::Deny]), Some(LoopState::Running));
    }

    #[test]
    fn confirm_and_deny_ignored_while_running() {
        let mut s = Session::new();
        assert_eq!(s.handle(&[Action::Confirm, Action::Deny]), None);
        assert_eq!(s.state(), LoopState::Running);
    }

    #[test]
    fn close_ignored_while_pending() {
        let mut s = Session::new();
        s.handle(&[Action::Back]);
        assert_eq!(s.handle(&[Action::CloseRequested]), None);
        assert_eq!(s.state(), LoopState::ExitConfirmPending);
    }

    #[test]
    fn confirm_wins_over_cancel_in_same_frame() {
        let mut s = Session::new();
        s.handle(&[Action::Back]);
        assert_eq!(s.handle(&[Action::Back, Action::Confirm]), Some(LoopState::Exited));
    }

    #[test]
    fn one_transition_per_frame() {
        let mut s = Session::new();
        // Back opens the prompt; the Confirm in the same frame is not
        // applied until the next frame.
        assert_eq!(
            s.handle(&[Action::Back, Action::Confirm]),
            Some(LoopState::ExitConfirmPending)
        );
    }

    #[test]
    fn exited_is_terminal() {
        let mut s = Session::new();
        s.handle(&[Action::Back]);
        s.handle(&[Action::Confirm]);
        assert_eq!(s.handle(&[Action::Back, Action::Deny, Action::CloseRequested]), None);
        assert_eq!(s.state(), LoopState::Exited);
    }
}
