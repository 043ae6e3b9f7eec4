use dothack_input::Action;

use crate::config::GameConfig;
use crate::session::{LoopState, Session};
use crate::world::World;

/// One play session: the world plus the loop state machine driving it.
///
/// The driver feeds each frame's actions and elapsed time to
/// [`Game::frame`] and renders afterwards; it stops once the returned state
/// is [`LoopState::Exited`].
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    world: World,
    session: Session,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        tracing::info!(
            build = ?config.build_mode,
            pause_on_exit_prompt = config.pause_on_exit_prompt,
            "starting game session"
        );
        Self {
            world: World::new(config.sim),
            session: Session::new(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> LoopState {
        self.session.state()
    }

    /// Run the update half of one frame.
    pub fn frame(&mut self, actions: &[Action], dt: f32) -> LoopState {
        let _span = tracing::info_span!("frame", tick = self.world.tick()).entered();

        self.session.handle(actions);
        match self.session.state() {
            LoopState::Exited => return LoopState::Exited,
            LoopState::ExitConfirmPending if self.config.pause_on_exit_prompt => {
                return LoopState::ExitConfirmPending;
            }
            _ => {}
        }

        self.world.step(Action::movement(actions), dt);
        tracing::trace!(summary = %self.world.summary(), "world stepped");
        self.session.state()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
