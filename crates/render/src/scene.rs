use dothack_common::Rgba;
use dothack_kernel::Game;
use glam::Vec2;

use crate::camera::{Camera2D, Viewport};
use crate::frame::{DrawCommand, Frame, TextureInfo};
use crate::tiles::{tile_rect, TileWindow};

/// Colours and sizes of everything the scene draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub clear: Rgba,
    pub tile: Rgba,
    pub player: Rgba,
    pub player_radius: f32,
    pub enemy: Rgba,
    pub enemy_radius: f32,
    pub logo_tint: Rgba,
    pub label: Rgba,
    pub label_size: f32,
    pub prompt_backdrop: Rgba,
    pub prompt_panel: Rgba,
    pub prompt_text: Rgba,
    pub prompt_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            clear: Rgba::RAY_WHITE,
            tile: Rgba::new(0, 158, 47, 25),
            player: Rgba::new(0, 158, 47, 255),
            player_radius: 16.0,
            enemy: Rgba::new(190, 33, 55, 255),
            enemy_radius: 24.0,
            logo_tint: Rgba::WHITE.with_alpha(32),
            label: Rgba::LIGHT_GRAY,
            label_size: 20.0,
            prompt_backdrop: Rgba::BLACK.with_alpha(128),
            prompt_panel: Rgba::RAY_WHITE,
            prompt_text: Rgba::BLACK,
            prompt_size: 30.0,
        }
    }
}

/// Builds a [`Frame`] from game state each frame.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    viewport: Viewport,
    style: Style,
    logo: Option<TextureInfo>,
}

impl Scene {
    pub const EXIT_PROMPT: &'static str = "Are you sure you want to exit program? [Y/N]";

    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            style: Style::default(),
            logo: None,
        }
    }

    /// Backdrop texture drawn centred on the world origin.
    pub fn set_logo(&mut self, logo: Option<TextureInfo>) {
        self.logo = logo;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Describe the current game state as a frame.
    pub fn compose(&self, game: &Game) -> Frame {
        let world = game.world();
        let camera = Camera2D::centered(world.camera_target(), self.viewport);
        let mut frame = Frame::new(self.viewport, camera, self.style.clear);

        // Ground follows the camera so it always covers the view.
        for tile in TileWindow::around(camera.target).checker_tiles() {
            let (min, size) = tile_rect(tile);
            frame.world.push(DrawCommand::Rect {
                min,
                size,
                color: self.style.tile,
            });
        }

        if let Some(logo) = self.logo {
            frame.world.push(DrawCommand::Texture {
                texture: logo,
                top_left: -logo.size() / 2.0,
                tint: self.style.logo_tint,
            });
        }

        if let Some(player) = world.player() {
            frame.world.push(DrawCommand::Circle {
                center: player.position,
                radius: self.style.player_radius,
                color: self.style.player,
            });
        }

        for enemy in world.enemies().values() {
            frame.world.push(DrawCommand::Circle {
                center: enemy.position,
                radius: self.style.enemy_radius,
                color: self.style.enemy,
            });
        }

        frame.screen.push(DrawCommand::Text {
            text: game.config().build_mode.label().to_owned(),
            position: Vec2::new(10.0, 10.0),
            size: self.style.label_size,
            color: self.style.label,
        });

        if game.session().exit_prompt_visible() {
            self.push_exit_prompt(&mut frame);
        }

        tracing::trace!(
            world = frame.world.len(),
            screen = frame.screen.len(),
            "frame composed"
        );
        frame
    }

    fn push_exit_prompt(&self, frame: &mut Frame) {
        let size = self.viewport.size();
        frame.screen.push(DrawCommand::Rect {
            min: Vec2::ZERO,
            size,
            color: self.style.prompt_backdrop,
        });
        frame.screen.push(DrawCommand::Rect {
            min: Vec2::new(0.0, 100.0),
            size: Vec2::new(size.x, 200.0),
            color: self.style.prompt_panel,
        });
        frame.screen.push(DrawCommand::Text {
            text: Self::EXIT_PROMPT.to_owned(),
            position: Vec2::new(40.0, 180.0),
            size: self.style.prompt_size,
            color: self.style.prompt_text,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::TextureId;
    use dothack_input::Action;
    use dothack_kernel::{BuildMode, GameConfig};

    fn circles(frame: &Frame) -> Vec<(Vec2, f32)> {
        frame
            .world
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Circle { center, radius, .. } => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn draws_player_and_enemies() {
        let game = Game::default();
        let frame = Scene::new(Viewport::DEFAULT).compose(&game);
        let c = circles(&frame);
        assert_eq!(c.len(), 4);
        assert_eq!(c[0], (Vec2::ZERO, 16.0));
        assert!(c[1..].iter().all(|(_, r)| *r == 24.0));
    }

    #[test]
    fn tiles_come_first_and_cover_half_the_window() {
        let game = Game::default();
        let frame = Scene::new(Viewport::DEFAULT).compose(&game);
        let tiles = frame
            .world
            .iter()
            .take_while(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(tiles, 80 * 60 / 2);
    }

    #[test]
    fn origin_tile_is_skipped_and_its_neighbour_drawn() {
        let game = Game::default();
        let frame = Scene::new(Viewport::DEFAULT).compose(&game);
        let has_rect_at = |min: Vec2| {
            frame
                .world
                .iter()
                .any(|c| matches!(c, DrawCommand::Rect { min: m, .. } if *m == min))
        };
        assert!(!has_rect_at(Vec2::new(-16.0, -16.0)));
        assert!(has_rect_at(Vec2::new(16.0, -16.0)));
    }

    #[test]
    fn logo_is_centred_on_origin() {
        let game = Game::default();
        let mut scene = Scene::new(Viewport::DEFAULT);
        scene.set_logo(Some(TextureInfo {
            id: TextureId(3),
            width: 256,
            height: 128,
        }));
        let frame = scene.compose(&game);
        let logo = frame
            .world
            .iter()
            .find_map(|c| match c {
                DrawCommand::Texture { top_left, tint, .. } => Some((*top_left, *tint)),
                _ => None,
            })
            .unwrap();
        assert_eq!(logo.0, Vec2::new(-128.0, -64.0));
        assert_eq!(logo.1.a, 32);
    }

    #[test]
    fn missing_logo_is_skipped() {
        let frame = Scene::new(Viewport::DEFAULT).compose(&Game::default());
        assert!(!frame
            .world
            .iter()
            .any(|c| matches!(c, DrawCommand::Texture { .. })));
    }

    #[test]
    fn build_label_follows_config() {
        let game = Game::new(GameConfig {
            build_mode: BuildMode::Release,
            ..GameConfig::default()
        });
        let frame = Scene::new(Viewport::DEFAULT).compose(&game);
        assert_eq!(
            frame.screen_texts().collect::<Vec<_>>(),
            vec!["This is a release build"]
        );
    }

    #[test]
    fn exit_prompt_only_while_pending() {
        let mut game = Game::default();
        let scene = Scene::new(Viewport::DEFAULT);
        assert_eq!(scene.compose(&game).screen.len(), 1);

        game.frame(&[Action::Back], 1.0 / 60.0);
        let frame = scene.compose(&game);
        assert_eq!(frame.screen.len(), 4);
        assert!(frame.screen_texts().any(|t| t == Scene::EXIT_PROMPT));
        assert!(matches!(
            frame.screen[1],
            DrawCommand::Rect { size, .. } if size == Vec2::new(800.0, 450.0)
        ));
    }

    #[test]
    fn camera_centres_on_world_camera_target() {
        let mut game = Game::default();
        for _ in 0..30 {
            game.frame(&[Action::Move(Vec2::X)], 1.0 / 60.0);
        }
        let frame = Scene::new(Viewport::DEFAULT).compose(&game);
        assert_eq!(frame.camera.target, game.world().camera_target());
        assert_eq!(frame.camera.offset, Vec2::new(400.0, 225.0));
    }
}
