use std::fmt::Write as _;

use dothack_common::Rgba;

use crate::frame::{DrawCommand, Frame};

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes a finished [`Frame`] and produces output. It never
/// sees or mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, frame: &Frame) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable summary of a frame. Tiles are counted rather
/// than listed; every other command gets its own line.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn rgba(c: Rgba) -> String {
    format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a)
}

fn describe(out: &mut String, cmd: &DrawCommand) {
    // Writing into a String cannot fail.
    let _ = match cmd {
        DrawCommand::Rect { min, size, color } => writeln!(
            out,
            "  rect min=({:.1}, {:.1}) size=({:.1}, {:.1}) {}",
            min.x,
            min.y,
            size.x,
            size.y,
            rgba(*color)
        ),
        DrawCommand::Circle {
            center,
            radius,
            color,
        } => writeln!(
            out,
            "  circle pos=({:.2}, {:.2}) r={:.0} {}",
            center.x,
            center.y,
            radius,
            rgba(*color)
        ),
        DrawCommand::Texture {
            texture,
            top_left,
            tint,
        } => writeln!(
            out,
            "  texture #{} {}x{} at ({:.1}, {:.1}) tint={}",
            texture.id.0,
            texture.width,
            texture.height,
            top_left.x,
            top_left.y,
            rgba(*tint)
        ),
        DrawCommand::Text {
            text,
            position,
            size,
            ..
        } => writeln!(
            out,
            "  text {:?} at ({:.0}, {:.0}) size={:.0}",
            text, position.x, position.y, size
        ),
    };
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, frame: &Frame) -> String {
        let mut out = String::new();
        let cam = &frame.camera;
        let _ = writeln!(
            out,
            "=== Frame {}x{} ===",
            frame.viewport.width, frame.viewport.height
        );
        let _ = writeln!(
            out,
            "Camera: target=({:.2}, {:.2}) offset=({:.1}, {:.1}) zoom={:.1} rotation={:.0}",
            cam.target.x, cam.target.y, cam.offset.x, cam.offset.y, cam.zoom, cam.rotation
        );

        let tiles = frame
            .world
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        let _ = writeln!(out, "World layer: {} commands ({tiles} tiles)", frame.world.len());
        for cmd in frame
            .world
            .iter()
            .filter(|c| !matches!(c, DrawCommand::Rect { .. }))
        {
            describe(&mut out, cmd);
        }

        let _ = writeln!(out, "Screen layer: {} commands", frame.screen.len());
        for cmd in &frame.screen {
            describe(&mut out, cmd);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Scene, Viewport};
    use dothack_input::Action;
    use dothack_kernel::Game;

    #[test]
    fn debug_renderer_default_game() {
        let frame = Scene::new(Viewport::DEFAULT).compose(&Game::default());
        let output = DebugTextRenderer::new().render(&frame);

        assert!(output.contains("Frame 800x450"));
        assert!(output.contains("(2400 tiles)"));
        assert_eq!(output.matches("circle").count(), 4);
        assert!(output.contains("circle pos=(300.00, 0.00) r=24"));
        assert!(output.contains("Screen layer: 1 commands"));
    }

    #[test]
    fn debug_renderer_shows_exit_prompt() {
        let mut game = Game::default();
        game.frame(&[Action::Back], 0.0);
        let frame = Scene::new(Viewport::DEFAULT).compose(&game);
        let output = DebugTextRenderer::new().render(&frame);

        assert!(output.contains("Screen layer: 4 commands"));
        assert!(output.contains("exit program"));
        assert!(output.contains("rect min=(0.0, 100.0) size=(800.0, 200.0)"));
    }
}
