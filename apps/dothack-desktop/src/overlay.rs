use dothack_common::Rgba;
use dothack_render::DrawCommand;
use egui::{Align2, Color32, CornerRadius, FontId, Painter, Pos2, Rect, Vec2};

pub fn color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn pos(p: glam::Vec2, scale: f32) -> Pos2 {
    Pos2::new(p.x * scale, p.y * scale)
}

/// Paint a frame's screen layer in order. `scale` converts window pixels to
/// egui points.
pub fn paint_screen_layer(painter: &Painter, commands: &[DrawCommand], scale: f32) {
    for cmd in commands {
        match cmd {
            DrawCommand::Rect { min, size, color } => {
                let rect = Rect::from_min_size(pos(*min, scale), Vec2::new(size.x, size.y) * scale);
                painter.rect_filled(rect, CornerRadius::ZERO, color32(*color));
            }
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => {
                painter.circle_filled(pos(*center, scale), radius * scale, color32(*color));
            }
            DrawCommand::Text {
                text,
                position,
                size,
                color,
            } => {
                painter.text(
                    pos(*position, scale),
                    Align2::LEFT_TOP,
                    text,
                    FontId::proportional(size * scale),
                    color32(*color),
                );
            }
            DrawCommand::Texture { texture, .. } => {
                tracing::trace!(id = %texture.id, "screen-space textures are not painted");
            }
        }
    }
}
