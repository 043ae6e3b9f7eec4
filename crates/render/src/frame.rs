use dothack_common::Rgba;
use glam::Vec2;

use crate::camera::{Camera2D, Viewport};

/// Backend-assigned handle of an uploaded texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

impl std::fmt::Display for TextureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "tex#{}", self.0)
    }
}

/// A texture handle plus the pixel size it was uploaded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureInfo {
    pub id: TextureId,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

/// A single draw primitive. Coordinates are in the space of the layer the
/// command sits in.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled axis-aligned rectangle.
    Rect { min: Vec2, size: Vec2, color: Rgba },
    /// Filled circle.
    Circle { center: Vec2, radius: f32, color: Rgba },
    /// Texture drawn at its native size, modulated by `tint`.
    Texture {
        texture: TextureInfo,
        top_left: Vec2,
        tint: Rgba,
    },
    /// Text whose top-left corner is at `position`; `size` is the line
    /// height in pixels.
    Text {
        text: String,
        position: Vec2,
        size: f32,
        color: Rgba,
    },
}

/// Everything a backend needs to draw one frame, in painter's order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub viewport: Viewport,
    pub clear: Rgba,
    pub camera: Camera2D,
    /// Drawn through `camera`.
    pub world: Vec<DrawCommand>,
    /// Drawn in window pixels on top of the world layer.
    pub screen: Vec<DrawCommand>,
}

impl Frame {
    pub fn new(viewport: Viewport, camera: Camera2D, clear: Rgba) -> Self {
        Self {
            viewport,
            clear,
            camera,
            world: Vec::new(),
            screen: Vec::new(),
        }
    }

    /// Text strings of the screen layer, in draw order.
    pub fn screen_texts(&self) -> impl Iterator<Item = &str> {
        self.screen.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn command_count(&self) -> usize {
        self.world.len() + self.screen.len()
    }
}
