use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use dothack_render::{DrawCommand, TextureId};

/// Per-instance data of one quad.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct QuadInstance {
    pub min: [f32; 2],
    pub size: [f32; 2],
    pub color: [f32; 4],
    /// 0 for a filled quad, 1 for a circle inscribed in it.
    pub shape: f32,
}

impl QuadInstance {
    pub const SHAPE_QUAD: f32 = 0.0;
    pub const SHAPE_CIRCLE: f32 = 1.0;
}

/// A run of consecutive instances sharing one texture. `None` is the white
/// texture used by plain shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub texture: Option<TextureId>,
    pub instances: Range<u32>,
}

/// Turn draw commands into instances plus the batches that draw them in
/// order. Text has no quad form and is skipped.
pub fn build_batches(commands: &[DrawCommand]) -> (Vec<QuadInstance>, Vec<Batch>) {
    let mut instances = Vec::with_capacity(commands.len());
    let mut batches: Vec<Batch> = Vec::new();

    for cmd in commands {
        let (instance, texture) = match cmd {
            DrawCommand::Rect { min, size, color } => (
                QuadInstance {
                    min: min.to_array(),
                    size: size.to_array(),
                    color: color.to_f32_array(),
                    shape: QuadInstance::SHAPE_QUAD,
                },
                None,
            ),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => (
                QuadInstance {
                    min: (*center - *radius).to_array(),
                    size: [radius * 2.0; 2],
                    color: color.to_f32_array(),
                    shape: QuadInstance::SHAPE_CIRCLE,
                },
                None,
            ),
            DrawCommand::Texture {
                texture,
                top_left,
                tint,
            } => (
                QuadInstance {
                    min: top_left.to_array(),
                    size: texture.size().to_array(),
                    color: tint.to_f32_array(),
                    shape: QuadInstance::SHAPE_QUAD,
                },
                Some(texture.id),
            ),
            DrawCommand::Text { .. } => {
                tracing::trace!("skipping text in quad batch");
                continue;
            }
        };

        let index = instances.len() as u32;
        instances.push(instance);
        match batches.last_mut() {
            Some(last) if last.texture == texture => last.instances.end = index + 1,
            _ => batches.push(Batch {
                texture,
                instances: index..index + 1,
            }),
        }
    }

    (instances, batches)
}
