/// WGSL shader for instanced quads: filled rectangles, circles and
/// textured sprites all go through this one pipeline.
///
/// Shapes sample a 1x1 white texture so the same fragment path serves both.
/// Circles are masked with an anti-aliased distance test on the quad's UVs.
pub const QUAD_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(1) @binding(0)
var quad_texture: texture_2d<f32>;
@group(1) @binding(1)
var quad_sampler: sampler;

struct VertexInput {
    @location(0) corner: vec2<f32>,
};

struct InstanceInput {
    @location(1) min: vec2<f32>,
    @location(2) size: vec2<f32>,
    @location(3) color: vec4<f32>,
    @location(4) shape: f32,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) color: vec4<f32>,
    @location(2) shape: f32,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let world_pos = instance.min + vertex.corner * instance.size;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(world_pos, 0.0, 1.0);
    out.uv = vertex.corner;
    out.color = instance.color;
    out.shape = instance.shape;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let texel = textureSample(quad_texture, quad_sampler, in.uv);
    let dist = length(in.uv - vec2<f32>(0.5, 0.5));
    let edge = fwidth(dist);
    let coverage = 1.0 - smoothstep(0.5 - edge, 0.5, dist);
    let mask = select(1.0, coverage, in.shape > 0.5);
    return vec4<f32>(texel.rgb * in.color.rgb, texel.a * in.color.a * mask);
}
"#;
