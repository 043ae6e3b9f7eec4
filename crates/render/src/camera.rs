use glam::{Mat4, Vec2, Vec3};

/// Window size in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// The fixed game window.
    pub const DEFAULT: Self = Self {
        width: 800,
        height: 450,
    };

    pub const TITLE: &'static str = "DotHack Game Workshop";

    pub fn size(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn center(self) -> Vec2 {
        self.size() / 2.0
    }

    /// Orthographic projection from window pixels (origin top-left, y down)
    /// to clip space.
    pub fn projection(self) -> Mat4 {
        Mat4::orthographic_rh(0.0, self.width as f32, self.height as f32, 0.0, -1.0, 1.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 2D camera: looks at `target`, which lands on screen at `offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    pub target: Vec2,
    pub offset: Vec2,
    /// Degrees.
    pub rotation: f32,
    pub zoom: f32,
}

impl Camera2D {
    /// Unrotated, unzoomed camera keeping `target` at the viewport centre.
    pub fn centered(target: Vec2, viewport: Viewport) -> Self {
        Self {
            target,
            offset: viewport.center(),
            rotation: 0.0,
            zoom: 1.0,
        }
    }

    /// World space to screen pixels.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset.extend(0.0))
            * Mat4::from_rotation_z(self.rotation.to_radians())
            * Mat4::from_scale(Vec3::new(self.zoom, self.zoom, 1.0))
            * Mat4::from_translation((-self.target).extend(0.0))
    }

    /// World space to clip space for the given viewport.
    pub fn view_projection(&self, viewport: Viewport) -> Mat4 {
        viewport.projection() * self.matrix()
    }

    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        self.matrix().transform_point3(p.extend(0.0)).truncate()
    }

    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        self.matrix().inverse().transform_point3(p.extend(0.0)).truncate()
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::centered(Vec2::ZERO, Viewport::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn target_lands_on_offset() {
        let cam = Camera2D::centered(Vec2::new(120.0, -40.0), Viewport::DEFAULT);
        let s = cam.world_to_screen(cam.target);
        assert_relative_eq!(s.x, 400.0, epsilon = 1e-4);
        assert_relative_eq!(s.y, 225.0, epsilon = 1e-4);
    }

    #[test]
    fn screen_to_world_inverts() {
        let cam = Camera2D {
            target: Vec2::new(10.0, 20.0),
            offset: Vec2::new(400.0, 225.0),
            rotation: 30.0,
            zoom: 2.0,
        };
        let p = Vec2::new(-33.0, 71.5);
        let back = cam.screen_to_world(cam.world_to_screen(p));
        assert_relative_eq!(back.x, p.x, epsilon = 1e-3);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-3);
    }

    #[test]
    fn zoom_scales_distances() {
        let cam = Camera2D {
            zoom: 2.0,
            ..Camera2D::default()
        };
        let s = cam.world_to_screen(Vec2::new(10.0, 0.0));
        assert_relative_eq!(s.x, 420.0, epsilon = 1e-4);
    }

    #[test]
    fn projection_maps_corners_to_clip_space() {
        let proj = Viewport::DEFAULT.projection();
        let top_left = proj.transform_point3(Vec3::ZERO);
        let bottom_right = proj.transform_point3(Vec3::new(800.0, 450.0, 0.0));
        assert_relative_eq!(top_left.x, -1.0, epsilon = 1e-5);
        assert_relative_eq!(top_left.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(bottom_right.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(bottom_right.y, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn viewport_center() {
        assert_eq!(Viewport::DEFAULT.center(), Vec2::new(400.0, 225.0));
    }
}
