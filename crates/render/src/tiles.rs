//! Checkerboard ground tiles.
//!
//! The background stores no tile data: the set of tiles to draw is a pure
//! function of a reference point (the camera target), recomputed each frame.

use glam::{IVec2, Vec2};

/// Side length of a tile in world units.
pub const TILE_WIDTH: f32 = 32.0;

/// Tiles drawn on each side of the reference tile.
pub const TILE_RENDER_RADIUS: IVec2 = IVec2::new(40, 30);

/// World coordinate to tile coordinate, rounding half away from zero.
pub fn world_to_tile(v: f32) -> i32 {
    (v / TILE_WIDTH).round() as i32
}

/// Tile coordinate to the world coordinate of its centre.
pub fn tile_to_world(t: i32) -> f32 {
    t as f32 * TILE_WIDTH
}

/// Checkerboard rule: on even rows odd columns are drawn, on odd rows even
/// columns are drawn. Periodic with period 2 on both axes.
pub fn is_checker_tile(tile: IVec2) -> bool {
    let row_shift = i32::from(tile.y.rem_euclid(2) == 0);
    (tile.x.rem_euclid(2) + row_shift) % 2 == 0
}

/// Top-left corner and size of a tile's square in world space.
pub fn tile_rect(tile: IVec2) -> (Vec2, Vec2) {
    let half = TILE_WIDTH / 2.0;
    let min = Vec2::new(tile_to_world(tile.x) - half, tile_to_world(tile.y) - half);
    (min, Vec2::splat(TILE_WIDTH))
}

/// Half-open window of tiles `[center - radius, center + radius)` on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileWindow {
    pub center: IVec2,
    pub radius: IVec2,
}

impl TileWindow {
    /// Window of [`TILE_RENDER_RADIUS`] around the tile containing `reference`.
    pub fn around(reference: Vec2) -> Self {
        Self::with_radius(reference, TILE_RENDER_RADIUS)
    }

    pub fn with_radius(reference: Vec2, radius: IVec2) -> Self {
        Self {
            center: IVec2::new(world_to_tile(reference.x), world_to_tile(reference.y)),
            radius,
        }
    }

    /// Columns covered by the window. Bounds saturate at the `i32` limits.
    pub fn x_range(&self) -> std::ops::Range<i32> {
        self.center.x.saturating_sub(self.radius.x)..self.center.x.saturating_add(self.radius.x)
    }

    /// Rows covered by the window. Bounds saturate at the `i32` limits.
    pub fn y_range(&self) -> std::ops::Range<i32> {
        self.center.y.saturating_sub(self.radius.y)..self.center.y.saturating_add(self.radius.y)
    }

    pub fn contains(&self, tile: IVec2) -> bool {
        self.x_range().contains(&tile.x) && self.y_range().contains(&tile.y)
    }

    /// Every tile in the window, column by column.
    pub fn tiles(&self) -> impl Iterator<Item = IVec2> + use<> {
        let ys = self.y_range();
        self.x_range()
            .flat_map(move |x| ys.clone().map(move |y| IVec2::new(x, y)))
    }

    /// Tiles in the window that the checkerboard rule draws.
    pub fn checker_tiles(&self) -> impl Iterator<Item = IVec2> + use<> {
        self.tiles().filter(|t| is_checker_tile(*t))
    }
}
