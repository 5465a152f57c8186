use super::constants::POINTER_OFFSCREEN;
use glam::Vec2;

/// Visible area of the page in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Convert a pixel coordinate into percentage of the viewport (0..100).
    ///
    /// A degenerate viewport maps everything to the off-screen sentinel so
    /// nothing downstream reacts to it.
    #[inline]
    pub fn to_percent(&self, px: Vec2) -> Vec2 {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Vec2::splat(POINTER_OFFSCREEN);
        }
        Vec2::new(px.x / self.width * 100.0, px.y / self.height * 100.0)
    }
}

/// Last known pointer location, shared by every component of a page session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub px: Vec2,
    pub pct: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            px: Vec2::splat(POINTER_OFFSCREEN),
            pct: Vec2::splat(POINTER_OFFSCREEN),
        }
    }
}

impl PointerState {
    pub fn update(&mut self, px: Vec2, viewport: Viewport) {
        self.px = px;
        self.pct = viewport.to_percent(px);
    }
}

/// Measured bounding box of an on-screen control.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl ControlRect {
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(left + width * 0.5, top + height * 0.5),
            size: Vec2::new(width, height),
        }
    }
}
