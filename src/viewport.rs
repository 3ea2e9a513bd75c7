//! Viewport bounds used for spawning and culling.
//!
//! The rendering layer owns the actual window size; the simulator only asks
//! for it through [`ViewportSource`] and keeps the last answer.

use glam::Vec2;

/// Rectangular visible area in pixels, origin top-left, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Visible width.
    pub width: f32,
    /// Visible height.
    pub height: f32,
}

impl Viewport {
    /// Create a viewport of the given size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether `position` lies inside the viewport grown by `margin` on every side.
    ///
    /// Boundaries are exclusive, so a point exactly `margin` outside is culled.
    #[inline]
    pub fn contains(&self, position: Vec2, margin: f32) -> bool {
        position.x > -margin
            && position.x < self.width + margin
            && position.y > -margin
            && position.y < self.height + margin
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Something that knows the current viewport size.
///
/// Implemented by the rendering layer so the simulator can query bounds each
/// frame instead of caching a stale size across resizes.
pub trait ViewportSource {
    /// Current viewport.
    fn viewport(&self) -> Viewport;
}

impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_with_margin() {
        let vp = Viewport::new(100.0, 50.0);
        assert!(vp.contains(Vec2::new(0.0, 0.0), 10.0));
        assert!(vp.contains(Vec2::new(-9.9, 59.9), 10.0));
        assert!(!vp.contains(Vec2::new(-10.0, 20.0), 10.0));
        assert!(!vp.contains(Vec2::new(110.0, 20.0), 10.0));
        assert!(!vp.contains(Vec2::new(50.0, 60.0), 10.0));
        assert!(!vp.contains(Vec2::new(50.0, -10.0), 10.0));
    }

    #[test]
    fn test_viewport_is_its_own_source() {
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(vp.viewport(), vp);
    }
}
