//! Viewport geometry and screen-to-world mapping
//!
//! The host reports its surface size in pixels; the simulation works in
//! world units. The two are related by a fixed scale (`WORLD_PER_PIXEL`)
//! carried over from the host camera's projection, so spawn anchors and
//! the pointer-driven light land where the camera expects them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{EXIT_BAND_FRACTION, WORLD_PER_PIXEL};

/// Host surface dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Half the viewport width in world units
    #[inline]
    pub fn half_width_world(&self) -> f32 {
        self.width / 2.0 * WORLD_PER_PIXEL
    }

    /// Half the viewport height in world units
    #[inline]
    pub fn half_height_world(&self) -> f32 {
        self.height / 2.0 * WORLD_PER_PIXEL
    }

    /// Map a pointer position (pixels, origin top-left, y down) to world
    /// coordinates (origin at viewport center, y up)
    pub fn pointer_to_world(&self, pointer: Vec2) -> Vec2 {
        Vec2::new(
            (pointer.x - self.width / 2.0) * WORLD_PER_PIXEL,
            (self.height / 2.0 - pointer.y) * WORLD_PER_PIXEL,
        )
    }

    /// Height above which a body has drifted out of the visible band
    #[inline]
    pub fn exit_ceiling(&self) -> f32 {
        self.height * EXIT_BAND_FRACTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_center_maps_to_origin() {
        let vp = Viewport::new(1920.0, 1080.0);
        let world = vp.pointer_to_world(Vec2::new(960.0, 540.0));
        assert!(world.x.abs() < 0.001);
        assert!(world.y.abs() < 0.001);
    }

    #[test]
    fn test_pointer_axes_orientation() {
        let vp = Viewport::new(1000.0, 800.0);
        // Top-left corner: left of center (negative x), above center (positive y)
        let world = vp.pointer_to_world(Vec2::new(0.0, 0.0));
        assert!(world.x < 0.0);
        assert!(world.y > 0.0);
        assert!((world.x + 500.0 * WORLD_PER_PIXEL).abs() < 0.001);
        assert!((world.y - 400.0 * WORLD_PER_PIXEL).abs() < 0.001);
    }

    #[test]
    fn test_half_extents_scale() {
        let vp = Viewport::new(1000.0, 800.0);
        assert!((vp.half_width_world() - 500.0 * 75.0 / 180.0).abs() < 0.001);
        assert!((vp.half_height_world() - 400.0 * 75.0 / 180.0).abs() < 0.001);
    }

    #[test]
    fn test_exit_ceiling_is_a_third_of_height() {
        let vp = Viewport::new(1000.0, 900.0);
        assert!((vp.exit_ceiling() - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_viewport_is_valid() {
        let vp = Viewport::new(0.0, 0.0);
        assert_eq!(vp.half_width_world(), 0.0);
        assert_eq!(vp.exit_ceiling(), 0.0);
        let world = vp.pointer_to_world(Vec2::ZERO);
        assert!(world.x.is_finite() && world.y.is_finite());
    }
}
