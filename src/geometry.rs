//! Pixel-geometry value types.
//!
//! These types describe regions and sizes in source/canvas pixel space and
//! carry the arithmetic the composer relies on: square-crop windows,
//! downscale-only fitting, and centered placement.

use serde::{Deserialize, Serialize};

/// A rectangle defined in pixel coordinates.
///
/// Used to describe crop windows and content bounds within an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle starting at origin (0, 0) with the given dimensions.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the size of this rectangle.
    pub fn size(&self) -> SizePx {
        SizePx::new(self.width, self.height)
    }
}

/// A 2D size in pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SizePx {
    pub width: u32,
    pub height: u32,
}

impl SizePx {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if width equals height.
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Returns the smaller of the two dimensions.
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    /// Returns the size this image should be scaled to so both dimensions
    /// fit within `max x max`, preserving aspect ratio.
    ///
    /// Only ever scales down. A size that already fits is returned unchanged,
    /// so callers can skip resampling entirely in that case.
    pub fn fit_within(&self, max: u32) -> SizePx {
        if self.width <= max && self.height <= max {
            return *self;
        }

        let scale = (max as f64 / self.width as f64).min(max as f64 / self.height as f64);
        SizePx::new(
            ((self.width as f64 * scale).round() as u32).max(1),
            ((self.height as f64 * scale).round() as u32).max(1),
        )
    }

    /// Returns the top-left offset that centers this size within `outer`.
    ///
    /// Offsets are computed with integer division, rounding down, matching
    /// the convention `offset = (outer - inner) / 2` per axis. The inner size
    /// must not exceed the outer size.
    pub fn centered_in(&self, outer: SizePx) -> (u32, u32) {
        debug_assert!(self.width <= outer.width && self.height <= outer.height);
        (
            (outer.width - self.width) / 2,
            (outer.height - self.height) / 2,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_px_edges() {
        let rect = RectPx::new(10, 20, 100, 200);
        assert_eq!(rect.right(), 110);
        assert_eq!(rect.bottom(), 220);
        assert_eq!(rect.size(), SizePx::new(100, 200));
    }

    #[test]
    fn size_px_is_square() {
        assert!(SizePx::new(100, 100).is_square());
        assert!(!SizePx::new(100, 200).is_square());
    }

    #[test]
    fn fit_within_never_upscales() {
        let small = SizePx::new(100, 100);
        assert_eq!(small.fit_within(216), small);

        let tall = SizePx::new(50, 200);
        assert_eq!(tall.fit_within(216), tall);
    }

    #[test]
    fn fit_within_downscales_preserving_aspect() {
        let landscape = SizePx::new(800, 600);
        let fitted = landscape.fit_within(216);
        assert_eq!(fitted, SizePx::new(216, 162));

        let portrait = SizePx::new(600, 800);
        assert_eq!(portrait.fit_within(216), SizePx::new(162, 216));
    }

    #[test]
    fn fit_within_extreme_aspect_stays_nonzero() {
        let sliver = SizePx::new(10000, 1);
        let fitted = sliver.fit_within(216);
        assert_eq!(fitted.width, 216);
        assert_eq!(fitted.height, 1);
    }

    #[test]
    fn centered_offsets_round_down() {
        // The 100x100-on-256 scenario: (256 - 100) / 2 = 78 per axis.
        let content = SizePx::new(100, 100);
        assert_eq!(content.centered_in(SizePx::new(256, 256)), (78, 78));

        // Odd remainder rounds down.
        let odd = SizePx::new(101, 100);
        assert_eq!(odd.centered_in(SizePx::new(256, 256)), (77, 78));
    }
}
