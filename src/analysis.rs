//! Source-content analysis.
//!
//! Logo assets often arrive as a wide wordmark on a dark background with the
//! actual mark occupying a corner of the canvas. [`content_bounds`] finds the
//! bounding box of the visible content so callers can judge where the mark
//! sits before choosing a crop anchor.

use image::RgbaImage;

use crate::geometry::RectPx;

/// Computes the bounding box of pixels brighter than `threshold`.
///
/// A pixel counts as content when it is not fully transparent and its
/// Rec. 601 luminance exceeds `threshold`. Returns `None` when the image has
/// no such pixel (fully dark or fully transparent).
pub fn content_bounds(img: &RgbaImage, threshold: u8) -> Option<RectPx> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0u32;
    let mut max_y = 0u32;
    let mut found = false;

    for (x, y, pixel) in img.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        if a == 0 || luminance(r, g, b) <= threshold {
            continue;
        }
        found = true;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    found.then(|| RectPx::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Rec. 601 luma approximation in integer arithmetic.
fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}
