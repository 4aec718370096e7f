//! Pixel-level compositing primitives.
//!
//! These routines operate on plain [`RgbaImage`] buffers and carry the
//! low-level work of the composer: downscale-only fitting, source-over alpha
//! compositing, circular masking, and ring drawing.

use image::{Rgba, RgbaImage, imageops};

use crate::geometry::SizePx;
use crate::spec::RING_INSET;

/// Scales `img` down so both dimensions fit within `max x max`, preserving
/// aspect ratio with Lanczos3 resampling.
///
/// A source that already fits is returned as an unscaled copy (no upscaling).
pub(crate) fn fit_within(img: &RgbaImage, max: u32) -> RgbaImage {
    let current = SizePx::new(img.width(), img.height());
    let target = current.fit_within(max);
    if target == current {
        img.clone()
    } else {
        imageops::resize(img, target.width, target.height, imageops::FilterType::Lanczos3)
    }
}

/// Composites `src` onto `dest` at `(x, y)` using source-over alpha blending.
///
/// The source's own alpha channel acts as the mask: fully transparent source
/// pixels leave the destination untouched. Pixels falling outside the
/// destination bounds are skipped.
pub(crate) fn composite_over(dest: &mut RgbaImage, src: &RgbaImage, x: u32, y: u32) {
    for sy in 0..src.height() {
        let dy = y + sy;
        if dy >= dest.height() {
            break;
        }
        for sx in 0..src.width() {
            let dx = x + sx;
            if dx >= dest.width() {
                break;
            }

            let sp = *src.get_pixel(sx, sy);
            match sp[3] {
                0 => {}
                255 => dest.put_pixel(dx, dy, sp),
                _ => {
                    let dp = *dest.get_pixel(dx, dy);
                    dest.put_pixel(dx, dy, blend_over(sp, dp));
                }
            }
        }
    }
}

/// Source-over blend of two RGBA pixels.
fn blend_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as u32;
    let da = dst[3] as u32;

    // out_a = sa + da * (1 - sa), in 0..=255 fixed point
    let out_a = sa * 255 + da * (255 - sa);
    if out_a == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |s: u8, d: u8| -> u8 {
        let s = s as u32;
        let d = d as u32;
        let num = s * sa * 255 + d * da * (255 - sa);
        ((num + out_a / 2) / out_a) as u8
    };

    Rgba([
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        ((out_a + 127) / 255) as u8,
    ])
}

/// Returns the outer radius of the masked circle and border ring for a canvas
/// of the given side length: `canvas / 2 - RING_INSET`.
pub(crate) fn ring_outer_radius(canvas_size: u32) -> f32 {
    canvas_size as f32 / 2.0 - RING_INSET as f32
}

/// Distance from a pixel's center to the canvas center.
fn center_distance(x: u32, y: u32, canvas_size: u32) -> f32 {
    let c = canvas_size as f32 / 2.0;
    let dx = x as f32 + 0.5 - c;
    let dy = y as f32 + 0.5 - c;
    (dx * dx + dy * dy).sqrt()
}

/// Produces a new transparent-background image keeping only the pixels of
/// `canvas` whose centers lie within the circle of `radius` around the canvas
/// center. Everything outside the circle becomes fully transparent.
pub(crate) fn apply_circle_mask(canvas: &RgbaImage, radius: f32) -> RgbaImage {
    let size = canvas.width();
    let mut out = RgbaImage::new(size, size);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        if center_distance(x, y, size) <= radius {
            *pixel = *canvas.get_pixel(x, y);
        }
    }
    out
}

/// Draws a stroked ring of `color` onto `img`, covering the annulus between
/// `outer_radius - width` and `outer_radius` around the canvas center.
///
/// The ring overwrites whatever is underneath; it is meant to be drawn last.
pub(crate) fn draw_ring(img: &mut RgbaImage, color: [u8; 4], outer_radius: f32, width: u32) {
    let size = img.width();
    let inner_radius = outer_radius - width as f32;
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let d = center_distance(x, y, size);
        if d >= inner_radius && d <= outer_radius {
            *pixel = Rgba(color);
        }
    }
}
