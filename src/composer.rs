//! Logo composition engine.

use std::path::Path;

use image::{Rgba, RgbaImage, imageops};

use crate::analysis;
use crate::error::ComposeError;
use crate::export::{write_ico, write_png};
use crate::geometry::{RectPx, SizePx};
use crate::raster;
use crate::spec::{CropAnchor, IconSpec};

/// Composes app icons from a single source logo image.
///
/// `LogoComposer` decodes the source once and exposes the two composition
/// operations plus file export. All operations are pure per call; nothing is
/// retained between invocations beyond the decoded source.
///
/// # Example
///
/// ```no_run
/// use logomark::{IconSpec, LogoComposer};
///
/// let composer = LogoComposer::from_path("public/logo.png")?;
/// composer.process(
///     "public/logo-square.png",
///     "app/favicon.ico",
///     &IconSpec::default(),
///     512,
/// )?;
/// # Ok::<(), logomark::ComposeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogoComposer {
    source: RgbaImage,
}

impl LogoComposer {
    /// Loads and decodes the source image at `path`, converting to RGBA.
    ///
    /// Any format the `image` crate can decode is accepted. Fails with
    /// [`ComposeError::Load`] for a missing, unreadable, or corrupt file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ComposeError> {
        let path = path.as_ref();
        let source = image::open(path)
            .map_err(|e| ComposeError::load(path, e))?
            .to_rgba8();
        Ok(Self { source })
    }

    /// Creates a composer from an already-decoded RGBA image.
    pub fn from_image(source: RgbaImage) -> Self {
        Self { source }
    }

    /// Returns the decoded source image.
    pub fn source(&self) -> &RgbaImage {
        &self.source
    }

    /// Returns the source dimensions.
    pub fn dimensions(&self) -> SizePx {
        SizePx::new(self.source.width(), self.source.height())
    }

    /// Crops the source to a square and resizes it to
    /// `target_size x target_size` with Lanczos3 resampling.
    ///
    /// The crop window spans `min(width, height)` pixels per side, placed at
    /// the given anchor. A source that is already square is copied without
    /// cropping. The alpha channel is preserved throughout.
    ///
    /// Fails with [`ComposeError::InvalidDimension`] when `target_size` is
    /// zero.
    pub fn square_crop(
        &self,
        target_size: u32,
        anchor: CropAnchor,
    ) -> Result<RgbaImage, ComposeError> {
        if target_size == 0 {
            return Err(ComposeError::InvalidDimension(
                "square crop target size must be non-zero".into(),
            ));
        }

        let window = self.crop_window(anchor);
        let square = if window.size() == self.dimensions() {
            self.source.clone()
        } else {
            imageops::crop_imm(&self.source, window.x, window.y, window.width, window.height)
                .to_image()
        };

        if square.dimensions() == (target_size, target_size) {
            return Ok(square);
        }
        Ok(imageops::resize(
            &square,
            target_size,
            target_size,
            imageops::FilterType::Lanczos3,
        ))
    }

    /// Composes the circular bordered icon described by `spec`.
    ///
    /// The source is scaled down (never up) to fit the content box, centered
    /// on an opaque black canvas, masked to a circle, and finished with a
    /// ring of `spec.border_color` drawn last so content never occludes it.
    /// Every pixel outside the circle of radius `canvas_size / 2 - 2` is
    /// fully transparent in the output.
    ///
    /// Deterministic: identical inputs produce byte-identical output.
    pub fn circular_icon(&self, spec: &IconSpec) -> Result<RgbaImage, ComposeError> {
        spec.validate()?;

        let content = raster::fit_within(&self.source, spec.content_size());
        let content_size = SizePx::new(content.width(), content.height());

        let canvas_size = SizePx::new(spec.canvas_size, spec.canvas_size);
        let mut canvas =
            RgbaImage::from_pixel(spec.canvas_size, spec.canvas_size, Rgba([0, 0, 0, 255]));

        let (ox, oy) = content_size.centered_in(canvas_size);
        raster::composite_over(&mut canvas, &content, ox, oy);

        let radius = raster::ring_outer_radius(spec.canvas_size);
        let mut icon = raster::apply_circle_mask(&canvas, radius);
        raster::draw_ring(&mut icon, spec.border_color, radius, spec.border_width);

        Ok(icon)
    }

    /// Finds the bounding box of source content brighter than `threshold`.
    ///
    /// See [`analysis::content_bounds`]. Useful for deciding which
    /// [`CropAnchor`] suits a particular asset.
    pub fn content_bounds(&self, threshold: u8) -> Option<RectPx> {
        analysis::content_bounds(&self.source, threshold)
    }

    /// Produces both standard artifacts in one call: the square UI logo as a
    /// PNG at `square_path` and the circular multi-resolution icon as an ICO
    /// at `icon_path`.
    ///
    /// The square variant is `square_size` pixels per side, cropped at
    /// `spec.crop_anchor`. Outputs are written atomically; a failure at any
    /// stage leaves already-written files intact and pending ones absent.
    pub fn process(
        &self,
        square_path: impl AsRef<Path>,
        icon_path: impl AsRef<Path>,
        spec: &IconSpec,
        square_size: u32,
    ) -> Result<(), ComposeError> {
        spec.validate()?;

        let square = self.square_crop(square_size, spec.crop_anchor)?;
        write_png(&square, square_path)?;

        let icon = self.circular_icon(spec)?;
        write_ico(&icon, icon_path, &spec.sizes)
    }

    /// Crop window of `min_side` pixels per side at the given anchor.
    fn crop_window(&self, anchor: CropAnchor) -> RectPx {
        let dims = self.dimensions();
        let side = dims.min_side();
        match anchor {
            CropAnchor::Origin => RectPx::new(0, 0, side, side),
            CropAnchor::Center => {
                let (x, y) = SizePx::new(side, side).centered_in(dims);
                RectPx::new(x, y, side, side)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
