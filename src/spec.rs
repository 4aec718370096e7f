//! Serializable icon composition parameters.
//!
//! An [`IconSpec`] captures every knob of the circular-icon composition in a
//! format that can be serialized to JSON and shipped between processes or
//! stored alongside build tooling.
//!
//! # Example
//!
//! ```
//! use logomark::{CropAnchor, IconSpec};
//!
//! let spec = IconSpec::default()
//!     .with_border_color([255, 255, 255, 255])
//!     .with_crop_anchor(CropAnchor::Center);
//!
//! spec.validate().unwrap();
//! let json = spec.to_json().unwrap();
//! let restored = IconSpec::from_json(&json).unwrap();
//! assert_eq!(restored, spec);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ComposeError;

/// Frames in an ICO file cannot exceed 256 pixels per side.
pub const MAX_ICO_SIZE: u32 = 256;

/// Margin between the canvas edge and the outer edge of the border ring.
pub(crate) const RING_INSET: u32 = 2;

// ============================================================================
// CropAnchor
// ============================================================================

/// Where the square crop window is anchored within the source image.
///
/// The original asset scripts always cropped from the top-left corner,
/// assuming the logo mark sits on the left of a wide wordmark image. That is
/// a content-specific assumption, so the anchor is an explicit choice here
/// rather than a hard-coded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropAnchor {
    /// Crop from the top-left corner of the source.
    #[default]
    Origin,
    /// Crop the centered square region of the source.
    Center,
}

// ============================================================================
// IconSpec
// ============================================================================

/// Parameters for circular icon composition and export.
///
/// # Invariants
///
/// Checked by [`validate`](Self::validate) and enforced before composing:
///
/// - `2 * padding < canvas_size` (a non-empty content box remains)
/// - `border_width < canvas_size / 2` (the ring is a stroke, not a disc)
/// - `canvas_size` leaves room for the 2 px ring inset
/// - `sizes` is non-empty and every entry is in `1..=256`
///
/// # JSON Format
///
/// ```json
/// {
///   "canvasSize": 256,
///   "padding": 20,
///   "borderColor": [56, 189, 248, 255],
///   "borderWidth": 8,
///   "sizes": [256, 128, 64, 32, 16],
///   "cropAnchor": "origin"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconSpec {
    /// Side length of the square compositing canvas, in pixels.
    pub canvas_size: u32,

    /// Padding between the canvas edge and the content box, per side.
    pub padding: u32,

    /// RGBA color of the border ring.
    pub border_color: [u8; 4],

    /// Stroke width of the border ring, in pixels.
    pub border_width: u32,

    /// Output resolutions for multi-resolution icon export.
    pub sizes: Vec<u32>,

    /// Anchor for the square crop operation.
    pub crop_anchor: CropAnchor,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            canvas_size: 256,
            padding: 20,
            border_color: [56, 189, 248, 255],
            border_width: 8,
            sizes: vec![256, 128, 64, 32, 16],
            crop_anchor: CropAnchor::Origin,
        }
    }
}

impl IconSpec {
    /// Creates a spec with the default theme (256 px canvas, cyan ring).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size.
    pub fn with_canvas_size(mut self, canvas_size: u32) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    /// Sets the per-side content padding.
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the RGBA border ring color.
    pub fn with_border_color(mut self, border_color: [u8; 4]) -> Self {
        self.border_color = border_color;
        self
    }

    /// Sets the border ring stroke width.
    pub fn with_border_width(mut self, border_width: u32) -> Self {
        self.border_width = border_width;
        self
    }

    /// Sets the export resolution list.
    pub fn with_sizes(mut self, sizes: Vec<u32>) -> Self {
        self.sizes = sizes;
        self
    }

    /// Sets the square crop anchor.
    pub fn with_crop_anchor(mut self, crop_anchor: CropAnchor) -> Self {
        self.crop_anchor = crop_anchor;
        self
    }

    /// Returns the maximum content side length: `canvas_size - 2 * padding`.
    ///
    /// Saturates to zero when the padding consumes the whole canvas; such a
    /// spec is rejected by [`validate`](Self::validate).
    pub fn content_size(&self) -> u32 {
        (self.canvas_size as u64).saturating_sub(2 * self.padding as u64) as u32
    }

    /// Checks all spec invariants.
    ///
    /// Returns [`ComposeError::InvalidSpec`] naming the first violated
    /// invariant.
    pub fn validate(&self) -> Result<(), ComposeError> {
        if self.canvas_size <= 2 * RING_INSET {
            return Err(ComposeError::InvalidSpec(format!(
                "canvas size {} leaves no room for the {RING_INSET}px ring inset",
                self.canvas_size
            )));
        }
        if 2 * self.padding as u64 >= self.canvas_size as u64 {
            return Err(ComposeError::InvalidSpec(format!(
                "padding {} x2 exceeds canvas size {}",
                self.padding, self.canvas_size
            )));
        }
        if self.border_width >= self.canvas_size / 2 {
            return Err(ComposeError::InvalidSpec(format!(
                "border width {} is not smaller than canvas radius {}",
                self.border_width,
                self.canvas_size / 2
            )));
        }
        if self.sizes.is_empty() {
            return Err(ComposeError::InvalidSpec(
                "export size list is empty".into(),
            ));
        }
        if let Some(size) = self
            .sizes
            .iter()
            .find(|s| **s == 0 || **s > MAX_ICO_SIZE)
        {
            return Err(ComposeError::InvalidSpec(format!(
                "export size {size} is outside the supported range 1..={MAX_ICO_SIZE}"
            )));
        }
        Ok(())
    }

    /// Serializes the spec to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a spec from a JSON string.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_theme() {
        let spec = IconSpec::default();
        assert_eq!(spec.canvas_size, 256);
        assert_eq!(spec.padding, 20);
        assert_eq!(spec.content_size(), 216);
        assert_eq!(spec.border_color, [56, 189, 248, 255]);
        assert_eq!(spec.border_width, 8);
        assert_eq!(spec.sizes, vec![256, 128, 64, 32, 16]);
        assert_eq!(spec.crop_anchor, CropAnchor::Origin);
        spec.validate().unwrap();
    }

    #[test]
    fn rejects_padding_consuming_canvas() {
        let spec = IconSpec::default().with_padding(128);
        assert!(matches!(
            spec.validate(),
            Err(ComposeError::InvalidSpec(_))
        ));
    }

    #[test]
    fn rejects_extreme_padding_without_overflow() {
        // 2 * padding exceeds u32::MAX; the comparison must not wrap.
        let spec = IconSpec::default().with_padding(u32::MAX / 2 + 1);
        assert!(matches!(
            spec.validate(),
            Err(ComposeError::InvalidSpec(_))
        ));
    }

    #[test]
    fn content_size_saturates_on_oversized_padding() {
        let spec = IconSpec::default().with_padding(200);
        assert_eq!(spec.content_size(), 0);
        assert!(spec.validate().is_err());

        let extreme = IconSpec::default().with_padding(u32::MAX);
        assert_eq!(extreme.content_size(), 0);
    }

    #[test]
    fn rejects_border_wider_than_radius() {
        let spec = IconSpec::default().with_border_width(128);
        assert!(matches!(
            spec.validate(),
            Err(ComposeError::InvalidSpec(_))
        ));
    }

    #[test]
    fn rejects_degenerate_canvas() {
        let spec = IconSpec::default()
            .with_canvas_size(4)
            .with_padding(0)
            .with_border_width(1);
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_bad_size_lists() {
        let empty = IconSpec::default().with_sizes(vec![]);
        assert!(empty.validate().is_err());

        let zero = IconSpec::default().with_sizes(vec![64, 0]);
        assert!(zero.validate().is_err());

        let oversized = IconSpec::default().with_sizes(vec![512]);
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn json_roundtrip() {
        let spec = IconSpec::default()
            .with_border_color([255, 0, 0, 255])
            .with_sizes(vec![64, 32])
            .with_crop_anchor(CropAnchor::Center);

        let json = spec.to_json().unwrap();
        assert!(json.contains("\"canvasSize\""));
        assert!(json.contains("\"cropAnchor\":\"center\""));

        let restored = IconSpec::from_json(&json).unwrap();
        assert_eq!(restored, spec);
    }

    #[test]
    fn empty_json_yields_defaults() {
        let spec = IconSpec::from_json("{}").unwrap();
        assert_eq!(spec, IconSpec::default());
    }
}
