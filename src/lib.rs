//! logomark: deterministic logo-to-icon composition.
//!
//! This crate turns a single source logo image into the two assets a web or
//! desktop app typically ships:
//!
//! - a **square crop/resize** of the logo for general UI use, and
//! - a **circular app icon** with a solid-color ring border, exported as a
//!   multi-resolution ICO favicon.
//!
//! Composition is purely functional per call: identical inputs always
//! produce byte-identical output.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use logomark::{IconSpec, LogoComposer};
//!
//! let logo = RgbaImage::from_pixel(64, 64, Rgba([255, 255, 255, 255]));
//! let composer = LogoComposer::from_image(logo);
//!
//! let icon = composer.circular_icon(&IconSpec::default()).unwrap();
//! assert_eq!(icon.dimensions(), (256, 256));
//! ```
//!
//! # Files in, files out
//!
//! ```no_run
//! use logomark::{IconSpec, LogoComposer};
//!
//! let composer = LogoComposer::from_path("public/logo.png")?;
//!
//! // Both artifacts in one call: square PNG + circular multi-res ICO.
//! composer.process(
//!     "public/logo-square.png",
//!     "app/favicon.ico",
//!     &IconSpec::default(),
//!     512,
//! )?;
//! # Ok::<(), logomark::ComposeError>(())
//! ```
//!
//! # Configuration
//!
//! [`IconSpec`] carries every composition parameter (canvas size, padding,
//! ring color/width, export sizes, crop anchor) and round-trips through JSON
//! for cross-process use.

mod analysis;
mod composer;
mod error;
mod export;
mod geometry;
mod raster;
mod spec;

pub use analysis::content_bounds;
pub use composer::LogoComposer;
pub use error::ComposeError;
pub use export::{write_ico, write_png};
pub use geometry::{RectPx, SizePx};
pub use spec::{CropAnchor, IconSpec, MAX_ICO_SIZE};
