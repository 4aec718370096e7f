//! Error types for logo composition and export.
//!
//! Each failure stage (load, compose, export) maps to a distinct variant so
//! callers can tell an unreadable source apart from a bad configuration or a
//! filesystem problem.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while loading, composing, or exporting icons.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// The source image could not be read or decoded.
    #[error("failed to load source image {path}: {source}")]
    Load {
        /// Path of the image that failed to load.
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A requested output dimension is out of range.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// An [`IconSpec`](crate::IconSpec) violates one of its invariants.
    #[error("invalid icon spec: {0}")]
    InvalidSpec(String),

    /// An output file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path of the output that failed to write.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ComposeError {
    pub(crate) fn load(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Load {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_path() {
        let err = ComposeError::load(
            "missing/logo.png",
            image::ImageError::IoError(std::io::Error::from(std::io::ErrorKind::NotFound)),
        );
        let message = err.to_string();
        assert!(message.contains("missing/logo.png"));
        assert!(message.contains("load"));
    }

    #[test]
    fn write_error_names_path() {
        let err = ComposeError::write(
            "out/favicon.ico",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(err.to_string().contains("out/favicon.ico"));
    }
}
