//! Atomic file export for composed images.
//!
//! Both writers stage their output in a sibling temp file and rename it into
//! place on success, so a failed encode or interrupted write never leaves a
//! truncated file at the target path.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage, imageops};

use crate::error::ComposeError;
use crate::spec::MAX_ICO_SIZE;

/// Writes `image` to `path` as a multi-resolution ICO file.
///
/// One frame is encoded per entry in `sizes`, downsampled with Lanczos3;
/// frames are stored largest-first and duplicate sizes are collapsed. Entries
/// must be in `1..=256` (the ICO frame limit).
///
/// Fails with [`ComposeError::Write`] on filesystem or encoding errors and
/// with [`ComposeError::InvalidDimension`] on an out-of-range size; the
/// target path is left untouched on failure.
pub fn write_ico(image: &RgbaImage, path: impl AsRef<Path>, sizes: &[u32]) -> Result<(), ComposeError> {
    let path = path.as_ref();

    if sizes.is_empty() {
        return Err(ComposeError::InvalidDimension(
            "ICO export requires at least one size".into(),
        ));
    }
    if let Some(size) = sizes.iter().find(|s| **s == 0 || **s > MAX_ICO_SIZE) {
        return Err(ComposeError::InvalidDimension(format!(
            "ICO frame size {size} is outside the supported range 1..={MAX_ICO_SIZE}"
        )));
    }

    // Largest-first ordering, by convention.
    let mut ordered = sizes.to_vec();
    ordered.sort_unstable_by(|a, b| b.cmp(a));
    ordered.dedup();

    let mut dir = ico::IconDir::new(ico::ResourceType::Icon);
    for size in ordered {
        let frame = if image.dimensions() == (size, size) {
            image.clone()
        } else {
            imageops::resize(image, size, size, imageops::FilterType::Lanczos3)
        };
        let frame = ico::IconImage::from_rgba_data(size, size, frame.into_raw());
        let entry =
            ico::IconDirEntry::encode(&frame).map_err(|e| ComposeError::write(path, e))?;
        dir.add_entry(entry);
    }

    write_atomic(path, |w| dir.write(w))
}

/// Writes `image` to `path` as a PNG file.
///
/// Same atomicity and error contract as [`write_ico`].
pub fn write_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), ComposeError> {
    let path = path.as_ref();
    write_atomic(path, |w| {
        image
            .write_to(w, ImageFormat::Png)
            .map_err(std::io::Error::other)
    })
}

/// Runs `write` against a temp file next to `path`, then renames it into
/// place. The temp file is removed on any failure.
fn write_atomic<F>(path: &Path, write: F) -> Result<(), ComposeError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let tmp = temp_path(path);

    let result = (|| {
        let file = File::create(&tmp)?;
        let mut writer = BufWriter::new(file);
        write(&mut writer)?;
        writer.flush()
    })();

    match result {
        Ok(()) => fs::rename(&tmp, path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            ComposeError::write(path, e)
        }),
        Err(e) => {
            let _ = fs::remove_file(&tmp);
            Err(ComposeError::write(path, e))
        }
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
