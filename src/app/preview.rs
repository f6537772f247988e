// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/preview.rs
//
// Preview images written to the cache directory and opened externally.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};

use crate::constant::NO_OPEN_ENV;
use crate::domain::document::{file, raster};

/// Downscale so the longest side is at most `max_side`. Smaller images are copied as is.
#[must_use]
pub fn thumbnail(image: &RgbImage, max_side: u32) -> RgbImage {
    let (w, h) = image.dimensions();
    let longest = w.max(h);
    if longest <= max_side || longest == 0 {
        return image.clone();
    }

    let scale = f64::from(max_side) / f64::from(longest);
    let tw = ((f64::from(w) * scale).round() as u32).max(1);
    let th = ((f64::from(h) * scale).round() as u32).max(1);
    imageops::resize(image, tw, th, FilterType::Lanczos3)
}

/// Write `image` as `<cache_dir>/<name>.png`, replacing an earlier preview of that name.
pub fn write_preview(image: &RgbImage, cache_dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    let path = cache_dir.join(format!("{name}.png"));
    let bytes = raster::encode(image, ImageFormat::Png)?;
    file::write_atomic(&path, &bytes).context("Failed to write preview")?;
    Ok(path)
}

/// Write the preview and open it in the system viewer.
///
/// Launching the viewer is skipped when `LABELKIT_NO_OPEN` is set; a viewer
/// that fails to launch is logged, the preview file stays.
pub fn show(image: &RgbImage, cache_dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
    let path = write_preview(image, cache_dir, name)?;

    if std::env::var_os(NO_OPEN_ENV).is_some() {
        log::debug!("{NO_OPEN_ENV} set, not opening {}", path.display());
    } else if let Err(e) = open::that_detached(&path) {
        log::warn!("Failed to open preview {}: {e}", path.display());
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_thumbnail_bounds_longest_side() {
        let wide = RgbImage::from_pixel(945, 591, Rgb([1, 2, 3]));
        let thumb = thumbnail(&wide, 400);
        assert_eq!(thumb.width(), 400);
        assert_eq!(thumb.height(), 250);

        let square = RgbImage::from_pixel(402, 402, Rgb([1, 2, 3]));
        assert_eq!(thumbnail(&square, 400).dimensions(), (400, 400));
    }

    #[test]
    fn test_repeated_preview_reuses_one_file() {
        let dir = tempfile::tempdir().unwrap();
        let cache = dir.path().join("labelkit");
        let first = write_preview(&RgbImage::from_pixel(4, 4, Rgb([0, 0, 0])), &cache, "label-preview").unwrap();
        let second = write_preview(&RgbImage::from_pixel(6, 3, Rgb([9, 9, 9])), &cache, "label-preview").unwrap();

        assert_eq!(first, cache.join("label-preview.png"));
        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(&cache).unwrap().count(), 1);
        assert_eq!(image::open(&second).unwrap().to_rgb8().dimensions(), (6, 3));
    }

    #[test]
    fn test_small_images_are_not_upscaled() {
        let small = RgbImage::from_pixel(30, 20, Rgb([9, 9, 9]));
        assert_eq!(thumbnail(&small, 400), small);
    }
}
