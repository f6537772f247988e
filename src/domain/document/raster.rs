// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/raster.rs
//
// Raster input and output: decoding sources, encoding results.

use std::io::Cursor;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, RgbImage};

use crate::constant::JPEG_QUALITY;
use crate::domain::error::{DocResult, LabelkitError};

/// Load a raster image from disk, normalised to 8-bit RGB.
///
/// Format is sniffed from content first, so a mislabelled extension still
/// decodes.
pub fn load_rgb(path: &Path) -> DocResult<RgbImage> {
    let document = ImageReader::open(path)
        .map_err(|e| LabelkitError::load(path, e))?
        .with_guessed_format()
        .map_err(|e| LabelkitError::load(path, e))?
        .decode()
        .map_err(|e| LabelkitError::load(path, e))?;

    let (width, height) = document.dimensions();
    if width == 0 || height == 0 {
        return Err(LabelkitError::load(path, "image has no pixels"));
    }

    log::info!("Loaded {}: {width}x{height} pixels", path.display());
    Ok(document.to_rgb8())
}

/// Raster format for an output path, judged by its extension.
#[must_use]
pub fn format_for_path(path: &Path) -> Option<ImageFormat> {
    ImageFormat::from_path(path).ok()
}

/// Whether `format` is the lossless raster the label pairs with a PDF.
#[must_use]
pub fn is_primary_raster(format: ImageFormat) -> bool {
    format == ImageFormat::Png
}

/// Encode an RGB image into `format`.
///
/// JPEG is written at a fixed high quality; every other format uses the
/// encoder defaults.
pub fn encode(image: &RgbImage, format: ImageFormat) -> DocResult<Vec<u8>> {
    let mut bytes = Vec::new();
    match format {
        ImageFormat::Jpeg => {
            JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
                .encode_image(image)
                .map_err(|e| LabelkitError::Encode(e.to_string()))?;
        }
        other => {
            DynamicImage::ImageRgb8(image.clone())
                .write_to(&mut Cursor::new(&mut bytes), other)
                .map_err(|e| LabelkitError::Encode(e.to_string()))?;
        }
    }
    Ok(bytes)
}

/// Preferred file extension for `format`.
#[must_use]
pub fn extension(format: ImageFormat) -> &'static str {
    format.extensions_str().first().copied().unwrap_or("img")
}
