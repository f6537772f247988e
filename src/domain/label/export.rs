// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/export.rs
//
// Writes a composed label as a raster and/or a single-page PDF.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbImage};

use crate::constant::LABEL_DPI;
use crate::domain::document::file::write_all;
use crate::domain::document::page::{PageSize, image_page};
use crate::domain::document::raster::{encode, format_for_path, is_primary_raster};
use crate::domain::error::{DocResult, LabelkitError};

/// What gets written for a requested output path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelTarget {
    /// The raster plus a sibling `.pdf`.
    RasterWithPage(ImageFormat),
    /// Only the raster, in a secondary format.
    RasterOnly(ImageFormat),
    /// Only the PDF.
    PageOnly,
}

impl LabelTarget {
    /// Classify `path` by extension.
    pub fn for_path(path: &Path) -> DocResult<Self> {
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            return Ok(Self::PageOnly);
        }

        match format_for_path(path) {
            Some(format) if is_primary_raster(format) => Ok(Self::RasterWithPage(format)),
            Some(format) if format.can_write() => Ok(Self::RasterOnly(format)),
            _ => Err(LabelkitError::write(
                path,
                "unsupported output format (use .png, .jpg or .pdf)",
            )),
        }
    }
}

/// Encoded files for `image` at `path`, without touching the disk.
///
/// Fails on an unsupported extension before anything is encoded.
pub fn label_outputs(image: &RgbImage, path: &Path) -> DocResult<Vec<(PathBuf, Vec<u8>)>> {
    let target = LabelTarget::for_path(path)?;
    let page = || image_page(image, PageSize::from_pixels(image.width(), image.height(), LABEL_DPI));

    Ok(match target {
        LabelTarget::RasterWithPage(format) => vec![
            (path.to_path_buf(), encode(image, format)?),
            (path.with_extension("pdf"), page()?),
        ],
        LabelTarget::RasterOnly(format) => vec![(path.to_path_buf(), encode(image, format)?)],
        LabelTarget::PageOnly => vec![(path.to_path_buf(), page()?)],
    })
}

/// Write `image` to `path` together with `companions` and return every file written.
///
/// Nothing is written unless all of them can be. Companion files come first
/// in the returned list.
pub fn export_label_with(
    image: &RgbImage,
    path: &Path,
    mut companions: Vec<(PathBuf, Vec<u8>)>,
) -> DocResult<Vec<PathBuf>> {
    companions.extend(label_outputs(image, path)?);
    write_all(&companions)
}
