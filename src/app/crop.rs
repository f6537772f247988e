// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/crop.rs
//
// `crop` command: load, crop to 34 mm, write raster and page.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::ImageFormat;

use crate::app::message::Outcome;
use crate::app::preview;
use crate::cli::CropArgs;
use crate::config::AppConfig;
use crate::constant::PREVIEW_MAX_SIZE;
use crate::domain::document::crop::{Dpi, crop_to_size, output_stem};
use crate::domain::document::{file, raster};

fn crop_stem(source: &Path) -> String {
    let basename = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    output_stem(&basename)
}

/// Output paths for a source image in `dir`.
#[must_use]
pub fn output_paths(source: &Path, dir: &Path, format: ImageFormat) -> (PathBuf, PathBuf) {
    let stem = crop_stem(source);
    (
        dir.join(format!("{stem}.{}", raster::extension(format))),
        dir.join(format!("{stem}.pdf")),
    )
}

pub fn run(args: CropArgs, config: AppConfig) -> anyhow::Result<Vec<Outcome>> {
    let dpi = Dpi::new(args.dpi.unwrap_or(config.default_dpi))?;
    let format = args.format.map_or(config.raster_format, ImageFormat::from);

    let source = raster::load_rgb(&args.image)?;
    println!("Loaded: {}x{} pixels", source.width(), source.height());

    let Some(dir) = config.output_dir else {
        log::info!("No output directory, nothing saved");
        return Ok(vec![Outcome::Cancelled]);
    };

    let output = crop_to_size(&source, dpi, format)
        .with_context(|| format!("Failed to crop {}", args.image.display()))?;

    let (raster_path, page_path) = output_paths(&args.image, &dir, format);
    let written = file::write_all(&[(raster_path, output.raster), (page_path, output.page)])?;

    let mut outcomes = vec![Outcome::Saved(written)];
    if args.preview {
        let stem = crop_stem(&args.image);
        let thumb = preview::thumbnail(&output.image, PREVIEW_MAX_SIZE);
        outcomes.push(Outcome::Previewed(preview::show(
            &thumb,
            &config.cache_dir,
            &format!("{stem}-preview"),
        )?));
    }

    Ok(outcomes)
}
