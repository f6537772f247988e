// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/label.rs
//
// `label` command: validate, compose, preview, export, save info.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::RgbImage;

use crate::app::message::Outcome;
use crate::app::preview;
use crate::cli::LabelArgs;
use crate::config::AppConfig;
use crate::constant::LABEL_FILE_NAME;
use crate::domain::document::file;
use crate::domain::label::{
    AddressRecord, FontResolver, LabelLayout, compose_label, export_label_with,
};

/// Recipient from the command line, optionally completed with sample data.
#[must_use]
pub fn recipient_from(args: &LabelArgs) -> AddressRecord {
    let mut recipient = AddressRecord::new(&args.name, &args.address, &args.postal, &args.phone);
    if args.sample {
        recipient.fill_missing_from(&AddressRecord::sample_recipient());
    }
    recipient
}

/// Whether the label is exported: when asked to, or when nothing else was asked.
fn wants_export(args: &LabelArgs) -> bool {
    args.output.is_some() || (!args.preview && args.save_info.is_none())
}

pub fn run(args: LabelArgs, config: AppConfig) -> anyhow::Result<Vec<Outcome>> {
    let recipient = recipient_from(&args);
    let export = wants_export(&args);
    let render = export || args.preview;

    if render {
        recipient.validate_recipient()?;
    }

    // The report is written in the same batch as the label files.
    let report: Vec<(PathBuf, Vec<u8>)> = args
        .save_info
        .iter()
        .map(|path| (path.clone(), recipient.to_report().into_bytes()))
        .collect();

    if !render {
        return save_report(&report).map(|saved| saved.into_iter().collect());
    }

    let fonts = FontResolver::standard(config.font_override.as_deref()).load();
    if fonts.is_degraded() {
        log::warn!("Label text uses the built-in font; install Vazir or pass --font for Persian glyphs");
    }
    let image = compose_label(
        &AddressRecord::sender(),
        &recipient,
        &fonts,
        &LabelLayout::default(),
    );

    let mut outcomes = Vec::new();

    if export {
        match (args.output, config.output_dir) {
            (Some(path), _) => outcomes.push(export_to(&image, &path, report)?),
            (None, Some(dir)) => {
                outcomes.push(export_to(&image, &dir.join(LABEL_FILE_NAME), report)?);
            }
            (None, None) => {
                log::info!("No output path, label not saved");
                outcomes.extend(save_report(&report)?);
                outcomes.push(Outcome::Cancelled);
            }
        }
    } else {
        outcomes.extend(save_report(&report)?);
    }

    if args.preview {
        let path = preview::show(&image, &config.cache_dir, "address_label-preview")?;
        outcomes.push(Outcome::Previewed(path));
    }

    Ok(outcomes)
}

fn export_to(
    image: &RgbImage,
    target: &Path,
    report: Vec<(PathBuf, Vec<u8>)>,
) -> anyhow::Result<Outcome> {
    let written = export_label_with(image, target, report)
        .with_context(|| format!("Failed to export label to {}", target.display()))?;
    Ok(Outcome::Saved(written))
}

fn save_report(report: &[(PathBuf, Vec<u8>)]) -> anyhow::Result<Option<Outcome>> {
    if report.is_empty() {
        return Ok(None);
    }
    let written = file::write_all(report).context("Failed to save recipient info")?;
    Ok(Some(Outcome::Saved(written)))
}
