// SPDX-License-Identifier: GPL-3.0-or-later
// src/cli.rs
//
// Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use image::ImageFormat;

#[derive(Debug, Parser)]
#[command(name = "labelkit", version)]
#[command(about = "34 mm photo crops and Persian shipping labels")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Crop a photo to 34 mm x 34 mm and save it as a raster and a PDF.
    Crop(CropArgs),
    /// Compose a shipping label and save it as PNG and PDF.
    Label(LabelArgs),
    /// List font candidates and show which one is used.
    Fonts {
        /// Font file to try first.
        #[arg(long, value_name = "FILE")]
        font: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct CropArgs {
    /// Source image.
    #[arg(value_name = "IMAGE")]
    pub image: PathBuf,

    /// Output resolution (72..=600).
    #[arg(long)]
    pub dpi: Option<u32>,

    /// Directory for the outputs (defaults to the pictures directory).
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Raster format (defaults to png).
    #[arg(long, value_enum)]
    pub format: Option<RasterKind>,

    /// Also open a downscaled preview of the crop.
    #[arg(long)]
    pub preview: bool,
}

#[derive(Debug, Default, Args)]
pub struct LabelArgs {
    /// Recipient name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Recipient address.
    #[arg(long, default_value = "")]
    pub address: String,

    /// Recipient postal code.
    #[arg(long, default_value = "")]
    pub postal: String,

    /// Recipient phone (optional).
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Fill empty recipient fields with sample data.
    #[arg(long)]
    pub sample: bool,

    /// Output path; `.png` also writes a sibling `.pdf`.
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Font file to try first.
    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    /// Open the label in the system viewer instead of exporting it.
    #[arg(long)]
    pub preview: bool,

    /// Save the recipient details as a text report.
    #[arg(long, value_name = "FILE")]
    pub save_info: Option<PathBuf>,
}

/// Raster formats offered for crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RasterKind {
    Png,
    #[value(alias = "jpg")]
    Jpeg,
}

impl From<RasterKind> for ImageFormat {
    fn from(kind: RasterKind) -> Self {
        match kind {
            RasterKind::Png => ImageFormat::Png,
            RasterKind::Jpeg => ImageFormat::Jpeg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_crop() {
        let cli = Cli::parse_from(["labelkit", "-vv", "crop", "photo.jpg", "--dpi", "600", "--format", "jpg"]);
        assert_eq!(cli.verbose, 2);
        let Commands::Crop(args) = cli.command else {
            panic!("expected crop");
        };
        assert_eq!(args.image, PathBuf::from("photo.jpg"));
        assert_eq!(args.dpi, Some(600));
        assert_eq!(args.format.map(ImageFormat::from), Some(ImageFormat::Jpeg));
        assert!(!args.preview);
    }

    #[test]
    fn test_parse_label_defaults() {
        let cli = Cli::parse_from(["labelkit", "label", "--name", "Ali"]);
        let Commands::Label(args) = cli.command else {
            panic!("expected label");
        };
        assert_eq!(args.name, "Ali");
        assert!(args.address.is_empty());
        assert!(args.output.is_none());
        assert!(!args.sample);
    }
}
