// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application, overridden by command-line flags.

use std::path::PathBuf;

use image::ImageFormat;

use crate::constant::{CACHE_DIR, DEFAULT_DPI};

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory outputs land in when no explicit path is given.
    /// `None` means no destination could be determined.
    pub output_dir: Option<PathBuf>,
    /// Where previews are written before they are opened.
    pub cache_dir: PathBuf,
    /// Crop resolution when `--dpi` is not given.
    pub default_dpi: u32,
    /// Raster format for crop outputs.
    pub raster_format: ImageFormat,
    /// Font file tried before the bundled and system fonts.
    pub font_override: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: dirs::picture_dir()
                .or_else(dirs::home_dir)
                .or_else(|| Some(PathBuf::from("."))),
            cache_dir: dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(CACHE_DIR),
            default_dpi: DEFAULT_DPI,
            raster_format: ImageFormat::Png,
            font_override: None,
        }
    }
}

impl AppConfig {
    /// Replace the output directory when one was given.
    #[must_use]
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.output_dir = dir;
        }
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: Option<PathBuf>) -> Self {
        if font.is_some() {
            self.font_override = font;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.output_dir.is_some());
        assert!(config.cache_dir.ends_with(CACHE_DIR));
        assert_eq!(config.default_dpi, 300);
        assert_eq!(config.raster_format, ImageFormat::Png);
        assert!(config.font_override.is_none());
    }

    #[test]
    fn test_overrides_only_when_given() {
        let config = AppConfig::default()
            .with_output_dir(Some(PathBuf::from("/tmp/out")))
            .with_font(None);
        assert_eq!(config.output_dir, Some(PathBuf::from("/tmp/out")));
        assert!(config.font_override.is_none());

        let kept = config.clone().with_output_dir(None);
        assert_eq!(kept.output_dir, Some(PathBuf::from("/tmp/out")));
    }
}
