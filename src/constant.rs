// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Edge length of the square photo crop in millimetres.
pub const CROP_SIZE_MM: f64 = 34.0;

/// Millimetres per inch (physical size to pixel conversion).
pub const MM_PER_INCH: f64 = 25.4;

/// PostScript points per inch (PDF user space unit).
pub const POINTS_PER_INCH: f64 = 72.0;

/// Lowest accepted crop resolution.
pub const MIN_DPI: u32 = 72;

/// Highest accepted crop resolution.
pub const MAX_DPI: u32 = 600;

/// Resolution used when none is given.
pub const DEFAULT_DPI: u32 = 300;

/// Safety margin applied to the upscale factor when the source is too small.
pub const UPSCALE_MARGIN: f64 = 1.1;

/// JPEG quality for lossy raster output.
pub const JPEG_QUALITY: u8 = 95;

/// Suffix appended to the source basename for crop outputs.
pub const CROP_SUFFIX: &str = "_34mm";

/// Resolution the label canvas is designed for (945x591 = 8cm x 5cm).
pub const LABEL_DPI: f64 = 300.0;

/// Default label file name when no output path is given.
pub const LABEL_FILE_NAME: &str = "address_label.png";

/// Longest side of on-screen previews in pixels.
pub const PREVIEW_MAX_SIZE: u32 = 400;

/// Cache directory name (previews live here).
pub const CACHE_DIR: &str = "labelkit";

/// Skip launching the system viewer for previews when set (used by tests).
pub const NO_OPEN_ENV: &str = "LABELKIT_NO_OPEN";

/// Font files tried in order; the first one found wins.
pub const FONT_FILE_NAMES: [&str; 9] = [
    "Vazir-Bold.ttf",
    "Vazir-Medium.ttf",
    "Vazir-Regular.ttf",
    "Vazir.ttf",
    "Sahel-Bold.ttf",
    "Sahel.ttf",
    "IRANSans.ttf",
    "B Nazanin.ttf",
    "Yekan.ttf",
];

/// Bundled font directory name, relative to the executable or working dir.
pub const BUNDLED_FONT_DIR: &str = "fonts";
