// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/crop.rs
//
// Crop-to-physical-size: centered square crops of a fixed millimetre size.

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};

use super::page::{self, PageSize};
use super::raster;
use crate::constant::{CROP_SIZE_MM, MAX_DPI, MIN_DPI, MM_PER_INCH, UPSCALE_MARGIN};
use crate::domain::error::{DocResult, ValidationError};

/// Crop region in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Whether the region lies fully inside a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        u64::from(self.x) + u64::from(self.width) <= u64::from(width)
            && u64::from(self.y) + u64::from(self.height) <= u64::from(height)
    }
}

/// Crop resolution, bounded to the range the print shop accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Dpi(u32);

impl Dpi {
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if (MIN_DPI..=MAX_DPI).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::DpiOutOfRange(value))
        }
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Edge length in pixels of the fixed physical crop at this resolution.
    #[must_use]
    pub fn target_pixels(self) -> u32 {
        (CROP_SIZE_MM / MM_PER_INCH * f64::from(self.0)).round() as u32
    }
}

/// How the crop is obtained from a source of a given size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropPlan {
    /// The centered box already fits inside the source.
    Direct(CropRegion),
    /// The source is first resized to `width` x `height`, then cropped.
    Upscaled {
        scale: f64,
        width: u32,
        height: u32,
        region: CropRegion,
    },
}

impl CropPlan {
    /// Final crop region, in the coordinates of the image it applies to.
    #[must_use]
    pub fn region(&self) -> CropRegion {
        match self {
            Self::Direct(region) | Self::Upscaled { region, .. } => *region,
        }
    }
}

/// Centered `target` x `target` box, or `None` if it would leave the image.
#[must_use]
pub fn centered_region(width: u32, height: u32, target: u32) -> Option<CropRegion> {
    let region = CropRegion::new(
        width.saturating_sub(target) / 2,
        height.saturating_sub(target) / 2,
        target,
        target,
    );
    region.fits_within(width, height).then_some(region)
}

/// Resize factor that makes both sides exceed `target` by the safety margin.
#[must_use]
pub fn upscale_factor(width: u32, height: u32, target: u32) -> f64 {
    let t = f64::from(target);
    (t / f64::from(width)).max(t / f64::from(height)) * UPSCALE_MARGIN
}

/// Decide between a direct crop and the resize-then-crop fallback.
///
/// `width` and `height` must be non-zero.
#[must_use]
pub fn plan_crop(width: u32, height: u32, target: u32) -> CropPlan {
    if let Some(region) = centered_region(width, height, target) {
        return CropPlan::Direct(region);
    }

    let scale = upscale_factor(width, height, target);
    let resized = |side: u32| ((f64::from(side) * scale).floor() as u32).max(target);
    let (new_width, new_height) = (resized(width), resized(height));
    let region = CropRegion::new(
        (new_width - target) / 2,
        (new_height - target) / 2,
        target,
        target,
    );

    CropPlan::Upscaled {
        scale,
        width: new_width,
        height: new_height,
        region,
    }
}

/// Apply `plan` to `source`.
#[must_use]
pub fn apply_plan(source: &RgbImage, plan: &CropPlan) -> RgbImage {
    let (x, y, w, h) = plan.region().as_tuple();
    match plan {
        CropPlan::Direct(_) => imageops::crop_imm(source, x, y, w, h).to_image(),
        CropPlan::Upscaled { width, height, .. } => {
            let resized = imageops::resize(source, *width, *height, FilterType::Lanczos3);
            imageops::crop_imm(&resized, x, y, w, h).to_image()
        }
    }
}

/// Cropped image plus its encoded raster and page documents.
pub struct CropOutput {
    pub image: RgbImage,
    pub plan: CropPlan,
    pub raster: Vec<u8>,
    pub page: Vec<u8>,
}

/// Crop `source` to the fixed physical size at `dpi`.
///
/// The raster is encoded as `format`; the page is a single PDF page of
/// exactly the physical crop size with the image filling it.
pub fn crop_to_size(source: &RgbImage, dpi: Dpi, format: ImageFormat) -> DocResult<CropOutput> {
    let target = dpi.target_pixels();
    let plan = plan_crop(source.width(), source.height(), target);
    log::debug!(
        "Crop {}x{} at {} DPI -> {target}px: {plan:?}",
        source.width(),
        source.height(),
        dpi.get()
    );

    let image = apply_plan(source, &plan);
    let raster = raster::encode(&image, format)?;
    let page = page::image_page(&image, PageSize::from_mm(CROP_SIZE_MM, CROP_SIZE_MM))?;

    Ok(CropOutput {
        image,
        plan,
        raster,
        page,
    })
}

/// Output file stem for a source basename (`photo` -> `photo_34mm`).
#[must_use]
pub fn output_stem(basename: &str) -> String {
    format!("{basename}{}", crate::constant::CROP_SUFFIX)
}
