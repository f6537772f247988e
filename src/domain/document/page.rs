// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/page.rs
//
// Single-page PDF documents holding one full-bleed raster image.

use image::RgbImage;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use crate::constant::{MM_PER_INCH, POINTS_PER_INCH};
use crate::domain::error::{DocResult, LabelkitError};

/// Physical page size in PDF points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width_pt: f32,
    pub height_pt: f32,
}

impl PageSize {
    /// Page of the given millimetre dimensions.
    #[must_use]
    pub fn from_mm(width_mm: f64, height_mm: f64) -> Self {
        Self {
            width_pt: mm_to_pt(width_mm),
            height_pt: mm_to_pt(height_mm),
        }
    }

    /// Page on which `width_px` x `height_px` pixels print at `dpi`.
    #[must_use]
    pub fn from_pixels(width_px: u32, height_px: u32, dpi: f64) -> Self {
        let to_pt = |px: u32| (f64::from(px) / dpi * POINTS_PER_INCH) as f32;
        Self {
            width_pt: to_pt(width_px),
            height_pt: to_pt(height_px),
        }
    }
}

fn mm_to_pt(mm: f64) -> f32 {
    (mm / MM_PER_INCH * POINTS_PER_INCH) as f32
}

/// Build a one-page PDF with `image` stretched over the whole page, no margin.
pub fn image_page(image: &RgbImage, size: PageSize) -> DocResult<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let image_id = doc.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => i64::from(image.width()),
            "Height" => i64::from(image.height()),
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        },
        image.as_raw().clone(),
    ));

    // Unit square scaled to the page; PDF places images in a 1x1 space.
    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    size.width_pt.into(),
                    0.into(),
                    0.into(),
                    size.height_pt.into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let resources_id = doc.add_object(dictionary! {
        "XObject" => dictionary! {
            "Im0" => image_id,
        },
    });

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                size.width_pt.into(),
                size.height_pt.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| LabelkitError::Document(e.to_string()))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn media_box(bytes: &[u8]) -> Vec<f32> {
        let doc = Document::load_mem(bytes).unwrap();
        let pages = doc.get_pages();
        assert_eq!(pages.len(), 1);
        let page_id = *pages.values().next().unwrap();
        let page = doc.get_dictionary(page_id).unwrap();
        let parent = page.get(b"Parent").unwrap().as_reference().unwrap();
        doc.get_dictionary(parent)
            .unwrap()
            .get(b"MediaBox")
            .unwrap()
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o.as_float().unwrap())
            .collect()
    }

    #[test]
    fn test_page_size_from_mm() {
        let size = PageSize::from_mm(34.0, 34.0);
        assert!((size.width_pt - 96.378).abs() < 0.01);
        assert_eq!(size.width_pt, size.height_pt);
    }

    #[test]
    fn test_page_size_from_pixels_at_300_dpi() {
        let size = PageSize::from_pixels(945, 591, 300.0);
        assert!((size.width_pt - 226.8).abs() < 0.01);
        assert!((size.height_pt - 141.84).abs() < 0.01);
    }

    #[test]
    fn test_image_page_has_single_page_of_requested_size() {
        let img = RgbImage::from_pixel(12, 12, Rgb([0, 128, 255]));
        let size = PageSize::from_mm(34.0, 34.0);
        let bytes = image_page(&img, size).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));
        let mb = media_box(&bytes);
        assert_eq!(mb.len(), 4);
        assert_eq!(mb[0], 0.0);
        assert_eq!(mb[1], 0.0);
        assert!((mb[2] - size.width_pt).abs() < 0.01);
        assert!((mb[3] - size.height_pt).abs() < 0.01);
    }
}
