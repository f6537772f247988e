// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/compose.rs
//
// Renders a shipping label onto a fixed-size canvas.

use image::{DynamicImage, GrayImage, Luma, RgbImage};

use super::draw::{dot, fill_rect, fill_rounded, hline, outline_rounded};
use super::fonts::{FontRole, FontSet};
use super::layout::{Bounds, LabelLayout, tone};
use super::record::AddressRecord;
use super::shaping::Shaper;
use super::wrap::wrap_words;

pub const TITLE: &str = "برچسب پستی";
pub const SENDER_TAG: &str = "فرستنده";
pub const RECIPIENT_TAG: &str = "گیرنده";
pub const WEBSITE: &str = "NokhbehSho.com";
pub const FOOTER_SEPARATOR: &str = " | ";
pub const FOOTER_PHONE: &str = "021-91091722";
pub const TAGLINE: &str = "مرجع تخصصی آموزش رباتیک و هوش مصنوعی کودکان و نوجوانان";

/// Whether the address line of a block may wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddressMode {
    SingleLine,
    Wrapped,
}

/// Draw the complete label for `sender` and `recipient`.
///
/// The recipient is expected to be validated already; empty fields simply
/// render as empty values.
#[must_use]
pub fn compose_label(
    sender: &AddressRecord,
    recipient: &AddressRecord,
    fonts: &FontSet,
    layout: &LabelLayout,
) -> RgbImage {
    let shaper = Shaper::new();
    let mut painter = Painter::new(fonts, &shaper, layout);

    painter.frame();
    painter.header();
    painter.block(layout.sender_top(), SENDER_TAG, sender, AddressMode::SingleLine);
    painter.divider();
    painter.block(layout.recipient_top(), RECIPIENT_TAG, recipient, AddressMode::Wrapped);
    painter.footer();

    log::debug!(
        "Composed {}x{} label (font: {})",
        layout.width,
        layout.height,
        fonts.source()
    );
    DynamicImage::ImageLuma8(painter.canvas).to_rgb8()
}

/// Logical lines of the recipient address as they will be laid out.
///
/// `measure` receives shaped text. A line that fits is kept whole; otherwise
/// the logical text is wrapped and each candidate line is measured shaped.
pub fn fit_address<F>(logical: &str, max_width: u32, shaper: &Shaper, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    if measure(&shaper.shape(logical)) <= max_width {
        return vec![logical.to_owned()];
    }
    wrap_words(logical, max_width, |line| measure(&shaper.shape(line)))
}

fn name_line(record: &AddressRecord) -> String {
    format!("نام: {}", record.name)
}

fn address_line(record: &AddressRecord) -> String {
    format!("آدرس: {}", record.address_single_line())
}

fn contact_line(record: &AddressRecord) -> String {
    format!("کدپستی: {}  |  تلفن: {}", record.postal_code, record.phone)
}

struct Painter<'a> {
    canvas: GrayImage,
    fonts: &'a FontSet,
    shaper: &'a Shaper,
    layout: &'a LabelLayout,
}

impl<'a> Painter<'a> {
    fn new(fonts: &'a FontSet, shaper: &'a Shaper, layout: &'a LabelLayout) -> Self {
        Self {
            canvas: GrayImage::from_pixel(layout.width, layout.height, layout.background()),
            fonts,
            shaper,
            layout,
        }
    }

    fn width(&self) -> i32 {
        self.layout.width as i32
    }

    fn measure(&self, role: FontRole, shaped: &str) -> (i32, i32) {
        let (w, h) = self.fonts.face(role).measure(shaped);
        (w as i32, h as i32)
    }

    fn put(&mut self, role: FontRole, x: i32, y: i32, color: Luma<u8>, shaped: &str) {
        self.fonts.face(role).draw(&mut self.canvas, x, y, color, shaped);
    }

    /// Draw `logical` with its right edge on the text column.
    fn right_anchored(&mut self, role: FontRole, y: i32, logical: &str) {
        let shaped = self.shaper.shape(logical);
        let (w, _) = self.measure(role, &shaped);
        let x = self.layout.text_right() - w;
        self.put(role, x, y, tone::BLACK, &shaped);
    }

    fn centered(&mut self, role: FontRole, y: i32, color: Luma<u8>, logical: &str) {
        let shaped = self.shaper.shape(logical);
        let (w, _) = self.measure(role, &shaped);
        let x = (self.width() - w) / 2;
        self.put(role, x, y, color, &shaped);
    }

    fn frame(&mut self) {
        let frame = self.layout.frame;
        outline_rounded(
            &mut self.canvas,
            self.layout.frame_bounds(),
            frame.radius,
            frame.stroke,
            tone::BLACK,
            self.layout.background(),
        );
    }

    /// Light band with rounded outer corners and a squared inner edge.
    fn band(&mut self, bounds: Bounds, square: Bounds, rule_y: i32) {
        let (radius, stroke) = (self.layout.frame.radius, self.layout.bands.divider_stroke);
        fill_rounded(&mut self.canvas, bounds, radius, tone::LIGHT_GRAY);
        fill_rect(&mut self.canvas, square, tone::LIGHT_GRAY);
        hline(&mut self.canvas, bounds.x0, bounds.x1, rule_y, stroke, tone::BLACK);
    }

    fn header(&mut self) {
        let bounds = self.layout.header_bounds();
        let bands = self.layout.bands;
        let square = Bounds::new(bounds.x0, bounds.y1 - bands.square_corner, bounds.x1, bounds.y1);
        self.band(bounds, square, bands.header_height);

        let shaped = self.shaper.shape(TITLE);
        let (w, h) = self.measure(FontRole::Title, &shaped);
        let x = (self.width() - w) / 2;
        let y = (bands.header_height - h) / 2 - bands.title_lift;
        self.put(FontRole::Title, x, y, tone::BLACK, &shaped);
    }

    fn badge(&mut self, top: i32, tag: &str) {
        let style = self.layout.badge;
        let bounds = self.layout.badge_bounds(top);

        let shadow = bounds.offset(style.shadow_offset, style.shadow_offset);
        fill_rounded(&mut self.canvas, shadow, style.radius, tone::GRAY);
        outline_rounded(
            &mut self.canvas,
            bounds,
            style.radius,
            style.outline,
            tone::BLACK,
            tone::DARK_GRAY,
        );

        let shaped = self.shaper.shape(tag);
        let (w, h) = self.measure(FontRole::SectionLabel, &shaped);
        let x = style.x + (style.width - w) / 2;
        let y = top + (style.height - h) / 2 - style.text_lift;
        self.put(FontRole::SectionLabel, x, y, tone::WHITE, &shaped);
    }

    fn block(&mut self, top: i32, tag: &str, record: &AddressRecord, mode: AddressMode) {
        self.badge(top, tag);

        let step = self.layout.block.line_height;
        let mut y = top + self.layout.block.info_offset;

        self.right_anchored(FontRole::MainInfo, y, &name_line(record));
        y += step;

        let address = address_line(record);
        let lines = match mode {
            AddressMode::SingleLine => vec![address],
            AddressMode::Wrapped => {
                let face = self.fonts.face(FontRole::BodyInfo);
                fit_address(&address, self.layout.wrap_width(), self.shaper, |s| face.measure(s).0)
            }
        };
        if lines.len() > 1 {
            log::debug!("Address wrapped onto {} lines", lines.len());
        }
        for line in &lines {
            self.right_anchored(FontRole::BodyInfo, y, line);
            y += step;
        }

        self.right_anchored(FontRole::BodyInfo, y, &contact_line(record));
    }

    fn divider(&mut self) {
        let rule = self.layout.rule;
        let y = self.layout.divider_y();
        let xs: Vec<i32> = self.layout.divider_dots().collect();
        for x in xs {
            dot(&mut self.canvas, x, y, rule.dot_width, rule.dot_height, tone::GRAY);
        }
    }

    fn footer(&mut self) {
        let bounds = self.layout.footer_bounds();
        let bands = self.layout.bands;
        let top = self.layout.footer_top();
        let square = Bounds::new(bounds.x0, top, bounds.x1, top + bands.square_corner);
        self.band(bounds, square, top);

        // Website, separator and phone are centered as one group.
        let (site_w, _) = self.measure(FontRole::Website, WEBSITE);
        let (sep_w, _) = self.measure(FontRole::Website, FOOTER_SEPARATOR);
        let (phone_w, _) = self.measure(FontRole::Phone, FOOTER_PHONE);
        let x = (self.width() - (site_w + sep_w + phone_w)) / 2;
        let y = top + bands.footer_first_line;

        self.put(FontRole::Website, x, y, tone::BLACK, WEBSITE);
        self.put(FontRole::Website, x + site_w, y, tone::DARK_GRAY, FOOTER_SEPARATOR);
        self.put(
            FontRole::Phone,
            x + site_w + sep_w,
            y + bands.phone_drop,
            tone::BLACK,
            FOOTER_PHONE,
        );

        self.centered(FontRole::FinePrint, top + bands.footer_fine_print, tone::DARK_GRAY, TAGLINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ali() -> AddressRecord {
        AddressRecord::new("Ali", "123 Main St", "12345", "")
    }

    fn render(recipient: &AddressRecord) -> RgbImage {
        compose_label(
            &AddressRecord::sender(),
            recipient,
            &FontSet::builtin(),
            &LabelLayout::default(),
        )
    }

    fn luma(image: &RgbImage, x: u32, y: u32) -> u8 {
        let p = image.get_pixel(x, y);
        assert!(p[0] == p[1] && p[1] == p[2], "non-grey pixel at ({x}, {y})");
        p[0]
    }

    #[test]
    fn test_canvas_size() {
        let image = render(&ali());
        assert_eq!(image.dimensions(), (945, 591));
    }

    #[test]
    fn test_fixed_regions() {
        let image = render(&ali());
        // Left frame stroke, below the header band.
        assert_eq!(luma(&image, 11, 300), tone::BLACK[0]);
        // Outside the frame.
        assert_eq!(luma(&image, 2, 300), tone::WHITE[0]);
        // Header and footer bands.
        assert_eq!(luma(&image, 25, 50), tone::LIGHT_GRAY[0]);
        assert_eq!(luma(&image, 25, 560), tone::LIGHT_GRAY[0]);
        // Band dividers.
        assert_eq!(luma(&image, 400, 75), tone::BLACK[0]);
        assert_eq!(luma(&image, 400, 506), tone::BLACK[0]);
        // First divider dot spans x 30..=38 around y 235.
        assert_eq!(luma(&image, 34, 235), tone::GRAY[0]);
        // Sender badge body above its label text.
        assert_eq!(luma(&image, 120, 99), tone::DARK_GRAY[0]);
        // Recipient badge shadow below the badge outline.
        assert_eq!(luma(&image, 120, 307), tone::GRAY[0]);
    }

    #[test]
    fn test_builtin_render_uses_palette_only() {
        let image = render(&AddressRecord::sample_recipient());
        let palette: Vec<u8> = tone::ALL.iter().map(|t| t[0]).collect();
        assert!(image.pixels().all(|p| palette.contains(&p[0])));
    }

    #[test]
    fn test_short_address_is_one_line() {
        let shaper = Shaper::new();
        let fonts = FontSet::builtin();
        let face = fonts.face(FontRole::BodyInfo);
        let lines = fit_address(&address_line(&ali()), 665, &shaper, |s| face.measure(s).0);
        assert_eq!(lines, vec!["آدرس: 123 Main St".to_owned()]);
    }

    #[test]
    fn test_long_address_wraps_within_width() {
        let shaper = Shaper::new();
        let fonts = FontSet::builtin();
        let face = fonts.face(FontRole::BodyInfo);
        let record = AddressRecord::new(
            "Ali",
            "Building 7, Unit 12, Long Avenue near the Central Station, District 4",
            "12345",
            "",
        );
        let lines = fit_address(&address_line(&record), 665, &shaper, |s| face.measure(s).0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(face.measure(&shaper.shape(line)).0 <= 665, "{line} overflows");
        }
        assert_eq!(lines.join(" "), address_line(&record));
    }

    #[test]
    fn test_multiline_address_collapses() {
        let record = AddressRecord::new("Ali", "123 Main St\nApt 4", "12345", "");
        assert_eq!(address_line(&record), "آدرس: 123 Main St Apt 4");
    }

    #[test]
    fn test_wrapped_address_pushes_contact_line_down() {
        let short = render(&ali());
        let long = render(&AddressRecord::new(
            "Ali",
            "Building 7, Unit 12, Long Avenue near the Central Station, District 4",
            "12345",
            "",
        ));
        assert_ne!(short, long);
    }
}
