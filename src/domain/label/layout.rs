// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/layout.rs
//
// Declarative label geometry. Every offset the composer uses lives here.

use image::Luma;

/// Five-tone greyscale palette of the label.
pub mod tone {
    use image::Luma;

    pub const WHITE: Luma<u8> = Luma([255]);
    pub const BLACK: Luma<u8> = Luma([0]);
    pub const GRAY: Luma<u8> = Luma([100]);
    pub const LIGHT_GRAY: Luma<u8> = Luma([220]);
    pub const DARK_GRAY: Luma<u8> = Luma([60]);

    /// All palette entries, lightest first.
    pub const ALL: [Luma<u8>; 5] = [WHITE, LIGHT_GRAY, GRAY, DARK_GRAY, BLACK];
}

/// Outer rounded border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    /// Distance of the frame from every canvas edge.
    pub inset: i32,
    pub radius: i32,
    pub stroke: i32,
}

/// Header and footer bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandStyle {
    pub header_height: i32,
    pub footer_height: i32,
    /// Height of the plain rectangle that squares the inner corners.
    pub square_corner: i32,
    pub divider_stroke: i32,
    /// Upward nudge of the title from the band's vertical center.
    pub title_lift: i32,
    /// Footer first-line offset from the footer top.
    pub footer_first_line: i32,
    /// Footer fine-print offset from the footer top.
    pub footer_fine_print: i32,
    /// Extra downward offset of the footer phone run.
    pub phone_drop: i32,
}

/// "Sender" / "Recipient" tag badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeStyle {
    pub x: i32,
    pub width: i32,
    pub height: i32,
    pub radius: i32,
    pub outline: i32,
    pub shadow_offset: i32,
    pub text_lift: i32,
}

/// Information blocks and the rule between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStyle {
    /// Gap between the header divider and the sender block.
    pub top_gap: i32,
    /// Vertical offset of the first info line from the block top.
    pub info_offset: i32,
    pub line_height: i32,
    /// Text is right-anchored this far from the right canvas edge.
    pub right_margin: i32,
    /// Width kept free on the left (badge column) when wrapping.
    pub wrap_reserve: i32,
    /// Distance from the sender block top to the dotted divider.
    pub divider_offset: i32,
    /// Gap between the dotted divider and the recipient block.
    pub divider_gap: i32,
}

/// Dotted divider drawn as a row of small ellipses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DottedRule {
    pub inset: i32,
    pub step: i32,
    pub dot_width: i32,
    pub dot_height: i32,
}

/// Full label layout on a fixed-size canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelLayout {
    pub width: u32,
    pub height: u32,
    pub frame: FrameStyle,
    pub bands: BandStyle,
    pub badge: BadgeStyle,
    pub block: BlockStyle,
    pub rule: DottedRule,
}

impl Default for LabelLayout {
    /// 8cm x 5cm at 300 DPI.
    fn default() -> Self {
        Self {
            width: 945,
            height: 591,
            frame: FrameStyle {
                inset: 10,
                radius: 20,
                stroke: 4,
            },
            bands: BandStyle {
                header_height: 75,
                footer_height: 85,
                square_corner: 20,
                divider_stroke: 3,
                title_lift: 5,
                footer_first_line: 15,
                footer_fine_print: 45,
                phone_drop: 2,
            },
            badge: BadgeStyle {
                x: 50,
                width: 140,
                height: 50,
                radius: 10,
                outline: 2,
                shadow_offset: 3,
                text_lift: 3,
            },
            block: BlockStyle {
                top_gap: 20,
                info_offset: 5,
                line_height: 35,
                right_margin: 60,
                wrap_reserve: 220,
                divider_offset: 140,
                divider_gap: 20,
            },
            rule: DottedRule {
                inset: 30,
                step: 15,
                dot_width: 8,
                dot_height: 4,
            },
        }
    }
}

/// Axis-aligned rectangle with inclusive corners, as the drawing primitives take it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    pub fn inset(self, by: i32) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }
}

impl LabelLayout {
    fn right(&self) -> i32 {
        self.width as i32 - self.frame.inset
    }

    fn bottom(&self) -> i32 {
        self.height as i32 - self.frame.inset
    }

    /// Outer border rectangle.
    pub fn frame_bounds(&self) -> Bounds {
        let inset = self.frame.inset;
        Bounds::new(inset, inset, self.right(), self.bottom())
    }

    pub fn header_bounds(&self) -> Bounds {
        let inset = self.frame.inset;
        Bounds::new(inset, inset, self.right(), self.bands.header_height)
    }

    /// Y of the footer band's top edge.
    pub fn footer_top(&self) -> i32 {
        self.height as i32 - self.bands.footer_height
    }

    pub fn footer_bounds(&self) -> Bounds {
        Bounds::new(self.frame.inset, self.footer_top(), self.right(), self.bottom())
    }

    pub fn sender_top(&self) -> i32 {
        self.bands.header_height + self.block.top_gap
    }

    /// Y of the dotted divider between the two blocks.
    pub fn divider_y(&self) -> i32 {
        self.sender_top() + self.block.divider_offset
    }

    pub fn recipient_top(&self) -> i32 {
        self.divider_y() + self.block.divider_gap
    }

    /// Badge rectangle for a block starting at `top`.
    pub fn badge_bounds(&self, top: i32) -> Bounds {
        let b = &self.badge;
        Bounds::new(b.x, top, b.x + b.width, top + b.height)
    }

    /// X coordinate every info line is right-anchored to.
    pub fn text_right(&self) -> i32 {
        self.width as i32 - self.block.right_margin
    }

    /// Widest an address line may be before it wraps.
    pub fn wrap_width(&self) -> u32 {
        (self.width as i32 - self.block.right_margin - self.block.wrap_reserve).max(0) as u32
    }

    /// Left edges of the divider dots.
    pub fn divider_dots(&self) -> impl Iterator<Item = i32> + '_ {
        let end = self.width as i32 - self.rule.inset;
        (self.rule.inset..end).step_by(self.rule.step.max(1) as usize)
    }

    /// Background of the label.
    pub fn background(&self) -> Luma<u8> {
        tone::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_regions() {
        let layout = LabelLayout::default();
        assert_eq!(layout.frame_bounds(), Bounds::new(10, 10, 935, 581));
        assert_eq!(layout.header_bounds(), Bounds::new(10, 10, 935, 75));
        assert_eq!(layout.footer_bounds(), Bounds::new(10, 506, 935, 581));
        assert_eq!(layout.sender_top(), 95);
        assert_eq!(layout.divider_y(), 235);
        assert_eq!(layout.recipient_top(), 255);
        assert_eq!(layout.text_right(), 885);
        assert_eq!(layout.wrap_width(), 665);
    }

    #[test]
    fn test_badge_and_shadow() {
        let layout = LabelLayout::default();
        let badge = layout.badge_bounds(95);
        assert_eq!(badge, Bounds::new(50, 95, 190, 145));
        assert_eq!(badge.offset(3, 3), Bounds::new(53, 98, 193, 148));
        assert_eq!(badge.inset(2).width(), 136);
    }

    #[test]
    fn test_divider_dots_span() {
        let layout = LabelLayout::default();
        let dots: Vec<_> = layout.divider_dots().collect();
        assert_eq!(dots.first(), Some(&30));
        assert!(dots.iter().all(|x| *x < 915));
        assert!(dots.windows(2).all(|w| w[1] - w[0] == 15));
        assert_eq!(dots.len(), 59);
    }

    #[test]
    fn test_palette_is_greyscale_five_tones() {
        assert_eq!(tone::ALL.len(), 5);
        assert_eq!(LabelLayout::default().background(), tone::WHITE);
    }
}
