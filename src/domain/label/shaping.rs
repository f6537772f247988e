// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/shaping.rs
//
// Right-to-left text preparation for a left-to-right-only text painter.

#[cfg(feature = "shaping")]
use ar_reshaper::{ArabicReshaper, ReshaperConfig};
#[cfg(feature = "shaping")]
use unicode_bidi::BidiInfo;

/// Whether `c` lies in the Arabic block (Persian letters included).
#[must_use]
pub fn is_rtl_char(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Whether `text` needs shaping before it is drawn.
#[must_use]
pub fn contains_rtl(text: &str) -> bool {
    text.chars().any(is_rtl_char)
}

/// Naive visual order: the whole string reversed character by character.
///
/// Used when contextual shaping is unavailable. Latin runs and digits
/// embedded in RTL text come out reversed too.
#[must_use]
pub fn reverse_chars(text: &str) -> String {
    text.chars().rev().collect()
}

/// Converts logical-order strings into the visual order the painter expects.
pub struct Shaper {
    #[cfg(feature = "shaping")]
    reshaper: ArabicReshaper,
}

impl Default for Shaper {
    fn default() -> Self {
        Self::new()
    }
}

impl Shaper {
    #[must_use]
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "shaping")]
            reshaper: ArabicReshaper::new(ReshaperConfig::default()),
        }
    }

    /// Whether contextual shaping and BiDi reordering are compiled in.
    #[must_use]
    pub fn is_contextual(&self) -> bool {
        cfg!(feature = "shaping")
    }

    /// Shape `text` for drawing. Strings without RTL characters pass through.
    #[must_use]
    pub fn shape(&self, text: &str) -> String {
        if text.trim().is_empty() || !contains_rtl(text) {
            return text.to_owned();
        }
        self.visual_order(text)
    }

    /// Join contextual letter forms, then reorder each paragraph for display.
    #[cfg(feature = "shaping")]
    fn visual_order(&self, text: &str) -> String {
        let reshaped = self.reshaper.reshape(text);
        let info = BidiInfo::new(&reshaped, None);
        info.paragraphs
            .iter()
            .map(|para| info.reorder_line(para, para.range.clone()))
            .collect()
    }

    #[cfg(not(feature = "shaping"))]
    fn visual_order(&self, text: &str) -> String {
        reverse_chars(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_is_untouched() {
        let shaper = Shaper::new();
        for text in ["Ali", "123 Main St", "NokhbehSho.com | 021-91091722", "", "  "] {
            assert_eq!(shaper.shape(text), text);
        }
    }

    #[test]
    fn test_rtl_is_transformed() {
        let shaper = Shaper::new();
        for text in ["سلام", "نام: Ali", "برچسب پستی"] {
            assert_ne!(shaper.shape(text), text, "{text} was not shaped");
        }
    }

    #[test]
    fn test_rtl_detection() {
        assert!(contains_rtl("گیرنده"));
        assert!(contains_rtl("postal ۱۲۳"));
        assert!(!contains_rtl("postal 123"));
        assert!(!is_rtl_char('\u{05D0}'));
    }

    #[test]
    fn test_reverse_chars() {
        assert_eq!(reverse_chars("abc"), "cba");
        assert_eq!(reverse_chars("سلام"), "مالس");
    }

    #[cfg(feature = "shaping")]
    #[test]
    fn test_contextual_shaping_keeps_latin_run_order() {
        let shaped = Shaper::new().shape("نام: Ali");
        assert!(shaped.contains("Ali"), "latin run reversed: {shaped}");
    }

    #[cfg(not(feature = "shaping"))]
    #[test]
    fn test_fallback_reverses_whole_string() {
        assert_eq!(Shaper::new().shape("نام: Ali"), "ilA :مان");
    }
}
