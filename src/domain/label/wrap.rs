// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/label/wrap.rs
//
// Greedy word wrapping against a measured pixel width.

/// Break `text` into lines no wider than `max_width`.
///
/// Words are appended while `measure(line) <= max_width`. On overflow the
/// current line is flushed and the word starts the next one; a word that is
/// wider than `max_width` on its own becomes a line by itself.
pub fn wrap_words<F>(text: &str, max_width: u32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> u32,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };

        if measure(&candidate) <= max_width {
            current = candidate;
        } else if current.is_empty() {
            lines.push(candidate);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> u32 {
        s.chars().count() as u32
    }

    #[test]
    fn test_fitting_text_is_one_identical_line() {
        assert_eq!(wrap_words("123 Main St", 20, chars), vec!["123 Main St"]);
    }

    #[test]
    fn test_breaks_at_word_boundaries() {
        let lines = wrap_words("aaa bbb ccc ddd", 7, chars);
        assert_eq!(lines, vec!["aaa bbb", "ccc ddd"]);
    }

    #[test]
    fn test_overlong_word_stands_alone() {
        let lines = wrap_words("a verylongword b", 5, chars);
        assert_eq!(lines, vec!["a", "verylongword", "b"]);
    }

    #[test]
    fn test_overlong_word_after_content() {
        let lines = wrap_words("ab cd verylongword", 5, chars);
        assert_eq!(lines, vec!["ab cd", "verylongword"]);
    }

    #[test]
    fn test_empty_and_blank_text() {
        assert!(wrap_words("", 10, chars).is_empty());
        assert!(wrap_words(" \n\t ", 10, chars).is_empty());
    }

    #[test]
    fn test_rewrapping_is_stable() {
        let text = "one two three four five six seven eight nine ten eleven twelve";
        for width in [3, 5, 9, 14, 30] {
            let first = wrap_words(text, width, chars);
            let second = wrap_words(&first.join(" "), width, chars);
            assert_eq!(first, second, "width {width}");
            for line in &first {
                assert_eq!(&wrap_words(line, width, chars), &vec![line.clone()]);
            }
        }
    }

    #[test]
    fn test_line_breaks_collapse() {
        let lines = wrap_words("first\nsecond", 20, chars);
        assert_eq!(lines, vec!["first second"]);
    }
}
