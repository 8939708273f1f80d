//! Shared rendering utilities.
//!
//! Ranges and widths are measured in characters, never bytes, so document
//! names outside ASCII render and pad correctly.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Visible width of `text`, counted in characters.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Prints `text` with the character ranges in `ranges` highlighted.
///
/// `restore` is the styling in effect before the call; it is re-applied after
/// each highlighted section so the rest of the line keeps its colors. Ranges
/// past the end of `text` are clipped, which happens when a long name was
/// truncated for display.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    for (section, highlighted) in split_highlights(text, ranges) {
        if highlighted {
            print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
            print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
            print!("{section}");
            print!("{}{restore}", Theme::reset());
        } else {
            print!("{section}");
        }
    }
}

/// Splits `text` into `(section, highlighted)` runs.
fn split_highlights(text: &str, ranges: &[(usize, usize)]) -> Vec<(String, bool)> {
    let chars: Vec<char> = text.chars().collect();
    let mut sections = Vec::new();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());
        if start == end {
            continue;
        }
        if start > current_pos {
            sections.push((chars[current_pos..start].iter().collect(), false));
        }
        sections.push((chars[start..end].iter().collect(), true));
        current_pos = end;
    }

    if current_pos < chars.len() {
        sections.push((chars[current_pos..].iter().collect(), false));
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(sections: &[(&str, bool)]) -> Vec<(String, bool)> {
        sections.iter().map(|(s, h)| ((*s).to_string(), *h)).collect()
    }

    #[test]
    fn splits_around_ranges() {
        assert_eq!(
            split_highlights("Advanced Setup", &[(0, 3), (9, 11)]),
            owned(&[("Adv", true), ("anced ", false), ("Se", true), ("tup", false)])
        );
    }

    #[test]
    fn no_ranges_is_one_plain_section() {
        assert_eq!(split_highlights("Intro", &[]), owned(&[("Intro", false)]));
        assert!(split_highlights("", &[]).is_empty());
    }

    #[test]
    fn ranges_are_clamped_to_text() {
        assert_eq!(
            split_highlights("Überblick", &[(5, 12), (20, 25)]),
            owned(&[("Überb", false), ("lick", true)])
        );
    }

    #[test]
    fn width_counts_characters() {
        assert_eq!(display_width("Überblick"), 9);
    }
}
