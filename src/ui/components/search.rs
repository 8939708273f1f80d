//! Filter box component renderer.
//!
//! The filter box is always visible: typing filters immediately, there is no
//! separate search mode to enter.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the filter box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line filter box at `row`. Returns the next free row.
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Filter: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// A long query keeps its tail visible, since that is where typing happens.
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let search_text = fit_query(&search.query, inner_width);
    let padding = inner_width.saturating_sub(display_width(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.search_bar_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Formats ` Filter: {query}_` to at most `width` characters.
fn fit_query(query: &str, width: usize) -> String {
    const LABEL: &str = " Filter: ";
    let room = width.saturating_sub(display_width(LABEL) + 1);
    let len = display_width(query);
    let visible: String = query.chars().skip(len.saturating_sub(room)).collect();
    format!("{LABEL}{visible}_")
}

#[cfg(test)]
mod tests {
    use super::fit_query;

    #[test]
    fn query_fits_box() {
        assert_eq!(fit_query("intro", 40), " Filter: intro_");
        assert_eq!(fit_query("abcdefgh", 14), " Filter: efgh_");
        assert_eq!(fit_query("", 14), " Filter: _");
    }
}
