//! Document list component renderer.
//!
//! Renders the flattened category/document lines. Category headings are bold
//! and flush left; documents are indented under them with their path in a
//! dimmed second column. The top target gets a marker and its own colors so
//! it is clear what Enter opens.

use crate::ui::helpers::{display_width, position_cursor, render_highlighted_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ListLine;

/// Column where document paths start.
const PATH_COLUMN: usize = 42;

/// Marker drawn in front of the top target.
const TOP_TARGET_MARKER: &str = "▸ ";

/// Renders `lines` from `row` downwards. Returns the next free row.
pub fn render_list(row: usize, lines: &[ListLine], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for line in lines {
        current_row = match line {
            ListLine::Category { name, document_count } => {
                render_category(current_row, name, *document_count, theme, cols)
            }
            ListLine::Document {
                name,
                path,
                is_top_target,
                highlight_ranges,
            } => render_document(
                current_row,
                name,
                path,
                *is_top_target,
                highlight_ranges,
                theme,
                cols,
            ),
        };
    }
    current_row
}

fn render_category(row: usize, name: &str, document_count: usize, theme: &Theme, cols: usize) -> usize {
    let count = format!(" ({document_count})");

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.category_fg));
    print!("{name}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{count}");
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(display_width(name) + display_width(&count)))
    );
    print!("{}", Theme::reset());
    row + 1
}

fn render_document(
    row: usize,
    name: &str,
    path: &str,
    is_top_target: bool,
    highlight_ranges: &[(usize, usize)],
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    let base_style = if is_top_target {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.top_target_fg),
            Theme::bg(&theme.colors.top_target_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };
    print!("{base_style}");

    let prefix = if is_top_target { TOP_TARGET_MARKER } else { "  " };
    print!("{prefix}");
    render_highlighted_text(name, highlight_ranges, theme, &base_style);

    let name_width = display_width(prefix) + display_width(name);
    print!("{}", " ".repeat(PATH_COLUMN.saturating_sub(name_width)));

    if !is_top_target {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{path}");

    let line_width = PATH_COLUMN.max(name_width) + display_width(path);
    print!("{}", " ".repeat(cols.saturating_sub(line_width)));
    print!("{}", Theme::reset());
    row + 1
}
