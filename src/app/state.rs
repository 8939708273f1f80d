//! Application state and view model computation.
//!
//! [`AppState`] is the explicit state container for the plugin: the loaded
//! [`DocumentIndex`], the filter text, and the [`FilteredIndex`] derived from
//! the two. The derived view is recomputed from the untouched index on every
//! filter change; no filter history is kept.
//!
//! # Example
//!
//! ```rust
//! use docnav::app::AppState;
//! use docnav::domain::{Category, Document, DocumentIndex, MatchMode};
//! use docnav::loader::IndexLoader;
//! use docnav::ui::Theme;
//!
//! let mut state = AppState::new(IndexLoader::new("http://docs.local"), MatchMode::Substring, Theme::default());
//! state.replace_index(DocumentIndex::new(vec![Category::new(
//!     "Guides",
//!     vec![Document::new("Intro", "/intro")],
//! )]));
//! state.push_filter_char('i');
//! assert_eq!(state.top_target(), "/intro");
//! assert_eq!(state.navigation_url().as_deref(), Some("http://docs.local/intro"));
//! ```

use super::status::LoadStatus;
use crate::domain::{filter_index_with, DocumentIndex, FilteredIndex, MatchMode};
use crate::infrastructure::url::resolve_target;
use crate::loader::IndexLoader;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, FooterInfo, HeaderInfo, ListLine, SearchBarInfo, UIViewModel};

/// Rows taken by everything except the list: blank line, header, border,
/// three-line filter box, border and footer.
const CHROME_ROWS: usize = 8;

/// Width reserved for document names, including the two-column indent.
const NAME_COLUMN_WIDTH: usize = 42;

/// Longest document name shown before truncating with `...`.
const MAX_NAME_CHARS: usize = 38;

/// Gap kept free at the right edge of the pane.
const SAFETY_MARGIN: usize = 2;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The full index from the last successful load.
    ///
    /// Replaced wholesale by `replace_index`, never edited in place.
    pub index: DocumentIndex,

    /// Current filter text typed by the user.
    pub filter_text: String,

    /// Derived view of `index` under `filter_text`.
    ///
    /// Recomputed by `apply_filter()` after every index or filter change.
    pub view: FilteredIndex,

    /// Matching strategy used by the filter engine.
    pub match_mode: MatchMode,

    /// Outcome of index loading so far.
    pub load_status: LoadStatus,

    /// Whether the index request has been issued.
    pub index_requested: bool,

    /// First visible line of the flattened list.
    pub scroll_offset: usize,

    /// Loader for the configured document server.
    pub loader: IndexLoader,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state: no index, empty filter, load pending.
    #[must_use]
    pub fn new(loader: IndexLoader, match_mode: MatchMode, theme: Theme) -> Self {
        Self {
            index: DocumentIndex::default(),
            filter_text: String::new(),
            view: FilteredIndex::default(),
            match_mode,
            load_status: LoadStatus::Pending,
            index_requested: false,
            scroll_offset: 0,
            loader,
            theme,
        }
    }

    /// Installs a freshly loaded index and re-applies the current filter.
    pub fn replace_index(&mut self, index: DocumentIndex) {
        tracing::debug!(
            categories = index.len(),
            documents = index.document_count(),
            "replacing document index"
        );
        self.index = index;
        self.load_status = LoadStatus::Loaded {
            at: chrono::Utc::now().timestamp(),
        };
        self.apply_filter();
    }

    /// Records a failed load. The current index, if any, stays in place.
    pub fn record_load_failure(&mut self) {
        self.load_status = self.load_status.after_failure();
    }

    /// Recomputes the filtered view from the index and the filter text.
    ///
    /// Scrolling resets to the top so the top target stays visible.
    pub fn apply_filter(&mut self) {
        let matcher = self.match_mode.matcher();
        self.view = filter_index_with(&self.index, &self.filter_text, matcher.as_ref());
        self.scroll_offset = 0;
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.filter_text.push(c);
        self.apply_filter();
    }

    /// Removes the last filter character. Returns `false` if the filter was
    /// already empty.
    pub fn pop_filter_char(&mut self) -> bool {
        if self.filter_text.pop().is_none() {
            return false;
        }
        self.apply_filter();
        true
    }

    /// Clears the filter. Returns `false` if it was already empty.
    pub fn clear_filter(&mut self) -> bool {
        if self.filter_text.is_empty() {
            return false;
        }
        self.filter_text.clear();
        self.apply_filter();
        true
    }

    /// Path of the first document in the filtered view, or `""`.
    #[must_use]
    pub fn top_target(&self) -> &str {
        self.view.top_target()
    }

    /// URL to open on submit, or `None` when there is no top target.
    #[must_use]
    pub fn navigation_url(&self) -> Option<String> {
        let target = self.top_target();
        if target.is_empty() {
            None
        } else {
            Some(resolve_target(self.loader.server_url(), target))
        }
    }

    /// Number of lines in the flattened list (headings plus documents).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.view.categories().len() + self.view.document_count()
    }

    /// Scrolls one line down. Returns `false` if already at the last line.
    pub fn scroll_down(&mut self) -> bool {
        if self.scroll_offset + 1 >= self.line_count() {
            return false;
        }
        self.scroll_offset += 1;
        true
    }

    /// Scrolls one line up. Returns `false` if already at the top.
    pub fn scroll_up(&mut self) -> bool {
        if self.scroll_offset == 0 {
            return false;
        }
        self.scroll_offset -= 1;
        true
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let available_rows = rows.saturating_sub(CHROME_ROWS);
        let total = self.line_count();
        let start = self
            .scroll_offset
            .min(total.saturating_sub(available_rows));

        let boxed_matcher = self.match_mode.matcher();
        let matcher = boxed_matcher.as_ref();
        let query = self.filter_text.as_str();
        let max_path_width = cols.saturating_sub(NAME_COLUMN_WIDTH + SAFETY_MARGIN);

        let lines = self
            .view
            .categories()
            .iter()
            .enumerate()
            .flat_map(move |(cat_idx, category)| {
                let heading = ListLine::Category {
                    name: category.category.clone(),
                    document_count: category.documents.len(),
                };
                let documents = category.documents.iter().enumerate().map(move |(doc_idx, document)| {
                    ListLine::Document {
                        name: truncate_end(&document.doc_name, MAX_NAME_CHARS),
                        path: truncate_start(&document.doc_path, max_path_width),
                        is_top_target: cat_idx == 0 && doc_idx == 0,
                        highlight_ranges: clip_ranges(
                            matcher.highlight_ranges(&document.doc_name, query),
                            &document.doc_name,
                            MAX_NAME_CHARS,
                        ),
                    }
                });
                std::iter::once(heading).chain(documents)
            })
            .skip(start)
            .take(available_rows)
            .collect();

        UIViewModel {
            lines,
            header: self.compute_header(),
            footer: Self::compute_footer(),
            search_bar: SearchBarInfo {
                query: self.filter_text.clone(),
            },
            empty_state: self.compute_empty_state(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let shown = self.view.document_count();
        let total = self.index.document_count();
        let counts = if self.filter_text.is_empty() {
            format!("{total}")
        } else {
            format!("{shown}/{total}")
        };

        let title = self
            .load_status
            .loaded_ago(chrono::Utc::now().timestamp())
            .map_or_else(
                || format!(" Documents ({counts}) "),
                |ago| format!(" Documents ({counts}) · loaded {ago} "),
            );

        HeaderInfo { title }
    }

    fn compute_footer() -> FooterInfo {
        FooterInfo {
            keybindings: "Type to filter  Enter: open top match  ↑/↓: scroll  Esc: clear / close"
                .to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.view.is_empty() {
            return None;
        }

        let state = if self.index.is_empty() && self.load_status.is_pending() {
            EmptyState {
                message: "Loading document index".to_string(),
                subtitle: format!("Fetching {}", self.loader.url()),
            }
        } else if self.index.is_empty() {
            EmptyState {
                message: "No documents available".to_string(),
                subtitle: "The document server has not published any documents".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No documents match \"{}\"", self.filter_text),
                subtitle: "Backspace to widen the filter, Esc to clear it".to_string(),
            }
        };
        Some(state)
    }
}

/// Truncates to `max_chars` characters, ending with `...` when shortened.
fn truncate_end(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Drops highlight ranges hidden by [`truncate_end`] and shortens the ones it cuts.
fn clip_ranges(ranges: Vec<(usize, usize)>, text: &str, max_chars: usize) -> Vec<(usize, usize)> {
    if text.chars().count() <= max_chars {
        return ranges;
    }
    let visible = max_chars.saturating_sub(3);
    ranges
        .into_iter()
        .filter(|&(start, _)| start < visible)
        .map(|(start, end)| (start, end.min(visible)))
        .collect()
}

/// Truncates from the start, keeping the tail that identifies a path.
fn truncate_start(text: &str, max_chars: usize) -> String {
    let len = text.chars().count();
    if len <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let tail: String = text.chars().skip(len - keep).collect();
    format!("...{tail}")
}
