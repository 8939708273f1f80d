//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They hold display-ready data only: the nested category list
//! is already flattened into lines and windowed to the pane height, and match
//! highlights are precomputed.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Visible slice of the flattened category/document list.
    pub lines: Vec<ListLine>,

    /// Header information (title, counts, freshness).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints).
    pub footer: FooterInfo,

    /// The filter box. Always shown; the query may be empty.
    pub search_bar: SearchBarInfo,

    /// Message replacing the list when there is nothing to show.
    pub empty_state: Option<EmptyState>,
}

/// One row of the document list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLine {
    /// Category heading.
    Category {
        /// Category display name.
        name: String,
        /// Number of documents shown under it.
        document_count: usize,
    },

    /// A document entry under the preceding heading.
    Document {
        /// Display name, possibly truncated.
        name: String,
        /// Document path as published by the server, possibly truncated.
        path: String,
        /// Whether Enter opens this document.
        is_top_target: bool,
        /// Character ranges of `name` matched by the filter.
        highlight_ranges: Vec<(usize, usize)>,
    },
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text, including visible/total document counts.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No documents available").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Filter box display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current filter text.
    pub query: String,
}
