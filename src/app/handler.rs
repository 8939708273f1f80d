//! Event handling and state transition logic.
//!
//! The plugin shim turns Zellij host events into [`Event`]s and feeds them to
//! [`handle_event`], which mutates [`AppState`] and returns the side effects
//! to perform. Nothing in here calls the host.
//!
//! # Event Types
//!
//! - **Input**: `Char`, `Backspace`, `Escape`, `Submit`
//! - **Scrolling**: `ScrollUp`, `ScrollDown`
//! - **System**: `PermissionsResult`, `IndexResponse`, `OpenerFinished`
//!
//! # Example
//!
//! ```rust
//! use docnav::app::{handle_event, Action, AppState, Event};
//! use docnav::domain::MatchMode;
//! use docnav::loader::IndexLoader;
//! use docnav::ui::Theme;
//!
//! let mut state = AppState::new(IndexLoader::new("http://docs.local"), MatchMode::Substring, Theme::default());
//! let (render, actions) = handle_event(&mut state, &Event::PermissionsResult { granted: true })?;
//! assert!(!render);
//! assert!(matches!(actions.as_slice(), [Action::FetchIndex(_)]));
//! # Ok::<(), docnav::domain::DocnavError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::loader::IndexLoader;

/// Events triggered by user input or host results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Appends a character to the filter text.
    Char(char),
    /// Removes the last character of the filter text.
    Backspace,
    /// Clears the filter text, or closes the plugin if it is already empty.
    Escape,
    /// Navigates to the top target.
    Submit,
    /// Scrolls the document list one line up.
    ScrollUp,
    /// Scrolls the document list one line down.
    ScrollDown,
    /// Closes the plugin unconditionally.
    CloseFocus,

    /// Reports the outcome of the permission request.
    ///
    /// The index is requested on the first grant.
    PermissionsResult {
        /// Whether the user granted the requested permissions.
        granted: bool,
    },

    /// Delivers the response to the index request.
    ///
    /// Transport failures arrive with a non-200 status, so every outcome of
    /// the request ends up here.
    IndexResponse {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
    },

    /// Reports that the opener command exited.
    OpenerFinished {
        /// URL the opener was launched with.
        url: String,
        /// Exit code, if the process exited normally.
        exit_code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },
}

/// Processes an event, updating state and returning actions to execute.
///
/// The returned boolean asks the shim to re-render. Actions run in order.
///
/// # Errors
///
/// None of the current events fail; index load failures are logged and
/// absorbed here. The `Result` leaves room for fallible transitions.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            state.push_filter_char(*c);
            tracing::trace!(
                filter = %state.filter_text,
                top_target = %state.top_target(),
                "filter updated"
            );
            Ok((true, vec![]))
        }
        Event::Backspace => Ok((state.pop_filter_char(), vec![])),
        Event::Escape => {
            if state.clear_filter() {
                tracing::debug!("filter cleared");
                Ok((true, vec![]))
            } else {
                Ok((false, vec![Action::CloseFocus]))
            }
        }
        Event::Submit => {
            let Some(url) = state.navigation_url() else {
                tracing::debug!(filter = %state.filter_text, "no top target, ignoring submit");
                return Ok((false, vec![]));
            };

            tracing::info!(url = %url, "opening document");
            Ok((false, vec![Action::OpenDocument { url }, Action::CloseFocus]))
        }
        Event::ScrollUp => Ok((state.scroll_up(), vec![])),
        Event::ScrollDown => Ok((state.scroll_down(), vec![])),
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("permissions denied, document index will not be loaded");
                state.record_load_failure();
                return Ok((true, vec![]));
            }
            if state.index_requested {
                tracing::debug!("index already requested");
                return Ok((false, vec![]));
            }

            state.index_requested = true;
            Ok((false, vec![Action::FetchIndex(state.loader.request())]))
        }
        Event::IndexResponse { status, body } => {
            match IndexLoader::parse_response(*status, body) {
                Ok(index) => {
                    tracing::info!(
                        categories = index.len(),
                        documents = index.document_count(),
                        "document index loaded"
                    );
                    state.replace_index(index);
                }
                Err(e) => {
                    tracing::warn!(url = %state.loader.url(), error = %e, "document index load failed");
                    state.record_load_failure();
                }
            }
            Ok((true, vec![]))
        }
        Event::OpenerFinished { url, exit_code, stderr } => {
            if *exit_code == Some(0) {
                tracing::debug!(url = %url, "opener finished");
            } else {
                tracing::warn!(url = %url, exit_code = ?exit_code, stderr = %stderr.trim(), "opener failed");
            }
            Ok((false, vec![]))
        }
    }
}
