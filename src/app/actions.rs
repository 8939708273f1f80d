//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never talks to Zellij directly. It returns a list of
//! [`Action`]s that the plugin shim in `main.rs` carries out in order, which
//! keeps every state transition testable on the host.

use crate::loader::IndexRequest;

/// Commands for the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues the document index request through `web_request`.
    FetchIndex(IndexRequest),

    /// Hands a document URL to the configured opener command.
    ///
    /// This is a full hand-off: the document is viewed outside the plugin.
    OpenDocument {
        /// URL resolved from the top target's `doc_path`.
        url: String,
    },
}
