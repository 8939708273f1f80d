//! Outbound request descriptions and result correlation.
//!
//! Zellij delivers web request and command results as generic events carrying
//! the context map the request was issued with. Every request docnav issues is
//! tagged under [`CONTEXT_KEY`] so its result can be told apart from anything
//! else arriving on the same event stream.

use std::collections::BTreeMap;

/// Context map key identifying which docnav request a result belongs to.
pub const CONTEXT_KEY: &str = "docnav_request";

/// Tag value for the document index fetch.
pub const INDEX_REQUEST: &str = "available";

/// Tag value for an opener command launched on navigation.
pub const OPEN_REQUEST: &str = "open_document";

/// Context key holding the URL an opener command was launched with.
pub const URL_KEY: &str = "url";

/// What a tagged result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// Result of the document index fetch.
    Index,
    /// Result of an opener command.
    OpenDocument,
}

impl RequestKind {
    const fn tag(self) -> &'static str {
        match self {
            Self::Index => INDEX_REQUEST,
            Self::OpenDocument => OPEN_REQUEST,
        }
    }

    /// Builds the context map to issue a request of this kind with.
    #[must_use]
    pub fn context(self) -> BTreeMap<String, String> {
        BTreeMap::from([(CONTEXT_KEY.to_string(), self.tag().to_string())])
    }

    /// Identifies a result from the context map it came back with.
    ///
    /// Returns `None` for results docnav did not ask for.
    #[must_use]
    pub fn from_context(context: &BTreeMap<String, String>) -> Option<Self> {
        match context.get(CONTEXT_KEY).map(String::as_str) {
            Some(INDEX_REQUEST) => Some(Self::Index),
            Some(OPEN_REQUEST) => Some(Self::OpenDocument),
            _ => None,
        }
    }
}

/// Context for an opener command launched with `url`.
///
/// The URL rides along so a failing opener can be logged with what it was
/// asked to open.
#[must_use]
pub fn opener_context(url: &str) -> BTreeMap<String, String> {
    let mut context = RequestKind::OpenDocument.context();
    context.insert(URL_KEY.to_string(), url.to_string());
    context
}

/// A GET request for the document index, ready to hand to `web_request`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRequest {
    /// Fully qualified endpoint URL.
    pub url: String,
    /// Request headers.
    pub headers: BTreeMap<String, String>,
    /// Correlation context echoed back with the result.
    pub context: BTreeMap<String, String>,
}

impl IndexRequest {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: BTreeMap::from([("Accept".to_string(), "application/json".to_string())]),
            context: RequestKind::Index.context(),
        }
    }
}
