//! Document index loader.
//!
//! The loader owns the endpoint URL, describes the single GET request that
//! fetches the index, and classifies the response. Applying a successful
//! result to application state and logging failures is left to the event
//! handler, so nothing here touches state.

use super::request::IndexRequest;
use crate::domain::error::{DocnavError, Result};
use crate::domain::DocumentIndex;
use crate::infrastructure::url::{endpoint_url, normalize_base};

/// Path of the index endpoint, relative to the server URL.
pub const INDEX_ENDPOINT: &str = "available";

/// Longest slice of an error body kept in a failure reason.
const MAX_REASON_BODY_CHARS: usize = 200;

/// Loads the document index from a docserver instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexLoader {
    server_url: String,
    url: String,
}

impl IndexLoader {
    /// Creates a loader for the server at `server_url`.
    ///
    /// ```
    /// use docnav::loader::IndexLoader;
    ///
    /// let loader = IndexLoader::new("http://docs.local:5000/");
    /// assert_eq!(loader.server_url(), "http://docs.local:5000");
    /// assert_eq!(loader.url(), "http://docs.local:5000/available");
    /// ```
    #[must_use]
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: normalize_base(server_url),
            url: endpoint_url(server_url, INDEX_ENDPOINT),
        }
    }

    /// Base URL of the document server, without trailing slashes.
    #[must_use]
    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Describes the request to issue. One call, one outbound request.
    #[must_use]
    pub fn request(&self) -> IndexRequest {
        tracing::debug!(url = %self.url, "building index request");
        IndexRequest::new(self.url.clone())
    }

    /// Classifies a response to the index request.
    ///
    /// # Errors
    ///
    /// Returns [`DocnavError::IndexLoad`] if `status` is not 200 or the body is
    /// not a JSON array of categories.
    pub fn parse_response(status: u16, body: &[u8]) -> Result<DocumentIndex> {
        if status != 200 {
            return Err(DocnavError::index_status(status, body_excerpt(body)));
        }

        let index: DocumentIndex = serde_json::from_slice(body)
            .map_err(|e| DocnavError::index_body(format!("malformed index body: {e}")))?;

        tracing::debug!(
            categories = index.len(),
            documents = index.document_count(),
            "index response decoded"
        );
        Ok(index)
    }
}

fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return "empty response body".to_string();
    }
    let mut excerpt: String = text.chars().take(MAX_REASON_BODY_CHARS).collect();
    if text.chars().count() > MAX_REASON_BODY_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}
