//! Document index loading.
//!
//! Zellij plugins cannot block on network I/O. The index is fetched through the
//! host's `web_request` facility instead: the loader describes the request, the
//! plugin shim issues it, and the response comes back later as a host event
//! that the event handler routes to [`IndexLoader::parse_response`].
//!
//! ```text
//! PermissionsGranted → Action::FetchIndex(IndexRequest) → web_request
//!        WebRequestResult → Event::IndexResponse → parse_response → AppState
//! ```
//!
//! - `request`: request descriptions and result correlation tags
//! - `index_loader`: endpoint handling and response classification

pub mod index_loader;
pub mod request;

pub use index_loader::{IndexLoader, INDEX_ENDPOINT};
pub use request::{opener_context, IndexRequest, RequestKind, URL_KEY};
