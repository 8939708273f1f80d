//! Infrastructure layer for sandbox paths and URL handling.

pub mod paths;
pub mod url;

pub use paths::{ensure_dir, expand_tilde, get_data_dir};
pub use url::{endpoint_url, resolve_target};
