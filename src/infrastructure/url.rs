//! URL assembly for the index endpoint and document navigation.
//!
//! Document paths published by the server are usually relative to the site
//! root (`static/Guides/Intro/index.html`), exactly as they appear in links on
//! the docserver home page. Navigation resolves them against the configured
//! server URL the way a browser would resolve such a link; the path itself is
//! passed through without escaping.

/// Trims trailing slashes so paths can be appended with a single `/`.
#[must_use]
pub fn normalize_base(server_url: &str) -> String {
    server_url.trim().trim_end_matches('/').to_string()
}

/// Builds the URL of the document index endpoint.
///
/// ```
/// use docnav::infrastructure::url::endpoint_url;
///
/// assert_eq!(endpoint_url("http://docs.local:5000/", "available"), "http://docs.local:5000/available");
/// ```
#[must_use]
pub fn endpoint_url(server_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        normalize_base(server_url),
        endpoint.trim_start_matches('/')
    )
}

/// Returns `true` if `target` already carries a URL scheme (`https://...`).
#[must_use]
pub fn has_scheme(target: &str) -> bool {
    target.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Splits `server_url` into its scheme and `scheme://authority` origin.
fn scheme_and_origin(server_url: &str) -> Option<(&str, &str)> {
    let base = server_url.trim();
    let (scheme, rest) = base.split_once("://")?;
    let authority_len = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some((scheme, &base[..scheme.len() + 3 + authority_len]))
}

/// Resolves a document path into the URL handed to the opener.
///
/// Absolute URLs pass through verbatim. Protocol-relative paths (`//host/x`)
/// take the server's scheme, root-relative paths (`/x`) the server's origin.
/// Anything else is joined onto the server URL.
///
/// ```
/// use docnav::infrastructure::url::resolve_target;
///
/// let base = "http://docs.local:5000/site";
/// assert_eq!(resolve_target(base, "static/A/x/index.html"), "http://docs.local:5000/site/static/A/x/index.html");
/// assert_eq!(resolve_target(base, "/intro"), "http://docs.local:5000/intro");
/// assert_eq!(resolve_target(base, "//cdn.example.com/x"), "http://cdn.example.com/x");
/// assert_eq!(resolve_target(base, "https://example.com/doc"), "https://example.com/doc");
/// ```
#[must_use]
pub fn resolve_target(server_url: &str, doc_path: &str) -> String {
    if has_scheme(doc_path) {
        return doc_path.to_string();
    }
    match (scheme_and_origin(server_url), doc_path) {
        (Some((scheme, _)), path) if path.starts_with("//") => format!("{scheme}:{path}"),
        (Some((_, origin)), path) if path.starts_with('/') => format!("{origin}{path}"),
        _ => endpoint_url(server_url, doc_path),
    }
}
