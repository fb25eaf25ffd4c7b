//! Query-string helpers over [`url::Url`].
//!
//! Incoming request targets are resolved against a fixed local origin so
//! routes can work with absolute URLs while links stay relative.

use url::Url;

const LOCAL_ORIGIN: &str = "http://localhost";

/// Resolves a request target such as `/collections/all?sort=low`.
///
/// # Errors
///
/// Returns [`url::ParseError`] if the target cannot be resolved.
pub fn parse_request_target(target: &str) -> Result<Url, url::ParseError> {
    // `join` would read a leading `//` as a host
    if target.starts_with('/') {
        Url::parse(&format!("{LOCAL_ORIGIN}{target}"))
    } else {
        Url::parse(LOCAL_ORIGIN)?.join(target)
    }
}

/// Returns the first value of `key`, if present.
#[must_use]
pub fn first_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
}

/// Sets `key` to `value`.
///
/// The first occurrence is replaced in place and later duplicates are
/// dropped; a missing key is appended. Other parameters keep their order.
#[must_use]
pub fn with_param(url: &Url, key: &str, value: &str) -> Url {
    let mut replaced = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (name, current) in url.query_pairs() {
        if name != key {
            pairs.push((name.into_owned(), current.into_owned()));
        } else if !replaced {
            pairs.push((name.into_owned(), value.to_string()));
            replaced = true;
        }
    }
    if !replaced {
        pairs.push((key.to_string(), value.to_string()));
    }
    with_pairs(url, &pairs)
}

/// Returns the URL with no query string or fragment.
#[must_use]
pub fn bare_path(url: &Url) -> Url {
    let mut bare = url.clone();
    bare.set_query(None);
    bare.set_fragment(None);
    bare
}

/// Returns `path[?query]`, the form used for in-site links.
#[must_use]
pub fn relative_href(url: &Url) -> String {
    match url.query() {
        Some(query) if !query.is_empty() => format!("{}?{query}", url.path()),
        _ => url.path().to_string(),
    }
}

fn with_pairs(url: &Url, pairs: &[(String, String)]) -> Url {
    let mut next = url.clone();
    if pairs.is_empty() {
        next.set_query(None);
    } else {
        next.query_pairs_mut().clear().extend_pairs(pairs);
    }
    next
}
