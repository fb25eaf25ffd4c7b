//! Response type returned by the storefront transport.

use std::collections::HashMap;

/// A parsed response from the Storefront API.
///
/// Header names are stored lowercased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed JSON body (`{}` when empty).
    pub body: serde_json::Value,
    /// Seconds to wait before retrying (from `Retry-After`).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing `Retry-After` when present.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.parse::<f64>().ok());

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()]))
            .collect()
    }

    #[test]
    fn test_parses_retry_after() {
        let response = HttpResponse::new(429, headers(&[("retry-after", "2.5")]), json!({}));
        assert_eq!(response.retry_request_after, Some(2.5));
        assert!(!response.is_ok());
    }

    #[test]
    fn test_request_id_lookup_is_case_insensitive() {
        let response = HttpResponse::new(200, headers(&[("x-request-id", "abc-123")]), json!({}));
        assert_eq!(response.request_id(), Some("abc-123"));
        assert_eq!(response.header("X-Request-Id"), Some("abc-123"));
        assert!(response.is_ok());
    }
}
