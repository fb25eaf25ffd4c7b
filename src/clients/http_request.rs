//! Outgoing request type for the Storefront API transport.
//!
//! Every Storefront request is a `POST` carrying the JSON
//! `{query, variables}` envelope, so a request is just a path, a body,
//! optional extra headers and an attempt count.

use std::collections::HashMap;

use crate::clients::errors::InvalidHttpRequestError;

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A request to be sent through the storefront transport.
///
/// ```rust
/// use shopify_storefront::clients::HttpRequest;
/// use serde_json::json;
///
/// let request = HttpRequest::builder("graphql.json", json!({"query": "{ shop { name } }"}))
///     .tries(3)
///     .build()
///     .unwrap();
/// assert_eq!(request.tries, 3);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// Path relative to the API base path.
    pub path: String,
    /// The JSON request body.
    pub body: serde_json::Value,
    /// Additional headers to include in the request.
    pub extra_headers: Option<HashMap<String, String>>,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(
        path: impl Into<String>,
        body: impl Into<serde_json::Value>,
    ) -> HttpRequestBuilder {
        HttpRequestBuilder {
            path: path.into(),
            body: body.into(),
            extra_headers: None,
            tries: 1,
        }
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::ZeroTries`] if `tries` is zero.
    pub const fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.tries == 0 {
            return Err(InvalidHttpRequestError::ZeroTries);
        }
        Ok(())
    }
}

/// Builder for [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    path: String,
    body: serde_json::Value,
    extra_headers: Option<HashMap<String, String>>,
    tries: u32,
}

impl HttpRequestBuilder {
    /// Sets all extra headers at once.
    #[must_use]
    pub fn extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = Some(headers);
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Sets the number of attempts; values above 1 retry 429 and 500 responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            path: self.path,
            body: self.body,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_zero_tries_is_rejected() {
        let result = HttpRequest::builder("graphql.json", json!({"query": "{ shop { name } }"}))
            .tries(0)
            .build();
        assert!(matches!(result, Err(InvalidHttpRequestError::ZeroTries)));
    }

    #[test]
    fn test_builder_collects_headers() {
        let request = HttpRequest::builder("graphql.json", json!({"query": "{ shop { name } }"}))
            .header("X-Buyer-Ip", "10.0.0.1")
            .build()
            .unwrap();

        assert_eq!(request.tries, 1);
        assert_eq!(request.body["query"], "{ shop { name } }");
        assert_eq!(
            request
                .extra_headers
                .unwrap()
                .get("X-Buyer-Ip")
                .map(String::as_str),
            Some("10.0.0.1")
        );
    }
}
