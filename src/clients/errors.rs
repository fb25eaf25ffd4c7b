//! HTTP-level error types for the storefront transport.
//!
//! - [`HttpResponseError`]: non-2xx responses
//! - [`MaxHttpRetriesExceededError`]: retries exhausted on 429/500
//! - [`InvalidHttpRequestError`]: request rejected before sending
//! - [`HttpError`]: the union of the above plus network failures

use thiserror::Error;

/// Error returned when a request receives a non-successful response.
///
/// `message` is a JSON object carrying any `errors`, `error` and
/// `error_reference` found in the response.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from `X-Request-Id`).
    pub error_reference: Option<String>,
}

/// Error returned when maximum retry attempts have been exhausted.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Serialized error message from the last response.
    pub message: String,
    /// Reference ID for error reporting (from `X-Request-Id`).
    pub error_reference: Option<String>,
}

/// Error returned when a request fails validation before being sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request was configured to be attempted zero times.
    #[error("A request must be attempted at least once.")]
    ZeroTries,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the upstream status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_error_displays_message() {
        let error = HttpResponseError {
            code: 401,
            message: r#"{"errors":"Unauthorized"}"#.to_string(),
            error_reference: None,
        };
        assert_eq!(error.to_string(), r#"{"errors":"Unauthorized"}"#);
    }

    #[test]
    fn test_max_retries_error_includes_retry_count() {
        let error = MaxHttpRetriesExceededError {
            code: 429,
            tries: 3,
            message: "{}".to_string(),
            error_reference: None,
        };
        assert!(error.to_string().contains("Exceeded maximum retry count of 3"));
    }

    #[test]
    fn test_status_is_exposed_for_response_errors() {
        let error: HttpError = MaxHttpRetriesExceededError {
            code: 500,
            tries: 2,
            message: "{}".to_string(),
            error_reference: None,
        }
        .into();
        assert_eq!(error.status(), Some(500));

        let error: HttpError = InvalidHttpRequestError::ZeroTries.into();
        assert_eq!(error.status(), None);
    }
}
