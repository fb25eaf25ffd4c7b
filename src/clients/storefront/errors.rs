//! Error type for Storefront API operations.

use thiserror::Error;

use crate::clients::HttpError;

/// Error returned by [`StorefrontClient`](super::StorefrontClient) queries.
///
/// Unlike the raw transport, typed queries treat a `200` response carrying a
/// non-empty `errors` array as a failure.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The API answered with GraphQL errors.
    #[error("GraphQL errors: {}", messages.join("; "))]
    Graphql {
        /// The `message` of every reported error.
        messages: Vec<String>,
    },

    /// The response had neither errors nor a `data` object.
    #[error("Storefront API response contained no data")]
    MissingData,

    /// `data` did not match the expected shape, or variables could not be
    /// encoded.
    #[error("Failed to convert Storefront API JSON: {0}")]
    Deserialize(#[from] serde_json::Error),
}

impl StorefrontError {
    /// Builds a [`StorefrontError::Graphql`] from a response `errors` array.
    pub(crate) fn from_errors(errors: &[serde_json::Value]) -> Self {
        let messages = errors
            .iter()
            .map(|error| {
                error
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .unwrap_or("unknown error")
                    .to_string()
            })
            .collect();
        Self::Graphql { messages }
    }
}
