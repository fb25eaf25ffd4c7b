//! HTTP transport and GraphQL client for the Storefront API.
//!
//! - [`HttpRequest`] / [`HttpRequestBuilder`]: an outgoing request
//! - [`HttpResponse`]: a parsed response
//! - [`HttpError`] and friends: transport failures
//! - [`storefront::StorefrontClient`]: the GraphQL client the loaders use
//!
//! # Retry Behavior
//!
//! - **429**: retried after `Retry-After`, or 1 second if absent
//! - **500**: retried after 1 second
//! - **Other non-2xx**: returned immediately
//!
//! The default `tries` is 1, meaning no automatic retries.

mod errors;
mod http_request;
mod http_response;
pub mod storefront;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_request::{HttpRequest, HttpRequestBuilder, JSON_CONTENT_TYPE};
pub use http_response::HttpResponse;
pub use storefront::{StorefrontClient, StorefrontError, StorefrontToken};

/// Fixed delay in seconds between retries.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version, reported in the `User-Agent` header.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
