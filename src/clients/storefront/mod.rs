//! Storefront API client.
//!
//! - [`StorefrontClient`]: GraphQL client for Storefront API operations
//! - [`StorefrontToken`]: public or private access token
//! - [`StorefrontError`]: failures of typed queries
//!
//! The Storefront API lives at `/api/{version}/graphql.json` (no `/admin`
//! prefix) and authenticates with `X-Shopify-Storefront-Access-Token` for
//! public tokens or `Shopify-Storefront-Private-Token` for private ones.
//! Product and collection queries also work tokenless.

mod client;
mod errors;
mod storefront_http;
mod token;

pub use client::StorefrontClient;
pub use errors::StorefrontError;
pub use token::{StorefrontToken, PRIVATE_HEADER_NAME, PUBLIC_HEADER_NAME};
