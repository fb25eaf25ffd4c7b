//! Storefront API access tokens.
//!
//! Public tokens are sent in `X-Shopify-Storefront-Access-Token`, private
//! (server-side) tokens in `Shopify-Storefront-Private-Token`. The [`Debug`]
//! implementation masks the value so tokens never end up in logs.
//!
//! ```rust
//! use shopify_storefront::StorefrontToken;
//!
//! let token = StorefrontToken::public("public-access-token").unwrap();
//! assert_eq!(token.header_name(), "X-Shopify-Storefront-Access-Token");
//! assert_eq!(format!("{token:?}"), "StorefrontToken::Public(*****)");
//! ```

use std::fmt;

use crate::error::ConfigError;

/// HTTP header name for public storefront access tokens.
pub const PUBLIC_HEADER_NAME: &str = "X-Shopify-Storefront-Access-Token";

/// HTTP header name for private storefront access tokens.
pub const PRIVATE_HEADER_NAME: &str = "Shopify-Storefront-Private-Token";

/// A Storefront API access token.
#[derive(Clone)]
pub enum StorefrontToken {
    /// Public token, safe to expose to browsers.
    Public(String),
    /// Private token, server-side only.
    Private(String),
}

impl StorefrontToken {
    /// Creates a public token, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorefrontToken`] if `token` is blank.
    pub fn public(token: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(token.into()).map(Self::Public)
    }

    /// Creates a private token, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyStorefrontToken`] if `token` is blank.
    pub fn private(token: impl Into<String>) -> Result<Self, ConfigError> {
        non_empty(token.into()).map(Self::Private)
    }

    /// Returns the HTTP header name for this token type.
    #[must_use]
    pub const fn header_name(&self) -> &'static str {
        match self {
            Self::Public(_) => PUBLIC_HEADER_NAME,
            Self::Private(_) => PRIVATE_HEADER_NAME,
        }
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn header_value(&self) -> &str {
        match self {
            Self::Public(token) | Self::Private(token) => token,
        }
    }
}

fn non_empty(token: String) -> Result<String, ConfigError> {
    if token.trim().is_empty() {
        return Err(ConfigError::EmptyStorefrontToken);
    }
    Ok(token)
}

impl fmt::Debug for StorefrontToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Public(_) => f.write_str("StorefrontToken::Public(*****)"),
            Self::Private(_) => f.write_str("StorefrontToken::Private(*****)"),
        }
    }
}
