//! Error types for storefront configuration.
//!
//! This module contains the error type used throughout the crate for
//! configuration and validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use shopify_storefront::{CollectionHandle, ConfigError};
//!
//! let result = CollectionHandle::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidHandle { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during storefront configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Storefront access token cannot be empty.
    #[error("Storefront access token cannot be empty. Omit the token for tokenless access.")]
    EmptyStorefrontToken,

    /// Shop domain is invalid.
    #[error("Invalid shop domain '{domain}'. Expected format: 'shop-name' or 'shop-name.myshopify.com'.")]
    InvalidShopDomain {
        /// The invalid domain that was provided.
        domain: String,
    },

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected format: 'YYYY-MM' (e.g., '2024-01') or 'unstable'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// Collection handle is blank or cannot be a single path segment.
    #[error("Invalid collection handle '{handle}'. Handles are non-empty and contain no '/' or control characters.")]
    InvalidHandle {
        /// The invalid handle that was provided.
        handle: String,
    },

    /// Country or language code is invalid.
    #[error("Invalid {kind} code '{code}'. Expected a two-letter code (e.g., 'US', 'EN'); languages may add a region (e.g., 'PT_BR').")]
    InvalidLocaleCode {
        /// Either `"country"` or `"language"`.
        kind: &'static str,
        /// The invalid code that was provided.
        code: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://proxy.example.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_error_message() {
        let message = ConfigError::EmptyStorefrontToken.to_string();
        assert!(message.contains("cannot be empty"));
        assert!(message.contains("tokenless"));
    }

    #[test]
    fn test_invalid_shop_domain_error_message() {
        let error = ConfigError::InvalidShopDomain {
            domain: "bad domain!".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("bad domain!"));
        assert!(message.contains("Expected format"));
    }

    #[test]
    fn test_invalid_locale_code_names_the_kind() {
        let error = ConfigError::InvalidLocaleCode {
            kind: "country",
            code: "usa".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("country code 'usa'"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField {
            field: "shop_domain",
        };
        let message = error.to_string();
        assert!(message.contains("shop_domain"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyStorefrontToken;
        let _: &dyn std::error::Error = &error;
    }
}
