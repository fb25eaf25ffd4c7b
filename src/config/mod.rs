//! Configuration types for the storefront.
//!
//! # Overview
//!
//! - [`StorefrontConfig`]: shop, token, API version and buyer context
//! - [`StorefrontConfigBuilder`]: builder for [`StorefrontConfig`]
//! - [`ShopDomain`], [`HostUrl`], [`CollectionHandle`], [`CountryCode`],
//!   [`LanguageCode`]: validated newtypes
//! - [`ApiVersion`]: the Storefront API version to target
//!
//! # Example
//!
//! ```rust
//! use shopify_storefront::{StorefrontConfig, ShopDomain, StorefrontToken, ApiVersion};
//!
//! let config = StorefrontConfig::builder()
//!     .shop_domain(ShopDomain::new("my-store").unwrap())
//!     .token(StorefrontToken::public("public-token").unwrap())
//!     .api_version(ApiVersion::V2024_10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.shop_domain().as_ref(), "my-store.myshopify.com");
//! ```

mod newtypes;
mod version;

pub use newtypes::{CollectionHandle, CountryCode, HostUrl, LanguageCode, ShopDomain};
pub use version::ApiVersion;

use crate::clients::storefront::StorefrontToken;
use crate::error::ConfigError;

/// Configuration for talking to one shop's Storefront API.
///
/// `StorefrontConfig` is `Clone`, `Send`, and `Sync`; the router shares one
/// instance across all requests.
#[derive(Clone, Debug)]
pub struct StorefrontConfig {
    shop_domain: ShopDomain,
    token: Option<StorefrontToken>,
    api_version: ApiVersion,
    host: Option<HostUrl>,
    country: Option<CountryCode>,
    language: Option<LanguageCode>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfig {
    /// Creates a new builder for constructing a `StorefrontConfig`.
    #[must_use]
    pub fn builder() -> StorefrontConfigBuilder {
        StorefrontConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn shop_domain(&self) -> &ShopDomain {
        &self.shop_domain
    }

    /// Returns the storefront token, or `None` for tokenless access.
    #[must_use]
    pub const fn token(&self) -> Option<&StorefrontToken> {
        self.token.as_ref()
    }

    /// Returns the API version.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the proxy host, if configured.
    ///
    /// When set, requests go to this host and carry a `Host` header naming
    /// the shop.
    #[must_use]
    pub const fn host(&self) -> Option<&HostUrl> {
        self.host.as_ref()
    }

    /// Returns the buyer country for `@inContext`, if configured.
    #[must_use]
    pub const fn country(&self) -> Option<&CountryCode> {
        self.country.as_ref()
    }

    /// Returns the buyer language for `@inContext`, if configured.
    #[must_use]
    pub const fn language(&self) -> Option<&LanguageCode> {
        self.language.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Environment variable naming the shop.
pub const STORE_DOMAIN_VAR: &str = "PUBLIC_STORE_DOMAIN";
/// Environment variable holding a public storefront token.
pub const PUBLIC_TOKEN_VAR: &str = "PUBLIC_STOREFRONT_API_TOKEN";
/// Environment variable holding a private storefront token.
pub const PRIVATE_TOKEN_VAR: &str = "PRIVATE_STOREFRONT_API_TOKEN";
/// Environment variable selecting the API version.
pub const API_VERSION_VAR: &str = "STOREFRONT_API_VERSION";
/// Environment variable with the buyer country.
pub const COUNTRY_VAR: &str = "STOREFRONT_COUNTRY";
/// Environment variable with the buyer language.
pub const LANGUAGE_VAR: &str = "STOREFRONT_LANGUAGE";

impl StorefrontConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// See [`StorefrontConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, treating blank values as unset.
    ///
    /// `PUBLIC_STORE_DOMAIN` is required. A private token takes precedence
    /// over a public one; with neither, access is tokenless.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] without a store domain,
    /// or the validation error of any malformed value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let shop = var(STORE_DOMAIN_VAR).ok_or(ConfigError::MissingRequiredField {
            field: STORE_DOMAIN_VAR,
        })?;
        let mut builder = Self::builder().shop_domain(ShopDomain::new(shop)?);

        if let Some(token) = var(PRIVATE_TOKEN_VAR) {
            builder = builder.token(StorefrontToken::private(token)?);
        } else if let Some(token) = var(PUBLIC_TOKEN_VAR) {
            builder = builder.token(StorefrontToken::public(token)?);
        }
        if let Some(version) = var(API_VERSION_VAR) {
            builder = builder.api_version(version.parse()?);
        }
        if let Some(country) = var(COUNTRY_VAR) {
            builder = builder.country(CountryCode::new(country)?);
        }
        if let Some(language) = var(LANGUAGE_VAR) {
            builder = builder.language(LanguageCode::new(language)?);
        }
        builder.build()
    }
}

// Verify StorefrontConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontConfig>();
};

/// Builder for constructing [`StorefrontConfig`] instances.
///
/// `shop_domain` is required. Defaults:
///
/// - `token`: `None` (tokenless access)
/// - `api_version`: latest stable version
/// - `host`, `country`, `language`, `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StorefrontConfigBuilder {
    shop_domain: Option<ShopDomain>,
    token: Option<StorefrontToken>,
    api_version: Option<ApiVersion>,
    host: Option<HostUrl>,
    country: Option<CountryCode>,
    language: Option<LanguageCode>,
    user_agent_prefix: Option<String>,
}

impl StorefrontConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn shop_domain(mut self, shop: ShopDomain) -> Self {
        self.shop_domain = Some(shop);
        self
    }

    /// Sets the storefront access token.
    #[must_use]
    pub fn token(mut self, token: StorefrontToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Routes API traffic through a proxy host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Sets the buyer country.
    #[must_use]
    pub fn country(mut self, country: CountryCode) -> Self {
        self.country = Some(country);
        self
    }

    /// Sets the buyer language.
    #[must_use]
    pub fn language(mut self, language: LanguageCode) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the user agent prefix for outgoing requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorefrontConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `shop_domain` is not set.
    pub fn build(self) -> Result<StorefrontConfig, ConfigError> {
        let shop_domain = self.shop_domain.ok_or(ConfigError::MissingRequiredField {
            field: "shop_domain",
        })?;

        Ok(StorefrontConfig {
            shop_domain,
            token: self.token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            host: self.host,
            country: self.country,
            language: self.language,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
