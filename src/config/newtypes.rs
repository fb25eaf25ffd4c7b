//! Validated newtype wrappers for configuration and routing values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Shopify shop domain.
///
/// This newtype validates and normalizes shop domains to the full
/// `shop.myshopify.com` format.
///
/// # Accepted Formats
///
/// - `shop-name` - normalized to `shop-name.myshopify.com`
/// - `shop-name.myshopify.com` - used as-is
///
/// # Example
///
/// ```rust
/// use shopify_storefront::ShopDomain;
///
/// let domain = ShopDomain::new("my-store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is invalid.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain = domain.into().trim().to_lowercase();

        let (shop_name, full_domain) = match domain.strip_suffix(Self::SUFFIX) {
            Some(shop_name) => (shop_name.to_string(), domain.clone()),
            None if domain.contains('.') => {
                return Err(ConfigError::InvalidShopDomain { domain });
            }
            None => (domain.clone(), format!("{domain}{}", Self::SUFFIX)),
        };

        if !is_slug(&shop_name) || shop_name.starts_with('-') || shop_name.ends_with('-') {
            return Err(ConfigError::InvalidShopDomain { domain });
        }

        Ok(Self {
            shop_name_end: shop_name.len(),
            full_domain,
        })
    }

    /// Returns the shop name portion of the domain.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated host URL, used to route Storefront API traffic through a proxy.
///
/// # Example
///
/// ```rust
/// use shopify_storefront::HostUrl;
///
/// let url = HostUrl::new("http://localhost:8080").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.authority(), "localhost:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(url::Url);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into().trim().to_string();
        let parsed = url::Url::parse(&raw)
            .ok()
            .filter(|u| u.host_str().is_some_and(|h| !h.is_empty()))
            .ok_or(ConfigError::InvalidHostUrl { url: raw })?;
        Ok(Self(parsed))
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns `host[:port]`, suitable for building a base URI.
    #[must_use]
    pub fn authority(&self) -> String {
        let host = self.0.host_str().unwrap_or_default();
        match self.0.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        }
    }

    /// Returns `scheme://host[:port]` without any path.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme(), self.authority())
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// A handle identifying a collection.
///
/// Any non-blank text that fits in one path segment is accepted, Unicode
/// included; whether a collection exists is for the Storefront API to say.
///
/// ```rust
/// use shopify_storefront::CollectionHandle;
///
/// let handle = CollectionHandle::new("été-2024").unwrap();
/// assert_eq!(handle.as_ref(), "été-2024");
/// assert!(CollectionHandle::new("a/b").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CollectionHandle(String);

impl CollectionHandle {
    /// Creates a new validated handle.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHandle`] if the handle is blank or
    /// contains `/` or a control character.
    pub fn new(handle: impl Into<String>) -> Result<Self, ConfigError> {
        let handle = handle.into();
        if handle.trim().is_empty() || handle.chars().any(|c| c == '/' || c.is_control()) {
            return Err(ConfigError::InvalidHandle { handle });
        }
        Ok(Self(handle))
    }
}

impl AsRef<str> for CollectionHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CollectionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

macro_rules! locale_code {
    ($(#[$meta:meta])* $name:ident, $kind:literal, $is_valid:path) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new validated code, normalizing to uppercase.
            ///
            /// # Errors
            ///
            /// Returns [`ConfigError::InvalidLocaleCode`] if the code is
            /// malformed.
            pub fn new(code: impl Into<String>) -> Result<Self, ConfigError> {
                let code = code.into();
                let upper = code.trim().to_ascii_uppercase();
                if !$is_valid(&upper) {
                    return Err(ConfigError::InvalidLocaleCode { kind: $kind, code });
                }
                Ok(Self(upper))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

fn is_alpha2(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// `EN`, or a regional variant such as `PT_BR`.
fn is_language(code: &str) -> bool {
    match code.split_once('_') {
        Some((language, region)) => is_alpha2(language) && is_alpha2(region),
        None => is_alpha2(code),
    }
}

locale_code!(
    /// An ISO 3166-1 alpha-2 country code sent as `@inContext(country:)`.
    CountryCode,
    "country",
    is_alpha2
);

locale_code!(
    /// A language code sent as `@inContext(language:)`.
    ///
    /// Two letters, optionally followed by `_` and a two-letter region.
    ///
    /// ```rust
    /// use shopify_storefront::LanguageCode;
    ///
    /// assert_eq!(LanguageCode::new("pt_br").unwrap().as_ref(), "PT_BR");
    /// assert!(LanguageCode::new("PT-BR").is_err());
    /// ```
    LanguageCode,
    "language",
    is_language
);
