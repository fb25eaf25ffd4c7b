//! Storefront GraphQL client.
//!
//! [`StorefrontClient`] POSTs GraphQL documents to
//! `https://{shop}/api/{version}/graphql.json`. [`query`](StorefrontClient::query)
//! returns the raw [`HttpResponse`]; [`query_data`](StorefrontClient::query_data)
//! decodes the `data` object into a typed value and turns GraphQL `errors`
//! into [`StorefrontError::Graphql`].
//!
//! # Example
//!
//! ```rust,ignore
//! use shopify_storefront::{ShopDomain, StorefrontClient, StorefrontConfig};
//! use serde_json::json;
//!
//! let config = StorefrontConfig::builder()
//!     .shop_domain(ShopDomain::new("my-store").unwrap())
//!     .build()
//!     .unwrap();
//! let client = StorefrontClient::new(&config);
//!
//! let response = client.query("query { shop { name } }", None, None, None).await?;
//! println!("Shop: {}", response.body["data"]["shop"]["name"]);
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storefront_http::StorefrontHttpClient;
use super::StorefrontError;
use crate::clients::{HttpRequest, HttpResponse};
use crate::config::{ApiVersion, CountryCode, LanguageCode, StorefrontConfig};

/// GraphQL client for the Shopify Storefront API.
///
/// `StorefrontClient` is `Send + Sync`; the router shares one instance
/// behind an `Arc`.
#[derive(Debug)]
pub struct StorefrontClient {
    http_client: StorefrontHttpClient,
    api_version: ApiVersion,
    country: Option<CountryCode>,
    language: Option<LanguageCode>,
}

// Verify StorefrontClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontClient>();
};

impl StorefrontClient {
    /// Creates a client using the configured API version.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self::create_client(config, config.api_version().clone())
    }

    /// Creates a client targeting a specific API version.
    ///
    /// ```rust
    /// use shopify_storefront::{ApiVersion, ShopDomain, StorefrontClient, StorefrontConfig};
    ///
    /// let config = StorefrontConfig::builder()
    ///     .shop_domain(ShopDomain::new("my-store").unwrap())
    ///     .build()
    ///     .unwrap();
    /// let client = StorefrontClient::with_version(&config, ApiVersion::V2024_10);
    /// assert_eq!(client.api_version(), &ApiVersion::V2024_10);
    /// ```
    #[must_use]
    pub fn with_version(config: &StorefrontConfig, version: ApiVersion) -> Self {
        let configured = config.api_version();
        if &version == configured {
            tracing::debug!(
                "Storefront client has a redundant API version override to the default {}",
                configured
            );
        } else {
            tracing::debug!(
                "Storefront client overriding default API version {} with {}",
                configured,
                version
            );
        }
        Self::create_client(config, version)
    }

    fn create_client(config: &StorefrontConfig, api_version: ApiVersion) -> Self {
        Self {
            http_client: StorefrontHttpClient::new(config, &api_version),
            api_version,
            country: config.country().cloned(),
            language: config.language().cloned(),
        }
    }

    /// Returns the API version being used by this client.
    #[must_use]
    pub const fn api_version(&self) -> &ApiVersion {
        &self.api_version
    }

    /// Returns the buyer country sent with queries, if any.
    #[must_use]
    pub const fn country(&self) -> Option<&CountryCode> {
        self.country.as_ref()
    }

    /// Returns the buyer language sent with queries, if any.
    #[must_use]
    pub const fn language(&self) -> Option<&LanguageCode> {
        self.language.as_ref()
    }

    /// Executes a GraphQL query and returns the raw response.
    ///
    /// GraphQL-level errors come back with HTTP 200 inside
    /// `response.body["errors"]` and are not treated as failures here.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Http`] for network errors, non-2xx
    /// responses and retry exhaustion.
    pub async fn query(
        &self,
        query: &str,
        variables: Option<serde_json::Value>,
        headers: Option<HashMap<String, String>>,
        tries: Option<u32>,
    ) -> Result<HttpResponse, StorefrontError> {
        let body = serde_json::json!({
            "query": query,
            "variables": variables
        });
        self.send(body, headers, tries.unwrap_or(1)).await
    }

    /// Executes a GraphQL query and decodes its `data` object.
    ///
    /// # Errors
    ///
    /// Returns [`StorefrontError::Graphql`] when the response carries errors,
    /// [`StorefrontError::MissingData`] when it carries no data, and
    /// [`StorefrontError::Deserialize`] when `data` does not match `T`.
    pub async fn query_data<V, T>(&self, query: &str, variables: &V) -> Result<T, StorefrontError>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::json!({
            "query": query,
            "variables": serde_json::to_value(variables)?
        });
        let response = self.send(body, None, 1).await?;
        decode_data(response.body)
    }

    async fn send(
        &self,
        body: serde_json::Value,
        headers: Option<HashMap<String, String>>,
        tries: u32,
    ) -> Result<HttpResponse, StorefrontError> {
        let mut builder = HttpRequest::builder("graphql.json", body).tries(tries);
        if let Some(extra_headers) = headers {
            builder = builder.extra_headers(extra_headers);
        }

        let request = builder
            .build()
            .map_err(|e| StorefrontError::Http(e.into()))?;
        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Extracts and decodes `data` from a GraphQL response body.
pub(crate) fn decode_data<T: DeserializeOwned>(
    mut body: serde_json::Value,
) -> Result<T, StorefrontError> {
    if let Some(errors) = body
        .get("errors")
        .and_then(serde_json::Value::as_array)
        .filter(|errors| !errors.is_empty())
    {
        return Err(StorefrontError::from_errors(errors));
    }
    let data = body
        .get_mut("data")
        .map(serde_json::Value::take)
        .filter(|data| !data.is_null())
        .ok_or(StorefrontError::MissingData)?;
    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShopDomain;
    use serde::Deserialize;
    use serde_json::json;

    fn config() -> StorefrontConfig {
        StorefrontConfig::builder()
            .shop_domain(ShopDomain::new("test-shop").unwrap())
            .api_version(ApiVersion::V2024_10)
            .country(CountryCode::new("CA").unwrap())
            .build()
            .unwrap()
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct ShopName {
        name: String,
    }

    #[test]
    fn test_new_uses_config_version_and_context() {
        let client = StorefrontClient::new(&config());
        assert_eq!(client.api_version(), &ApiVersion::V2024_10);
        assert_eq!(client.country().map(AsRef::as_ref), Some("CA"));
        assert!(client.language().is_none());
    }

    #[test]
    fn test_with_version_overrides_config() {
        let client = StorefrontClient::with_version(&config(), ApiVersion::V2025_01);
        assert_eq!(client.api_version(), &ApiVersion::V2025_01);
    }

    #[test]
    fn test_decode_data_reads_data_object() {
        let shop: ShopName = decode_data(json!({"data": {"name": "Snowdevil"}})).unwrap();
        assert_eq!(shop, ShopName { name: "Snowdevil".to_string() });
    }

    #[test]
    fn test_decode_data_surfaces_graphql_errors() {
        let result: Result<ShopName, _> = decode_data(json!({
            "data": null,
            "errors": [{"message": "Throttled"}]
        }));
        assert!(matches!(
            result,
            Err(StorefrontError::Graphql { messages }) if messages == vec!["Throttled".to_string()]
        ));
    }

    #[test]
    fn test_decode_data_requires_data() {
        let result: Result<ShopName, _> = decode_data(json!({"data": null}));
        assert!(matches!(result, Err(StorefrontError::MissingData)));

        let result: Result<ShopName, _> = decode_data(json!({"data": {"nom": "x"}}));
        assert!(matches!(result, Err(StorefrontError::Deserialize(_))));
    }
}
