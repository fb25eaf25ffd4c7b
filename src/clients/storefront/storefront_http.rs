//! Internal HTTP transport for Storefront API communication.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpRequest, JSON_CONTENT_TYPE};
use crate::clients::http_response::HttpResponse;
use crate::clients::{RETRY_WAIT_TIME, SDK_VERSION};
use crate::config::{ApiVersion, StorefrontConfig};

/// Internal HTTP client for Storefront API requests.
///
/// Requests go to `{base_uri}/api/{version}/{path}`. The base URI is the
/// shop domain, or the configured proxy host, in which case a `Host` header
/// naming the shop is added.
#[derive(Debug)]
pub(super) struct StorefrontHttpClient {
    client: reqwest::Client,
    base_uri: String,
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify StorefrontHttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorefrontHttpClient>();
};

impl StorefrontHttpClient {
    pub(super) fn new(config: &StorefrontConfig, api_version: &ApiVersion) -> Self {
        let shop = config.shop_domain();
        let base_path = format!("/api/{api_version}");
        let base_uri = config
            .host()
            .map_or_else(|| format!("https://{}", shop.as_ref()), |host| host.origin());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Shopify Storefront v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        if config.host().is_some() {
            default_headers.insert("Host".to_string(), shop.as_ref().to_string());
        }
        if let Some(token) = config.token() {
            default_headers.insert(
                token.header_name().to_string(),
                token.header_value().to_string(),
            );
        }

        Self {
            client: reqwest::Client::new(),
            base_uri,
            base_path,
            default_headers,
        }
    }

    /// Sends a request, retrying 429 and 500 responses up to `request.tries` times.
    pub(super) async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut headers = self.default_headers.clone();
        headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        if let Some(extra) = &request.extra_headers {
            headers.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = self.client.post(&url);
            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }
            req_builder = req_builder.body(request.body.to_string());

            let res = req_builder.send().await?;
            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body_text = res.text().await.unwrap_or_default();
            let body = Self::parse_body(code, &body_text);

            let response = HttpResponse::new(code, res_headers, body);
            if response.is_ok() {
                return Ok(response);
            }

            let message = Self::serialize_error(&response);
            let error_reference = response.request_id().map(String::from);

            if (code != 429 && code != 500) || request.tries == 1 {
                return Err(HttpError::Response(HttpResponseError {
                    code,
                    message,
                    error_reference,
                }));
            }
            if tries >= request.tries {
                return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                    code,
                    tries: request.tries,
                    message,
                    error_reference,
                }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::debug!(code, tries, ?delay, "retrying storefront request");
            tokio::time::sleep(delay).await;
        }
    }

    fn parse_body(code: u16, body_text: &str) -> serde_json::Value {
        if body_text.is_empty() {
            return serde_json::json!({});
        }
        serde_json::from_str(body_text).unwrap_or_else(|_| {
            if code >= 500 {
                serde_json::json!({ "raw_body": body_text })
            } else {
                serde_json::json!({})
            }
        })
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let value = value.to_str().unwrap_or_default().to_string();
            result
                .entry(name.as_str().to_lowercase())
                .or_default()
                .push(value);
        }
        result
    }

    /// 429 honours `Retry-After`; everything else waits the fixed delay.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        match response.retry_request_after {
            Some(retry_after) if status == 429 => Duration::from_secs_f64(retry_after),
            _ => Duration::from_secs(RETRY_WAIT_TIME),
        }
    }

    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();
        for key in ["errors", "error"] {
            if let Some(value) = response.body.get(key) {
                error_body.insert(key.to_string(), value.clone());
            }
        }
        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }
        serde_json::Value::Object(error_body).to_string()
    }
}

#[cfg(test)]
impl StorefrontHttpClient {
    fn base_uri(&self) -> &str {
        &self.base_uri
    }

    fn base_path(&self) -> &str {
        &self.base_path
    }

    fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::storefront::StorefrontToken;
    use crate::config::{HostUrl, ShopDomain};

    fn config(token: Option<StorefrontToken>, host: Option<&str>) -> StorefrontConfig {
        let mut builder =
            StorefrontConfig::builder().shop_domain(ShopDomain::new("my-store").unwrap());
        if let Some(token) = token {
            builder = builder.token(token);
        }
        if let Some(host) = host {
            builder = builder.host(HostUrl::new(host).unwrap());
        }
        builder.build().unwrap()
    }

    #[test]
    fn test_base_uri_and_path_from_shop_domain() {
        let client = StorefrontHttpClient::new(&config(None, None), &ApiVersion::V2024_10);

        assert_eq!(client.base_uri(), "https://my-store.myshopify.com");
        assert_eq!(client.base_path(), "/api/2024-10");
    }

    #[test]
    fn test_proxy_host_keeps_scheme_and_sets_host_header() {
        let client = StorefrontHttpClient::new(
            &config(None, Some("http://127.0.0.1:8080")),
            &ApiVersion::V2024_10,
        );

        assert_eq!(client.base_uri(), "http://127.0.0.1:8080");
        assert_eq!(
            client.default_headers().get("Host").map(String::as_str),
            Some("my-store.myshopify.com")
        );
    }

    #[test]
    fn test_token_header_follows_token_kind() {
        let public = StorefrontHttpClient::new(
            &config(Some(StorefrontToken::public("pub").unwrap()), None),
            &ApiVersion::V2024_10,
        );
        assert_eq!(
            public
                .default_headers()
                .get("X-Shopify-Storefront-Access-Token")
                .map(String::as_str),
            Some("pub")
        );

        let tokenless = StorefrontHttpClient::new(&config(None, None), &ApiVersion::V2024_10);
        assert!(!tokenless
            .default_headers()
            .contains_key("X-Shopify-Storefront-Access-Token"));
        assert!(!tokenless
            .default_headers()
            .contains_key("Shopify-Storefront-Private-Token"));
    }

    #[test]
    fn test_user_agent_carries_prefix() {
        let config = StorefrontConfig::builder()
            .shop_domain(ShopDomain::new("my-store").unwrap())
            .user_agent_prefix("Hydrogen/2024")
            .build()
            .unwrap();
        let client = StorefrontHttpClient::new(&config, &ApiVersion::V2024_10);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Hydrogen/2024 | Shopify Storefront v"));
    }

    #[test]
    fn test_non_json_server_error_body_is_preserved() {
        assert_eq!(
            StorefrontHttpClient::parse_body(502, "<html>bad gateway</html>"),
            serde_json::json!({"raw_body": "<html>bad gateway</html>"})
        );
        assert_eq!(
            StorefrontHttpClient::parse_body(404, "nope"),
            serde_json::json!({})
        );
    }
}
