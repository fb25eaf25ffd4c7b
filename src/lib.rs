//! # Shopify Storefront
//!
//! Server-rendered collection pages for a Shopify shop, backed by the
//! Storefront GraphQL API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorefrontConfig`] and [`StorefrontConfigBuilder`]
//! - A Storefront API client with public, private or no token
//! - The `Collection`, `Catalog` and `Shop` GraphQL documents in [`queries`]
//! - URL-driven sort state in [`sort`] and cursor pagination in [`pagination`]
//! - Route loaders in [`loaders`] and HTML components in [`components`]
//! - An axum router in [`routes`] serving `/collections/:handle` and
//!   `/collections/all`
//!
//! ## Quick Start
//!
//! ```rust
//! use shopify_storefront::{ShopDomain, StorefrontClient, StorefrontConfig, StorefrontToken};
//!
//! let config = StorefrontConfig::builder()
//!     .shop_domain(ShopDomain::new("snowdevil").unwrap())
//!     .token(StorefrontToken::public("public-token").unwrap())
//!     .build()
//!     .unwrap();
//! let client = StorefrontClient::new(&config);
//! ```
//!
//! ## Serving the Routes
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shopify_storefront::{routes::build_router, StorefrontClient, StorefrontConfig};
//!
//! let config = StorefrontConfig::from_env()?;
//! let app = build_router(Arc::new(StorefrontClient::new(&config)));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! ## Sort State
//!
//! The `sort` query parameter is the only record of the sort order, so a
//! reload always shows the same order:
//!
//! ```rust
//! use shopify_storefront::search_params::parse_request_target;
//! use shopify_storefront::sort::{label_to_action, url_to_label};
//!
//! let url = parse_request_target("/collections/all").unwrap();
//! let navigation = label_to_action("Price L-H", &url).unwrap();
//! assert_eq!(navigation.href(), "/collections/all?sort=low");
//! assert_eq!(url_to_label(navigation.location()), "Price L-H");
//! ```

pub mod clients;
pub mod components;
pub mod config;
pub mod error;
pub mod loaders;
pub mod models;
pub mod pagination;
pub mod queries;
pub mod routes;
pub mod search_params;
pub mod sort;

// Re-export public types at crate root for convenience
pub use config::{
    ApiVersion, CollectionHandle, CountryCode, HostUrl, LanguageCode, ShopDomain,
    StorefrontConfig, StorefrontConfigBuilder,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpError, HttpRequest, HttpRequestBuilder, HttpResponse, HttpResponseError,
    InvalidHttpRequestError, MaxHttpRetriesExceededError, StorefrontClient, StorefrontError,
    StorefrontToken,
};

// Re-export loader types
pub use loaders::{LoaderArgs, LoaderError, Storefront};
