//! Route loaders.
//!
//! A loader turns a request URL (plus route parameters) into page data. It
//! awaits exactly one critical query and runs the deferred shop query
//! alongside it. Only the critical query can fail the page, and the deferred
//! query can hold a page back by at most [`DEFERRED_GRACE_PERIOD`].
//!
//! Loaders talk to the Storefront API through the [`Storefront`] trait so
//! routes can be exercised against an in-memory data source.

mod catalog;
mod collection;
mod deferred;

use std::future::Future;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::clients::{StorefrontClient, StorefrontError};
use crate::queries::{I18n, QueryDocument};

pub use catalog::{load_catalog, CatalogPage};
pub use collection::{load_collection, CollectionPage};
pub use deferred::{
    load_deferred_data, spawn_deferred_data, DeferredData, DeferredTask, DEFERRED_GRACE_PERIOD,
};

/// Where the collection route sends requests without a handle.
pub const COLLECTIONS_INDEX: &str = "/collections";

/// A source of Storefront API data.
pub trait Storefront: Send + Sync + 'static {
    /// Runs `document` with `variables` and decodes its `data`.
    fn query<V, T>(
        &self,
        document: &'static QueryDocument,
        variables: &V,
    ) -> impl Future<Output = Result<T, StorefrontError>> + Send
    where
        V: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Buyer context forwarded to `@inContext`.
    fn i18n(&self) -> I18n {
        I18n::default()
    }
}

impl Storefront for StorefrontClient {
    fn query<V, T>(
        &self,
        document: &'static QueryDocument,
        variables: &V,
    ) -> impl Future<Output = Result<T, StorefrontError>> + Send
    where
        V: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        async move {
            tracing::debug!(operation = document.operation_name(), "storefront query");
            self.query_data(document.source(), variables).await
        }
    }

    fn i18n(&self) -> I18n {
        I18n {
            country: self.country().cloned(),
            language: self.language().cloned(),
        }
    }
}

/// The parts of an incoming request a loader reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoaderArgs {
    url: Url,
    handle: Option<String>,
}

impl LoaderArgs {
    #[must_use]
    pub const fn new(url: Url) -> Self {
        Self { url, handle: None }
    }

    /// Sets the `:handle` route parameter.
    #[must_use]
    pub fn with_handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = Some(handle.into());
        self
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// The route handle, treating an empty segment as absent.
    #[must_use]
    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref().filter(|handle| !handle.is_empty())
    }
}

/// Why a loader produced no page.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// The handle does not resolve to a collection.
    #[error("Collection {handle} not found")]
    NotFound { handle: String },

    /// The request should be answered with a redirect.
    #[error("Redirect to {location}")]
    Redirect { location: String },

    /// The critical query failed.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),
}

impl LoaderError {
    /// The HTTP status this error is reported with.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Redirect { .. } => 302,
            Self::Storefront(_) => 500,
        }
    }
}

/// Shop name used in titles when the deferred query produced nothing.
pub const FALLBACK_SHOP_NAME: &str = "Hydrogen";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search_params::parse_request_target;

    #[test]
    fn test_empty_handle_is_absent() {
        let url = parse_request_target("/collections/").unwrap();
        assert_eq!(LoaderArgs::new(url.clone()).with_handle("").handle(), None);
        assert_eq!(
            LoaderArgs::new(url).with_handle("shoes").handle(),
            Some("shoes")
        );
    }

    #[test]
    fn test_loader_error_statuses_and_messages() {
        let not_found = LoaderError::NotFound {
            handle: "hats".to_string(),
        };
        assert_eq!(not_found.status(), 404);
        assert_eq!(not_found.to_string(), "Collection hats not found");

        let redirect = LoaderError::Redirect {
            location: COLLECTIONS_INDEX.to_string(),
        };
        assert_eq!(redirect.status(), 302);

        let failed = LoaderError::from(StorefrontError::MissingData);
        assert_eq!(failed.status(), 500);
    }
}
