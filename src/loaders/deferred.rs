//! Below-the-fold data that must never fail a page.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use super::{Storefront, FALLBACK_SHOP_NAME};
use crate::models::{Shop, ShopQueryData};
use crate::queries::{I18n, SHOP_QUERY};

/// Data loaded alongside the critical query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeferredData {
    pub shop: Option<Shop>,
}

impl DeferredData {
    /// The shop name, or `Hydrogen` when the shop query failed.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        self.shop
            .as_ref()
            .map_or(FALLBACK_SHOP_NAME, |shop| shop.name.as_str())
    }
}

/// Loads deferred data, logging and swallowing any failure.
pub async fn load_deferred_data<S: Storefront>(storefront: &S) -> DeferredData {
    let variables = storefront.i18n();
    match storefront
        .query::<I18n, ShopQueryData>(&SHOP_QUERY, &variables)
        .await
    {
        Ok(data) => DeferredData {
            shop: Some(data.shop),
        },
        Err(error) => {
            tracing::warn!(%error, "deferred shop query failed");
            DeferredData::default()
        }
    }
}

/// How long a page waits for deferred data once its critical data is in.
pub const DEFERRED_GRACE_PERIOD: Duration = Duration::from_millis(150);

/// A deferred load running on its own task.
#[derive(Debug)]
pub struct DeferredTask(JoinHandle<DeferredData>);

impl DeferredTask {
    /// Takes the task's result if it arrives within `grace`.
    ///
    /// A task still running after `grace` is aborted. Late, panicked and
    /// cancelled tasks all yield empty data.
    pub async fn resolve_within(mut self, grace: Duration) -> DeferredData {
        match tokio::time::timeout(grace, &mut self.0).await {
            Ok(Ok(data)) => data,
            Ok(Err(error)) => {
                tracing::warn!(%error, "deferred task did not complete");
                DeferredData::default()
            }
            Err(_) => {
                self.0.abort();
                tracing::warn!(?grace, "deferred data not ready; rendering without it");
                DeferredData::default()
            }
        }
    }
}

/// Starts [`load_deferred_data`] without waiting for it.
#[must_use]
pub fn spawn_deferred_data<S: Storefront>(storefront: Arc<S>) -> DeferredTask {
    DeferredTask(tokio::spawn(async move {
        load_deferred_data(storefront.as_ref()).await
    }))
}
