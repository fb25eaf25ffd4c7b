//! Loader for `/collections/:handle`.

use std::sync::Arc;

use super::deferred::{spawn_deferred_data, DeferredData, DEFERRED_GRACE_PERIOD};
use super::{LoaderArgs, LoaderError, Storefront, COLLECTIONS_INDEX};
use crate::config::CollectionHandle;
use crate::models::{Collection, CollectionQueryData};
use crate::pagination::{PaginationVariables, PAGE_BY};
use crate::queries::{CollectionVariables, COLLECTION_QUERY};
use crate::sort::SortOption;

/// Data for a collection page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionPage {
    pub collection: Collection,
    pub sort: SortOption,
    pub deferred: DeferredData,
}

impl CollectionPage {
    /// `"{shop} | {title} Collection"`.
    #[must_use]
    pub fn meta_title(&self) -> String {
        format!(
            "{} | {} Collection",
            self.deferred.shop_name(),
            self.collection.title
        )
    }
}

/// Loads one collection's products for the URL's sort and page.
///
/// # Errors
///
/// - [`LoaderError::Redirect`] to `/collections` when no handle is given;
///   nothing is queried in that case
/// - [`LoaderError::NotFound`] when the handle is malformed or unknown
/// - [`LoaderError::Storefront`] when the collection query fails
pub async fn load_collection<S: Storefront>(
    storefront: &Arc<S>,
    args: &LoaderArgs,
) -> Result<CollectionPage, LoaderError> {
    let Some(raw_handle) = args.handle() else {
        return Err(LoaderError::Redirect {
            location: COLLECTIONS_INDEX.to_string(),
        });
    };
    let handle = CollectionHandle::new(raw_handle).map_err(|_| LoaderError::NotFound {
        handle: raw_handle.to_string(),
    })?;

    let deferred = spawn_deferred_data(Arc::clone(storefront));

    let sort = SortOption::from_url(args.url());
    let variables = CollectionVariables {
        handle,
        i18n: storefront.i18n(),
        pagination: PaginationVariables::from_url(args.url(), PAGE_BY),
        sort: sort.variables(),
    };
    let data: CollectionQueryData = storefront.query(&COLLECTION_QUERY, &variables).await?;
    let collection = data.collection.ok_or_else(|| LoaderError::NotFound {
        handle: raw_handle.to_string(),
    })?;

    Ok(CollectionPage {
        collection,
        sort,
        deferred: deferred.resolve_within(DEFERRED_GRACE_PERIOD).await,
    })
}
