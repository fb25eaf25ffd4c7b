//! Loader for `/collections/all`.

use std::sync::Arc;

use super::deferred::{spawn_deferred_data, DeferredData, DEFERRED_GRACE_PERIOD};
use super::{LoaderArgs, LoaderError, Storefront};
use crate::models::{CatalogQueryData, Connection, ProductItem};
use crate::pagination::{PaginationVariables, PAGE_BY};
use crate::queries::{CatalogVariables, CATALOG_QUERY};
use crate::sort::SortOption;

/// Data for the all-products page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogPage {
    pub products: Connection<ProductItem>,
    pub sort: SortOption,
    pub deferred: DeferredData,
}

impl CatalogPage {
    /// `"{shop} | Products"`.
    #[must_use]
    pub fn meta_title(&self) -> String {
        format!("{} | Products", self.deferred.shop_name())
    }
}

/// Loads a page of every product in the shop.
///
/// # Errors
///
/// Returns [`LoaderError::Storefront`] when the catalog query fails.
pub async fn load_catalog<S: Storefront>(
    storefront: &Arc<S>,
    args: &LoaderArgs,
) -> Result<CatalogPage, LoaderError> {
    let deferred = spawn_deferred_data(Arc::clone(storefront));

    let sort = SortOption::from_url(args.url());
    let variables = CatalogVariables {
        i18n: storefront.i18n(),
        pagination: PaginationVariables::from_url(args.url(), PAGE_BY),
        sort: sort.variables(),
    };
    let data: CatalogQueryData = storefront.query(&CATALOG_QUERY, &variables).await?;

    Ok(CatalogPage {
        products: data.products,
        sort,
        deferred: deferred.resolve_within(DEFERRED_GRACE_PERIOD).await,
    })
}
