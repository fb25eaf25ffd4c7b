//! Page bodies for the collection routes.

use url::Url;

use crate::components::html::{document, escape};
use crate::components::{Loading, PaginatedResourceSection, ProductItemCard, SelectMenu};
use crate::loaders::{CatalogPage, CollectionPage};
use crate::models::{Connection, ProductItem};
use crate::sort::{label_to_action, url_to_label, SortOption};

const PRODUCTS_GRID: &str = "products-grid";

/// Renders `/collections/:handle`.
#[must_use]
pub fn collection_page(page: &CollectionPage, url: &Url) -> String {
    let collection = &page.collection;
    let body = format!(
        "<div class=\"collection\" data-collection-id=\"{}\" data-collection-handle=\"{}\">\n\
         <h1>{}</h1>\n<p class=\"collection-description\">{}</p>\n{}\n{}\n</div>",
        escape(&collection.id),
        escape(&collection.handle),
        escape(&collection.title),
        escape(&collection.description),
        sort_options(url),
        products_grid(&collection.products, url)
    );
    document(&page.meta_title(), &body)
}

/// Renders `/collections/all`.
#[must_use]
pub fn catalog_page(page: &CatalogPage, url: &Url) -> String {
    let body = format!(
        "<div class=\"collection\">\n<h1>Products</h1>\n{}\n{}\n</div>",
        sort_options(url),
        products_grid(&page.products, url)
    );
    document(&page.meta_title(), &body)
}

fn sort_options(url: &Url) -> String {
    let labels = SortOption::ALL.map(SortOption::label);
    let menu = SelectMenu::new(labels, url_to_label(url), |_: &str| {});
    format!(
        "<div class=\"sort-options\">\n<h4>sort products by</h4>\n{}\n</div>",
        menu.render(|label| label_to_action(label, url).map(|navigation| navigation.href()))
    )
}

fn products_grid(products: &Connection<ProductItem>, url: &Url) -> String {
    PaginatedResourceSection::new(products, PRODUCTS_GRID).render(url, |product, index| {
        ProductItemCard::new(product, Loading::for_index(index)).render()
    })
}
