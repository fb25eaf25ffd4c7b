//! GraphQL documents sent to the Storefront API and their variables.
//!
//! The `Collection` and `Catalog` documents both select the shared
//! [`PRODUCT_ITEM_FRAGMENT`] and the connection's `pageInfo`. Variables are
//! typed structs serialized in the camelCase shape the documents declare;
//! absent cursors serialize as `null`, absent buyer context is omitted.

use serde::Serialize;

use crate::config::{CollectionHandle, CountryCode, LanguageCode};
use crate::pagination::PaginationVariables;
use crate::sort::SortVariables;

macro_rules! product_item_fragment {
    () => {
        r"fragment MoneyProductItem on MoneyV2 {
  amount
  currencyCode
}
fragment ProductItem on Product {
  id
  handle
  title
  featuredImage {
    id
    altText
    url
    width
    height
  }
  priceRange {
    minVariantPrice {
      ...MoneyProductItem
    }
    maxVariantPrice {
      ...MoneyProductItem
    }
  }
  variants(first: 1) {
    nodes {
      selectedOptions {
        name
        value
      }
    }
  }
}
"
    };
}

/// A named GraphQL operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryDocument {
    operation_name: &'static str,
    source: &'static str,
}

impl QueryDocument {
    /// Returns the operation name, e.g. `Collection`.
    #[must_use]
    pub const fn operation_name(&self) -> &'static str {
        self.operation_name
    }

    /// Returns the full document text.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        self.source
    }
}

/// Product card selection shared by the collection and catalog queries.
pub const PRODUCT_ITEM_FRAGMENT: &str = product_item_fragment!();

/// Products of one collection, looked up by handle.
pub const COLLECTION_QUERY: QueryDocument = QueryDocument {
    operation_name: "Collection",
    source: concat!(
        product_item_fragment!(),
        r"query Collection(
  $handle: String!
  $country: CountryCode
  $language: LanguageCode
  $first: Int
  $last: Int
  $startCursor: String
  $endCursor: String
  $sortKey: ProductCollectionSortKeys
  $reverse: Boolean
) @inContext(country: $country, language: $language) {
  collection(handle: $handle) {
    id
    handle
    title
    description
    products(
      first: $first,
      last: $last,
      before: $startCursor,
      after: $endCursor,
      sortKey: $sortKey,
      reverse: $reverse
    ) {
      nodes {
        ...ProductItem
      }
      pageInfo {
        hasPreviousPage
        hasNextPage
        endCursor
        startCursor
      }
    }
  }
}
"
    ),
};

/// Every product in the shop.
pub const CATALOG_QUERY: QueryDocument = QueryDocument {
    operation_name: "Catalog",
    source: concat!(
        product_item_fragment!(),
        r"query Catalog(
  $country: CountryCode
  $language: LanguageCode
  $first: Int
  $last: Int
  $startCursor: String
  $endCursor: String
  $sortKey: ProductSortKeys
  $reverse: Boolean
) @inContext(country: $country, language: $language) {
  products(
    first: $first,
    last: $last,
    before: $startCursor,
    after: $endCursor,
    sortKey: $sortKey,
    reverse: $reverse
  ) {
    nodes {
      ...ProductItem
    }
    pageInfo {
      hasPreviousPage
      hasNextPage
      startCursor
      endCursor
    }
  }
}
"
    ),
};

/// Shop name and description, loaded as deferred data.
pub const SHOP_QUERY: QueryDocument = QueryDocument {
    operation_name: "Shop",
    source: r"query Shop($country: CountryCode, $language: LanguageCode)
@inContext(country: $country, language: $language) {
  shop {
    name
    description
  }
}
",
};

/// Buyer context passed to `@inContext`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct I18n {
    /// Buyer country.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<CountryCode>,
    /// Buyer language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,
}

/// Variables of [`COLLECTION_QUERY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CollectionVariables {
    pub handle: CollectionHandle,
    #[serde(flatten)]
    pub i18n: I18n,
    #[serde(flatten)]
    pub pagination: PaginationVariables,
    #[serde(flatten)]
    pub sort: SortVariables,
}

/// Variables of [`CATALOG_QUERY`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogVariables {
    #[serde(flatten)]
    pub i18n: I18n,
    #[serde(flatten)]
    pub pagination: PaginationVariables,
    #[serde(flatten)]
    pub sort: SortVariables,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortOption;
    use serde_json::json;

    #[test]
    fn test_documents_embed_the_product_fragment() {
        for document in [COLLECTION_QUERY, CATALOG_QUERY] {
            assert!(document.source().starts_with(PRODUCT_ITEM_FRAGMENT));
            assert!(document.source().contains("...ProductItem"));
            assert!(document.source().contains("pageInfo"));
            assert!(document.source().contains("@inContext"));
        }
        assert!(!SHOP_QUERY.source().contains("ProductItem"));
    }

    #[test]
    fn test_operation_names_match_documents() {
        for document in [COLLECTION_QUERY, CATALOG_QUERY, SHOP_QUERY] {
            let header = format!("query {}(", document.operation_name());
            assert!(document.source().contains(&header), "{header}");
        }
    }

    #[test]
    fn test_collection_variables_serialize_flat() {
        let variables = CollectionVariables {
            handle: CollectionHandle::new("shoes").unwrap(),
            i18n: I18n {
                country: Some(CountryCode::new("ca").unwrap()),
                language: None,
            },
            pagination: PaginationVariables::Forward {
                first: 8,
                end_cursor: None,
            },
            sort: SortOption::PriceHighToLow.variables(),
        };

        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({
                "handle": "shoes",
                "country": "CA",
                "first": 8,
                "endCursor": null,
                "sortKey": "PRICE",
                "reverse": true
            })
        );
    }

    #[test]
    fn test_catalog_variables_featured_sends_null_sort_key() {
        let variables = CatalogVariables {
            i18n: I18n::default(),
            pagination: PaginationVariables::Backward {
                last: 8,
                start_cursor: Some("abc".to_string()),
            },
            sort: SortOption::Featured.variables(),
        };

        assert_eq!(
            serde_json::to_value(&variables).unwrap(),
            json!({
                "last": 8,
                "startCursor": "abc",
                "sortKey": null,
                "reverse": false
            })
        );
    }
}
