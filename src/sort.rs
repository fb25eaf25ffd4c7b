//! URL-driven product sort state.
//!
//! The `sort` query parameter is the only store of the sort order:
//!
//! | URL          | Label       | `sortKey` | `reverse` |
//! |--------------|-------------|-----------|-----------|
//! | (absent)     | `Featured`  | `null`    | `false`   |
//! | `sort=low`   | `Price L-H` | `PRICE`   | `false`   |
//! | `sort=high`  | `Price H-L` | `PRICE`   | `true`    |
//!
//! Any other `sort` value reads as `Featured`. Changing the sort is always a
//! full navigation so the loader runs again with the new URL.

use serde::Serialize;
use url::Url;

use crate::search_params::{bare_path, first_value, relative_href, with_param};

/// Query parameter holding the sort order.
pub const SORT_PARAM: &str = "sort";

/// The sort orders offered on collection pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortOption {
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
}

impl SortOption {
    /// All options in menu order.
    pub const ALL: [Self; 3] = [Self::Featured, Self::PriceLowToHigh, Self::PriceHighToLow];

    /// Reads a `sort` value; unknown or absent values are `Featured`.
    #[must_use]
    pub fn from_query_value(value: Option<&str>) -> Self {
        match value {
            Some("low") => Self::PriceLowToHigh,
            Some("high") => Self::PriceHighToLow,
            _ => Self::Featured,
        }
    }

    /// Reads the first `sort` parameter of a URL.
    #[must_use]
    pub fn from_url(url: &Url) -> Self {
        Self::from_query_value(first_value(url, SORT_PARAM).as_deref())
    }

    /// The `sort` value encoding this option; `Featured` has none.
    #[must_use]
    pub const fn query_value(self) -> Option<&'static str> {
        match self {
            Self::Featured => None,
            Self::PriceLowToHigh => Some("low"),
            Self::PriceHighToLow => Some("high"),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price L-H",
            Self::PriceHighToLow => "Price H-L",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|option| option.label() == label)
    }

    /// Query variables for this option.
    #[must_use]
    pub const fn variables(self) -> SortVariables {
        match self {
            Self::Featured => SortVariables {
                sort_key: None,
                reverse: false,
            },
            Self::PriceLowToHigh => SortVariables {
                sort_key: Some(ProductSortKey::Price),
                reverse: false,
            },
            Self::PriceHighToLow => SortVariables {
                sort_key: Some(ProductSortKey::Price),
                reverse: true,
            },
        }
    }
}

/// Sort key accepted by both `ProductSortKeys` and `ProductCollectionSortKeys`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductSortKey {
    Price,
}

/// `sortKey` and `reverse` query variables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortVariables {
    pub sort_key: Option<ProductSortKey>,
    pub reverse: bool,
}

/// A full page navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    location: Url,
}

impl Navigation {
    /// The absolute target URL.
    #[must_use]
    pub const fn location(&self) -> &Url {
        &self.location
    }

    /// The target as an in-site link, `path[?query]`.
    #[must_use]
    pub fn href(&self) -> String {
        relative_href(&self.location)
    }
}

/// Returns the menu label for the URL's sort state.
///
/// ```rust
/// use shopify_storefront::search_params::parse_request_target;
/// use shopify_storefront::sort::url_to_label;
///
/// let url = parse_request_target("/collections/all?sort=high").unwrap();
/// assert_eq!(url_to_label(&url), "Price H-L");
/// ```
#[must_use]
pub fn url_to_label(url: &Url) -> &'static str {
    SortOption::from_url(url).label()
}

/// Maps a selected label to the navigation that applies it.
///
/// `Featured` navigates to the bare path, dropping the whole query string.
/// The price options set `sort` and keep the other parameters. Unknown labels
/// yield `None`.
#[must_use]
pub fn label_to_action(label: &str, current: &Url) -> Option<Navigation> {
    let option = SortOption::from_label(label)?;
    let location = match option.query_value() {
        None => bare_path(current),
        Some(value) => with_param(current, SORT_PARAM, value),
    };
    Some(Navigation { location })
}
