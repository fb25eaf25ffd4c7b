//! Cursor pagination pass-through.
//!
//! A page request is `?cursor=<opaque>&direction=next|previous`. Cursors are
//! never inspected; they travel from [`PageInfo`] into links and back into
//! query variables unchanged.

use serde::Serialize;
use url::Url;

use crate::models::PageInfo;
use crate::search_params::{first_value, relative_href, with_param};

/// Products requested per page.
pub const PAGE_BY: u32 = 8;

pub const CURSOR_PARAM: &str = "cursor";
pub const DIRECTION_PARAM: &str = "direction";

/// Pagination variables for a connection query.
///
/// Serializes to `{first, endCursor}` or `{last, startCursor}`; an absent
/// cursor is sent as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PaginationVariables {
    /// Page after `end_cursor`, or the first page.
    Forward {
        first: u32,
        #[serde(rename = "endCursor")]
        end_cursor: Option<String>,
    },
    /// Page before `start_cursor`.
    Backward {
        last: u32,
        #[serde(rename = "startCursor")]
        start_cursor: Option<String>,
    },
}

impl PaginationVariables {
    /// Derives variables from the `cursor` and `direction` parameters.
    ///
    /// `direction=previous` pages backward; any other value, or none,
    /// pages forward.
    ///
    /// ```rust
    /// use shopify_storefront::pagination::{PaginationVariables, PAGE_BY};
    /// use shopify_storefront::search_params::parse_request_target;
    ///
    /// let url = parse_request_target("/collections/all").unwrap();
    /// assert_eq!(
    ///     PaginationVariables::from_url(&url, PAGE_BY),
    ///     PaginationVariables::Forward { first: 8, end_cursor: None }
    /// );
    /// ```
    #[must_use]
    pub fn from_url(url: &Url, page_by: u32) -> Self {
        let cursor = first_value(url, CURSOR_PARAM);
        if first_value(url, DIRECTION_PARAM).as_deref() == Some("previous") {
            Self::Backward {
                last: page_by,
                start_cursor: cursor,
            }
        } else {
            Self::Forward {
                first: page_by,
                end_cursor: cursor,
            }
        }
    }
}

/// Links to the neighbouring pages, relative to the current path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Builds previous/next links that keep every other query parameter.
#[must_use]
pub fn page_links(page_info: &PageInfo, current: &Url) -> PageLinks {
    let link = |direction: &str, cursor: &str| {
        let url = with_param(current, DIRECTION_PARAM, direction);
        relative_href(&with_param(&url, CURSOR_PARAM, cursor))
    };

    PageLinks {
        previous: page_info
            .start_cursor
            .as_deref()
            .filter(|_| page_info.has_previous_page)
            .map(|cursor| link("previous", cursor)),
        next: page_info
            .end_cursor
            .as_deref()
            .filter(|_| page_info.has_next_page)
            .map(|cursor| link("next", cursor)),
    }
}
