//! Connection renderer with previous/next page links.

use url::Url;

use super::html::escape;
use crate::models::Connection;
use crate::pagination::page_links;

/// Renders a [`Connection`] inside a container, between page links.
#[derive(Clone, Copy, Debug)]
pub struct PaginatedResourceSection<'a, T> {
    connection: &'a Connection<T>,
    resources_class_name: &'a str,
}

impl<'a, T> PaginatedResourceSection<'a, T> {
    #[must_use]
    pub const fn new(connection: &'a Connection<T>, resources_class_name: &'a str) -> Self {
        Self {
            connection,
            resources_class_name,
        }
    }

    /// Renders every node with `item(node, index)`.
    ///
    /// Links are relative to `current` and keep its other parameters.
    pub fn render(&self, current: &Url, item: impl Fn(&T, usize) -> String) -> String {
        let links = page_links(&self.connection.page_info, current);

        let mut html = String::from("<div class=\"paginated-section\">\n");
        if let Some(previous) = &links.previous {
            html.push_str(&format!(
                "<a class=\"load-previous\" href=\"{}\">↑ Load previous</a>\n",
                escape(previous)
            ));
        }
        html.push_str(&format!(
            "<div class=\"{}\">\n",
            escape(self.resources_class_name)
        ));
        for (index, node) in self.connection.nodes.iter().enumerate() {
            html.push_str(&item(node, index));
            html.push('\n');
        }
        html.push_str("</div>\n");
        if let Some(next) = &links.next {
            html.push_str(&format!(
                "<a class=\"load-more\" href=\"{}\">Load more ↓</a>\n",
                escape(next)
            ));
        }
        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PageInfo;
    use crate::search_params::parse_request_target;

    fn connection(info: PageInfo) -> Connection<&'static str> {
        Connection {
            nodes: vec!["one", "two"],
            page_info: info,
        }
    }

    #[test]
    fn test_renders_nodes_in_order_with_index() {
        let connection = connection(PageInfo::default());
        let url = parse_request_target("/collections/all").unwrap();
        let html = PaginatedResourceSection::new(&connection, "products-grid")
            .render(&url, |node, index| format!("<p>{index}:{node}</p>"));

        assert!(html.contains("<div class=\"products-grid\">\n<p>0:one</p>\n<p>1:two</p>"));
        assert!(!html.contains("Load more"));
        assert!(!html.contains("Load previous"));
    }

    #[test]
    fn test_links_keep_sort() {
        let connection = connection(PageInfo {
            has_previous_page: true,
            has_next_page: true,
            start_cursor: Some("s".to_string()),
            end_cursor: Some("e".to_string()),
        });
        let url = parse_request_target("/collections/all?sort=low").unwrap();
        let html = PaginatedResourceSection::new(&connection, "products-grid")
            .render(&url, |node, _| (*node).to_string());

        assert!(html.contains(
            "href=\"/collections/all?sort=low&amp;direction=previous&amp;cursor=s\">↑ Load previous"
        ));
        assert!(html
            .contains("href=\"/collections/all?sort=low&amp;direction=next&amp;cursor=e\">Load more ↓"));
    }
}
