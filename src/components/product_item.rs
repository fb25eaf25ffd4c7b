//! Product card linking to the first variant.

use url::form_urlencoded;

use super::html::escape;
use crate::models::{ProductItem, SelectedOption};
use crate::pagination::PAGE_BY;

/// Image loading strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loading {
    Eager,
    Lazy,
}

impl Loading {
    /// The first page of cards loads eagerly.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        if index < PAGE_BY as usize {
            Self::Eager
        } else {
            Self::Lazy
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::Eager => "eager",
            Self::Lazy => "lazy",
        }
    }
}

/// `/products/{handle}?{name}={value}&...` for a variant's options.
///
/// ```rust
/// use shopify_storefront::components::variant_url;
/// use shopify_storefront::models::SelectedOption;
///
/// let options = [SelectedOption { name: "Size".into(), value: "Extra Large".into() }];
/// assert_eq!(variant_url("tee", &options), "/products/tee?Size=Extra+Large");
/// ```
#[must_use]
pub fn variant_url(handle: &str, options: &[SelectedOption]) -> String {
    let path = format!("/products/{}", urlencoding::encode(handle));
    if options.is_empty() {
        return path;
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(options.iter().map(|o| (o.name.as_str(), o.value.as_str())))
        .finish();
    format!("{path}?{query}")
}

/// A product card in a products grid.
#[derive(Clone, Copy, Debug)]
pub struct ProductItemCard<'a> {
    product: &'a ProductItem,
    loading: Loading,
}

impl<'a> ProductItemCard<'a> {
    #[must_use]
    pub const fn new(product: &'a ProductItem, loading: Loading) -> Self {
        Self { product, loading }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let product = self.product;
        let href = variant_url(&product.handle, product.first_variant_options());
        let image = product.featured_image.as_ref().map_or_else(String::new, |image| {
            let alt = image
                .alt_text
                .as_deref()
                .filter(|alt| !alt.is_empty())
                .unwrap_or(&product.title);
            let mut tag = format!(
                "<img src=\"{}\" alt=\"{}\" loading=\"{}\" \
                 sizes=\"(min-width: 45em) 400px, 100vw\" style=\"aspect-ratio: 1/1\"",
                escape(&image.url),
                escape(alt),
                self.loading.as_str()
            );
            if let (Some(width), Some(height)) = (image.width, image.height) {
                tag.push_str(&format!(" width=\"{width}\" height=\"{height}\""));
            }
            tag.push_str(">\n");
            tag
        });

        format!(
            "<a class=\"product-item\" href=\"{}\">\n{image}<h4>{}</h4>\n<small>{}</small>\n</a>",
            escape(&href),
            escape(&product.title),
            escape(&product.price_range.min_variant_price.to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Image, MoneyV2, Nodes, PriceRange, VariantOptions};

    fn product(alt_text: Option<&str>) -> ProductItem {
        let price = MoneyV2 {
            amount: "25.0".to_string(),
            currency_code: "CAD".to_string(),
        };
        ProductItem {
            id: "gid://shopify/Product/7".to_string(),
            handle: "wool-hat".to_string(),
            title: "Wool & Cotton Hat".to_string(),
            featured_image: Some(Image {
                id: None,
                alt_text: alt_text.map(String::from),
                url: "https://cdn.shopify.com/hat.png".to_string(),
                width: Some(600),
                height: Some(600),
            }),
            price_range: PriceRange {
                min_variant_price: price.clone(),
                max_variant_price: price,
            },
            variants: Nodes {
                nodes: vec![VariantOptions {
                    selected_options: vec![
                        SelectedOption {
                            name: "Color".to_string(),
                            value: "Red".to_string(),
                        },
                        SelectedOption {
                            name: "Size".to_string(),
                            value: "S/M".to_string(),
                        },
                    ],
                }],
            },
        }
    }

    #[test]
    fn test_loading_is_eager_for_first_page() {
        assert_eq!(Loading::for_index(0), Loading::Eager);
        assert_eq!(Loading::for_index(7), Loading::Eager);
        assert_eq!(Loading::for_index(8), Loading::Lazy);
    }

    #[test]
    fn test_variant_url_encodes_options() {
        let product = product(None);
        assert_eq!(
            variant_url(&product.handle, product.first_variant_options()),
            "/products/wool-hat?Color=Red&Size=S%2FM"
        );
        assert_eq!(variant_url("plain", &[]), "/products/plain");
    }

    #[test]
    fn test_card_falls_back_to_title_for_alt_text() {
        let product = product(None);
        let html = ProductItemCard::new(&product, Loading::Lazy).render();

        assert!(html.contains("alt=\"Wool &amp; Cotton Hat\""));
        assert!(html.contains("loading=\"lazy\""));
        assert!(html.contains("href=\"/products/wool-hat?Color=Red&amp;Size=S%2FM\""));
        assert!(html.contains("<small>25.00 CAD</small>"));
        assert!(html.contains("width=\"600\" height=\"600\""));
    }

    #[test]
    fn test_card_uses_alt_text_when_present() {
        let product = product(Some("A red hat"));
        let html = ProductItemCard::new(&product, Loading::Eager).render();

        assert!(html.contains("alt=\"A red hat\""));
        assert!(html.contains("loading=\"eager\""));
    }

    #[test]
    fn test_card_without_image() {
        let mut product = product(None);
        product.featured_image = None;
        let html = ProductItemCard::new(&product, Loading::Eager).render();
        assert!(!html.contains("<img"));
        assert!(html.contains("<h4>Wool &amp; Cotton Hat</h4>"));
    }
}
