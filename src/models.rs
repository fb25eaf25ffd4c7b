//! Typed shapes of the Storefront API responses.
//!
//! Field names follow the GraphQL schema in camelCase on the wire. Cursors
//! and page flags are forwarded to the page untouched.

use std::fmt;

use serde::Deserialize;

/// A monetary amount, e.g. `{"amount": "19.0", "currencyCode": "USD"}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    /// Decimal amount as sent by the API.
    pub amount: String,
    pub currency_code: String,
}

/// Renders as `{amount} {currency}` with two fraction digits, rounding half
/// up on the decimal string itself; unparseable amounts pass through.
impl fmt::Display for MoneyV2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match two_decimals(&self.amount) {
            Some(amount) => write!(f, "{amount} {}", self.currency_code),
            None => write!(f, "{} {}", self.amount, self.currency_code),
        }
    }
}

fn two_decimals(amount: &str) -> Option<String> {
    let (sign, unsigned) = match amount.trim().strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", amount.trim()),
    };
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    if (whole.is_empty() && fraction.is_empty())
        || !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let mut digits: Vec<u8> = if whole.is_empty() {
        b"0".to_vec()
    } else {
        whole.as_bytes().to_vec()
    };
    digits.extend((0..2).map(|i| fraction.as_bytes().get(i).copied().unwrap_or(b'0')));

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let (whole, cents) = digits.split_at(digits.len() - 2);
    Some(format!(
        "{sign}{}.{}",
        String::from_utf8_lossy(whole),
        String::from_utf8_lossy(cents)
    ))
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_variant_price: MoneyV2,
    pub max_variant_price: MoneyV2,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
    pub url: String,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// One `name=value` option of a variant, e.g. `Size=M`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

/// A bare `{ nodes }` list.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Nodes<T> {
    pub nodes: Vec<T>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantOptions {
    pub selected_options: Vec<SelectedOption>,
}

/// A product as selected by the `ProductItem` fragment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub featured_image: Option<Image>,
    pub price_range: PriceRange,
    pub variants: Nodes<VariantOptions>,
}

impl ProductItem {
    /// Selected options of the first variant, empty if there is none.
    #[must_use]
    pub fn first_variant_options(&self) -> &[SelectedOption] {
        self.variants
            .nodes
            .first()
            .map(|variant| variant.selected_options.as_slice())
            .unwrap_or_default()
    }
}

/// Cursor state of a connection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_previous_page: bool,
    pub has_next_page: bool,
    #[serde(default)]
    pub start_cursor: Option<String>,
    #[serde(default)]
    pub end_cursor: Option<String>,
}

/// A page of `nodes` plus its [`PageInfo`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Collection {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub products: Connection<ProductItem>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Shop {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// `data` of the `Collection` query; `collection` is null for unknown handles.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CollectionQueryData {
    pub collection: Option<Collection>,
}

/// `data` of the `Catalog` query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogQueryData {
    pub products: Connection<ProductItem>,
}

/// `data` of the `Shop` query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShopQueryData {
    pub shop: Shop,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product_json() -> serde_json::Value {
        json!({
            "id": "gid://shopify/Product/1",
            "handle": "snowboard",
            "title": "The Snowboard",
            "featuredImage": {
                "id": "gid://shopify/ProductImage/1",
                "altText": null,
                "url": "https://cdn.shopify.com/s/files/board.png",
                "width": 800,
                "height": 800
            },
            "priceRange": {
                "minVariantPrice": {"amount": "629.95", "currencyCode": "USD"},
                "maxVariantPrice": {"amount": "629.95", "currencyCode": "USD"}
            },
            "variants": {
                "nodes": [
                    {"selectedOptions": [{"name": "Size", "value": "158cm"}]}
                ]
            }
        })
    }

    #[test]
    fn test_product_item_decodes_fragment_shape() {
        let product: ProductItem = serde_json::from_value(product_json()).unwrap();

        assert_eq!(product.handle, "snowboard");
        let image = product.featured_image.as_ref().unwrap();
        assert_eq!(image.alt_text, None);
        assert_eq!(image.width, Some(800));
        assert_eq!(
            product.first_variant_options(),
            &[SelectedOption {
                name: "Size".to_string(),
                value: "158cm".to_string()
            }]
        );
    }

    #[test]
    fn test_product_without_variants_has_no_options() {
        let mut value = product_json();
        value["variants"]["nodes"] = json!([]);
        value["featuredImage"] = json!(null);
        let product: ProductItem = serde_json::from_value(value).unwrap();

        assert!(product.first_variant_options().is_empty());
        assert!(product.featured_image.is_none());
    }

    #[test]
    fn test_null_collection_decodes_as_none() {
        let data: CollectionQueryData =
            serde_json::from_value(json!({"collection": null})).unwrap();
        assert!(data.collection.is_none());
    }

    #[test]
    fn test_page_info_cursors_are_forwarded_verbatim() {
        let info: PageInfo = serde_json::from_value(json!({
            "hasPreviousPage": true,
            "hasNextPage": false,
            "startCursor": "eyJsYXN0X2lkIjo3fQ==",
            "endCursor": null
        }))
        .unwrap();

        assert!(info.has_previous_page);
        assert_eq!(info.start_cursor.as_deref(), Some("eyJsYXN0X2lkIjo3fQ=="));
        assert_eq!(info.end_cursor, None);
    }

    #[test]
    fn test_money_display() {
        let money = MoneyV2 {
            amount: "19.0".to_string(),
            currency_code: "USD".to_string(),
        };
        assert_eq!(money.to_string(), "19.00 USD");

        let whole = MoneyV2 {
            amount: "629".to_string(),
            currency_code: "CAD".to_string(),
        };
        assert_eq!(whole.to_string(), "629.00 CAD");

        let odd = MoneyV2 {
            amount: "n/a".to_string(),
            currency_code: "EUR".to_string(),
        };
        assert_eq!(odd.to_string(), "n/a EUR");
    }

    #[test]
    fn test_money_rounds_half_up_without_floats() {
        assert_eq!(two_decimals("0.125").as_deref(), Some("0.13"));
        assert_eq!(two_decimals("1.005").as_deref(), Some("1.01"));
        assert_eq!(two_decimals("9.995").as_deref(), Some("10.00"));
        assert_eq!(two_decimals("40.5").as_deref(), Some("40.50"));
        assert_eq!(two_decimals("0.124").as_deref(), Some("0.12"));
        assert_eq!(two_decimals("-2.5").as_deref(), Some("-2.50"));
        assert_eq!(two_decimals(".5").as_deref(), Some("0.50"));
        assert_eq!(
            two_decimals("12345678901234567890.1").as_deref(),
            Some("12345678901234567890.10")
        );
        assert_eq!(two_decimals("1e3"), None);
        assert_eq!(two_decimals(""), None);
    }
}
