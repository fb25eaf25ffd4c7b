//! Server-rendered page components.
//!
//! - [`SelectMenu`]: open/close dropdown used for the sort menu
//! - [`AddToCartButton`]: cart form submitting a `LinesAdd` action
//! - [`ProductItemCard`]: product tile in a products grid
//! - [`PaginatedResourceSection`]: connection renderer with page links
//!
//! Components render to HTML strings; all text is escaped with
//! [`html::escape`].

mod add_to_cart;
pub mod html;
mod paginated_section;
mod product_item;
mod select_menu;

pub use add_to_cart::{
    AddToCartButton, CartAction, CartFormError, CartFormInput, CartInputs, CartLineInput,
    FetcherState, ANALYTICS_INPUT, CART_FORM_INPUT, CART_ROUTE,
};
pub use paginated_section::PaginatedResourceSection;
pub use product_item::{variant_url, Loading, ProductItemCard};
pub use select_menu::SelectMenu;
