//! Add-to-cart form posting a `LinesAdd` action to `/cart`.
//!
//! The form carries two hidden inputs:
//!
//! - `cartFormInput`: `{"action":"LinesAdd","inputs":{"lines":[...]}}`
//! - `analytics`: the opaque analytics payload as JSON (`null` if absent)
//!
//! The cart endpoint owns the mutation; [`CartFormInput::from_form_value`]
//! is the decoding side of the same contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::html::escape;

/// Route the form posts to.
pub const CART_ROUTE: &str = "/cart";

/// Name of the hidden input carrying the cart action.
pub const CART_FORM_INPUT: &str = "cartFormInput";

/// Name of the hidden input carrying analytics.
pub const ANALYTICS_INPUT: &str = "analytics";

/// One line to add to the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineInput {
    pub merchandise_id: String,
    pub quantity: u32,
    /// Variant data used for optimistic cart rendering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variant: Option<serde_json::Value>,
}

impl CartLineInput {
    #[must_use]
    pub fn new(merchandise_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            merchandise_id: merchandise_id.into(),
            quantity,
            selected_variant: None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CartAction {
    LinesAdd,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartInputs {
    pub lines: Vec<CartLineInput>,
}

/// Payload of the `cartFormInput` field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartFormInput {
    pub action: CartAction,
    pub inputs: CartInputs,
}

/// Why a submitted `cartFormInput` was rejected.
#[derive(Debug, Error)]
pub enum CartFormError {
    #[error("Malformed cart form input: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Cart form input has no lines")]
    NoLines,

    #[error("Cart line {index} has an empty merchandise id")]
    EmptyMerchandiseId { index: usize },

    #[error("Cart line {index} has quantity 0")]
    ZeroQuantity { index: usize },
}

impl CartFormInput {
    #[must_use]
    pub const fn lines_add(lines: Vec<CartLineInput>) -> Self {
        Self {
            action: CartAction::LinesAdd,
            inputs: CartInputs { lines },
        }
    }

    /// Encodes the payload for the hidden input.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if a line's variant data cannot be encoded.
    pub fn to_form_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes and validates a submitted `cartFormInput` value.
    ///
    /// # Errors
    ///
    /// Returns [`CartFormError`] for malformed JSON, an empty line list,
    /// blank merchandise ids or zero quantities.
    pub fn from_form_value(value: &str) -> Result<Self, CartFormError> {
        let input: Self = serde_json::from_str(value)?;
        if input.inputs.lines.is_empty() {
            return Err(CartFormError::NoLines);
        }
        for (index, line) in input.inputs.lines.iter().enumerate() {
            if line.merchandise_id.trim().is_empty() {
                return Err(CartFormError::EmptyMerchandiseId { index });
            }
            if line.quantity == 0 {
                return Err(CartFormError::ZeroQuantity { index });
            }
        }
        Ok(input)
    }
}

/// Submission state of the form's fetcher.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetcherState {
    #[default]
    Idle,
    Submitting,
    Loading,
}

/// Submit button wrapped in its cart form.
#[derive(Clone, Debug, PartialEq)]
pub struct AddToCartButton {
    lines: Vec<CartLineInput>,
    label: String,
    analytics: Option<serde_json::Value>,
    disabled: Option<bool>,
}

impl AddToCartButton {
    #[must_use]
    pub fn new(lines: Vec<CartLineInput>, label: impl Into<String>) -> Self {
        Self {
            lines,
            label: label.into(),
            analytics: None,
            disabled: None,
        }
    }

    #[must_use]
    pub fn analytics(mut self, analytics: serde_json::Value) -> Self {
        self.analytics = Some(analytics);
        self
    }

    /// Forces the disabled state regardless of submission state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// An explicit flag wins; otherwise disabled while a submission is in flight.
    #[must_use]
    pub fn is_disabled(&self, state: FetcherState) -> bool {
        self.disabled.unwrap_or(state != FetcherState::Idle)
    }

    /// Renders the form for the given submission state.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the payload cannot be encoded.
    pub fn render(&self, state: FetcherState) -> Result<String, serde_json::Error> {
        let cart_input = CartFormInput::lines_add(self.lines.clone()).to_form_value()?;
        let analytics = serde_json::to_string(&self.analytics)?;
        let disabled = if self.is_disabled(state) {
            " disabled"
        } else {
            ""
        };

        Ok(format!(
            "<form method=\"post\" action=\"{CART_ROUTE}\">\n\
             <input type=\"hidden\" name=\"{CART_FORM_INPUT}\" value=\"{}\">\n\
             <input type=\"hidden\" name=\"{ANALYTICS_INPUT}\" value=\"{}\">\n\
             <button class=\"AddToCartButton\" type=\"submit\"{disabled}>{}</button>\n\
             </form>",
            escape(&cart_input),
            escape(&analytics),
            escape(&self.label)
        ))
    }
}
