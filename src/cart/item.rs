//! Line item records

use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};

/// One product entry in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product ID, unique within a cart
    pub id: String,

    /// Display title
    pub title: String,

    /// Product image location
    pub image_url: String,

    /// Unit price, carried through untouched
    pub price: f64,

    /// Always >= 1 while the item is in a cart
    pub quantity: u32,
}

/// Payload for adding a product: a line item without a quantity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewLineItem {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub price: f64,
}

impl NewLineItem {
    /// Create a new payload
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        image_url: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            price,
        }
    }

    /// Reject payloads that cannot be keyed or stored
    pub fn validate(&self) -> CartResult<()> {
        validate_id(&self.id)?;
        validate_price(&self.id, self.price)
    }

    /// Turn the payload into a line item with quantity 1
    pub fn into_line_item(self) -> LineItem {
        LineItem {
            id: self.id,
            title: self.title,
            image_url: self.image_url,
            price: self.price,
            quantity: 1,
        }
    }
}

/// Ids must contain at least one non-whitespace character
pub(crate) fn validate_id(id: &str) -> CartResult<()> {
    if id.trim().is_empty() {
        return Err(CartError::invalid("line item id must not be empty"));
    }
    Ok(())
}

/// NaN and infinities have no JSON encoding and would not load back
pub(crate) fn validate_price(id: &str, price: f64) -> CartResult<()> {
    if !price.is_finite() {
        return Err(CartError::invalid(format!(
            "price of {} must be a finite number, got {}",
            id, price
        )));
    }
    Ok(())
}
