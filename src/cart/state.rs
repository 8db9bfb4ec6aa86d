//! Cart state and reconciliation
//!
//! `CartState` is the ordered collection of line items. The mutation methods
//! here are pure in-memory operations; persistence is layered on top by
//! [`CartStore`](crate::cart::CartStore).

use crate::cart::item::{validate_price, LineItem, NewLineItem};
use crate::error::{CartError, CartResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered collection of line items, keyed by id
///
/// Invariants: every item has `quantity >= 1` and ids are unique.
/// Serializes as a plain JSON array of line items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<LineItem>,
}

impl CartState {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from existing items, checking invariants
    pub fn from_items(items: Vec<LineItem>) -> CartResult<Self> {
        let state = Self { items };
        state.validate()?;
        Ok(state)
    }

    /// Add a product, merging into an existing entry with the same id
    ///
    /// A duplicate id is not an error: it behaves exactly like
    /// [`increment`](Self::increment).
    pub fn add(&mut self, candidate: NewLineItem) {
        if self.contains(&candidate.id) {
            self.increment(&candidate.id);
        } else {
            self.items.push(candidate.into_line_item());
        }
    }

    /// Increase the quantity of the matching item by one
    ///
    /// Returns false (leaving the cart unchanged) when no item matches.
    pub fn increment(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.quantity = item.quantity.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Decrease the quantity of the matching item by one
    ///
    /// An item that reaches zero is removed. Returns false (leaving the cart
    /// unchanged) when no item matches.
    pub fn decrement(&mut self, id: &str) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };

        let remaining = self.items[pos].quantity.saturating_sub(1);
        if remaining == 0 {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity = remaining;
        }
        true
    }

    /// Line items in insertion order
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over line items in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Check whether an item with this id is present
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the cart has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Check the collection invariants
    pub fn validate(&self) -> CartResult<()> {
        let mut seen = HashSet::with_capacity(self.items.len());

        for item in &self.items {
            if item.id.trim().is_empty() {
                return Err(CartError::invalid("line item with empty id"));
            }
            validate_price(&item.id, item.price)?;
            if item.quantity == 0 {
                return Err(CartError::invalid(format!(
                    "line item {} has quantity 0",
                    item.id
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CartError::invalid(format!(
                    "duplicate line item id {}",
                    item.id
                )));
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
