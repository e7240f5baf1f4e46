//! Shopping cart: a product-to-quantity map with totals.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Flat shipping charged on any non-empty cart, in cents.
pub const FLAT_SHIPPING_CENTS: i64 = 599;

/// A cart entry. At most one entry exists per product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

/// The current shopper's pending selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            currency: Currency::USD,
        }
    }

    /// Entries in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get the entry for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id == product_id)
    }

    /// Check if the cart has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count: the sum of quantities, not the number of
    /// distinct entries. Drives the header badge.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Add a product to the cart.
    ///
    /// A product id that does not resolve in the catalog leaves the cart
    /// unchanged. An existing entry has its quantity incremented rather
    /// than being duplicated. Stock is not checked here.
    ///
    /// Returns `true` if the cart changed.
    pub fn add(&mut self, catalog: &Catalog, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 || catalog.product(product_id).is_none() {
            return false;
        }
        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            self.items.push(CartItem {
                product_id,
                quantity,
            });
        }
        true
    }

    /// Set the quantity for an entry. A quantity below 1 removes it.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) {
        if quantity < 1 {
            self.remove(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Remove an entry. Absent ids are a no-op.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.product_id != product_id);
        self.items.len() < before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Replace the whole cart with a single entry, discarding whatever
    /// was in it. The destructive shortcut behind the "Buy Now" button.
    ///
    /// Returns `true` if the product resolved and the cart was replaced.
    pub fn buy_now(&mut self, catalog: &Catalog, product_id: ProductId, quantity: u32) -> bool {
        if quantity == 0 || catalog.product(product_id).is_none() {
            return false;
        }
        self.items = vec![CartItem {
            product_id,
            quantity,
        }];
        true
    }

    /// Compute the cart's price breakdown against the current catalog.
    ///
    /// An entry whose product no longer exists contributes zero to the
    /// subtotal. Shipping is flat and applies to any non-empty cart.
    pub fn totals(&self, catalog: &Catalog) -> CartTotals {
        let subtotal = self
            .items
            .iter()
            .filter_map(|item| {
                catalog
                    .product(item.product_id)
                    .and_then(|p| p.price.try_multiply(item.quantity as i64))
            })
            .fold(Money::zero(self.currency), |acc, line| {
                acc.try_add(&line).unwrap_or(acc)
            });

        let shipping = if self.is_empty() {
            Money::zero(self.currency)
        } else {
            Money::new(FLAT_SHIPPING_CENTS, self.currency)
        };

        let total = subtotal.try_add(&shipping).unwrap_or(subtotal);

        CartTotals {
            subtotal,
            shipping,
            total,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Price breakdown for a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartTotals {
    /// Sum of line prices before shipping.
    pub subtotal: Money,
    /// Flat shipping, zero for an empty cart.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}
