//! Order types and the checkout transition.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::checkout::{Address, PaymentMethod};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;

/// Order status.
///
/// Only the creation transition is driven here; advancement past
/// `Processing` is display data set elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed and being prepared.
    #[default]
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A line in an order: the cart entry plus the price it was bought at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    /// Product purchased.
    pub product_id: ProductId,
    /// Quantity purchased.
    pub quantity: u32,
    /// Price at the time of purchase. Never recomputed, so later catalog
    /// price changes do not rewrite history.
    pub price: Money,
}

/// An immutable record of a completed checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier (`RCO-{timestamp}`).
    pub id: OrderId,
    /// Placement timestamp.
    pub date: DateTime<Utc>,
    /// Item snapshot taken from the cart.
    pub items: Vec<OrderItem>,
    /// Grand total charged: subtotal plus flat shipping.
    pub total: Money,
    /// Current status.
    pub status: OrderStatus,
    /// Shipping address used.
    pub shipping_address: Address,
    /// Payment method used.
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Create an order from the cart and clear the cart.
    ///
    /// Fails on an empty cart, leaving everything unchanged — which also
    /// makes a double-submitted checkout a no-op, since the first
    /// submission empties the cart. Cart entries whose product no longer
    /// resolves are snapshotted at a zero price, matching how the cart
    /// totals treat them.
    pub fn place(
        cart: &mut Cart,
        catalog: &Catalog,
        shipping_address: Address,
        payment_method: PaymentMethod,
    ) -> Result<Order, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let totals = cart.totals(catalog);
        let items = cart
            .items()
            .iter()
            .map(|item| OrderItem {
                product_id: item.product_id,
                quantity: item.quantity,
                price: catalog
                    .product(item.product_id)
                    .map(|p| p.price)
                    .unwrap_or_else(|| Money::zero(totals.total.currency)),
            })
            .collect();

        let order = Order {
            id: OrderId::generate(),
            date: Utc::now(),
            items,
            total: totals.total,
            status: OrderStatus::Processing,
            shipping_address,
            payment_method,
        };

        cart.clear();
        Ok(order)
    }

    /// Total item count.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Update the status (administrative/display path).
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }
}
