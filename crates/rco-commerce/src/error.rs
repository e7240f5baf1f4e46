//! Commerce error types.

use crate::ids::{CategoryId, OrderId, ProductId};
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Validation failures carry the human-readable message the presentation
/// layer shows verbatim; not-found cases carry the id that failed to
/// resolve.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(CategoryId),

    /// A category whose name slugs to an existing id was submitted.
    #[error("A category with this name already exists.")]
    DuplicateCategory(CategoryId),

    /// Order not found on the current account.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Checkout was submitted with an empty cart.
    #[error("Your cart is empty.")]
    EmptyCart,

    /// Review rating outside the 1-5 range.
    #[error("Rating must be between 1 and 5.")]
    InvalidRating(u8),

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch between money values.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}

impl CommerceError {
    /// Check if this is a validation failure (bad input, no state change).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::DuplicateCategory(_)
                | CommerceError::EmptyCart
                | CommerceError::InvalidRating(_)
        )
    }

    /// Check if this is a not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommerceError::ProductNotFound(_)
                | CommerceError::CategoryNotFound(_)
                | CommerceError::OrderNotFound(_)
        )
    }
}
