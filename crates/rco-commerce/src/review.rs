//! Customer reviews.
//!
//! Reviews written in the app live in a [`ReviewStore`] keyed by product
//! id, separate from the seed reviews embedded in catalog products. They
//! are append-only: a review is never edited or removed once posted.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId};

/// A single customer review.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Display name of the reviewer.
    pub user_name: String,
    /// Star rating, 1-5.
    pub rating: u8,
    /// Review body.
    pub comment: String,
    /// Creation timestamp.
    pub date: DateTime<Utc>,
}

impl Review {
    /// Create a review, validating the rating.
    pub fn new(
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        if !(1..=5).contains(&rating) {
            return Err(CommerceError::InvalidRating(rating));
        }
        Ok(Self {
            id: ReviewId::generate(),
            user_name: user_name.into(),
            rating,
            comment: comment.into(),
            date: Utc::now(),
        })
    }
}

/// Per-product review lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ReviewStore {
    by_product: BTreeMap<ProductId, Vec<Review>>,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a review to a product's list.
    pub fn add(&mut self, product_id: ProductId, review: Review) {
        self.by_product.entry(product_id).or_default().push(review);
    }

    /// Reviews posted for a product, oldest first. Empty when none exist.
    pub fn for_product(&self, product_id: ProductId) -> &[Review] {
        self.by_product
            .get(&product_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of reviews posted for a product.
    pub fn count(&self, product_id: ProductId) -> usize {
        self.for_product(product_id).len()
    }
}
