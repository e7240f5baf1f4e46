//! Product types.

use crate::ids::{BrandId, CategoryId, ProductId};
use crate::money::Money;
use crate::review::Review;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier, immutable once created.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Short description for listings.
    pub description: String,
    /// Full description for the detail view.
    pub long_description: String,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Brand this product belongs to.
    pub brand: BrandId,
    /// Ordered image URLs (may be empty).
    pub image_urls: Vec<String>,
    /// Optional video URL.
    pub video_url: Option<String>,
    /// Display rating, 0-5.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Seed reviews shipped with the catalog.
    pub reviews: Vec<Review>,
    /// Units in stock.
    pub stock_quantity: u32,
}

impl Product {
    /// Create a new product with a freshly assigned id.
    ///
    /// Admin-created products start unrated with no reviews; descriptions,
    /// media, and stock are filled in afterwards.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        category: CategoryId,
        brand: BrandId,
    ) -> Self {
        Self {
            id: ProductId::generate(),
            name: name.into(),
            price,
            description: String::new(),
            long_description: String::new(),
            category,
            brand,
            image_urls: Vec::new(),
            video_url: None,
            rating: 0.0,
            review_count: 0,
            reviews: Vec::new(),
            stock_quantity: 0,
        }
    }

    /// Set the listing description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the long-form description.
    pub fn with_long_description(mut self, long_description: impl Into<String>) -> Self {
        self.long_description = long_description.into();
        self
    }

    /// Set the stock level.
    pub fn with_stock(mut self, quantity: u32) -> Self {
        self.stock_quantity = quantity;
        self
    }

    /// Add an image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_urls.push(url.into());
        self
    }

    /// Check if any units are in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// First image URL, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.image_urls.first().map(String::as_str)
    }
}
