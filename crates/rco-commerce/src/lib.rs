//! Commerce domain types and logic for the RCO storefront.
//!
//! This crate holds the state-machine core of the storefront:
//!
//! - **Catalog**: products, categories, brands, admin CRUD with cascades
//! - **Search**: the filter/sort engine and search suggestions
//! - **Cart**: quantity map with totals and the buy-now shortcut
//! - **Wishlist**: a persisted saved-for-later set of product ids
//! - **Reviews**: append-only per-product review lists
//! - **Checkout**: immutable order records snapshotted from the cart
//!
//! Everything is synchronous and in-memory; persistence and composition
//! live in the `rco-app` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use rco_commerce::prelude::*;
//!
//! let mut catalog = Catalog::new();
//! let fashion = catalog.add_category("Fashion", "/img/fashion.jpg")?;
//! let shoe = catalog.add_product(Product::new(
//!     "Runner Shoe",
//!     Money::from_decimal(120.0, Currency::USD),
//!     fashion.clone(),
//!     BrandId::new("nike"),
//! ));
//!
//! let mut cart = Cart::new();
//! cart.add(&catalog, shoe, 2);
//! let totals = cart.totals(&catalog);
//! println!("Total: {}", totals.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod review;
pub mod search;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{slugify, Brand, Catalog, Category, Product};

    // Cart
    pub use crate::cart::{Cart, CartItem, CartTotals, FLAT_SHIPPING_CENTS};

    // Checkout
    pub use crate::checkout::{
        Address, AddressKind, Order, OrderItem, OrderStatus, PaymentKind, PaymentMethod,
    };

    // Search
    pub use crate::search::{search, suggest, CategoryScope, ProductQuery, SortKey, Suggestion};

    // Reviews and wishlist
    pub use crate::review::{Review, ReviewStore};
    pub use crate::wishlist::Wishlist;
}
