//! Composition root for the RCO storefront.
//!
//! [`AppState`] owns every state container — catalog, cart, wishlist,
//! reviews, account registry — plus the navigation controller and the
//! persistence handle. Views receive slices of this state and call back
//! into its mutation methods; there are no module-level globals, and the
//! single `&mut self` surface makes every transition single-writer by
//! construction.
//!
//! Three slices are mirrored to durable storage on every change and
//! rehydrated at startup: the user registry (`users`), the wishlist
//! (`wishlist`), and the active session (`currentUserEmail`).

mod error;
mod nav;
mod seed;
mod state;

pub use error::AppError;
pub use nav::{AuthPrompt, Navigator, Page, PageContext};
pub use seed::seed_catalog;
pub use state::AppState;
