//! Flat key-value persistence for the RCO storefront.
//!
//! Provides a simple, ergonomic API for persisting application state slices
//! with automatic JSON serialization. Two backends are available: an
//! in-memory map (tests, ephemeral sessions) and a directory of JSON files
//! (one file per key) for persistence across process restarts.
//!
//! Reads are forgiving: a missing key, an unreadable file, or corrupt JSON
//! all surface as "no prior data" so a store can always rehydrate to a
//! usable (possibly empty) state.
//!
//! # Example
//!
//! ```rust,ignore
//! use rco_store::Store;
//!
//! let mut store = Store::open("./data")?;
//!
//! // Store a value
//! store.set("wishlist", &vec![101, 102])?;
//!
//! // Retrieve a value (None if absent or corrupt)
//! let wishlist: Option<Vec<u64>> = store.get("wishlist");
//!
//! // Delete a value
//! store.remove("wishlist")?;
//! ```

mod backend;
mod error;
mod kv;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use error::StoreError;
pub use kv::Store;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Store, StoreError};
}
