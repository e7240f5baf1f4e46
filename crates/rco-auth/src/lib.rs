//! Simulated account registry for the RCO storefront.
//!
//! Sign-up, sign-in, email verification, and profile management over an
//! in-memory user registry, with a single session pointer. "Simulated"
//! means no real email is sent and no token infrastructure exists — the
//! verify operation stands in for a clicked email link — but credentials
//! are still hashed rather than stored in the clear.

mod account;
mod error;
mod password;
mod registry;

pub use account::{Account, AccountPatch};
pub use error::AuthError;
pub use password::{hash_password, verify_password};
pub use registry::AccountRegistry;
