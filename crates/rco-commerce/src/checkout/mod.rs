//! Checkout module.
//!
//! Contains addresses, payment methods, and the immutable order records
//! created from a cart at checkout time.

mod address;
mod order;
mod payment;

pub use address::{Address, AddressKind};
pub use order::{Order, OrderItem, OrderStatus};
pub use payment::{PaymentKind, PaymentMethod};
