//! Newtype ids for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different id types,
//! e.g., passing a `ProductId` where a `CategoryId` is expected.
//!
//! Two families exist: slug-style string ids (categories, brands, order
//! numbers) and numeric ids assigned from the millisecond clock (products,
//! reviews, addresses, payment methods).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate slug-style string id newtypes.
macro_rules! define_slug_id {
    ($name:ident) => {
        /// A unique string identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create an id from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

/// Macro to generate numeric id newtypes assigned from the clock.
macro_rules! define_numeric_id {
    ($name:ident) => {
        /// A unique numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(u64);

        impl $name {
            /// Create an id from a raw value.
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Generate a fresh id from the millisecond clock.
            pub fn generate() -> Self {
                Self(next_timestamp_id())
            }

            /// Get the raw value.
            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

define_slug_id!(CategoryId);
define_slug_id!(BrandId);
define_slug_id!(OrderId);

define_numeric_id!(ProductId);
define_numeric_id!(ReviewId);
define_numeric_id!(AddressId);
define_numeric_id!(PaymentMethodId);

impl OrderId {
    /// Generate a fresh order id in the `RCO-{timestamp}` format.
    pub fn generate() -> Self {
        Self(format!("RCO-{}", next_timestamp_id()))
    }
}

/// Current Unix time in milliseconds.
pub fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Millisecond clock combined with a rotating counter, so ids stay unique
/// within a process even when generated in the same millisecond.
fn next_timestamp_id() -> u64 {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);
    now_millis() * 1000 + (counter % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_id_creation() {
        let id = CategoryId::new("home-goods");
        assert_eq!(id.as_str(), "home-goods");
        assert_eq!(format!("{}", id), "home-goods");
    }

    #[test]
    fn test_slug_id_from_str() {
        let id: BrandId = "nike".into();
        assert_eq!(id.as_str(), "nike");
    }

    #[test]
    fn test_numeric_id_generation_is_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_order_id_format() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("RCO-"));
    }

    #[test]
    fn test_numeric_id_equality() {
        assert_eq!(ProductId::new(42), ProductId::new(42));
        assert_ne!(ProductId::new(42), ProductId::new(43));
    }
}
