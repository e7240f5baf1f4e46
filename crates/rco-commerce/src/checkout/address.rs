//! Address types.

use crate::ids::AddressId;
use serde::{Deserialize, Serialize};

/// Kind of saved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AddressKind {
    #[default]
    Home,
    Work,
    Other,
}

impl AddressKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::Home => "Home",
            AddressKind::Work => "Work",
            AddressKind::Other => "Other",
        }
    }
}

/// A saved shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// Unique address identifier.
    pub id: AddressId,
    /// Address kind label.
    pub kind: AddressKind,
    /// Street line.
    pub street: String,
    /// City.
    pub city: String,
    /// Postal/ZIP code.
    pub zip: String,
    /// Whether this is the account's default address.
    pub is_default: bool,
}

impl Address {
    /// Create a new address with a fresh id.
    pub fn new(
        kind: AddressKind,
        street: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
    ) -> Self {
        Self {
            id: AddressId::generate(),
            kind,
            street: street.into(),
            city: city.into(),
            zip: zip.into(),
            is_default: false,
        }
    }

    /// Format as a single display line.
    pub fn one_line(&self) -> String {
        format!("{}, {} {}", self.street, self.city, self.zip)
    }

    /// Check the required fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.street.is_empty() && !self.city.is_empty() && !self.zip.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let addr = Address::new(AddressKind::Home, "123 Main St", "Springfield", "94102");
        assert!(addr.is_complete());
        assert!(!addr.is_default);
        assert_eq!(addr.one_line(), "123 Main St, Springfield 94102");
    }

    #[test]
    fn test_incomplete_address() {
        let addr = Address::new(AddressKind::Work, "", "Springfield", "94102");
        assert!(!addr.is_complete());
    }
}
