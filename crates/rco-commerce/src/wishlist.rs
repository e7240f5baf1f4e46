//! The wishlist: a saved-for-later set of product ids.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Insertion-ordered set of product ids with toggle semantics.
///
/// Serializes as a plain JSON array of ids, which is also the shape the
/// persistence layer stores under the `wishlist` key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership for a product id.
    ///
    /// Returns `true` when the id is present after the call. Toggling
    /// twice restores the original set.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(index) = self.ids.iter().position(|&p| p == id) {
            self.ids.remove(index);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    /// Check membership.
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Remove an id if present (product-deletion cascade).
    pub fn remove(&mut self, id: ProductId) {
        self.ids.retain(|&p| p != id);
    }

    /// Saved ids in insertion order.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new(7);

        assert!(wishlist.toggle(id));
        assert!(wishlist.contains(id));

        assert!(!wishlist.toggle(id));
        assert!(!wishlist.contains(id));
    }

    #[test]
    fn test_double_toggle_restores_original_set() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(1));
        wishlist.toggle(ProductId::new(2));
        let before = wishlist.clone();

        wishlist.toggle(ProductId::new(3));
        wishlist.toggle(ProductId::new(3));

        assert_eq!(wishlist, before);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(3));
        wishlist.toggle(ProductId::new(1));
        wishlist.toggle(ProductId::new(2));

        let ids: Vec<u64> = wishlist.ids().iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_serializes_as_id_array() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(101));
        wishlist.toggle(ProductId::new(102));

        let json = serde_json::to_string(&wishlist).unwrap();
        assert_eq!(json, "[101,102]");

        let back: Wishlist = serde_json::from_str(&json).unwrap();
        assert_eq!(back, wishlist);
    }
}
