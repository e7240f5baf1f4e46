//! Search suggestions for the listing page's search box.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::ids::{BrandId, CategoryId, ProductId};

/// Caps per suggestion group.
const MAX_PRODUCT_SUGGESTIONS: usize = 3;
const MAX_CATEGORY_SUGGESTIONS: usize = 2;
const MAX_BRAND_SUGGESTIONS: usize = 2;

/// A single suggestion, grouped by kind in the dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Suggestion {
    Product { id: ProductId, name: String },
    Category { id: CategoryId, name: String },
    Brand { id: BrandId, name: String },
}

impl Suggestion {
    /// Display name for the dropdown row.
    pub fn name(&self) -> &str {
        match self {
            Suggestion::Product { name, .. }
            | Suggestion::Category { name, .. }
            | Suggestion::Brand { name, .. } => name,
        }
    }
}

/// Suggest products, categories, and brands matching a partial query.
///
/// Matching is a case-insensitive name substring check. Queries of one
/// character or less produce nothing. Groups come back in a fixed order:
/// products, then categories, then brands.
pub fn suggest(catalog: &Catalog, query: &str) -> Vec<Suggestion> {
    let query = query.trim();
    if query.chars().count() <= 1 {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    let mut suggestions = Vec::new();

    suggestions.extend(
        catalog
            .products()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .take(MAX_PRODUCT_SUGGESTIONS)
            .map(|p| Suggestion::Product {
                id: p.id,
                name: p.name.clone(),
            }),
    );

    suggestions.extend(
        catalog
            .categories()
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .take(MAX_CATEGORY_SUGGESTIONS)
            .map(|c| Suggestion::Category {
                id: c.id.clone(),
                name: c.name.clone(),
            }),
    );

    suggestions.extend(
        catalog
            .brands()
            .iter()
            .filter(|b| b.name.to_lowercase().contains(&needle))
            .take(MAX_BRAND_SUGGESTIONS)
            .map(|b| Suggestion::Brand {
                id: b.id.clone(),
                name: b.name.clone(),
            }),
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Brand, Product};
    use crate::money::{Currency, Money};

    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let fashion = catalog.add_category("Fashion", "/f.jpg").unwrap();
        catalog.add_brand(Brand::new("nike", "Nike"));
        for name in ["Nike Shoe", "Nike Bag", "Nike Cap", "Nike Sock", "Plain Tee"] {
            catalog.add_product(Product::new(
                name,
                Money::from_decimal(25.0, Currency::USD),
                fashion.clone(),
                BrandId::new("nike"),
            ));
        }
        catalog
    }

    #[test]
    fn test_short_query_yields_nothing() {
        let catalog = seeded_catalog();
        assert!(suggest(&catalog, "").is_empty());
        assert!(suggest(&catalog, "n").is_empty());
    }

    #[test]
    fn test_products_are_capped_at_three() {
        let catalog = seeded_catalog();
        let suggestions = suggest(&catalog, "nike");
        let products = suggestions
            .iter()
            .filter(|s| matches!(s, Suggestion::Product { .. }))
            .count();
        assert_eq!(products, 3);
    }

    #[test]
    fn test_group_order_and_brand_match() {
        let catalog = seeded_catalog();
        let suggestions = suggest(&catalog, "nike");

        // Products first, then the brand row.
        assert!(matches!(suggestions.first(), Some(Suggestion::Product { .. })));
        assert!(suggestions
            .iter()
            .any(|s| matches!(s, Suggestion::Brand { .. })));
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let catalog = seeded_catalog();
        let suggestions = suggest(&catalog, "FASH");
        assert!(suggestions
            .iter()
            .any(|s| matches!(s, Suggestion::Category { .. })));
    }
}
