//! Product filtering and sorting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::catalog::{Catalog, Product};
use crate::ids::{BrandId, CategoryId};
use crate::money::{Currency, Money};
use crate::search::query::parse_price_terms;

/// Sort keys for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortKey {
    /// Catalog insertion order, unchanged.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Name A-Z.
    NameAsc,
    /// Name Z-A.
    NameDesc,
    /// Highest rated first.
    RatingDesc,
    /// Most reviewed first.
    BestSelling,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::RatingDesc => "rating-desc",
            SortKey::BestSelling => "best-selling",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "featured" => Some(SortKey::Featured),
            "price-asc" => Some(SortKey::PriceAsc),
            "price-desc" => Some(SortKey::PriceDesc),
            "name-asc" => Some(SortKey::NameAsc),
            "name-desc" => Some(SortKey::NameDesc),
            "rating-desc" => Some(SortKey::RatingDesc),
            "best-selling" => Some(SortKey::BestSelling),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A-Z",
            SortKey::NameDesc => "Name: Z-A",
            SortKey::RatingDesc => "Highest Rated",
            SortKey::BestSelling => "Best Selling",
        }
    }
}

/// Category context the caller navigated in with, distinct from the
/// selected-categories checkbox set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryScope {
    /// No scope constraint.
    #[default]
    All,
    /// Products must be in exactly this category.
    In(CategoryId),
}

impl CategoryScope {
    fn allows(&self, category: &CategoryId) -> bool {
        match self {
            CategoryScope::All => true,
            CategoryScope::In(scope) => scope == category,
        }
    }
}

/// Filter criteria for a product listing.
///
/// Empty selection sets mean "no constraint"; with nothing set, the
/// engine returns every product in catalog order.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    /// Free-text query; price terms are parsed out before matching.
    pub text: String,
    /// Selected category checkboxes.
    pub categories: Vec<CategoryId>,
    /// Selected brand checkboxes.
    pub brands: Vec<BrandId>,
    /// Price-slider maximum.
    pub max_price: Option<Money>,
    /// Category context supplied by navigation.
    pub scope: CategoryScope,
    /// Result ordering.
    pub sort: SortKey,
}

impl ProductQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Add a category to the selected set.
    pub fn with_category(mut self, id: impl Into<CategoryId>) -> Self {
        self.categories.push(id.into());
        self
    }

    /// Add a brand to the selected set.
    pub fn with_brand(mut self, id: impl Into<BrandId>) -> Self {
        self.brands.push(id.into());
        self
    }

    /// Set the price-slider maximum.
    pub fn with_max_price(mut self, max: Money) -> Self {
        self.max_price = Some(max);
        self
    }

    /// Set the navigation category scope.
    pub fn with_scope(mut self, scope: CategoryScope) -> Self {
        self.scope = scope;
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Run a query against the catalog.
///
/// Filtering is a single pass; sorting is stable, so products with equal
/// keys keep their relative catalog order. With no criteria active this
/// is the identity: every product, in original order.
pub fn search<'a>(catalog: &'a Catalog, query: &ProductQuery) -> Vec<&'a Product> {
    let parsed = parse_price_terms(&query.text, Currency::USD);
    let needle = parsed.text.as_str();

    let mut results: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|product| {
            let in_scope = query.scope.allows(&product.category);
            let in_categories =
                query.categories.is_empty() || query.categories.contains(&product.category);
            let in_brands = query.brands.is_empty() || query.brands.contains(&product.brand);
            let under_slider = query
                .max_price
                .map(|max| product.price.amount_cents <= max.amount_cents)
                .unwrap_or(true);
            let in_window = parsed.price_in_window(product.price);
            let text_match = needle.is_empty()
                || product.name.to_lowercase().contains(needle)
                || product.description.to_lowercase().contains(needle)
                || catalog.brand_name(&product.brand).to_lowercase().contains(needle)
                || catalog
                    .category_name(&product.category)
                    .to_lowercase()
                    .contains(needle);

            in_scope && in_categories && in_brands && under_slider && in_window && text_match
        })
        .collect();

    match query.sort {
        SortKey::Featured => {}
        SortKey::PriceAsc => {
            results.sort_by_key(|p| p.price.amount_cents);
        }
        SortKey::PriceDesc => {
            results.sort_by_key(|p| std::cmp::Reverse(p.price.amount_cents));
        }
        SortKey::NameAsc => {
            results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        SortKey::NameDesc => {
            results.sort_by(|a, b| b.name.to_lowercase().cmp(&a.name.to_lowercase()));
        }
        SortKey::RatingDesc => {
            results.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            });
        }
        SortKey::BestSelling => {
            results.sort_by_key(|p| std::cmp::Reverse(p.review_count));
        }
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Brand;
    use crate::ids::ProductId;

    fn seeded_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        let fashion = catalog.add_category("Fashion", "/f.jpg").unwrap();
        let electronics = catalog.add_category("Electronics", "/e.jpg").unwrap();
        catalog.add_brand(Brand::new("nike", "Nike"));
        catalog.add_brand(Brand::new("volt", "Volt"));

        let mut shoe = Product::new(
            "Nike Shoe",
            Money::from_decimal(120.0, Currency::USD),
            fashion.clone(),
            BrandId::new("nike"),
        );
        shoe.rating = 4.5;
        shoe.review_count = 20;
        catalog.add_product(shoe);

        let mut bag = Product::new(
            "Nike Bag",
            Money::from_decimal(200.0, Currency::USD),
            fashion,
            BrandId::new("nike"),
        );
        bag.rating = 4.0;
        bag.review_count = 35;
        catalog.add_product(bag);

        let mut speaker = Product::new(
            "Volt Speaker",
            Money::from_decimal(80.0, Currency::USD),
            electronics,
            BrandId::new("volt"),
        );
        speaker.rating = 3.5;
        speaker.review_count = 5;
        catalog.add_product(speaker);

        catalog
    }

    fn names(results: &[&Product]) -> Vec<String> {
        results.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_no_criteria_is_identity() {
        let catalog = seeded_catalog();
        let results = search(&catalog, &ProductQuery::new());
        assert_eq!(names(&results), vec!["Nike Shoe", "Nike Bag", "Volt Speaker"]);
    }

    #[test]
    fn test_text_with_price_term() {
        let catalog = seeded_catalog();
        let query = ProductQuery::new().with_text("nike under $150");
        let results = search(&catalog, &query);
        assert_eq!(names(&results), vec!["Nike Shoe"]);
    }

    #[test]
    fn test_text_matches_brand_and_category_names() {
        let catalog = seeded_catalog();

        let by_brand = search(&catalog, &ProductQuery::new().with_text("volt"));
        assert_eq!(names(&by_brand), vec!["Volt Speaker"]);

        let by_category = search(&catalog, &ProductQuery::new().with_text("electronics"));
        assert_eq!(names(&by_category), vec!["Volt Speaker"]);
    }

    #[test]
    fn test_category_checkboxes() {
        let catalog = seeded_catalog();
        let query = ProductQuery::new().with_category("electronics");
        assert_eq!(names(&search(&catalog, &query)), vec!["Volt Speaker"]);
    }

    #[test]
    fn test_scope_is_exact() {
        let catalog = seeded_catalog();
        let query = ProductQuery::new().with_scope(CategoryScope::In(CategoryId::new("fashion")));
        assert_eq!(names(&search(&catalog, &query)), vec!["Nike Shoe", "Nike Bag"]);
    }

    #[test]
    fn test_price_slider() {
        let catalog = seeded_catalog();
        let query = ProductQuery::new().with_max_price(Money::from_decimal(100.0, Currency::USD));
        assert_eq!(names(&search(&catalog, &query)), vec!["Volt Speaker"]);
    }

    #[test]
    fn test_sort_price_asc() {
        let catalog = seeded_catalog();
        let query = ProductQuery::new().with_sort(SortKey::PriceAsc);
        assert_eq!(
            names(&search(&catalog, &query)),
            vec!["Volt Speaker", "Nike Shoe", "Nike Bag"]
        );
    }

    #[test]
    fn test_sort_name_desc() {
        let catalog = seeded_catalog();
        let query = ProductQuery::new().with_sort(SortKey::NameDesc);
        assert_eq!(
            names(&search(&catalog, &query)),
            vec!["Volt Speaker", "Nike Shoe", "Nike Bag"]
        );
    }

    #[test]
    fn test_sort_best_selling() {
        let catalog = seeded_catalog();
        let query = ProductQuery::new().with_sort(SortKey::BestSelling);
        assert_eq!(
            names(&search(&catalog, &query)),
            vec!["Nike Bag", "Nike Shoe", "Volt Speaker"]
        );
    }

    #[test]
    fn test_stable_sort_keeps_catalog_order_on_ties() {
        let mut catalog = Catalog::new();
        let fashion = catalog.add_category("Fashion", "/f.jpg").unwrap();
        catalog.add_brand(Brand::new("nike", "Nike"));
        for name in ["First", "Second", "Third"] {
            catalog.add_product(Product::new(
                name,
                Money::from_decimal(10.0, Currency::USD),
                fashion.clone(),
                BrandId::new("nike"),
            ));
        }

        let query = ProductQuery::new().with_sort(SortKey::PriceAsc);
        assert_eq!(names(&search(&catalog, &query)), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_sort_key_strings() {
        assert_eq!(SortKey::from_str("price-asc"), Some(SortKey::PriceAsc));
        assert_eq!(SortKey::PriceAsc.as_str(), "price-asc");
        assert_eq!(SortKey::from_str("bogus"), None);
        assert_eq!(SortKey::default(), SortKey::Featured);
    }

    #[test]
    fn test_deleted_category_filter_is_empty() {
        let mut catalog = seeded_catalog();
        let fashion = CategoryId::new("fashion");
        let removed = catalog.remove_category(&fashion);
        assert_eq!(removed.len(), 2);

        let query = ProductQuery::new().with_category(fashion);
        assert!(search(&catalog, &query).is_empty());
    }

    #[test]
    fn test_unknown_ids_match_nothing() {
        let catalog = seeded_catalog();
        let query = ProductQuery::new().with_category("no-such-category");
        assert!(search(&catalog, &query).is_empty());
        assert!(catalog.product(ProductId::new(42)).is_none());
    }
}
