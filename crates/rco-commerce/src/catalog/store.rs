//! The catalog container.

use crate::catalog::{slugify, Brand, Category, Product};
use crate::error::CommerceError;
use crate::ids::{BrandId, CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// Insertion-ordered collection of products, categories, and brands.
///
/// Insertion order is significant: the default "featured" sort of the
/// search engine returns products exactly in this order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
    brands: Vec<Brand>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in insertion order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All brands, in insertion order.
    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Look up a brand by id.
    pub fn brand(&self, id: &BrandId) -> Option<&Brand> {
        self.brands.iter().find(|b| &b.id == id)
    }

    /// Display name of a category, empty string when the id is dangling.
    pub fn category_name(&self, id: &CategoryId) -> &str {
        self.category(id).map(|c| c.name.as_str()).unwrap_or("")
    }

    /// Display name of a brand, empty string when the id is dangling.
    pub fn brand_name(&self, id: &BrandId) -> &str {
        self.brand(id).map(|b| b.name.as_str()).unwrap_or("")
    }

    /// Add a product and return its id.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id;
        self.products.push(product);
        id
    }

    /// Replace the product with the same id.
    pub fn update_product(&mut self, product: Product) -> Result<(), CommerceError> {
        match self.products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product;
                Ok(())
            }
            None => Err(CommerceError::ProductNotFound(product.id)),
        }
    }

    /// Remove a product. Returns the removed product, `None` if absent.
    ///
    /// Cart and wishlist entries referencing the product are owned by the
    /// composition root, which cascades their removal.
    pub fn remove_product(&mut self, id: ProductId) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Add a category, deriving its id from the name.
    ///
    /// Rejected when the derived slug is already taken, so "Home Goods"
    /// after "home-goods" is a duplicate.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Result<CategoryId, CommerceError> {
        let name = name.into();
        let id = slugify(&name);
        if self.category(&id).is_some() {
            return Err(CommerceError::DuplicateCategory(id));
        }
        self.categories.push(Category {
            id: id.clone(),
            name,
            image_url: image_url.into(),
        });
        Ok(id)
    }

    /// Rename a category. The id stays the slug of the original name.
    pub fn rename_category(
        &mut self,
        id: &CategoryId,
        new_name: impl Into<String>,
    ) -> Result<(), CommerceError> {
        match self.categories.iter_mut().find(|c| &c.id == id) {
            Some(category) => {
                category.name = new_name.into();
                Ok(())
            }
            None => Err(CommerceError::CategoryNotFound(id.clone())),
        }
    }

    /// Remove a category and every product in it.
    ///
    /// Returns the ids of the removed products so the caller can cascade
    /// cart and wishlist cleanup. An absent category removes nothing.
    pub fn remove_category(&mut self, id: &CategoryId) -> Vec<ProductId> {
        let removed: Vec<ProductId> = self
            .products
            .iter()
            .filter(|p| &p.category == id)
            .map(|p| p.id)
            .collect();
        self.products.retain(|p| &p.category != id);
        self.categories.retain(|c| &c.id != id);
        removed
    }

    /// Add a brand (seed loading only).
    pub fn add_brand(&mut self, brand: Brand) -> BrandId {
        let id = brand.id.clone();
        self.brands.push(brand);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog_with_category() -> (Catalog, CategoryId) {
        let mut catalog = Catalog::new();
        let id = catalog.add_category("Fashion", "/img/fashion.jpg").unwrap();
        catalog.add_brand(Brand::new("nike", "Nike"));
        (catalog, id)
    }

    fn sample_product(catalog: &mut Catalog, category: &CategoryId, name: &str) -> ProductId {
        catalog.add_product(Product::new(
            name,
            Money::from_decimal(50.0, Currency::USD),
            category.clone(),
            BrandId::new("nike"),
        ))
    }

    #[test]
    fn test_add_and_lookup_product() {
        let (mut catalog, fashion) = catalog_with_category();
        let id = sample_product(&mut catalog, &fashion, "Shoe");

        assert_eq!(catalog.product(id).unwrap().name, "Shoe");
        assert!(catalog.product(ProductId::new(0)).is_none());
    }

    #[test]
    fn test_update_product_replaces_fields() {
        let (mut catalog, fashion) = catalog_with_category();
        let id = sample_product(&mut catalog, &fashion, "Shoe");

        let mut updated = catalog.product(id).unwrap().clone();
        updated.price = Money::from_decimal(75.0, Currency::USD);
        catalog.update_product(updated).unwrap();

        assert_eq!(catalog.product(id).unwrap().price.amount_cents, 7500);
    }

    #[test]
    fn test_update_unknown_product_fails() {
        let (mut catalog, fashion) = catalog_with_category();
        let ghost = Product::new(
            "Ghost",
            Money::zero(Currency::USD),
            fashion,
            BrandId::new("nike"),
        );
        assert!(matches!(
            catalog.update_product(ghost),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_category_rejected() {
        let (mut catalog, _) = catalog_with_category();
        let err = catalog.add_category("fashion", "/other.jpg").unwrap_err();
        assert!(matches!(err, CommerceError::DuplicateCategory(_)));
        assert_eq!(catalog.categories().len(), 1);
    }

    #[test]
    fn test_near_duplicate_category_rejected() {
        let mut catalog = Catalog::new();
        catalog.add_category("Home Goods", "/a.jpg").unwrap();
        assert!(catalog.add_category("home goods", "/b.jpg").is_err());
    }

    #[test]
    fn test_remove_category_cascades_to_products() {
        let (mut catalog, fashion) = catalog_with_category();
        let electronics = catalog.add_category("Electronics", "/e.jpg").unwrap();
        let shoe = sample_product(&mut catalog, &fashion, "Shoe");
        let bag = sample_product(&mut catalog, &fashion, "Bag");
        let tv = sample_product(&mut catalog, &electronics, "TV");

        let removed = catalog.remove_category(&fashion);

        assert_eq!(removed, vec![shoe, bag]);
        assert!(catalog.category(&fashion).is_none());
        assert!(catalog.product(shoe).is_none());
        assert!(catalog.product(tv).is_some());
    }

    #[test]
    fn test_rename_category_keeps_id() {
        let (mut catalog, fashion) = catalog_with_category();
        catalog.rename_category(&fashion, "Apparel").unwrap();

        let category = catalog.category(&fashion).unwrap();
        assert_eq!(category.name, "Apparel");
        assert_eq!(category.id.as_str(), "fashion");
    }
}
