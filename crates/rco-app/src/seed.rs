//! The built-in seed catalog.
//!
//! Stands in for a real catalog source so a fresh app has something to
//! browse. Categories and brands are referenced by slug from the product
//! definitions below.

use rco_commerce::catalog::{Brand, Catalog, Product};
use rco_commerce::ids::{BrandId, CategoryId};
use rco_commerce::money::{Currency, Money};

struct SeedProduct {
    name: &'static str,
    price: f64,
    description: &'static str,
    category: &'static str,
    brand: &'static str,
    rating: f64,
    review_count: u32,
    stock: u32,
}

const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Stride Runner",
        price: 120.0,
        description: "Lightweight everyday running shoe.",
        category: "fashion",
        brand: "nike",
        rating: 4.6,
        review_count: 182,
        stock: 40,
    },
    SeedProduct {
        name: "Court Classic",
        price: 85.0,
        description: "Low-top court sneaker in full-grain leather.",
        category: "fashion",
        brand: "nike",
        rating: 4.3,
        review_count: 95,
        stock: 25,
    },
    SeedProduct {
        name: "Weekender Duffel",
        price: 200.0,
        description: "Water-resistant duffel with shoe compartment.",
        category: "fashion",
        brand: "nike",
        rating: 4.1,
        review_count: 41,
        stock: 12,
    },
    SeedProduct {
        name: "Volt ANC Headphones",
        price: 249.0,
        description: "Over-ear noise-cancelling headphones, 30h battery.",
        category: "electronics",
        brand: "volt",
        rating: 4.7,
        review_count: 320,
        stock: 18,
    },
    SeedProduct {
        name: "Volt Mini Speaker",
        price: 59.0,
        description: "Pocket-size waterproof speaker.",
        category: "electronics",
        brand: "volt",
        rating: 4.0,
        review_count: 77,
        stock: 60,
    },
    SeedProduct {
        name: "Aura Desk Lamp",
        price: 45.0,
        description: "Dimmable lamp with warm-to-cool range.",
        category: "home-goods",
        brand: "aura",
        rating: 4.4,
        review_count: 58,
        stock: 33,
    },
    SeedProduct {
        name: "Aura Throw Blanket",
        price: 35.0,
        description: "Knit cotton throw, machine washable.",
        category: "home-goods",
        brand: "aura",
        rating: 4.2,
        review_count: 24,
        stock: 50,
    },
    SeedProduct {
        name: "Summit Trail Watch",
        price: 179.0,
        description: "GPS watch with barometric altimeter.",
        category: "electronics",
        brand: "summit",
        rating: 4.5,
        review_count: 140,
        stock: 9,
    },
];

/// Build the seed catalog.
pub fn seed_catalog() -> Catalog {
    let mut catalog = Catalog::new();

    for (name, image) in [
        ("Fashion", "/img/categories/fashion.jpg"),
        ("Electronics", "/img/categories/electronics.jpg"),
        ("Home Goods", "/img/categories/home-goods.jpg"),
    ] {
        // Seed names are distinct, so the duplicate check cannot trip.
        let _ = catalog.add_category(name, image);
    }

    for (id, name) in [
        ("nike", "Nike"),
        ("volt", "Volt"),
        ("aura", "Aura"),
        ("summit", "Summit"),
    ] {
        catalog.add_brand(Brand::new(id, name));
    }

    for seed in SEED_PRODUCTS {
        let mut product = Product::new(
            seed.name,
            Money::from_decimal(seed.price, Currency::USD),
            CategoryId::new(seed.category),
            BrandId::new(seed.brand),
        )
        .with_description(seed.description)
        .with_stock(seed.stock)
        .with_image(format!(
            "/img/products/{}.jpg",
            seed.name.to_lowercase().replace(' ', "-")
        ));
        product.rating = seed.rating;
        product.review_count = seed.review_count;
        catalog.add_product(product);
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog_is_consistent() {
        let catalog = seed_catalog();
        assert_eq!(catalog.categories().len(), 3);
        assert_eq!(catalog.brands().len(), 4);
        assert_eq!(catalog.products().len(), SEED_PRODUCTS.len());

        // Every product references a real category and brand.
        for product in catalog.products() {
            assert!(catalog.category(&product.category).is_some());
            assert!(catalog.brand(&product.brand).is_some());
        }
    }
}
