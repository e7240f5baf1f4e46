//! Category types.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique identifier, a slug derived from the name at creation time.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Category tile image URL.
    pub image_url: String,
}

impl Category {
    /// Create a category, deriving its id from the name.
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: slugify(&name),
            name,
            image_url: image_url.into(),
        }
    }
}

/// Derive a category id from its name: lowercase, whitespace runs become a
/// single hyphen. Deterministic, so near-duplicate names ("Home Goods",
/// "home-goods") collide and must be rejected by the caller.
pub fn slugify(name: &str) -> CategoryId {
    let slug = name
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    CategoryId::new(slug)
}
