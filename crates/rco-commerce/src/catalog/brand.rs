//! Brand types.
//!
//! Brands are read-only seed data; there is no brand CRUD.

use crate::ids::BrandId;
use serde::{Deserialize, Serialize};

/// A product brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Brand {
    /// Unique identifier.
    pub id: BrandId,
    /// Display name.
    pub name: String,
}

impl Brand {
    pub fn new(id: impl Into<BrandId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
