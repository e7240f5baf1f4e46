//! The filter/sort engine and search suggestions.
//!
//! Pure functions over the catalog: given filter criteria and a sort key,
//! produce an ordered product list. Used by the product-listing page and
//! the search-suggestion dropdown.

mod filter;
mod query;
mod suggest;

pub use filter::{search, CategoryScope, ProductQuery, SortKey};
pub use query::{parse_price_terms, ParsedQuery};
pub use suggest::{suggest, Suggestion};
