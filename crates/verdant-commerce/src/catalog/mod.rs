//! Product catalog module.
//!
//! Contains catalog products, the suggestion projection used by search, and
//! the home-page tab filters.

mod product;
mod suggestion;
mod tabs;

pub use product::{find_product, CatalogProduct};
pub use suggestion::ProductSuggestion;
pub use tabs::{category_summaries, CategorySummary, HomeTab};
