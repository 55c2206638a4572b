//! Search suggestion projection.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A read-only projection of a catalog entry shown in the suggestion panel.
///
/// Field names follow the suggestion endpoint's camelCase JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductSuggestion {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_best_seller: Option<bool>,
}

impl ProductSuggestion {
    /// Case-insensitive substring match on name and category.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains(needle))
    }

    /// Formatted regular price.
    pub fn price_label(&self) -> String {
        Money::from_decimal(self.price, Currency::PKR).display()
    }

    /// Formatted sale price, if any.
    pub fn sale_price_label(&self) -> Option<String> {
        self.sale_price
            .map(|p| Money::from_decimal(p, Currency::PKR).display())
    }
}
