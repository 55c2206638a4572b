//! Catalog product records.

use crate::catalog::ProductSuggestion;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogProduct {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Localised (Urdu) display name.
    pub name_ur: Option<String>,
    /// Current price.
    pub price: Money,
    /// Previous price, shown struck through.
    pub old_price: Option<Money>,
    /// Image URL.
    pub image: Option<String>,
    /// Category label (e.g., "Oils & Ghee").
    pub category: Option<String>,
    /// Average rating out of five.
    pub rating: Option<f32>,
    /// Flagged as a best seller.
    #[serde(default)]
    pub is_best_seller: bool,
    /// Flagged as a new arrival.
    #[serde(default)]
    pub is_new: bool,
}

impl CatalogProduct {
    /// Create a product with only the required fields.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            name_ur: None,
            price,
            old_price: None,
            image: None,
            category: None,
            rating: None,
            is_best_seller: false,
            is_new: false,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_old_price(mut self, old_price: Money) -> Self {
        self.old_price = Some(old_price);
        self
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn best_seller(mut self) -> Self {
        self.is_best_seller = true;
        self
    }

    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// URL slug: lower-cased name with whitespace runs replaced by `-`.
    pub fn slug(&self) -> String {
        self.name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Short badges shown on product cards.
    pub fn card_badges(&self) -> Vec<String> {
        vec![
            self.category.clone().unwrap_or_else(|| "General".to_string()),
            self.rating
                .map(|r| format!("{r}\u{2605}"))
                .unwrap_or_else(|| "New".to_string()),
            "Premium".to_string(),
        ]
    }

    /// Project this product into a search suggestion.
    pub fn to_suggestion(&self) -> ProductSuggestion {
        ProductSuggestion {
            id: self.id.clone(),
            name: self.name.clone(),
            slug: self.slug(),
            price: self.price.to_decimal(),
            sale_price: self.old_price.map(|p| p.to_decimal()),
            image: self.image.clone(),
            category: self.category.clone(),
            rating: self.rating,
            is_best_seller: Some(self.is_best_seller),
        }
    }
}

/// Look up a product by id.
pub fn find_product<'a>(
    products: &'a [CatalogProduct],
    id: &str,
) -> Result<&'a CatalogProduct, CommerceError> {
    products
        .iter()
        .find(|p| p.id.as_str() == id)
        .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn almond_oil() -> CatalogProduct {
        CatalogProduct::new("1", "Pure  Almond Oil", Money::from_decimal(1250.0, Currency::PKR))
            .with_category("Oils & Ghee")
            .with_old_price(Money::from_decimal(1500.0, Currency::PKR))
            .with_rating(4.5)
    }

    #[test]
    fn test_slug_collapses_whitespace() {
        assert_eq!(almond_oil().slug(), "pure-almond-oil");
    }

    #[test]
    fn test_to_suggestion() {
        let suggestion = almond_oil().to_suggestion();
        assert_eq!(suggestion.id.as_str(), "1");
        assert_eq!(suggestion.slug, "pure-almond-oil");
        assert_eq!(suggestion.price, 1250.0);
        assert_eq!(suggestion.sale_price, Some(1500.0));
        assert_eq!(suggestion.category.as_deref(), Some("Oils & Ghee"));
        assert_eq!(suggestion.is_best_seller, Some(false));
    }

    #[test]
    fn test_card_badges() {
        let badges = almond_oil().card_badges();
        assert_eq!(badges, vec!["Oils & Ghee", "4.5\u{2605}", "Premium"]);

        let plain = CatalogProduct::new("2", "Soap", Money::zero(Currency::PKR));
        assert_eq!(plain.card_badges(), vec!["General", "New", "Premium"]);
    }

    #[test]
    fn test_find_product() {
        let products = vec![almond_oil()];
        assert!(find_product(&products, "1").is_ok());
        assert_eq!(
            find_product(&products, "99"),
            Err(CommerceError::ProductNotFound("99".to_string()))
        );
    }
}
