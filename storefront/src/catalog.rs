//! In-memory product catalog.

use std::sync::Arc;

use verdant_commerce::catalog::{CatalogProduct, ProductSuggestion};
use verdant_commerce::money::{Currency, Money};

/// Shared catalog, provided as context.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[CatalogProduct]>,
}

impl Catalog {
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self {
            products: products.into(),
        }
    }

    /// The bundled demo assortment.
    pub fn demo() -> Self {
        Self::new(demo_products())
    }

    pub fn products(&self) -> &[CatalogProduct] {
        &self.products
    }

    /// Search suggestion projections, in catalog order.
    pub fn suggestions(&self) -> Vec<ProductSuggestion> {
        self.products.iter().map(CatalogProduct::to_suggestion).collect()
    }

    /// Products for the listing page's `?search=` and `?category=` parameters.
    ///
    /// Search uses the same matching as the suggestion panel; category is an
    /// exact label match.
    pub fn listing(&self, search: Option<&str>, category: Option<&str>) -> Vec<CatalogProduct> {
        let needle = search.map(|s| s.trim().to_lowercase()).filter(|s| !s.is_empty());
        self.products
            .iter()
            .filter(|p| match category {
                Some(c) => p.category.as_deref() == Some(c),
                None => true,
            })
            .filter(|p| match &needle {
                Some(needle) => p.to_suggestion().matches(needle),
                None => true,
            })
            .cloned()
            .collect()
    }
}

fn rupees(amount: f64) -> Money {
    Money::from_decimal(amount, Currency::PKR)
}

fn demo_products() -> Vec<CatalogProduct> {
    vec![
        CatalogProduct::new("1", "Cold Pressed Olive Oil", rupees(2450.0))
            .with_category("Oils & Ghee")
            .with_image("/images/olive-oil.jpg")
            .with_old_price(rupees(2800.0))
            .with_rating(4.8)
            .best_seller(),
        CatalogProduct::new("2", "Desi Ghee", rupees(1850.0))
            .with_category("Oils & Ghee")
            .with_image("/images/desi-ghee.jpg")
            .with_rating(4.6),
        CatalogProduct::new("3", "Clove Oil", rupees(450.0))
            .with_category("Oils & Ghee")
            .with_image("/images/clove-oil.jpg")
            .new_arrival(),
        CatalogProduct::new("4", "Sidr Honey", rupees(3200.0))
            .with_category("Honey & Sweeteners")
            .with_image("/images/sidr-honey.jpg")
            .with_rating(4.9)
            .best_seller(),
        CatalogProduct::new("5", "Acacia Honey", rupees(1650.0))
            .with_category("Honey & Sweeteners")
            .with_image("/images/acacia-honey.jpg")
            .with_old_price(rupees(1900.0)),
        CatalogProduct::new("6", "Jaggery Powder", rupees(380.0))
            .with_category("Honey & Sweeteners")
            .with_image("/images/jaggery.jpg")
            .new_arrival(),
        CatalogProduct::new("7", "Green Tea", rupees(650.0))
            .with_category("Tea & Beverages")
            .with_image("/images/green-tea.jpg")
            .with_rating(4.4)
            .best_seller(),
        CatalogProduct::new("8", "Chamomile Tea", rupees(720.0))
            .with_category("Tea & Beverages")
            .with_image("/images/chamomile.jpg")
            .new_arrival(),
        CatalogProduct::new("9", "Kalonji Seeds", rupees(300.0))
            .with_category("Herbs & Spices")
            .with_image("/images/kalonji.jpg")
            .with_rating(4.5),
        CatalogProduct::new("10", "Turmeric Powder", rupees(280.0))
            .with_category("Herbs & Spices")
            .with_image("/images/turmeric.jpg"),
        CatalogProduct::new("11", "Almond Oil", rupees(1250.0))
            .with_category("Oils & Ghee")
            .with_image("/images/almond-oil.jpg")
            .with_rating(4.7)
            .new_arrival(),
        CatalogProduct::new("12", "Moringa Powder", rupees(890.0))
            .with_category("Herbs & Spices")
            .with_image("/images/moringa.jpg")
            .best_seller(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_are_unique() {
        let catalog = Catalog::demo();
        let ids: HashSet<_> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn test_listing_by_search() {
        let catalog = Catalog::demo();
        let names: Vec<_> = catalog
            .listing(Some(" OIL "), None)
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, ["Cold Pressed Olive Oil", "Desi Ghee", "Clove Oil", "Almond Oil"]);
    }

    #[test]
    fn test_listing_by_category() {
        let catalog = Catalog::demo();
        let found = catalog.listing(None, Some("Tea & Beverages"));
        assert_eq!(found.len(), 2);
        assert!(catalog.listing(Some("honey"), Some("Tea & Beverages")).is_empty());
        assert_eq!(catalog.listing(Some("  "), None).len(), catalog.products().len());
    }
}
