//! Home page tab filters and category summaries.

use crate::catalog::CatalogProduct;

/// A product tab on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum HomeTab {
    #[default]
    All,
    New,
    BestSellers,
    /// Exact category label.
    Category(String),
}

impl HomeTab {
    /// Parse a tab id ("all", "new", "bestsellers", or a category label).
    pub fn from_id(id: &str) -> Self {
        match id {
            "all" => HomeTab::All,
            "new" => HomeTab::New,
            "bestsellers" => HomeTab::BestSellers,
            other => HomeTab::Category(other.to_string()),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            HomeTab::All => "all",
            HomeTab::New => "new",
            HomeTab::BestSellers => "bestsellers",
            HomeTab::Category(c) => c,
        }
    }

    /// Products shown under this tab, in catalog order, capped at `limit`.
    pub fn filter<'a>(&self, products: &'a [CatalogProduct], limit: usize) -> Vec<&'a CatalogProduct> {
        products
            .iter()
            .filter(|p| match self {
                HomeTab::All => true,
                HomeTab::New => p.is_new,
                HomeTab::BestSellers => p.is_best_seller,
                HomeTab::Category(c) => p.category.as_deref() == Some(c.as_str()),
            })
            .take(limit)
            .collect()
    }
}

/// A category label with its product count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    pub name: String,
    pub count: usize,
}

impl CategorySummary {
    /// "1 item" / "3 items".
    pub fn count_label(&self) -> String {
        if self.count == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.count)
        }
    }
}

/// First `limit` distinct categories in catalog order, with product counts.
pub fn category_summaries(products: &[CatalogProduct], limit: usize) -> Vec<CategorySummary> {
    let mut names: Vec<&str> = Vec::new();
    for category in products.iter().filter_map(|p| p.category.as_deref()) {
        if !category.is_empty() && !names.contains(&category) {
            names.push(category);
        }
    }

    names
        .into_iter()
        .take(limit)
        .map(|name| CategorySummary {
            name: name.to_string(),
            count: products
                .iter()
                .filter(|p| p.category.as_deref() == Some(name))
                .count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> Vec<CatalogProduct> {
        let price = Money::from_decimal(500.0, Currency::PKR);
        vec![
            CatalogProduct::new("1", "Almond Oil", price).with_category("Oils & Ghee").best_seller(),
            CatalogProduct::new("2", "Desi Ghee", price).with_category("Oils & Ghee"),
            CatalogProduct::new("3", "Sidr Honey", price).with_category("Honey & Sweeteners").new_arrival(),
            CatalogProduct::new("4", "Green Tea", price).with_category("Tea & Beverages"),
            CatalogProduct::new("5", "Unlabelled", price),
        ]
    }

    #[test]
    fn test_tab_from_id() {
        assert_eq!(HomeTab::from_id("all"), HomeTab::All);
        assert_eq!(HomeTab::from_id("bestsellers"), HomeTab::BestSellers);
        assert_eq!(
            HomeTab::from_id("Oils & Ghee"),
            HomeTab::Category("Oils & Ghee".to_string())
        );
        assert_eq!(HomeTab::Category("Tea".to_string()).id(), "Tea");
    }

    #[test]
    fn test_tab_filter() {
        let products = catalog();
        assert_eq!(HomeTab::All.filter(&products, 3).len(), 3);
        assert_eq!(HomeTab::New.filter(&products, 12)[0].name, "Sidr Honey");
        assert_eq!(HomeTab::BestSellers.filter(&products, 12)[0].name, "Almond Oil");

        let oils = HomeTab::from_id("Oils & Ghee").filter(&products, 12);
        let names: Vec<_> = oils.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Almond Oil", "Desi Ghee"]);
    }

    #[test]
    fn test_category_summaries() {
        let summaries = category_summaries(&catalog(), 2);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].name, "Oils & Ghee");
        assert_eq!(summaries[0].count_label(), "2 items");
        assert_eq!(summaries[1].count_label(), "1 item");
    }
}
