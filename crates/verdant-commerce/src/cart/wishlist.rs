//! Wishlist container.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Products the shopper has saved for later, in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Wishlist {
    product_ids: Vec<ProductId>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product if absent, remove it if present.
    ///
    /// Returns whether the product is on the wishlist afterwards.
    pub fn toggle(&mut self, product_id: &ProductId) -> bool {
        if self.remove(product_id) {
            false
        } else {
            self.product_ids.push(product_id.clone());
            true
        }
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.product_ids.contains(product_id)
    }

    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.product_ids.len();
        self.product_ids.retain(|id| id != product_id);
        self.product_ids.len() < len_before
    }

    pub fn len(&self) -> usize {
        self.product_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty()
    }

    pub fn product_ids(&self) -> &[ProductId] {
        &self.product_ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new("7");

        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));
        assert_eq!(wishlist.len(), 1);

        assert!(!wishlist.toggle(&id));
        assert!(wishlist.is_empty());
    }
}
