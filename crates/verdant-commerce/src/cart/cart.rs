//! Cart and line item types.

use crate::catalog::CatalogProduct;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 99;

/// Size label used when a product has no size options.
const STANDARD_SIZE: &str = "Standard";

/// A shopping cart held in the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    /// Items in the cart.
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a catalog product to the cart.
    ///
    /// Adding a product that is already present increases its quantity.
    pub fn add_product(
        &mut self,
        product: &CatalogProduct,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        if let Some(existing) = self.items.iter_mut().find(|i| i.product_id == product.id) {
            let new_quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            if new_quantity > MAX_QUANTITY_PER_ITEM {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_ITEM,
                ));
            }
            existing.quantity = new_quantity;
            return Ok(());
        }

        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        self.items.push(CartItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            unit_price: product.price,
            size: STANDARD_SIZE.to_string(),
            quantity,
        });
        Ok(())
    }

    /// Set an item's quantity. A quantity of zero or less removes it.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity <= 0 {
            self.remove(product_id);
            return Ok(());
        }
        if quantity > MAX_QUANTITY_PER_ITEM {
            return Err(CommerceError::QuantityExceedsLimit(
                quantity,
                MAX_QUANTITY_PER_ITEM,
            ));
        }

        let item = self
            .items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
            .ok_or_else(|| CommerceError::ItemNotInCart(product_id.to_string()))?;
        item.quantity = quantity;
        Ok(())
    }

    /// Remove an item from the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product_id != product_id);
        self.items.len() < len_before
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart total.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let currency = self
            .items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or(Currency::PKR);

        let line_totals = self
            .items
            .iter()
            .map(CartItem::total)
            .collect::<Result<Vec<_>, _>>()?;

        Money::try_sum(line_totals.iter(), currency).ok_or_else(|| {
            CommerceError::CurrencyMismatch {
                expected: currency.code().to_string(),
                got: "mixed".to_string(),
            }
        })
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    pub image: Option<String>,
    pub category: Option<String>,
    pub unit_price: Money,
    pub size: String,
    pub quantity: i64,
}

impl CartItem {
    /// Line total (unit price * quantity).
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// Badge text for a count indicator: hidden at zero, capped at "9+".
pub fn badge_label(count: i64) -> Option<String> {
    match count {
        c if c <= 0 => None,
        c if c > 9 => Some("9+".to_string()),
        c => Some(c.to_string()),
    }
}
