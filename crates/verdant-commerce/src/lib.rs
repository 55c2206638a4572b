//! Storefront domain types for Verdant.
//!
//! - **Catalog**: catalog products, search suggestion projections, home tabs
//! - **Cart**: client-side cart and wishlist containers
//! - **Money**: minor-unit monetary values with locale-style display
//!
//! # Example
//!
//! ```rust,ignore
//! use verdant_commerce::prelude::*;
//!
//! let product = CatalogProduct::new("12", "Almond Oil", Money::from_decimal(1250.0, Currency::PKR))
//!     .with_category("Oils & Ghee");
//!
//! let mut cart = Cart::new();
//! cart.add_product(&product, 1)?;
//! println!("Total: {}", cart.total()?.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        category_summaries, find_product, CatalogProduct, CategorySummary, HomeTab,
        ProductSuggestion,
    };

    // Cart
    pub use crate::cart::{badge_label, Cart, CartItem, Wishlist, MAX_QUANTITY_PER_ITEM};
}
