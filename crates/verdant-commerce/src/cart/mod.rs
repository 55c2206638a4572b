//! Client-side cart and wishlist containers.

mod cart;
mod wishlist;

pub use cart::{badge_label, Cart, CartItem, MAX_QUANTITY_PER_ITEM};
pub use wishlist::Wishlist;
