mod cart;
mod home;
mod not_found;
mod shop;
mod wishlist;

pub use cart::CartPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use shop::ShopPage;
pub use wishlist::WishlistPage;
