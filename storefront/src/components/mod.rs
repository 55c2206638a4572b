pub mod desktop;
pub mod mobile;
pub mod product_card;
pub mod search_bar;
pub mod toast;
