//! Mobile layout: sticky header with search overlay, bottom navigation and
//! category menu.

mod header;
mod layout;
mod menu_modal;
mod navbar;

pub use header::MobileHeader;
pub use layout::MobileLayout;
pub use menu_modal::MenuModal;
pub use navbar::MobileNavbar;
