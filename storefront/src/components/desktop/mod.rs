//! Desktop layout: top navigation with inline search, category row and footer.

mod footer;
mod layout;
mod navbar;

pub use footer::Footer;
pub use layout::DesktopLayout;
pub use navbar::DesktopNavbar;
