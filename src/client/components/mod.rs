pub mod auth;
pub mod navbar;
pub mod page;
pub mod title;
pub mod workspace;

pub use navbar::Navbar;
pub use page::Page;
pub use title::CollabLabTitleButton;
