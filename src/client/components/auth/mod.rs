pub mod form;
pub mod landing;

pub use form::AuthPanel;
pub use landing::Landing;
