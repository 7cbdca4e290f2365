pub mod services;
pub mod session;

pub use services::Services;
pub use session::SessionState;
