pub mod prompt;
pub mod time;

pub use prompt::prompt;
pub use time::format_relative_time;
