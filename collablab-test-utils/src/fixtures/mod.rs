pub mod application;
pub mod auth;
pub mod project;

use mockito::Matcher;

/// Matches the `Authorization` header carrying `token` as a bearer credential
pub fn bearer(token: &str) -> Matcher {
    Matcher::Exact(format!("Bearer {}", token))
}
