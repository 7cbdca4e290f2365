//! Placeholder values shared across tests. None of these are real credentials.

/// Access token returned by the mock sign in and sign up endpoints.
pub static TEST_TOKEN: &str = "t1";

pub static TEST_NAME: &str = "A";

pub static TEST_EMAIL: &str = "a@b.com";

pub static TEST_PASSWORD: &str = "p";
