//! Data transfer objects exchanged with the CollabLab backend.

pub mod api;
pub mod application;
pub mod auth;
pub mod project;
