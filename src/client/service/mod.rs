//! Client operations behind each component.
//!
//! Components bind form state to these functions and render their results. Each function
//! checks local preconditions first (credential present, document attached) so a failed
//! precondition never reaches the network.

pub mod application;
pub mod auth;
pub mod explorer;
pub mod owner;
pub mod project;
