//! CollabLab client library.
//!
//! The `model` module holds the DTOs exchanged with the backend, `client` holds the API
//! client, session store, operations and the Dioxus UI built on top of them.

#![allow(non_snake_case)]

pub mod client;
pub mod model;
