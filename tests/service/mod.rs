//! Tests for the client operations behind each component.
//!
//! This module verifies the end to end behavior of the service functions: credential
//! handling, preconditions that must block a request entirely, and the reload performed
//! after an applicant status change.

mod application;
mod auth;
mod explorer;
mod owner;
mod project;

use collablab_test_utils::prelude::*;

use crate::util::*;
