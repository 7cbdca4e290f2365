//! Tests for the HTTP client.
//!
//! These tests drive `ApiClient<NativeTransport>` against a mock backend, verifying the
//! request each endpoint method sends and how each response status is branched into a
//! typed result.

mod auth;
mod owner;

use collablab_test_utils::prelude::*;

use crate::util::*;
