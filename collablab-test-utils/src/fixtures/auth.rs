//! Mock endpoints for `/auth/signin` and `/auth/signup`.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::setup::TestSetup;

pub struct AuthFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

impl<'a> AuthFixtures<'a> {
    /// `POST /auth/signin` answering `{access_token}` for the given credentials
    pub fn create_signin_endpoint(
        &mut self,
        email: &str,
        password: &str,
        token: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/auth/signin")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "email": email, "password": password })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "access_token": token }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// `POST /auth/signup` answering `{access_token}` for the given account
    pub fn create_signup_endpoint(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        token: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/auth/signup")
            .match_body(Matcher::Json(
                json!({ "name": name, "email": email, "password": password }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "access_token": token }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Sign in or sign up endpoint refusing every request with `body`
    pub fn create_auth_failure_endpoint(
        &mut self,
        path: &str,
        status: usize,
        body: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}
