//! Mock endpoints for the owner review routes.

pub mod factory;

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{fixtures::bearer, setup::TestSetup};

pub struct OwnerFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

impl<'a> OwnerFixtures<'a> {
    /// `GET /owner/projects/{id}/requests` answering with `applicants`
    pub fn create_applicants_endpoint(
        &mut self,
        project_id: &str,
        token: &str,
        applicants: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", format!("/owner/projects/{}/requests", project_id).as_str())
            .match_header("authorization", bearer(token))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(applicants).to_string())
            .expect(expected_requests)
            .create()
    }

    /// `POST /owner/requests/{id}/status` expecting `{"status": status}`
    pub fn create_status_endpoint(
        &mut self,
        request_id: &str,
        token: &str,
        status: &str,
        http_status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", format!("/owner/requests/{}/status", request_id).as_str())
            .match_header("authorization", bearer(token))
            .match_body(Matcher::Json(json!({ "status": status })))
            .with_status(http_status)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create()
    }
}
