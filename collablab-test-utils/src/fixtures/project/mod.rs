//! Mock endpoints for the public project listing and the project actions of a signed in user.

pub mod factory;

use mockito::{Matcher, Mock};
use serde_json::Value;

use crate::{fixtures::bearer, setup::TestSetup};

pub struct ProjectFixtures<'a> {
    pub(crate) setup: &'a mut TestSetup,
}

impl<'a> ProjectFixtures<'a> {
    /// `GET /projects?q=<query>` answering with `projects` in the given order
    pub fn create_list_endpoint(
        &mut self,
        query: &str,
        projects: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", "/projects")
            .match_query(Matcher::UrlEncoded("q".to_string(), query.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(projects).to_string())
            .expect(expected_requests)
            .create()
    }

    /// `POST /projects` expecting `body` from a user holding `token`
    pub fn create_publish_endpoint(
        &mut self,
        token: &str,
        body: Value,
        status: usize,
        response: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/projects")
            .match_header("authorization", bearer(token))
            .match_body(Matcher::Json(body))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// `POST /projects/{id}/save`
    pub fn create_save_endpoint(
        &mut self,
        project_id: &str,
        token: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", format!("/projects/{}/save", project_id).as_str())
            .match_header("authorization", bearer(token))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create()
    }

    /// `POST /projects/{id}/apply` expecting a multipart body with the three application fields
    pub fn create_apply_endpoint(
        &mut self,
        project_id: &str,
        token: &str,
        file_name: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", format!("/projects/{}/apply", project_id).as_str())
            .match_header("authorization", bearer(token))
            .match_header(
                "content-type",
                Matcher::Regex("^multipart/form-data; boundary=".to_string()),
            )
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="message""#.to_string()),
                Matcher::Regex(r#"name="portfolio_url""#.to_string()),
                Matcher::Regex(format!(r#"name="document"; filename="{}""#, file_name)),
            ]))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body("{}")
            .expect(expected_requests)
            .create()
    }
}
