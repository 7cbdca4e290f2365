//! Declarative mock backend setup.
//!
//! `TestBuilder` queues mock endpoints which are all registered on a fresh mock server by
//! `build()`. Endpoints queued with [`TestBuilder::with_mock_endpoint`] are registered first
//! so tests can shadow a shortcut endpoint with a custom one for the same path.

use mockito::{Mock, ServerGuard};
use serde_json::Value;

use crate::setup::TestSetup;

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

/// Builder for a mock backend.
pub struct TestBuilder {
    mock_builders: Vec<MockBuilder>,

    signin_endpoints: Vec<(String, String, String, usize)>, // (email, password, token, expected)
    signup_endpoints: Vec<(String, String, String, String, usize)>, // (name, email, password, token, expected)
    project_list_endpoints: Vec<(String, Vec<Value>, usize)>, // (query, projects, expected)
    save_endpoints: Vec<(String, String, usize, usize)>, // (project_id, token, status, expected)
    apply_endpoints: Vec<(String, String, String, usize, usize)>, // (project_id, token, file_name, status, expected)
    applicant_endpoints: Vec<(String, String, Vec<Value>, usize)>, // (project_id, token, applicants, expected)
    status_endpoints: Vec<(String, String, String, usize, usize)>, // (request_id, token, status, http_status, expected)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            mock_builders: Vec::new(),
            signin_endpoints: Vec::new(),
            signup_endpoints: Vec::new(),
            project_list_endpoints: Vec::new(),
            save_endpoints: Vec::new(),
            apply_endpoints: Vec::new(),
            applicant_endpoints: Vec::new(),
            status_endpoints: Vec::new(),
        }
    }

    /// Queue a custom mock endpoint.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use collablab_test_utils::TestBuilder;
    ///
    /// # async fn example() {
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("GET", "/projects")
    ///             .match_query(mockito::Matcher::Any)
    ///             .with_status(500)
    ///             .create()
    ///     })
    ///     .build()
    ///     .await;
    /// # }
    /// ```
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    pub fn with_signin_endpoint(
        mut self,
        email: &str,
        password: &str,
        token: &str,
        expected_requests: usize,
    ) -> Self {
        self.signin_endpoints.push((
            email.to_string(),
            password.to_string(),
            token.to_string(),
            expected_requests,
        ));
        self
    }

    pub fn with_signup_endpoint(
        mut self,
        name: &str,
        email: &str,
        password: &str,
        token: &str,
        expected_requests: usize,
    ) -> Self {
        self.signup_endpoints.push((
            name.to_string(),
            email.to_string(),
            password.to_string(),
            token.to_string(),
            expected_requests,
        ));
        self
    }

    pub fn with_project_list_endpoint(
        mut self,
        query: &str,
        projects: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.project_list_endpoints
            .push((query.to_string(), projects, expected_requests));
        self
    }

    pub fn with_save_endpoint(
        mut self,
        project_id: &str,
        token: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.save_endpoints.push((
            project_id.to_string(),
            token.to_string(),
            status,
            expected_requests,
        ));
        self
    }

    pub fn with_apply_endpoint(
        mut self,
        project_id: &str,
        token: &str,
        file_name: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.apply_endpoints.push((
            project_id.to_string(),
            token.to_string(),
            file_name.to_string(),
            status,
            expected_requests,
        ));
        self
    }

    pub fn with_applicants_endpoint(
        mut self,
        project_id: &str,
        token: &str,
        applicants: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.applicant_endpoints.push((
            project_id.to_string(),
            token.to_string(),
            applicants,
            expected_requests,
        ));
        self
    }

    pub fn with_status_endpoint(
        mut self,
        request_id: &str,
        token: &str,
        status: &str,
        http_status: usize,
        expected_requests: usize,
    ) -> Self {
        self.status_endpoints.push((
            request_id.to_string(),
            token.to_string(),
            status.to_string(),
            http_status,
            expected_requests,
        ));
        self
    }

    /// Start the mock server and register every queued endpoint.
    pub async fn build(self) -> TestSetup {
        let mut setup = TestSetup::new().await;
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (email, password, token, expected) in self.signin_endpoints {
            mocks.push(
                setup
                    .auth()
                    .create_signin_endpoint(&email, &password, &token, expected),
            );
        }

        for (name, email, password, token, expected) in self.signup_endpoints {
            mocks.push(
                setup
                    .auth()
                    .create_signup_endpoint(&name, &email, &password, &token, expected),
            );
        }

        for (query, projects, expected) in self.project_list_endpoints {
            mocks.push(
                setup
                    .projects()
                    .create_list_endpoint(&query, projects, expected),
            );
        }

        for (project_id, token, status, expected) in self.save_endpoints {
            mocks.push(
                setup
                    .projects()
                    .create_save_endpoint(&project_id, &token, status, expected),
            );
        }

        for (project_id, token, file_name, status, expected) in self.apply_endpoints {
            mocks.push(setup.projects().create_apply_endpoint(
                &project_id,
                &token,
                &file_name,
                status,
                expected,
            ));
        }

        for (project_id, token, applicants, expected) in self.applicant_endpoints {
            mocks.push(
                setup
                    .owner()
                    .create_applicants_endpoint(&project_id, &token, applicants, expected),
            );
        }

        for (request_id, token, status, http_status, expected) in self.status_endpoints {
            mocks.push(setup.owner().create_status_endpoint(
                &request_id,
                &token,
                &status,
                http_status,
                expected,
            ));
        }

        setup.mocks.extend(mocks);
        setup
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
