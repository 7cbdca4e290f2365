use mockito::{Mock, Server, ServerGuard};

use crate::fixtures::{application::OwnerFixtures, auth::AuthFixtures, project::ProjectFixtures};

/// A running mock backend and the mocks registered on it
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// Base URL of the mock backend, suitable as the client's backend URL
    pub fn url(&self) -> String {
        self.server.url()
    }

    pub fn auth(&mut self) -> AuthFixtures<'_> {
        AuthFixtures { setup: self }
    }

    pub fn projects(&mut self) -> ProjectFixtures<'_> {
        ProjectFixtures { setup: self }
    }

    pub fn owner(&mut self) -> OwnerFixtures<'_> {
        OwnerFixtures { setup: self }
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
