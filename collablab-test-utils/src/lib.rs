//! Shared test utilities for the CollabLab client.
//!
//! Provides a mock backend built on `mockito`: [`TestBuilder`] queues mock endpoints for the
//! backend routes the client calls, [`TestSetup`] owns the running mock server and the
//! created mocks, and the fixture factories build JSON bodies shaped like backend responses.
//!
//! The crate deliberately does not depend on `collablab` so it can be used from the client's
//! integration tests without a dependency cycle; fixtures are plain `serde_json::Value`s.

pub mod builder;
pub mod constant;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{
        constant::*,
        fixtures::{application::factory as application_factory, project::factory as project_factory},
        TestBuilder, TestSetup,
    };
}
