//! Helpers wiring the client to a mock backend.

use collablab::client::{
    api::{native::NativeTransport, ApiClient},
    config::Config,
    session::{storage::MemoryStorage, Credential, Session},
};
use collablab_test_utils::TestSetup;

/// Creates an API client pointed at the mock backend of `test`
pub fn api_client(test: &TestSetup) -> ApiClient<NativeTransport> {
    let config = Config::from_value(Some(test.url().as_str())).expect("mock server URL should be valid");

    ApiClient::new(&config, NativeTransport::new())
}

/// Creates an in-memory session holding `token`
pub fn signed_in_session(token: &str) -> Session {
    let session = Session::new(MemoryStorage::default());
    let credential = Credential::new(token).expect("test token should not be empty");
    session
        .save(&credential)
        .expect("memory storage should accept writes");

    session
}

/// Creates an in-memory session without a credential
pub fn signed_out_session() -> Session {
    Session::new(MemoryStorage::default())
}

/// Credential for `token`
pub fn credential(token: &str) -> Credential {
    Credential::new(token).expect("test token should not be empty")
}
