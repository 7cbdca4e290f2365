//! Tests for signing in, signing up and signing out.

use collablab::client::{
    error::Error,
    service::auth::{authenticate, sign_out, AuthForm, AuthMode, AuthState},
    session::{
        storage::{CredentialStorage, MemoryStorage},
        Session,
    },
};

use super::*;

fn form() -> AuthForm {
    AuthForm {
        name: TEST_NAME.to_string(),
        email: TEST_EMAIL.to_string(),
        password: TEST_PASSWORD.to_string(),
    }
}

#[tokio::test]
/// Expect a successful sign up to store the issued token and authenticate the gate
async fn sign_up_stores_credential() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_signup_endpoint(TEST_NAME, TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN, 1)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_out_session();

    let credential = authenticate(&client, &session, AuthMode::SignUp, &form()).await?;

    assert_eq!(credential.as_str(), TEST_TOKEN);
    assert_eq!(session.read(), Some(credential));
    assert_eq!(
        AuthState::of(session.read().as_ref()),
        AuthState::Authenticated
    );
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect sign in to send only the email and password
async fn sign_in_stores_credential() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_signin_endpoint(TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN, 1)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_out_session();

    authenticate(&client, &session, AuthMode::SignIn, &form()).await?;

    assert_eq!(session.read().map(|c| c.as_str().to_string()), Some(TEST_TOKEN.to_string()));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a refused sign in to leave the session signed out
async fn failed_sign_in_keeps_session_empty() {
    let mut test = TestSetup::new().await;
    let mock = test.auth().create_auth_failure_endpoint(
        "/auth/signin",
        401,
        r#"{"detail":"Invalid credentials"}"#,
        1,
    );
    let client = api_client(&test);
    let session = signed_out_session();

    let result = authenticate(&client, &session, AuthMode::SignIn, &form()).await;

    let err = result.expect_err("sign in should be refused");
    assert_eq!(err.user_message("Auth failed"), "Invalid credentials");
    assert!(session.read().is_none());
    mock.assert();
}

#[test]
/// Expect sign out to clear the credential
fn sign_out_clears_credential() -> Result<(), Error> {
    let session = signed_in_session(TEST_TOKEN);

    sign_out(&session)?;

    assert!(session.read().is_none());
    assert_eq!(
        AuthState::of(session.read().as_ref()),
        AuthState::Unauthenticated
    );

    Ok(())
}

/// Storage that keeps its entries but refuses to delete them
struct UndeletableStorage(MemoryStorage);

impl CredentialStorage for UndeletableStorage {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.0.set(key, value)
    }

    fn remove(&self, _key: &str) -> Result<(), Error> {
        Err(Error::StorageError("read-only".to_string()))
    }
}

#[test]
/// Expect a failed sign out to be reported and the credential to stay signed in
fn failed_sign_out_keeps_credential() -> Result<(), Error> {
    let session = Session::new(UndeletableStorage(MemoryStorage::default()));
    session.save(&credential(TEST_TOKEN))?;

    let result = sign_out(&session);

    assert!(matches!(result, Err(Error::StorageError(_))));
    assert_eq!(
        AuthState::of(session.read().as_ref()),
        AuthState::Authenticated
    );

    Ok(())
}
