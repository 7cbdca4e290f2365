//! Tests for the sign in and sign up endpoints.

use collablab::{
    client::error::Error,
    model::auth::{SignInDto, SignUpDto},
};

use super::*;

#[tokio::test]
/// Expect the issued access token to be returned as the credential
async fn sign_in_returns_credential() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_signin_endpoint(TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN, 1)
        .build()
        .await;
    let client = api_client(&test);

    let credential = client
        .sign_in(&SignInDto {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await?;

    assert_eq!(credential.as_str(), TEST_TOKEN);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect sign up to send the name alongside the credentials
async fn sign_up_returns_credential() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_signup_endpoint(TEST_NAME, TEST_EMAIL, TEST_PASSWORD, TEST_TOKEN, 1)
        .build()
        .await;
    let client = api_client(&test);

    let credential = client
        .sign_up(&SignUpDto {
            name: TEST_NAME.to_string(),
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await?;

    assert_eq!(credential.as_str(), TEST_TOKEN);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the backend's detail message to be surfaced verbatim
async fn sign_in_surfaces_backend_detail() {
    let mut test = TestSetup::new().await;
    let mock = test.auth().create_auth_failure_endpoint(
        "/auth/signin",
        401,
        r#"{"detail":"Invalid credentials"}"#,
        1,
    );
    let client = api_client(&test);

    let result = client
        .sign_in(&SignInDto {
            email: TEST_EMAIL.to_string(),
            password: "wrong".to_string(),
        })
        .await;

    match result {
        Err(Error::AuthError(message)) => assert_eq!(message, "Invalid credentials"),
        other => panic!("expected AuthError, got {:?}", other),
    }
    mock.assert();
}

#[tokio::test]
/// Expect the generic message when the refusal carries no string detail
async fn sign_up_falls_back_without_detail() {
    let mut test = TestSetup::new().await;
    let mock = test.auth().create_auth_failure_endpoint(
        "/auth/signup",
        422,
        r#"{"detail":[{"loc":["body","email"],"msg":"field required"}]}"#,
        1,
    );
    let client = api_client(&test);

    let result = client
        .sign_up(&SignUpDto {
            name: TEST_NAME.to_string(),
            email: String::new(),
            password: TEST_PASSWORD.to_string(),
        })
        .await;

    match result {
        Err(Error::AuthError(message)) => assert_eq!(message, "Auth failed"),
        other => panic!("expected AuthError, got {:?}", other),
    }
    mock.assert();
}

#[tokio::test]
/// Expect an empty access token to be treated as a failed sign in
async fn sign_in_rejects_empty_token() {
    let test = TestBuilder::new()
        .with_signin_endpoint(TEST_EMAIL, TEST_PASSWORD, "", 1)
        .build()
        .await;
    let client = api_client(&test);

    let result = client
        .sign_in(&SignInDto {
            email: TEST_EMAIL.to_string(),
            password: TEST_PASSWORD.to_string(),
        })
        .await;

    assert!(matches!(result, Err(Error::AuthError(ref message)) if message == "Auth failed"));
    test.assert_mocks();
}
