//! Tests for publishing and saving projects.

use collablab::{
    client::{
        error::{precondition::PreconditionError, Error},
        service::project::{publish, save, ProjectDraft},
    },
    model::project::Visibility,
};
use serde_json::json;

use super::*;

fn draft() -> ProjectDraft {
    ProjectDraft {
        title: "Dioxus port".to_string(),
        description: "Port the UI".to_string(),
        skills: "rust, ,wasm".to_string(),
        duration: "2 months".to_string(),
        tags: "ui,".to_string(),
        visibility: Visibility::Public,
    }
}

#[tokio::test]
/// Expect skills and tags to be split before publishing and the created project returned
async fn publish_returns_created_project() -> Result<(), Error> {
    let mut test = TestSetup::new().await;
    let mock = test.projects().create_publish_endpoint(
        TEST_TOKEN,
        json!({
            "title": "Dioxus port",
            "description": "Port the UI",
            "skills_required": ["rust", "wasm"],
            "duration": "2 months",
            "tags": ["ui"],
            "visibility": "public",
        }),
        200,
        project_factory::mock_project("p1", "Dioxus port"),
        1,
    );
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    let project = publish(&client, &session, &draft()).await?;

    assert_eq!(project.id, "p1");
    mock.assert();

    Ok(())
}

#[tokio::test]
/// Expect a rejected project to be reported as a failure instead of success
async fn publish_branches_on_status() {
    let mut test = TestSetup::new().await;
    let mock = test.projects().create_publish_endpoint(
        TEST_TOKEN,
        json!({
            "title": "Dioxus port",
            "description": "Port the UI",
            "skills_required": ["rust", "wasm"],
            "duration": "2 months",
            "tags": ["ui"],
            "visibility": "public",
        }),
        422,
        json!({ "detail": "Title already used" }),
        1,
    );
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    let result = publish(&client, &session, &draft()).await;

    match result {
        Err(Error::RequestFailed { status, message }) => {
            assert_eq!(status, 422);
            assert_eq!(message, "Title already used");
        }
        other => panic!("expected RequestFailed, got {:?}", other),
    }
    mock.assert();
}

#[tokio::test]
/// Expect saving while signed out to send nothing and ask the user to sign in
async fn save_without_credential_sends_nothing() {
    let test = TestBuilder::new()
        .with_save_endpoint("p1", TEST_TOKEN, 200, 0)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_out_session();

    let result = save(&client, &session, "p1").await;

    let err = result.expect_err("save should require a credential");
    assert!(matches!(
        err,
        Error::PreconditionError(PreconditionError::SignInRequired)
    ));
    assert_eq!(err.user_message("Save failed"), "Sign in first");
    test.assert_mocks();
}

#[tokio::test]
/// Expect a signed in save to reach the backend with the bearer token
async fn save_with_credential() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_save_endpoint("p1", TEST_TOKEN, 200, 1)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    save(&client, &session, "p1").await?;

    test.assert_mocks();

    Ok(())
}
