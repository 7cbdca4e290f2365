//! Tests for applying to a project.

use collablab::client::{
    api::transport::Document,
    error::{precondition::PreconditionError, Error},
    service::application::{
        apply, outcome_text, DEFAULT_MESSAGE, DEFAULT_PORTFOLIO_URL, SUBMITTED, SUBMIT_FAILED,
    },
};

use super::*;

fn document() -> Document {
    Document {
        file_name: "cv.pdf".to_string(),
        content_type: Some("application/pdf".to_string()),
        bytes: b"%PDF-1.4".to_vec(),
    }
}

#[tokio::test]
/// Expect a complete application to be submitted as multipart
async fn apply_submits_application() {
    let test = TestBuilder::new()
        .with_apply_endpoint("p1", TEST_TOKEN, "cv.pdf", 200, 1)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    let result = apply(
        &client,
        &session,
        "p1",
        DEFAULT_MESSAGE,
        DEFAULT_PORTFOLIO_URL,
        Some(document()),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(outcome_text(&result), SUBMITTED);
    test.assert_mocks();
}

#[tokio::test]
/// Expect an application without a document to send nothing and prompt for one
async fn apply_without_document_sends_nothing() {
    let test = TestBuilder::new()
        .with_apply_endpoint("p1", TEST_TOKEN, "cv.pdf", 200, 0)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    let result = apply(
        &client,
        &session,
        "p1",
        DEFAULT_MESSAGE,
        DEFAULT_PORTFOLIO_URL,
        None,
    )
    .await;

    let err = result.expect_err("apply should require a document");
    assert!(matches!(
        err,
        Error::PreconditionError(PreconditionError::DocumentRequired)
    ));
    assert_eq!(err.to_string(), "Please attach a document");
    test.assert_mocks();
}

#[tokio::test]
/// Expect the credential to be checked before the document
async fn apply_signed_out_sends_nothing() {
    let test = TestBuilder::new()
        .with_apply_endpoint("p1", TEST_TOKEN, "cv.pdf", 200, 0)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_out_session();

    let result = apply(
        &client,
        &session,
        "p1",
        DEFAULT_MESSAGE,
        DEFAULT_PORTFOLIO_URL,
        None,
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::PreconditionError(PreconditionError::SignInRequired))
    ));
    test.assert_mocks();
}

#[tokio::test]
/// Expect a rejected application to produce the failure outcome text
async fn apply_rejected_reports_failure() {
    let test = TestBuilder::new()
        .with_apply_endpoint("p1", TEST_TOKEN, "cv.pdf", 400, 1)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    let result = apply(
        &client,
        &session,
        "p1",
        DEFAULT_MESSAGE,
        DEFAULT_PORTFOLIO_URL,
        Some(document()),
    )
    .await;

    assert!(matches!(result, Err(Error::RequestFailed { status: 400, .. })));
    assert_eq!(outcome_text(&result), SUBMIT_FAILED);
    test.assert_mocks();
}
