//! Tests for reviewing applicants as a project owner.

use collablab::{
    client::{
        error::Error,
        service::owner::{load_applicants, set_status, Decision},
    },
    model::application::ApplicationStatus,
};

use super::*;

#[tokio::test]
/// Expect a blank project ID to send nothing
async fn load_with_blank_id_sends_nothing() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_applicants_endpoint("p1", TEST_TOKEN, Vec::new(), 0)
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    assert!(load_applicants(&client, &session, "").await?.is_none());
    assert!(load_applicants(&client, &session, "   ").await?.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the applicant list of the given project
async fn load_lists_applicants() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_applicants_endpoint(
            "p1",
            TEST_TOKEN,
            vec![application_factory::mock_application("r1", "pending")],
            1,
        )
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    let applicants = load_applicants(&client, &session, " p1 ")
        .await?
        .expect("project ID is not blank");

    assert_eq!(applicants.len(), 1);
    assert_eq!(applicants[0].portfolio_url, "https://github.com/applicant-r1");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the reload after accepting to reflect the new status
async fn accept_reloads_with_new_status() {
    let test = TestBuilder::new()
        .with_status_endpoint("r1", TEST_TOKEN, "accepted", 200, 1)
        .with_applicants_endpoint(
            "p1",
            TEST_TOKEN,
            vec![application_factory::mock_application("r1", "accepted")],
            1,
        )
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    let change = set_status(&client, &session, "p1", "r1", Decision::Accept).await;

    assert!(change.update.is_ok());
    assert_eq!(change.status_text(), "Updated");
    let applicants = change
        .applicants
        .expect("reload should succeed")
        .expect("project ID is not blank");
    assert_eq!(applicants[0].status, ApplicationStatus::Accepted);
    test.assert_mocks();
}

#[tokio::test]
/// Expect the list to be reloaded even when the status update fails
async fn failed_update_still_reloads() {
    let test = TestBuilder::new()
        .with_status_endpoint("r1", TEST_TOKEN, "rejected", 500, 1)
        .with_applicants_endpoint(
            "p1",
            TEST_TOKEN,
            vec![application_factory::mock_application("r1", "pending")],
            1,
        )
        .build()
        .await;
    let client = api_client(&test);
    let session = signed_in_session(TEST_TOKEN);

    let change = set_status(&client, &session, "p1", "r1", Decision::Reject).await;

    assert!(matches!(
        change.update,
        Err(Error::RequestFailed { status: 500, .. })
    ));
    assert_eq!(change.status_text(), "Update failed");
    assert!(matches!(change.applicants, Ok(Some(ref list)) if list.len() == 1));
    test.assert_mocks();
}
