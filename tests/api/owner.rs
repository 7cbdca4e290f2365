//! Tests for the owner review endpoints.

use collablab::{
    client::{
        api::{native::NativeTransport, ApiClient},
        config::Config,
        error::Error,
    },
    model::application::ApplicationStatus,
};

use super::*;

#[tokio::test]
/// Expect applicants to be decoded with their statuses
async fn list_applicants_returns_requests() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_applicants_endpoint(
            "p1",
            TEST_TOKEN,
            vec![
                application_factory::mock_application("r1", "pending"),
                application_factory::mock_application("r2", "rejected"),
            ],
            1,
        )
        .build()
        .await;
    let client = api_client(&test);

    let applicants = client.list_applicants(&credential(TEST_TOKEN), "p1").await?;

    assert_eq!(applicants.len(), 2);
    assert_eq!(applicants[0].id, "r1");
    assert_eq!(applicants[0].status, ApplicationStatus::Pending);
    assert_eq!(applicants[1].status, ApplicationStatus::Rejected);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the new status to be sent as a JSON body
async fn update_status_sends_status() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_status_endpoint("r1", TEST_TOKEN, "accepted", 200, 1)
        .build()
        .await;
    let client = api_client(&test);

    client
        .update_status(&credential(TEST_TOKEN), "r1", ApplicationStatus::Accepted)
        .await?;

    test.assert_mocks();

    Ok(())
}

#[test]
/// Expect the document link to point at the backend download route
fn document_url_points_at_backend() -> Result<(), Error> {
    let config = Config::from_value(Some("http://localhost:8000/"))?;
    let client = ApiClient::new(&config, NativeTransport::new());

    assert_eq!(
        client.document_url("r 1")?,
        "http://localhost:8000/owner/requests/r%201/document"
    );

    Ok(())
}
