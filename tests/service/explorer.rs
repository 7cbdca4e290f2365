//! Tests for searching the project listing.

use collablab::client::{
    error::Error,
    service::explorer::{search, ProjectFeed},
};

use super::*;

#[tokio::test]
/// Expect the initial empty search to list every project in the order received
async fn initial_search_lists_every_project() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_project_list_endpoint("", project_factory::mock_projects(3), 1)
        .build()
        .await;
    let client = api_client(&test);
    let mut feed = ProjectFeed::default();

    let ticket = feed.begin();
    let result = search(&client, "").await;
    assert!(feed.complete(ticket, result));

    let ids: Vec<&str> = feed.projects.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
    assert!(!feed.loading);
    assert!(feed.error.is_none());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a search that resolves after a newer one to be discarded
async fn stale_search_is_discarded() -> Result<(), Error> {
    let test = TestBuilder::new()
        .with_project_list_endpoint("old", vec![project_factory::mock_project("o1", "Old")], 1)
        .with_project_list_endpoint("new", vec![project_factory::mock_project("n1", "New")], 1)
        .build()
        .await;
    let client = api_client(&test);
    let mut feed = ProjectFeed::default();

    let old_ticket = feed.begin();
    let new_ticket = feed.begin();

    let new_result = search(&client, "new").await;
    let old_result = search(&client, "old").await;

    assert!(feed.complete(new_ticket, new_result));
    assert!(!feed.complete(old_ticket, old_result));

    assert_eq!(feed.projects.len(), 1);
    assert_eq!(feed.projects[0].id, "n1");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a failed search to keep the previous results
async fn failed_search_keeps_results() {
    let mut test = TestBuilder::new()
        .with_project_list_endpoint("", project_factory::mock_projects(2), 1)
        .build()
        .await;
    test.mocks.push(
        test.server
            .mock("GET", "/projects")
            .match_query(mockito::Matcher::UrlEncoded(
                "q".to_string(),
                "broken".to_string(),
            ))
            .with_status(500)
            .create(),
    );
    let client = api_client(&test);
    let mut feed = ProjectFeed::default();

    let ticket = feed.begin();
    let result = search(&client, "").await;
    feed.complete(ticket, result);

    let ticket = feed.begin();
    let result = search(&client, "broken").await;
    assert!(matches!(result, Err(Error::RequestFailed { status: 500, .. })));
    feed.complete(ticket, result);

    assert_eq!(feed.projects.len(), 2);
    assert_eq!(feed.error.as_deref(), Some("Failed to load projects"));
    test.assert_mocks();
}
