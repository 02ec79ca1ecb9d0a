//! Request timeouts.

use std::time::Duration;

use agaveapi::{AgaveClient, AgaveError, ClientConfig, Get, Project, RequestOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "slow"}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let timeout = Duration::from_millis(100);
    let mut client = AgaveClient::with_config(
        ClientConfig::new("test-id", "test-secret")
            .with_base_url(mock_server.uri())
            .with_account_token("tok")
            .with_timeout(timeout),
    )
    .unwrap();

    let err = Project::get(&mut client, "slow", &RequestOptions::default())
        .await
        .unwrap_err();

    match err {
        AgaveError::RequestTimeout { timeout: reported } => assert_eq!(reported, timeout),
        other => panic!("Expected RequestTimeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fast_response_within_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "fast"})))
        .mount(&mock_server)
        .await;

    let mut client = AgaveClient::with_config(
        ClientConfig::new("test-id", "test-secret")
            .with_base_url(mock_server.uri())
            .with_account_token("tok")
            .with_timeout(Duration::from_secs(5)),
    )
    .unwrap();

    let project = Project::get(&mut client, "fast", &RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(project["id"], "fast");
}
