//! Credential resolution against a mocked Agave API.
//!
//! Uses wiremock to check which headers each call actually sends.

use agaveapi::{
    AgaveClient, AgaveError, ClientConfig, Contact, Credential, Get, List, Project,
    RequestOptions, Rfi,
};
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AgaveClient {
    let config = ClientConfig::new("test-id", "test-secret").with_base_url(server.uri());
    AgaveClient::with_config(config).unwrap()
}

#[tokio::test]
async fn test_client_headers_on_every_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/contact-1"))
        .and(header("client-id", "test-id"))
        .and(header("client-secret", "test-secret"))
        .and(header("api-version", "2021-11-21"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "contact-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    let contact = Contact::get(
        &mut client,
        "contact-1",
        &RequestOptions::default().account_token("tok"),
    )
    .await
    .unwrap();

    assert_eq!(contact["id"], "contact-1");
}

#[tokio::test]
async fn test_missing_account_token_sends_nothing() {
    let mock_server = MockServer::start().await;
    let mut client = client_for(&mock_server);

    let err = Project::list_page(&mut client, &Default::default(), &RequestOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AgaveError::MissingCredential(Credential::AccountToken)
    ));
    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no request should reach the server");
}

#[tokio::test]
async fn test_token_supplied_once_is_reused() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rfis/rfi-1"))
        .and(header("account-token", "tok"))
        .and(header("project-id", "proj-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "rfi-1"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);

    let options = RequestOptions::default()
        .account_token("tok")
        .project_id("proj-1");
    Rfi::get(&mut client, "rfi-1", &options).await.unwrap();

    // Second call passes nothing and relies on the adopted defaults
    Rfi::get(&mut client, "rfi-1", &RequestOptions::default())
        .await
        .unwrap();

    assert_eq!(client.credentials().account_token(), Some("tok"));
    assert_eq!(client.credentials().project_id(), Some("proj-1"));
}

#[tokio::test]
async fn test_override_replaces_stored_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/contact-1"))
        .and(header("account-token", "new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "contact-1"})))
        .expect(2)
        .mount(&mock_server)
        .await;

    let mut client = AgaveClient::with_config(
        ClientConfig::new("test-id", "test-secret")
            .with_base_url(mock_server.uri())
            .with_account_token("old"),
    )
    .unwrap();

    Contact::get(
        &mut client,
        "contact-1",
        &RequestOptions::default().account_token("new"),
    )
    .await
    .unwrap();
    Contact::get(&mut client, "contact-1", &RequestOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_optional_project_id_is_omitted_when_unknown() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/contact-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "contact-1"})))
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    Contact::get(
        &mut client,
        "contact-1",
        &RequestOptions::default().account_token("tok"),
    )
    .await
    .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("project-id").is_none());
    assert_eq!(requests[0].headers.get("account-token").unwrap(), "tok");
}

#[tokio::test]
async fn test_optional_project_id_is_sent_when_known() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("project-id", "proj-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = AgaveClient::with_config(
        ClientConfig::new("test-id", "test-secret")
            .with_base_url(mock_server.uri())
            .with_account_token("tok")
            .with_project_id("proj-1"),
    )
    .unwrap();

    Project::list_page(&mut client, &Default::default(), &RequestOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_required_project_id_missing() {
    let mock_server = MockServer::start().await;
    let mut client = client_for(&mock_server);

    let err = Rfi::get(
        &mut client,
        "rfi-1",
        &RequestOptions::default().account_token("tok"),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        AgaveError::MissingCredential(Credential::ProjectId)
    ));
    assert!(mock_server.received_requests().await.unwrap().is_empty());

    // A failed resolution adopts nothing
    assert_eq!(client.credentials().account_token(), None);
}

#[tokio::test]
async fn test_set_on_client_is_used() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rfis"))
        .and(header("account-token", "stored"))
        .and(header("project-id", "proj-9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = client_for(&mock_server);
    client.set_account_token("stored");
    client.set_project_id("proj-9");

    Rfi::list_page(&mut client, &Default::default(), &RequestOptions::default())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_invalid_token_override_is_not_adopted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts/contact-1"))
        .and(header("account-token", "good"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "contact-1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut client = AgaveClient::with_config(
        ClientConfig::new("test-id", "test-secret")
            .with_base_url(mock_server.uri())
            .with_account_token("good"),
    )
    .unwrap();

    let err = Contact::get(
        &mut client,
        "contact-1",
        &RequestOptions::default().account_token("bad\ntoken"),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AgaveError::InvalidHeader(_)));
    assert_eq!(client.credentials().account_token(), Some("good"));

    // The stored token still works
    Contact::get(&mut client, "contact-1", &RequestOptions::default())
        .await
        .unwrap();
}
