//! Mock Agave API server.
//!
//! Provides an axum-based HTTP server that simulates the Agave API.

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::{MockState, SharedState};
use crate::client::ClientConfig;
use crate::models::{Contact, Drawing, Project, Rfi, SpecificationSection, Submittal, Vendor};
use crate::traits::Resource;

/// Client id accepted by [`MockServer::client_config`].
pub const TEST_CLIENT_ID: &str = "test-client-id";
/// Client secret accepted by [`MockServer::client_config`].
pub const TEST_CLIENT_SECRET: &str = "test-client-secret";

/// A mock Agave API server for testing.
///
/// The server runs in the background and can be used to test the Agave client
/// against a realistic API implementation.
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: SharedState,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Fixtures::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Client configuration pointing at this server.
    ///
    /// No account token or project id is set.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(TEST_CLIENT_ID, TEST_CLIENT_SECRET).with_base_url(self.url.clone())
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the axum router with all routes.
    fn create_router(state: SharedState) -> Router {
        Router::new()
            .merge(resource_routes::<Project>())
            .merge(resource_routes::<Rfi>())
            .merge(resource_routes::<Submittal>())
            .merge(resource_routes::<SpecificationSection>())
            .merge(resource_routes::<Contact>())
            .merge(resource_routes::<Vendor>())
            .merge(resource_routes::<Drawing>())
            .route(
                "/drawings/:id/versions",
                get(handlers::list_drawing_versions),
            )
            // File management
            .route("/files/:id", get(handlers::get_file))
            .route("/folders/:id", get(handlers::get_folder))
            .route("/folders/:id/files", get(handlers::list_folder_files))
            .route("/root-folder", get(handlers::get_root_folder))
            // Link flow
            .route("/link/token/create", post(handlers::create_link_token))
            .route("/link/token/exchange", post(handlers::exchange_public_token))
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// List and get routes of a plain record resource.
fn resource_routes<R: Resource + Send + Sync + 'static>() -> Router<SharedState> {
    Router::new()
        .route(&format!("/{}", R::PATH), get(handlers::list_records::<R>))
        .route(&format!("/{}/:id", R::PATH), get(handlers::get_record::<R>))
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::fixtures::DEFAULT_PROJECT_ID;
    use crate::{AgaveClient, AgaveError, Get, List, RequestOptions};

    fn options() -> RequestOptions {
        RequestOptions::default()
            .account_token("tok")
            .project_id(DEFAULT_PROJECT_ID)
    }

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/health", server.url()))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_get_rfi_with_agave_client() {
        let server = MockServer::start().await;
        let mut client = AgaveClient::with_config(server.client_config()).unwrap();

        let rfi = Rfi::get(&mut client, "rfi-1", &options())
            .await
            .expect("Failed to get RFI");

        assert_eq!(rfi["subject"], "Door hardware substitution");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_list_projects_with_agave_client() {
        let server = MockServer::start().await;
        let mut client = AgaveClient::with_config(server.client_config()).unwrap();

        let options = RequestOptions::default().account_token("tok");
        let projects = Project::list_all(&mut client, &options)
            .await
            .expect("Failed to list projects");

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0]["name"], "Tower A");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let mut client = AgaveClient::with_config(server.client_config()).unwrap();

        let err = Rfi::get(&mut client, "rfi-1", &options()).await.unwrap_err();

        assert_eq!(err.status_code(), Some(404));

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_required_token_is_enforced() {
        let state = Fixtures::default_state().with_required_token("right");
        let server = MockServer::with_state(state).await;
        let mut client = AgaveClient::with_config(server.client_config()).unwrap();

        let err = Vendor::get(
            &mut client,
            "vendor-1",
            &RequestOptions::default().account_token("wrong"),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            AgaveError::ApiError {
                status_code: Some(401),
                ..
            }
        ));

        let vendor = Vendor::get(
            &mut client,
            "vendor-1",
            &RequestOptions::default().account_token("right"),
        )
        .await
        .unwrap();
        assert_eq!(vendor["name"], "Acme Glazing");

        server.shutdown().await;
    }
}
