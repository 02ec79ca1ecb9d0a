//! Mock Agave API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Agave API
//! for integration and end-to-end testing. Unlike wiremock which mocks at the
//! HTTP level per-test, this server maintains state across requests and
//! enforces the same credential headers as the real API, enabling realistic
//! workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use agaveapi::mock_server::MockServer;
//! use agaveapi::{AgaveClient, Get, RequestOptions, Rfi};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let mut client = AgaveClient::with_config(server.client_config()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let options = RequestOptions::default().account_token("tok").project_id("proj-1");
//!     let rfi = Rfi::get(&mut client, "rfi-1", &options).await.unwrap();
//!     assert_eq!(rfi["subject"], "Door hardware substitution");
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{Fixtures, DEFAULT_PROJECT_ID};
pub use server::{MockServer, TEST_CLIENT_ID, TEST_CLIENT_SECRET};
pub use state::{MockState, SharedState};
