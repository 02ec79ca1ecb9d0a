//! Agave API client library.
//!
//! A Rust library for the Agave construction API. Each resource type
//! declares its endpoint and implements the operations ([`Get`], [`List`])
//! its endpoints support. Records come back as untyped JSON so that every
//! field the upstream source system provides is preserved.
//!
//! # Quick Start
//!
//! ```no_run
//! use agaveapi::{AgaveClient, Folder, Get, List, PaginationParams, RequestOptions, Rfi};
//!
//! #[tokio::main]
//! async fn main() -> agaveapi::Result<()> {
//!     // Create client from environment variables
//!     let mut client = AgaveClient::from_env()?;
//!
//!     // Credentials passed with a call are remembered for later calls
//!     let options = RequestOptions::default()
//!         .account_token("account-token")
//!         .project_id("project-id");
//!     let rfis = Rfi::list_page(&mut client, &PaginationParams::default(), &options).await?;
//!     println!("RFIs: {}", rfis["data"]);
//!
//!     // No need to pass them again
//!     let rfi = Rfi::get(&mut client, "rfi-id", &RequestOptions::default()).await?;
//!     println!("RFI: {}", rfi["subject"]);
//!
//!     // Walk the project's whole file area
//!     let tree = Folder::tree(&mut client, None, &RequestOptions::default()).await?;
//!     println!("Root folder: {}", tree["name"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Credentials
//!
//! Besides the client id and secret, most calls need an account token and
//! some need a project id. Either can be set on the client
//! ([`AgaveClient::set_account_token`], [`AgaveClient::set_project_id`]) or
//! passed in [`RequestOptions`]; a passed value becomes the new default.
//! A call that needs a value known in neither place fails with
//! [`AgaveError::MissingCredential`] before anything is sent.
//!
//! # Configuration
//!
//! [`AgaveClient::from_env`] reads:
//!
//! - `AGAVE_CLIENT_ID` (required) - Your Agave client id
//! - `AGAVE_CLIENT_SECRET` (required) - Your Agave client secret
//! - `AGAVE_ACCOUNT_TOKEN`, `AGAVE_PROJECT_ID` (optional) - Initial defaults
//! - `AGAVE_API_URL` (optional) - Base URL (defaults to `https://api.agaveapi.com`)
//! - `AGAVE_API_VERSION` (optional) - Defaults to `2021-11-21`
//! - `AGAVE_TIMEOUT_SECS` (optional) - Request timeout, defaults to 30

pub mod cli;
mod client;
mod context;
mod error;
mod link;
mod models;
pub mod output;
mod pagination;
mod traits;
mod tree;

#[cfg(feature = "test-server")]
pub mod mock_server;

/// A record as returned by the Agave API.
pub type Record = serde_json::Value;

// Re-export core types
pub use client::{AgaveClient, ClientConfig, DEFAULT_API_URL, DEFAULT_API_VERSION, DEFAULT_TIMEOUT};
pub use context::{Credentials, RequestContext, RequestOptions, Requirement};
pub use error::{AgaveError, Credential, Result};
pub use pagination::{into_page_items, page_items, PaginationParams};

// Re-export traits
pub use traits::{Get, List, Resource, DEFAULT_PAGE_SIZE};

// Re-export models
pub use models::{
    Contact, Drawing, File, Folder, Project, Rfi, SpecificationSection, Submittal, Vendor,
};

// Re-export convenience functions
pub use link::{create_link_token, exchange_public_token};
pub use tree::{build_file_tree, record_id, FILES_KEY, FOLDERS_KEY};
