//! Projects.

use async_trait::async_trait;

use crate::client::AgaveClient;
use crate::context::{RequestOptions, Requirement};
use crate::error::{AgaveError, Credential, Result};
use crate::traits::{Get, List, Resource};
use crate::Record;

/// A project in the connected account.
///
/// Listing projects only needs an account token. The stored project id, if
/// any, is still sent so the server can scope the response. Fetching a
/// single project sends its own id as the project id, and the client adopts
/// it as the stored default.
#[derive(Debug, Clone, Copy)]
pub struct Project;

impl Resource for Project {
    const PATH: &'static str = "projects";
    const PROJECT_ID: Requirement = Requirement::Optional;
}

#[async_trait]
impl Get for Project {
    async fn get(client: &mut AgaveClient, id: &str, options: &RequestOptions) -> Result<Record> {
        let scoped = options.clone().project_id(id);
        let ctx = client.request_context(&scoped, Self::PROJECT_ID)?;
        client.get(&Self::item_path(id), &ctx).await
    }
}

#[async_trait]
impl List for Project {}

impl Project {
    /// Fetch the active project: the one passed in `options`, or else the
    /// one stored on the client.
    ///
    /// # Errors
    ///
    /// Returns [`AgaveError::MissingCredential`] if no project id is known,
    /// or any error from the request itself.
    pub async fn current(client: &mut AgaveClient, options: &RequestOptions) -> Result<Record> {
        let ctx = client.request_context(options, Requirement::Required)?;
        let project_id = ctx
            .project_id()
            .ok_or(AgaveError::MissingCredential(Credential::ProjectId))?
            .to_string();
        client.get(&Self::item_path(&project_id), &ctx).await
    }
}
