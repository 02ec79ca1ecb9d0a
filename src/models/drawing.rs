//! Drawings and their revisions.

use async_trait::async_trait;

use crate::client::AgaveClient;
use crate::context::{RequestOptions, Requirement};
use crate::error::Result;
use crate::pagination::PaginationParams;
use crate::traits::{Get, List, Resource};
use crate::Record;

/// A drawing sheet within a project.
#[derive(Debug, Clone, Copy)]
pub struct Drawing;

impl Resource for Drawing {
    const PATH: &'static str = "drawings";
    const PROJECT_ID: Requirement = Requirement::Required;
}

#[async_trait]
impl Get for Drawing {}

#[async_trait]
impl List for Drawing {}

impl Drawing {
    /// List the versions of one drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if a required credential is missing or the request fails.
    pub async fn versions(
        client: &mut AgaveClient,
        drawing_id: &str,
        pagination: &PaginationParams,
        options: &RequestOptions,
    ) -> Result<Record> {
        let ctx = client.request_context(options, Self::PROJECT_ID)?;
        let path = format!("{}/versions", Self::item_path(drawing_id));
        client.get_with_query(&path, &ctx, pagination).await
    }
}
