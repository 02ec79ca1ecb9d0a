//! Files and folders.

use async_trait::async_trait;

use crate::client::AgaveClient;
use crate::context::{RequestOptions, Requirement};
use crate::error::Result;
use crate::traits::{Get, Resource};
use crate::Record;

/// A document stored in a project's file area.
#[derive(Debug, Clone, Copy)]
pub struct File;

impl Resource for File {
    const PATH: &'static str = "files";
    const PROJECT_ID: Requirement = Requirement::Optional;
}

#[async_trait]
impl Get for File {}

/// A folder in a project's file area.
///
/// A folder record embeds its direct subfolders under `folders` and its
/// files under `files`. Use [`Folder::tree`] to expand every level.
#[derive(Debug, Clone, Copy)]
pub struct Folder;

impl Resource for Folder {
    const PATH: &'static str = "folders";
    const PROJECT_ID: Requirement = Requirement::Optional;
}

#[async_trait]
impl Get for Folder {}

impl Folder {
    /// List the files directly inside a folder.
    ///
    /// # Errors
    ///
    /// Returns an error if the account token is missing or the request fails.
    pub async fn files(
        client: &mut AgaveClient,
        folder_id: &str,
        options: &RequestOptions,
    ) -> Result<Record> {
        let ctx = client.request_context(options, Self::PROJECT_ID)?;
        let path = format!("{}/files", Self::item_path(folder_id));
        client.get(&path, &ctx).await
    }

    /// Fetch the root folder of the active project.
    ///
    /// # Errors
    ///
    /// Returns an error if no project id is known or the request fails.
    pub async fn root(client: &mut AgaveClient, options: &RequestOptions) -> Result<Record> {
        let ctx = client.request_context(options, Requirement::Required)?;
        client.get("root-folder", &ctx).await
    }

    /// Build the full folder tree below `folder_id`, or below the project's
    /// root folder when `folder_id` is `None`.
    ///
    /// See [`crate::build_file_tree`].
    pub async fn tree(
        client: &mut AgaveClient,
        folder_id: Option<&str>,
        options: &RequestOptions,
    ) -> Result<Record> {
        crate::tree::build_file_tree(client, folder_id, options).await
    }
}
