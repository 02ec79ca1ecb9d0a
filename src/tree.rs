//! Recursive folder-tree assembly.
//!
//! Each folder fetch returns the folder with stubs for its direct
//! subfolders and the files it contains. The tree is built by fetching
//! every subfolder in turn and merging the result over its stub.

use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;

use crate::client::AgaveClient;
use crate::context::RequestOptions;
use crate::error::{AgaveError, Result};
use crate::models::Folder;
use crate::traits::Get;
use crate::Record;

/// Key holding a folder's subfolders.
pub const FOLDERS_KEY: &str = "folders";
/// Key holding a folder's files.
pub const FILES_KEY: &str = "files";

type TreeFuture<'a> = Pin<Box<dyn Future<Output = Result<Record>> + Send + 'a>>;

/// Build the folder tree below `folder_id`, or below the active project's
/// root folder when `folder_id` is `None`.
///
/// Subfolders keep the order the server returned them in. Any failed fetch
/// aborts the whole build. The same folder may appear under several
/// branches; only a folder that contains itself is rejected.
///
/// # Errors
///
/// Returns [`AgaveError::MissingCredential`] if the root folder is requested
/// without a known project id, [`AgaveError::FolderCycle`] if a folder is
/// its own ancestor, [`AgaveError::UnexpectedResponse`] if a subfolder has no
/// id, or any error from the underlying requests.
#[tracing::instrument(skip(client, options))]
pub async fn build_file_tree(
    client: &mut AgaveClient,
    folder_id: Option<&str>,
    options: &RequestOptions,
) -> Result<Record> {
    let mut ancestors = HashSet::new();
    if let Some(id) = folder_id {
        ancestors.insert(id.to_string());
    }
    expand(client, folder_id.map(str::to_string), options, &mut ancestors).await
}

fn expand<'a>(
    client: &'a mut AgaveClient,
    folder_id: Option<String>,
    options: &'a RequestOptions,
    ancestors: &'a mut HashSet<String>,
) -> TreeFuture<'a> {
    Box::pin(async move {
        let mut folder = match folder_id {
            Some(ref id) => Folder::get(client, id, options).await?,
            None => {
                let root = Folder::root(client, options).await?;
                if let Some(id) = record_id(&root) {
                    ancestors.insert(id);
                }
                root
            }
        };

        if let Some(children) = folder.get_mut(FOLDERS_KEY).and_then(Record::as_array_mut) {
            tracing::debug!(
                folder_id = folder_id.as_deref().unwrap_or("<root>"),
                subfolders = children.len(),
                "expanding folder"
            );

            for child in children.iter_mut() {
                let child_id = record_id(child).ok_or_else(|| {
                    AgaveError::UnexpectedResponse("subfolder entry has no 'id'".to_string())
                })?;
                if !ancestors.insert(child_id.clone()) {
                    return Err(AgaveError::FolderCycle {
                        folder_id: child_id,
                    });
                }

                let subtree =
                    expand(&mut *client, Some(child_id.clone()), options, &mut *ancestors).await?;
                ancestors.remove(&child_id);
                merge_into(child, subtree);
            }
        }

        Ok(folder)
    })
}

/// The `id` of a record, accepting string or numeric ids.
pub fn record_id(record: &Record) -> Option<String> {
    match record.get("id")? {
        Record::String(s) => Some(s.clone()),
        Record::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Overlay `full` onto `stub`, keeping stub fields the full record lacks.
fn merge_into(stub: &mut Record, full: Record) {
    match (stub, full) {
        (Record::Object(stub), Record::Object(full)) => {
            for (key, value) in full {
                stub.insert(key, value);
            }
        }
        (stub, full) => *stub = full,
    }
}
