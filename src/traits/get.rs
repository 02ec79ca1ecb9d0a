//! Get trait for fetching single records.

use async_trait::async_trait;

use crate::client::AgaveClient;
use crate::context::RequestOptions;
use crate::error::Result;
use crate::traits::Resource;
use crate::Record;

/// Fetch a single record by ID.
///
/// The default implementation requests `{PATH}/{id}` with the credentials
/// resolved for [`Resource::PROJECT_ID`].
///
/// # Example
///
/// ```ignore
/// use agaveapi::{AgaveClient, Get, RequestOptions, Rfi};
///
/// let mut client = AgaveClient::from_env()?;
/// let rfi = Rfi::get(&mut client, "rfi-id", &RequestOptions::default()).await?;
/// ```
#[async_trait]
pub trait Get: Resource {
    /// Fetch the record by ID.
    ///
    /// # Arguments
    ///
    /// * `client` - The Agave API client
    /// * `id` - The record identifier
    /// * `options` - Credential overrides and source-field hints
    ///
    /// # Errors
    ///
    /// Returns an error if a required credential is missing or the request fails.
    async fn get(client: &mut AgaveClient, id: &str, options: &RequestOptions) -> Result<Record> {
        let ctx = client.request_context(options, Self::PROJECT_ID)?;
        client.get(&Self::item_path(id), &ctx).await
    }
}
