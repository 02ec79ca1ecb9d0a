//! List trait for fetching collections of records.

use async_trait::async_trait;

use crate::client::AgaveClient;
use crate::context::RequestOptions;
use crate::error::Result;
use crate::pagination::{into_page_items, PaginationParams};
use crate::traits::Resource;
use crate::Record;

/// Page size used by [`List::list_all`].
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// List records with pagination support.
///
/// # Example
///
/// ```ignore
/// use agaveapi::{AgaveClient, List, PaginationParams, RequestOptions, Submittal};
///
/// let mut client = AgaveClient::from_env()?;
///
/// // Fetch a single page
/// let page = Submittal::list_page(
///     &mut client,
///     &PaginationParams::for_page(1, 50),
///     &RequestOptions::default(),
/// ).await?;
///
/// // Fetch all pages
/// let all = Submittal::list_all(&mut client, &RequestOptions::default()).await?;
/// ```
#[async_trait]
pub trait List: Resource {
    /// Fetch one page, returning the response body as sent by the server.
    ///
    /// Only the pagination fields that are set are sent.
    ///
    /// # Errors
    ///
    /// Returns an error if a required credential is missing or the request fails.
    async fn list_page(
        client: &mut AgaveClient,
        pagination: &PaginationParams,
        options: &RequestOptions,
    ) -> Result<Record> {
        let ctx = client.request_context(options, Self::PROJECT_ID)?;
        client.get_with_query(Self::PATH, &ctx, pagination).await
    }

    /// Fetch every page and concatenate their `data` entries.
    ///
    /// Stops at the first page with fewer than [`DEFAULT_PAGE_SIZE`] entries.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails or a page has no `data` array.
    async fn list_all(client: &mut AgaveClient, options: &RequestOptions) -> Result<Vec<Record>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let pagination = PaginationParams::for_page(page, DEFAULT_PAGE_SIZE);
            let response = Self::list_page(client, &pagination, options).await?;
            let items = into_page_items(response)?;
            let items_count = items.len();
            all_items.extend(items);

            if items_count < DEFAULT_PAGE_SIZE as usize {
                break;
            }
            page += 1;

            if page > MAX_PAGES {
                tracing::warn!(
                    resource = Self::PATH,
                    "Reached pagination limit of {} pages, stopping",
                    MAX_PAGES
                );
                break;
            }
        }

        Ok(all_items)
    }
}
