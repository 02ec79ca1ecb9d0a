//! Pagination utilities for Agave list endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{AgaveError, Result};
use crate::Record;

/// Query parameters for paginated requests.
///
/// Unset fields are left off the query string so the server applies its
/// own defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// Page number (1-indexed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of items per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
}

impl PaginationParams {
    /// Create pagination params for a specific page.
    #[must_use]
    pub fn for_page(page: u32, per_page: u32) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Whether any parameter would be sent.
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.per_page.is_none()
    }
}

/// Borrow the `data` array of a list response.
pub fn page_items(page: &Record) -> Result<&Vec<Record>> {
    page.get("data").and_then(Record::as_array).ok_or_else(|| {
        AgaveError::UnexpectedResponse("list response has no 'data' array".to_string())
    })
}

/// Take ownership of the `data` array of a list response.
pub fn into_page_items(mut page: Record) -> Result<Vec<Record>> {
    match page.get_mut("data").map(Record::take) {
        Some(Record::Array(items)) => Ok(items),
        _ => Err(AgaveError::UnexpectedResponse(
            "list response has no 'data' array".to_string(),
        )),
    }
}
