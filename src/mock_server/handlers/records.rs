//! Handlers for the plain record endpoints (projects, RFIs, drawings, ...).

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::auth::{authorize, not_found};
use crate::mock_server::state::SharedState;
use crate::models::Drawing;
use crate::traits::Resource;
use crate::Record;

const DEFAULT_PER_PAGE: usize = 100;

/// Query parameters for list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

fn paginate(records: &[Record], query: &PageQuery) -> Record {
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query.per_page.unwrap_or(DEFAULT_PER_PAGE);

    let start = (page - 1).saturating_mul(per_page);
    let data: Vec<Record> = records.iter().skip(start).take(per_page).cloned().collect();

    serde_json::json!({
        "data": data,
        "pagination": {
            "page": page,
            "per_page": per_page,
            "total": records.len(),
        }
    })
}

/// GET /{resource}
pub async fn list_records<R: Resource + Send + Sync + 'static>(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers, R::PROJECT_ID) {
        return rejection;
    }

    let body = paginate(state.list_records(R::PATH), &query);
    (StatusCode::OK, Json(body)).into_response()
}

/// GET /{resource}/{id}
pub async fn get_record<R: Resource + Send + Sync + 'static>(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers, R::PROJECT_ID) {
        return rejection;
    }

    match state.get_record(R::PATH, &id) {
        Some(record) => (StatusCode::OK, Json(record.clone())).into_response(),
        None => not_found(R::PATH, &id),
    }
}

/// GET /drawings/{id}/versions
pub async fn list_drawing_versions(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<PageQuery>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers, Drawing::PROJECT_ID) {
        return rejection;
    }

    match state.drawing_versions.get(&id) {
        Some(versions) => (StatusCode::OK, Json(paginate(versions, &query))).into_response(),
        None => not_found("drawing", &id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginate() {
        let records: Vec<Record> = (0..5).map(|i| json!({ "id": i })).collect();

        let page = paginate(
            &records,
            &PageQuery {
                page: Some(2),
                per_page: Some(2),
            },
        );
        assert_eq!(page["data"], json!([{ "id": 2 }, { "id": 3 }]));
        assert_eq!(page["pagination"]["total"], 5);

        let past_end = paginate(
            &records,
            &PageQuery {
                page: Some(9),
                per_page: Some(2),
            },
        );
        assert_eq!(past_end["data"], json!([]));

        let defaults = paginate(&records, &PageQuery::default());
        assert_eq!(defaults["data"].as_array().unwrap().len(), 5);
    }
}
