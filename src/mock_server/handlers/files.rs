//! Handlers for files and folders.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use super::auth::{authorize, error, not_found};
use crate::context::Requirement;
use crate::mock_server::state::SharedState;
use crate::models::{File, Folder};
use crate::traits::Resource;

/// GET /files/{id}
pub async fn get_file(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers, File::PROJECT_ID) {
        return rejection;
    }

    match state.get_file(&id) {
        Some(file) => (StatusCode::OK, Json(file.clone())).into_response(),
        None => not_found("file", &id),
    }
}

/// GET /folders/{id}
pub async fn get_folder(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers, Folder::PROJECT_ID) {
        return rejection;
    }

    match state.get_folder(&id) {
        Some(folder) => (StatusCode::OK, Json(folder.clone())).into_response(),
        None => not_found("folder", &id),
    }
}

/// GET /folders/{id}/files
pub async fn list_folder_files(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    let state = state.read().await;
    if let Err(rejection) = authorize(&state, &headers, Folder::PROJECT_ID) {
        return rejection;
    }

    match state.folder_files(&id) {
        Some(files) => (StatusCode::OK, Json(files)).into_response(),
        None => not_found("folder", &id),
    }
}

/// GET /root-folder
pub async fn get_root_folder(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let state = state.read().await;
    let project_id = match authorize(&state, &headers, Requirement::Required) {
        Ok(Some(project_id)) => project_id,
        Ok(None) => {
            return error(
                StatusCode::BAD_REQUEST,
                "Bad request",
                "Project-Id header is required".to_string(),
            )
        }
        Err(rejection) => return rejection,
    };

    match state.get_root_folder(&project_id) {
        Some(folder) => (StatusCode::OK, Json(folder.clone())).into_response(),
        None => not_found("root folder for project", &project_id),
    }
}
