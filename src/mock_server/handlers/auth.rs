//! Credential header checks shared by the handlers.

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::context::{Requirement, ACCOUNT_TOKEN_HEADER, PROJECT_ID_HEADER};
use crate::mock_server::state::MockState;

const CLIENT_ID_HEADER: &str = "client-id";
const CLIENT_SECRET_HEADER: &str = "client-secret";

pub(super) fn error(status: StatusCode, error: &str, message: String) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": error,
            "message": message,
        })),
    )
        .into_response()
}

pub(super) fn not_found(what: &str, id: &str) -> Response {
    error(
        StatusCode::NOT_FOUND,
        "Not found",
        format!("No {what} found with id: {id}"),
    )
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Check the client credentials sent with every request.
pub(super) fn require_client(headers: &HeaderMap) -> Result<(), Response> {
    if header(headers, CLIENT_ID_HEADER).is_none()
        || header(headers, CLIENT_SECRET_HEADER).is_none()
    {
        return Err(error(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Client-Id and Client-Secret headers are required".to_string(),
        ));
    }
    Ok(())
}

/// Check the client credentials, account token and project id.
///
/// Returns the project id sent, if any.
pub(super) fn authorize(
    state: &MockState,
    headers: &HeaderMap,
    project: Requirement,
) -> Result<Option<String>, Response> {
    require_client(headers)?;

    let token = header(headers, ACCOUNT_TOKEN_HEADER).ok_or_else(|| {
        error(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            "Account-Token header is required".to_string(),
        )
    })?;
    if let Some(ref required) = state.required_token {
        if token != required {
            return Err(error(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Account-Token is not valid".to_string(),
            ));
        }
    }

    let project_id = header(headers, PROJECT_ID_HEADER).map(str::to_string);
    if project == Requirement::Required && project_id.is_none() {
        return Err(error(
            StatusCode::BAD_REQUEST,
            "Bad request",
            "Project-Id header is required".to_string(),
        ));
    }
    Ok(project_id)
}
