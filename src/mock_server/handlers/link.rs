//! Handlers for the link token flow.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};
use serde::Deserialize;

use super::auth::{error, require_client};
use crate::mock_server::state::SharedState;

/// Form body of `POST /link/token/create`.
#[derive(Debug, Deserialize)]
pub struct CreateLinkTokenForm {
    pub reference_id: String,
}

/// Form body of `POST /link/token/exchange`.
#[derive(Debug, Deserialize)]
pub struct ExchangePublicTokenForm {
    pub public_token: String,
}

/// POST /link/token/create
pub async fn create_link_token(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<CreateLinkTokenForm>,
) -> Response {
    if let Err(rejection) = require_client(&headers) {
        return rejection;
    }

    let mut state = state.write().await;
    state.link_references.push(form.reference_id.clone());
    let link_token = format!(
        "link-{}-{}",
        form.reference_id,
        state.link_references.len()
    );

    (
        StatusCode::OK,
        Json(serde_json::json!({ "link_token": link_token })),
    )
        .into_response()
}

/// POST /link/token/exchange
pub async fn exchange_public_token(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Form(form): Form<ExchangePublicTokenForm>,
) -> Response {
    if let Err(rejection) = require_client(&headers) {
        return rejection;
    }

    let state = state.read().await;
    match state.public_tokens.get(&form.public_token) {
        Some(account_token) => (
            StatusCode::OK,
            Json(serde_json::json!({ "account_token": account_token })),
        )
            .into_response(),
        None => error(
            StatusCode::BAD_REQUEST,
            "Bad request",
            format!("Unknown public token: {}", form.public_token),
        ),
    }
}
