//! Account linking.
//!
//! Linking an end user's construction account takes two independent calls:
//! create a link token for the front-end flow, then exchange the public
//! token it hands back for an account token. Neither call reads or stores
//! account credentials; adopt the result with
//! [`AgaveClient::set_account_token`](crate::AgaveClient::set_account_token).

use serde::Serialize;

use crate::client::AgaveClient;
use crate::error::Result;
use crate::Record;

#[derive(Debug, Serialize)]
struct CreateLinkToken<'a> {
    reference_id: &'a str,
}

#[derive(Debug, Serialize)]
struct ExchangePublicToken<'a> {
    public_token: &'a str,
}

/// Create a link token tied to `reference_id`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_link_token(client: &AgaveClient, reference_id: &str) -> Result<Record> {
    client
        .post_form("link/token/create", &CreateLinkToken { reference_id })
        .await
}

/// Exchange the public token returned by the link flow for an account token.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn exchange_public_token(client: &AgaveClient, public_token: &str) -> Result<Record> {
    client
        .post_form("link/token/exchange", &ExchangePublicToken { public_token })
        .await
}
