//! Agave API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Higher-level operations are implemented via traits on resource types.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use url::Url;

use crate::context::{Credentials, RequestContext, RequestOptions, Requirement};
use crate::error::{AgaveError, Result};
use crate::Record;

/// Default base URL of the Agave API.
pub const DEFAULT_API_URL: &str = "https://api.agaveapi.com";
/// API version sent with every request unless configured otherwise.
pub const DEFAULT_API_VERSION: &str = "2021-11-21";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("agaveapi/", env!("CARGO_PKG_VERSION"));

const API_VERSION_HEADER: &str = "api-version";
const CLIENT_ID_HEADER: &str = "client-id";
const CLIENT_SECRET_HEADER: &str = "client-secret";

/// Settings used to build an [`AgaveClient`].
#[derive(Clone)]
pub struct ClientConfig {
    /// Agave client id.
    pub client_id: String,
    /// Agave client secret.
    pub client_secret: String,
    /// Initial account token, if already linked.
    pub account_token: Option<String>,
    /// Initial project id.
    pub project_id: Option<String>,
    /// Base URL for the Agave API.
    pub base_url: String,
    /// Value of the `API-Version` header.
    pub api_version: String,
    /// Deadline for each request, including reading the body.
    pub timeout: Duration,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("client_id", &self.client_id)
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Configuration with default URL, API version and timeout.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            account_token: None,
            project_id: None,
            base_url: DEFAULT_API_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read configuration from environment variables.
    ///
    /// Requires `AGAVE_CLIENT_ID` and `AGAVE_CLIENT_SECRET`. Optionally reads
    /// `AGAVE_ACCOUNT_TOKEN`, `AGAVE_PROJECT_ID`, `AGAVE_API_URL`,
    /// `AGAVE_API_VERSION` and `AGAVE_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set or the timeout is
    /// not a whole number of seconds.
    pub fn from_env() -> Result<Self> {
        let client_id = required_var("AGAVE_CLIENT_ID")?;
        let client_secret = required_var("AGAVE_CLIENT_SECRET")?;

        let mut config = Self::new(client_id, client_secret);
        config.account_token = env::var("AGAVE_ACCOUNT_TOKEN").ok();
        config.project_id = env::var("AGAVE_PROJECT_ID").ok();

        if let Ok(url) = env::var("AGAVE_API_URL") {
            config.base_url = url;
        }
        if let Ok(version) = env::var("AGAVE_API_VERSION") {
            config.api_version = version;
        }
        if let Ok(secs) = env::var("AGAVE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                AgaveError::ConfigMissing(format!(
                    "AGAVE_TIMEOUT_SECS must be a number of seconds, got '{secs}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| AgaveError::ConfigMissing(format!("{name} environment variable not set")))
}

/// Low-level Agave API client.
///
/// Sends the client credentials on every request and keeps the account
/// token and project id defaults used by resource accessors. Accessors take
/// `&mut AgaveClient` because resolving a passed credential stores it.
///
/// Clones share the underlying connection pool but carry their own copy of
/// the stored credentials.
///
/// # Example
///
/// ```no_run
/// use agaveapi::AgaveClient;
///
/// # fn example() -> agaveapi::Result<()> {
/// // Create from environment variables
/// let client = AgaveClient::from_env()?;
///
/// // Or configure manually
/// let mut client = AgaveClient::new("client-id", "client-secret")?;
/// client.set_account_token("account-token");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct AgaveClient {
    http: Client,
    base_url: Arc<Url>,
    timeout: Duration,
    credentials: Credentials,
}

impl std::fmt::Debug for AgaveClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgaveClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

impl AgaveClient {
    /// Create a client from environment variables.
    ///
    /// See [`ClientConfig::from_env`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if the client id or secret is not set.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    /// Create a client for the production API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials cannot be sent as headers.
    pub fn new(client_id: &str, client_secret: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(client_id, client_secret))
    }

    /// Create a client from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the credentials cannot
    /// be sent as headers.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if config.base_url.ends_with('/') {
            config.base_url.clone()
        } else {
            format!("{}/", config.base_url)
        };
        let base_url = Url::parse(&base_url_str)?;

        let mut headers = HeaderMap::new();
        headers.insert(API_VERSION_HEADER, HeaderValue::from_str(&config.api_version)?);
        headers.insert(CLIENT_ID_HEADER, HeaderValue::from_str(&config.client_id)?);
        let mut secret = HeaderValue::from_str(&config.client_secret)?;
        secret.set_sensitive(true);
        headers.insert(CLIENT_SECRET_HEADER, secret);

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .build()
            .map_err(AgaveError::TransportError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            timeout: config.timeout,
            credentials: Credentials::new(config.account_token, config.project_id),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The stored account token and project id defaults.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Store the account token used when a call does not pass one.
    pub fn set_account_token(&mut self, token: impl Into<String>) {
        self.credentials.set_account_token(token);
    }

    /// Store the project id used when a call does not pass one.
    pub fn set_project_id(&mut self, project_id: impl Into<String>) {
        self.credentials.set_project_id(project_id);
    }

    /// Resolve the credentials for one call, adopting any overrides.
    ///
    /// # Errors
    ///
    /// Returns [`AgaveError::MissingCredential`] if the account token, or a
    /// required project id, is unknown.
    pub fn request_context(
        &mut self,
        options: &RequestOptions,
        project: Requirement,
    ) -> Result<RequestContext> {
        self.credentials.request_context(options, project)
    }

    /// Make a GET request and parse the JSON body.
    #[tracing::instrument(skip(self, ctx))]
    pub async fn get(&self, path: &str, ctx: &RequestContext) -> Result<Record> {
        let url = self.base_url.join(path)?;
        let request = self.http.get(url).headers(ctx.headers().clone());
        self.send_json(request).await
    }

    /// Make a GET request with query parameters and parse the JSON body.
    #[tracing::instrument(skip(self, ctx, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        ctx: &RequestContext,
        query: &Q,
    ) -> Result<Record> {
        let url = self.base_url.join(path)?;
        let request = self.http.get(url).headers(ctx.headers().clone()).query(query);
        self.send_json(request).await
    }

    /// Make a POST request with a form body and parse the JSON response.
    ///
    /// Only the client's default headers are sent.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_form<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Record> {
        let url = self.base_url.join(path)?;
        let request = self.http.post(url).form(body);
        self.send_json(request).await
    }

    async fn send_json(&self, request: RequestBuilder) -> Result<Record> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        let response = Self::check_response(response).await?;
        let body = response.text().await.map_err(|e| self.transport_error(e))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn transport_error(&self, error: reqwest::Error) -> AgaveError {
        if error.is_timeout() {
            AgaveError::RequestTimeout {
                timeout: self.timeout,
            }
        } else {
            AgaveError::TransportError(error)
        }
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let message = Self::extract_error_message(response, status).await;
        Err(AgaveError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) if !b.is_empty() => b,
            _ => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_debug() {
        let mut client = AgaveClient::new("test-id", "test-secret").unwrap();
        client.set_account_token("test-token");
        let debug = format!("{:?}", client);
        assert!(debug.contains("AgaveClient"));
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("test-secret"));
        assert!(!debug.contains("test-token"));
    }

    #[test]
    fn test_config_debug_hides_secret() {
        let config = ClientConfig::new("id", "hunter2").with_account_token("acct");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains("acct"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client1 = AgaveClient::with_config(
            ClientConfig::new("id", "secret").with_base_url("https://api.agaveapi.com"),
        )
        .unwrap();
        let client2 = AgaveClient::with_config(
            ClientConfig::new("id", "secret").with_base_url("https://api.agaveapi.com/"),
        )
        .unwrap();
        assert_eq!(client1.base_url().as_str(), client2.base_url().as_str());
    }

    #[test]
    fn test_defaults() {
        let client = AgaveClient::new("id", "secret").unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.agaveapi.com/");
        assert_eq!(client.timeout(), Duration::from_secs(30));
        assert_eq!(client.credentials().account_token(), None);
        assert_eq!(client.credentials().project_id(), None);
    }

    #[test]
    fn test_config_seeds_credentials() {
        let config = ClientConfig::new("id", "secret")
            .with_account_token("acct")
            .with_project_id("proj-1");
        let client = AgaveClient::with_config(config).unwrap();
        assert_eq!(client.credentials().account_token(), Some("acct"));
        assert_eq!(client.credentials().project_id(), Some("proj-1"));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::new("id", "secret").with_base_url("not a url");
        let result = AgaveClient::with_config(config);
        assert!(matches!(result, Err(AgaveError::UrlError(_))));
    }
}
