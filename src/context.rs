//! Per-request credential resolution.
//!
//! Account tokens and project ids can be passed with each call or stored on
//! the client. [`Credentials`] decides which one a call uses, and
//! [`RequestContext`] carries the result into a single request's headers.

use reqwest::header::{HeaderMap, HeaderValue};

use crate::error::{AgaveError, Credential, Result};

pub(crate) const ACCOUNT_TOKEN_HEADER: &str = "account-token";
pub(crate) const PROJECT_ID_HEADER: &str = "project-id";
pub(crate) const INCLUDE_SOURCE_DATA_HEADER: &str = "include-source-data";

/// Whether a call needs a project id to be resolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Fail with [`AgaveError::MissingCredential`] if no project id is known.
    Required,
    /// Send the project id when one is known, omit the header otherwise.
    Optional,
}

/// Options accepted by every endpoint accessor.
///
/// Credentials given here take precedence over the ones stored on the
/// client, and are adopted as the client's new defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Upstream-source fields to embed in the response (`Include-Source-Data`).
    pub include_source_fields: Vec<String>,
    /// Account token override.
    pub account_token: Option<String>,
    /// Project id override.
    pub project_id: Option<String>,
}

impl RequestOptions {
    /// Request the given source fields.
    #[must_use]
    pub fn include<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_source_fields
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Use this account token for the call (and from then on).
    #[must_use]
    pub fn account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = Some(token.into());
        self
    }

    /// Use this project id for the call (and from then on).
    #[must_use]
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = Some(project_id.into());
        self
    }
}

/// Account token and project id defaults held by a client.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    account_token: Option<String>,
    project_id: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_token", &self.account_token.as_ref().map(|_| "<redacted>"))
            .field("project_id", &self.project_id)
            .finish()
    }
}

impl Credentials {
    pub fn new(account_token: Option<String>, project_id: Option<String>) -> Self {
        Self {
            account_token,
            project_id,
        }
    }

    pub fn account_token(&self) -> Option<&str> {
        self.account_token.as_deref()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn set_account_token(&mut self, token: impl Into<String>) {
        tracing::debug!("account token set");
        self.account_token = Some(token.into());
    }

    pub fn set_project_id(&mut self, project_id: impl Into<String>) {
        let project_id = project_id.into();
        tracing::debug!(project_id = %project_id, "project id set");
        self.project_id = Some(project_id);
    }

    /// Resolve the account token for a call.
    ///
    /// An override is adopted as the stored default before it is returned.
    pub fn resolve_account_token(&mut self, override_token: Option<&str>) -> Result<String> {
        if let Some(token) = override_token {
            self.set_account_token(token);
        }
        self.account_token
            .clone()
            .ok_or(AgaveError::MissingCredential(Credential::AccountToken))
    }

    /// Resolve the project id for a call.
    ///
    /// Returns `Ok(None)` only when the project id is optional and unknown.
    pub fn resolve_project_id(
        &mut self,
        override_id: Option<&str>,
        requirement: Requirement,
    ) -> Result<Option<String>> {
        if let Some(project_id) = override_id {
            self.set_project_id(project_id);
        }
        match (&self.project_id, requirement) {
            (Some(id), _) => Ok(Some(id.clone())),
            (None, Requirement::Required) => {
                Err(AgaveError::MissingCredential(Credential::ProjectId))
            }
            (None, Requirement::Optional) => Ok(None),
        }
    }

    /// Resolve everything a call needs and freeze it into a [`RequestContext`].
    ///
    /// Nothing is adopted unless the whole resolution succeeds, including
    /// turning every value into a valid header.
    pub fn request_context(
        &mut self,
        options: &RequestOptions,
        project: Requirement,
    ) -> Result<RequestContext> {
        let mut resolved = self.clone();
        let account_token = resolved.resolve_account_token(options.account_token.as_deref())?;
        let project_id = resolved.resolve_project_id(options.project_id.as_deref(), project)?;
        let include_source_data = join_fields(&options.include_source_fields);

        let headers = build_headers(
            &account_token,
            project_id.as_deref(),
            include_source_data.as_deref(),
        )?;
        *self = resolved;

        Ok(RequestContext {
            headers,
            project_id,
            include_source_data,
        })
    }
}

/// The credentials and hints for exactly one request.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestContext {
    headers: HeaderMap,
    project_id: Option<String>,
    include_source_data: Option<String>,
}

impl std::fmt::Debug for RequestContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("project_id", &self.project_id)
            .field("include_source_data", &self.include_source_data)
            .finish_non_exhaustive()
    }
}

impl RequestContext {
    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn include_source_data(&self) -> Option<&str> {
        self.include_source_data.as_deref()
    }

    /// Headers to add on top of the client's default headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

fn build_headers(
    account_token: &str,
    project_id: Option<&str>,
    include_source_data: Option<&str>,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    let mut token = HeaderValue::from_str(account_token)?;
    token.set_sensitive(true);
    headers.insert(ACCOUNT_TOKEN_HEADER, token);

    if let Some(project_id) = project_id {
        headers.insert(PROJECT_ID_HEADER, HeaderValue::from_str(project_id)?);
    }
    if let Some(fields) = include_source_data {
        headers.insert(INCLUDE_SOURCE_DATA_HEADER, HeaderValue::from_str(fields)?);
    }

    Ok(headers)
}

fn join_fields(fields: &[String]) -> Option<String> {
    if fields.is_empty() {
        None
    } else {
        Some(fields.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_account_token() {
        let mut creds = Credentials::default();
        let err = creds.resolve_account_token(None).unwrap_err();
        assert!(matches!(
            err,
            AgaveError::MissingCredential(Credential::AccountToken)
        ));
    }

    #[test]
    fn test_override_is_adopted() {
        let mut creds = Credentials::default();
        assert_eq!(creds.resolve_account_token(Some("tok-1")).unwrap(), "tok-1");
        assert_eq!(creds.resolve_account_token(None).unwrap(), "tok-1");
        assert_eq!(creds.account_token(), Some("tok-1"));
    }

    #[test]
    fn test_override_replaces_stored_value() {
        let mut creds = Credentials::new(Some("old".to_string()), Some("p-old".to_string()));
        assert_eq!(creds.resolve_account_token(Some("new")).unwrap(), "new");
        assert_eq!(
            creds
                .resolve_project_id(Some("p-new"), Requirement::Required)
                .unwrap()
                .as_deref(),
            Some("p-new")
        );
        assert_eq!(creds.project_id(), Some("p-new"));
    }

    #[test]
    fn test_project_id_requirement() {
        let mut creds = Credentials::default();
        let err = creds
            .resolve_project_id(None, Requirement::Required)
            .unwrap_err();
        assert!(matches!(
            err,
            AgaveError::MissingCredential(Credential::ProjectId)
        ));

        let optional = creds.resolve_project_id(None, Requirement::Optional).unwrap();
        assert!(optional.is_none());
    }

    #[test]
    fn test_failed_context_adopts_nothing() {
        let mut creds = Credentials::default();
        let options = RequestOptions::default().account_token("tok");

        let err = creds
            .request_context(&options, Requirement::Required)
            .unwrap_err();

        assert!(matches!(
            err,
            AgaveError::MissingCredential(Credential::ProjectId)
        ));
        assert_eq!(creds.account_token(), None);
    }

    #[test]
    fn test_context_headers() {
        let mut creds = Credentials::new(Some("tok".to_string()), None);
        let options = RequestOptions::default().include(["a", "b"]);
        let ctx = creds.request_context(&options, Requirement::Optional).unwrap();
        let headers = ctx.headers();

        assert_eq!(headers.get(ACCOUNT_TOKEN_HEADER).unwrap(), "tok");
        assert!(headers.get(ACCOUNT_TOKEN_HEADER).unwrap().is_sensitive());
        assert_eq!(headers.get(INCLUDE_SOURCE_DATA_HEADER).unwrap(), "a,b");
        assert!(headers.get(PROJECT_ID_HEADER).is_none());
    }

    #[test]
    fn test_empty_include_fields_omit_header() {
        let mut creds = Credentials::new(Some("tok".to_string()), Some("p-1".to_string()));
        let ctx = creds
            .request_context(&RequestOptions::default(), Requirement::Required)
            .unwrap();
        let headers = ctx.headers();

        assert!(headers.get(INCLUDE_SOURCE_DATA_HEADER).is_none());
        assert_eq!(headers.get(PROJECT_ID_HEADER).unwrap(), "p-1");
    }

    #[test]
    fn test_invalid_override_adopts_nothing() {
        let mut creds = Credentials::new(Some("good".to_string()), None);
        let options = RequestOptions::default().account_token("bad\ntoken");

        let err = creds
            .request_context(&options, Requirement::Optional)
            .unwrap_err();
        assert!(matches!(err, AgaveError::InvalidHeader(_)));
        assert_eq!(creds.account_token(), Some("good"));

        let invalid_project = RequestOptions::default().project_id("p\r1");
        assert!(creds
            .request_context(&invalid_project, Requirement::Required)
            .is_err());
        assert_eq!(creds.project_id(), None);

        // Later calls still use the stored token
        let ctx = creds
            .request_context(&RequestOptions::default(), Requirement::Optional)
            .unwrap();
        assert_eq!(ctx.headers().get(ACCOUNT_TOKEN_HEADER).unwrap(), "good");
    }

    #[test]
    fn test_debug_redacts_token() {
        let creds = Credentials::new(Some("secret-token".to_string()), None);
        assert!(!format!("{creds:?}").contains("secret-token"));
    }
}
