//! Telegraph REST API client.
//!
//! Sync HTTP client for the Telegraph publishing API at
//! `https://api.telegra.ph`. Every method is a form POST to
//! `/{method}` or `/{method}/{path}`, answered by a JSON envelope of the
//! shape `{ ok, result?, error? }`.

mod account;
mod pages;

use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::error::TelegraphError;

pub use account::AccountField;

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Telegraph API endpoint.
const BASE_URL: &str = "https://api.telegra.ph";

/// Telegraph API client.
///
/// Holds an optional access token that is attached to every call. A
/// token-less client can still create accounts and fetch public pages.
pub struct Telegraph {
    agent: Agent,
    base_url: String,
    access_token: Option<String>,
}

impl Telegraph {
    /// Create a client with no access token.
    #[must_use]
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: BASE_URL.to_owned(),
            access_token: None,
        }
    }

    /// Create a client using an existing access token.
    #[must_use]
    pub fn with_access_token(token: impl Into<String>) -> Self {
        let mut client = Self::new();
        client.access_token = Some(token.into());
        client
    }

    /// Current access token, if any.
    ///
    /// Replaced automatically by [`Telegraph::revoke_access_token`] and,
    /// when requested, by [`Telegraph::create_account`].
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Call one API method, skipping unset values.
    pub(crate) fn method<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        values: &[(&str, Option<String>)],
    ) -> Result<T, TelegraphError> {
        let url = if path.is_empty() {
            format!("{}/{method}", self.base_url)
        } else {
            format!("{}/{method}/{path}", self.base_url)
        };

        let mut form: Vec<(&str, &str)> = Vec::with_capacity(values.len() + 1);
        if let Some(token) = &self.access_token {
            form.push(("access_token", token));
        }
        for (name, value) in values {
            if let Some(value) = value {
                form.push((name, value));
            }
        }

        debug!("POST {url}");
        let response = self.agent.post(&url).send_form(form)?;
        let envelope: ApiResponse<T> = response.into_body().read_json()?;

        if envelope.ok {
            envelope
                .result
                .ok_or_else(|| TelegraphError::Api("missing result field".to_owned()))
        } else {
            Err(TelegraphError::from_api(
                envelope.error.unwrap_or_else(|| "unknown error".to_owned()),
            ))
        }
    }
}

impl Default for Telegraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Envelope wrapping every API response.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct ApiResponse<T> {
    ok: bool,
    #[serde(default)]
    result: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageViews;

    #[test]
    fn test_envelope_with_result() {
        let envelope: ApiResponse<PageViews> =
            serde_json::from_str(r#"{"ok":true,"result":{"views":40}}"#).unwrap();
        assert!(envelope.ok);
        assert_eq!(envelope.result.unwrap().views, 40);
    }

    #[test]
    fn test_envelope_with_error() {
        let envelope: ApiResponse<PageViews> =
            serde_json::from_str(r#"{"ok":false,"error":"PAGE_NOT_FOUND"}"#).unwrap();
        assert!(!envelope.ok);
        assert_eq!(envelope.error.as_deref(), Some("PAGE_NOT_FOUND"));
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_client_starts_without_token() {
        assert_eq!(Telegraph::new().access_token(), None);
        assert_eq!(
            Telegraph::with_access_token("abc").access_token(),
            Some("abc")
        );
    }
}
