//! Selectel cloud storage authentication and container resolution.

use reqwest::Response;
use snafu::{ResultExt, ensure};

use crate::error::{AuthenticationFailedSnafu, HttpSnafu, Result};
use crate::storage::constants::{
    AUTH_KEY_HEADER, AUTH_TOKEN_HEADER, AUTH_USER_HEADER, DEFAULT_AUTH_URL, STORAGE_URL_HEADER,
};

/// Session credentials handed out by the auth endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
    pub storage_url: String,
}

/// Client for the Selectel auth handshake.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    auth_url: String,
    username: String,
    password: String,
}

impl ApiClient {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn with_auth_url(mut self, auth_url: impl Into<String>) -> Self {
        self.auth_url = auth_url.into();
        self
    }

    /// Exchange username and password for a token and the account storage url.
    pub async fn authenticate(&self) -> Result<AuthToken> {
        log::debug!(
            "authenticate user={} auth_url={}",
            self.username,
            self.auth_url
        );
        let response = self
            .http
            .get(&self.auth_url)
            .header(AUTH_USER_HEADER, &self.username)
            .header(AUTH_KEY_HEADER, &self.password)
            .send()
            .await
            .context(HttpSnafu)?;

        let status = response.status();
        ensure!(
            status.is_success(),
            AuthenticationFailedSnafu {
                message: format!("auth endpoint answered {status}"),
            }
        );

        let token = required_header(&response, AUTH_TOKEN_HEADER)?;
        let storage_url = required_header(&response, STORAGE_URL_HEADER)?;
        Ok(AuthToken { token, storage_url })
    }
}

fn required_header(response: &Response, name: &str) -> Result<String> {
    let value = response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());

    match value {
        Some(value) => Ok(value.to_string()),
        None => AuthenticationFailedSnafu {
            message: format!("auth response is missing the {name} header"),
        }
        .fail(),
    }
}

/// An authenticated storage account.
#[derive(Debug, Clone)]
pub struct CloudStorage {
    token: AuthToken,
}

impl CloudStorage {
    pub fn new(token: AuthToken) -> Self {
        Self { token }
    }

    pub fn storage_url(&self) -> &str {
        &self.token.storage_url
    }

    /// Resolve a container handle on this account.
    #[cfg(feature = "swift")]
    pub fn container(&self, name: &str) -> Result<crate::storage::container::OpenDalContainer> {
        crate::storage::container::OpenDalContainer::swift(
            &self.token.storage_url,
            name,
            &self.token.token,
        )
    }
}
