//! JIRA HTTP Client
//!
//! A small, type-safe client for the three JIRA REST endpoints the marker
//! workflow needs: list projects, list a project's versions, create a version.
//!
//! The client always talks HTTPS with certificate validation enabled and
//! authenticates every request with HTTP basic auth.
//!
//! # Example
//!
//! ```no_run
//! use marker_client::JiraClient;
//! use marker_core::domain::credentials::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::new("https://jira.example.com", "ops", "secret");
//!     let client = JiraClient::from_credentials(&creds)?;
//!
//!     for project in client.list_projects().await? {
//!         println!("{}", project);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod projects;
mod tracker;
mod versions;

#[cfg(test)]
mod test_server;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use tracker::IssueTracker;

use marker_core::domain::credentials::Credentials;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

/// HTTP client for the JIRA REST API (v2)
#[derive(Clone)]
pub struct JiraClient {
    /// Base URL of the JIRA instance, always `https://host[:port]`
    base_url: String,
    username: String,
    password: String,
    /// HTTP client instance
    client: Client,
}

impl JiraClient {
    /// Build a client from operator credentials
    ///
    /// Only the host (and explicit port) of `service_url` are kept; the
    /// scheme is forced to `https` whatever the input says. No request is
    /// made here.
    ///
    /// # Errors
    /// `ClientError::Configuration` if the URL cannot be parsed, has no
    /// host, or the TLS client cannot be initialised.
    pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
        let base_url = secure_base_url(&credentials.service_url)?;

        let client = Client::builder()
            .https_only(true)
            .danger_accept_invalid_certs(false)
            .user_agent(concat!("ensure-deployed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!(base_url = %base_url, username = %credentials.username, "JIRA client configured");

        Ok(Self::with_client(
            base_url,
            credentials.username.clone(),
            credentials.password.clone(),
            client,
        ))
    }

    /// Create a client with a custom HTTP client
    ///
    /// `base_url` is used as given apart from a trailing slash; callers
    /// going through the interactive flow should use
    /// [`JiraClient::from_credentials`] instead.
    pub fn with_client(
        base_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.into(),
            password: password.into(),
            client,
        }
    }

    /// Get the base URL of the JIRA instance
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the account requests are authenticated as
    pub fn username(&self) -> &str {
        &self.username
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/rest/api/2/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Non-2xx statuses become `ClientError::ApiError` carrying the body text.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }
}

impl std::fmt::Debug for JiraClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiraClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

/// Reduce a user-supplied URL to `https://host[:port]`
fn secure_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw.trim())
        .map_err(|e| ClientError::Configuration(format!("Invalid JIRA URL {:?}: {}", raw, e)))?;

    let host = parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| ClientError::Configuration(format!("JIRA URL {:?} has no host", raw)))?;

    Ok(match parsed.port() {
        Some(port) => format!("https://{}:{}", host, port),
        None => format!("https://{}", host),
    })
}
