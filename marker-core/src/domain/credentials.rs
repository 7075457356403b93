//! Operator credentials
//!
//! Collected once from the interactive prompt and consumed by the client
//! factory. Never persisted.

use std::fmt;

/// Connection details entered by the operator
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Base URL of the JIRA instance (e.g., "https://jira.example.com")
    pub service_url: String,

    /// Account used for basic auth
    pub username: String,

    /// Password or API token for `username`
    pub password: String,
}

impl Credentials {
    pub fn new(
        service_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            service_url: service_url.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("service_url", &self.service_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
