//! Client configuration.
//!
//! Configuration values should be provided by the application, not hardcoded.

use std::time::Duration;

/// Default request timeout. The backend does not specify one; a request
/// outliving this deadline classifies as a network failure.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Configuration for [`CaritasClient`](crate::CaritasClient).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin, e.g. `https://caritas.example.org` (no trailing slash).
    pub base_url: String,

    /// Path prefix for API resources.
    ///
    /// Default: `/api/v1`
    pub api_path: String,

    /// Path of the CSRF cookie endpoint, outside the API prefix.
    ///
    /// Default: `/sanctum/csrf-cookie`
    pub csrf_path: String,

    /// Per-request timeout.
    ///
    /// Default: 15 seconds
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for the given backend origin.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_path: "/api/v1".to_owned(),
            csrf_path: "/sanctum/csrf-cookie".to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API path prefix.
    #[must_use]
    pub fn with_api_path(mut self, api_path: impl Into<String>) -> Self {
        self.api_path = api_path.into();
        self
    }

    /// Set the CSRF cookie endpoint path.
    #[must_use]
    pub fn with_csrf_path(mut self, csrf_path: impl Into<String>) -> Self {
        self.csrf_path = csrf_path.into();
        self
    }

    /// Set the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL for an API resource path.
    #[must_use]
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_path, path)
    }

    /// Full URL of the CSRF cookie endpoint.
    #[must_use]
    pub fn csrf_url(&self) -> String {
        format!("{}{}", self.base_url, self.csrf_path)
    }
}
