//! Configuration for Argo CD API clients.
//!
//! An [`ApiConfig`] is supplied once at client construction and is immutable
//! for the lifetime of the client: the server base URL, the bearer token, and
//! a small set of transport knobs.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::Validate;

/// Configuration for an Argo CD API client instance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ApiConfig {
    /// Base URL of the Argo CD server (e.g., "https://argocd.example.com").
    #[validate(url)]
    pub base_url: String,

    /// Bearer token attached to every request.
    #[serde(skip_serializing)]
    pub token: String,

    /// Optional request timeout in seconds. When absent, no client-side
    /// timeout is imposed and cancellation is the caller's responsibility.
    #[validate(range(min = 1, max = 300))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Whether to verify TLS certificates.
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,
}

const fn default_tls_verify() -> bool {
    true
}

impl ApiConfig {
    /// Create a configuration from the server base URL and bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL is invalid or validation fails.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self, Error> {
        let config = Self {
            base_url: base_url.into(),
            token: token.into(),
            request_timeout_secs: None,
            tls_verify: default_tls_verify(),
        };

        config
            .validate()
            .map_err(|e| Error::Config(format!("Invalid configuration: {e}")))?;

        Ok(config)
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Get the request timeout as a [`Duration`], if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Parse and validate the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL cannot be parsed.
    pub fn parse_base_url(&self) -> Result<Url, Error> {
        Url::parse(&self.base_url)
            .map_err(|e| Error::Config(format!("Invalid base URL: {e}")))
    }
}
