//! Top-level Argo CD client and builder.
//!
//! The client owns one shared [`ApiExecutor`]; each resource accessor returns
//! a cheap handle that delegates to it. Handles hold no state of their own
//! beyond the shared executor, so concurrent calls never contend.

use crate::accounts::Accounts;
use crate::applications::Applications;
use crate::certificates::Certificates;
use crate::clusters::Clusters;
use crate::gpgkeys::GpgKeys;
use crate::notifications::Notifications;
use crate::projects::Projects;
use crate::repositories::Repositories;
use crate::sessions::Sessions;
use crate::settings::Settings;
use crate::users::Users;
use crate::version::Version;
use crate::Result;
use argocd_core::{ApiConfig, ApiExecutor};
use std::sync::Arc;
use url::Url;

/// Builder for [`ArgoClient`].
#[derive(Debug, Clone)]
pub struct ArgoClientBuilder {
    config: ApiConfig,
}

impl ArgoClientBuilder {
    /// Create a builder for the specified server base URL and bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        Ok(Self {
            config: ApiConfig::new(base_url, token)?,
        })
    }

    /// Set a request timeout in seconds. By default no client-side timeout is
    /// imposed.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config = self.config.with_timeout(seconds);
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub fn with_tls_verify(mut self, verify: bool) -> Self {
        self.config = self.config.with_tls_verify(verify);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ArgoClient> {
        ArgoClient::from_config(self.config)
    }
}

/// Asynchronous Argo CD API client.
#[derive(Debug, Clone)]
pub struct ArgoClient {
    exec: Arc<ApiExecutor>,
}

impl ArgoClient {
    /// Construct a client directly from the base URL and bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Result<Self> {
        ArgoClientBuilder::new(base_url, token)?.build()
    }

    /// Construct a client from a prepared configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: ApiConfig) -> Result<Self> {
        Ok(Self {
            exec: Arc::new(ApiExecutor::new(&config)?),
        })
    }

    /// Return the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.exec.base_url()
    }

    /// Operations on `/api/v1/applications`.
    #[must_use]
    pub fn applications(&self) -> Applications {
        Applications::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/clusters`.
    #[must_use]
    pub fn clusters(&self) -> Clusters {
        Clusters::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/projects`.
    #[must_use]
    pub fn projects(&self) -> Projects {
        Projects::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/repositories`.
    #[must_use]
    pub fn repositories(&self) -> Repositories {
        Repositories::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/certificates`.
    #[must_use]
    pub fn certificates(&self) -> Certificates {
        Certificates::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/gpgkeys`.
    #[must_use]
    pub fn gpg_keys(&self) -> GpgKeys {
        GpgKeys::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/notifications`.
    #[must_use]
    pub fn notifications(&self) -> Notifications {
        Notifications::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/account`.
    #[must_use]
    pub fn accounts(&self) -> Accounts {
        Accounts::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/session`.
    #[must_use]
    pub fn sessions(&self) -> Sessions {
        Sessions::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/settings`.
    #[must_use]
    pub fn settings(&self) -> Settings {
        Settings::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/users`.
    #[must_use]
    pub fn users(&self) -> Users {
        Users::new(Arc::clone(&self.exec))
    }

    /// Operations on `/api/v1/version`.
    #[must_use]
    pub fn version(&self) -> Version {
        Version::new(Arc::clone(&self.exec))
    }
}
