//! Operations on the `/api/v1/gpgkeys` endpoint family.

use argocd_core::{ApiExecutor, QueryParams, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Handle for GPG public key operations.
#[derive(Debug, Clone)]
pub struct GpgKeys {
    exec: Arc<ApiExecutor>,
}

impl GpgKeys {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List GPG public keys from the server configuration.
    pub async fn list(&self, key_id: Option<&str>) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push_opt("keyID", key_id);
        self.exec.get("/api/v1/gpgkeys", &params.into_pairs()).await
    }

    /// Create one or more GPG public keys in the server configuration.
    pub async fn create<B>(&self, key: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.exec
            .send(Method::POST, "/api/v1/gpgkeys", &[], Some(key))
            .await
    }

    /// Fetch a GPG public key by key ID.
    pub async fn get(&self, key_id: &str) -> Result<Value> {
        let path = format!("/api/v1/gpgkeys/{key_id}");
        self.exec.get(&path, &[]).await
    }

    /// Delete a GPG public key from the server configuration.
    pub async fn delete(&self, key_id: &str) -> Result<Value> {
        let path = format!("/api/v1/gpgkeys/{key_id}");
        self.exec
            .send::<()>(Method::DELETE, &path, &[], None)
            .await
    }
}
