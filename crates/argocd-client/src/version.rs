//! Operations on the `/api/v1/version` endpoint.

use argocd_core::{ApiExecutor, Result};
use serde_json::Value;
use std::sync::Arc;

/// Handle for the server version endpoint.
#[derive(Debug, Clone)]
pub struct Version {
    exec: Arc<ApiExecutor>,
}

impl Version {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// Fetch the Argo CD server version.
    pub async fn get(&self) -> Result<Value> {
        self.exec.get("/api/v1/version", &[]).await
    }
}
