//! Operations on the `/api/v1/settings` endpoint.

use argocd_core::{ApiExecutor, Result};
use serde_json::Value;
use std::sync::Arc;

/// Handle for server settings.
#[derive(Debug, Clone)]
pub struct Settings {
    exec: Arc<ApiExecutor>,
}

impl Settings {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// Fetch the Argo CD server settings.
    pub async fn get(&self) -> Result<Value> {
        self.exec.get("/api/v1/settings", &[]).await
    }
}
