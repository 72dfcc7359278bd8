//! Operations on the `/api/v1/notifications` endpoint family.

use argocd_core::{ApiExecutor, Result};
use serde_json::Value;
use std::sync::Arc;

/// Handle for notification configuration operations.
#[derive(Debug, Clone)]
pub struct Notifications {
    exec: Arc<ApiExecutor>,
}

impl Notifications {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List configured notification services.
    pub async fn list_services(&self) -> Result<Value> {
        self.exec.get("/api/v1/notifications/services", &[]).await
    }

    /// List configured notification templates.
    pub async fn list_templates(&self) -> Result<Value> {
        self.exec.get("/api/v1/notifications/templates", &[]).await
    }

    /// List configured notification triggers.
    pub async fn list_triggers(&self) -> Result<Value> {
        self.exec.get("/api/v1/notifications/triggers", &[]).await
    }
}
