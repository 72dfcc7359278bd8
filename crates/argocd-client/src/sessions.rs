//! Operations on the `/api/v1/session` endpoint family.

use argocd_core::{ApiExecutor, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Request payload for creating a session token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionCreateRequest {
    /// Account username.
    pub username: String,
    /// Account password.
    pub password: String,
}

/// Handle for session operations.
#[derive(Debug, Clone)]
pub struct Sessions {
    exec: Arc<ApiExecutor>,
}

impl Sessions {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// Create a new session token.
    pub async fn create(&self, request: &SessionCreateRequest) -> Result<Value> {
        self.exec
            .send(Method::POST, "/api/v1/session", &[], Some(request))
            .await
    }

    /// Delete the current session.
    pub async fn delete(&self) -> Result<Value> {
        self.exec
            .send::<()>(Method::DELETE, "/api/v1/session", &[], None)
            .await
    }

    /// Fetch information about the current user.
    pub async fn user_info(&self) -> Result<Value> {
        self.exec.get("/api/v1/session/userinfo", &[]).await
    }
}
