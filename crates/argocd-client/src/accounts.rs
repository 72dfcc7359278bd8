//! Operations on the `/api/v1/account` endpoint family.

use argocd_core::{ApiExecutor, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Request payload for updating the current account's password.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    /// The account's current password.
    pub current_password: String,
    /// The new password to set.
    pub new_password: String,
}

/// Handle for account operations.
#[derive(Debug, Clone)]
pub struct Accounts {
    exec: Arc<ApiExecutor>,
}

impl Accounts {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List accounts.
    pub async fn list(&self) -> Result<Value> {
        self.exec.get("/api/v1/account", &[]).await
    }

    /// Check whether the current account may perform an action.
    pub async fn can_i(&self, resource: &str, action: &str, subresource: &str) -> Result<Value> {
        let path = format!("/api/v1/account/can-i/{resource}/{action}/{subresource}");
        self.exec.get(&path, &[]).await
    }

    /// Update the current account's password.
    pub async fn update_password(&self, request: &UpdatePasswordRequest) -> Result<Value> {
        self.exec
            .send(Method::PUT, "/api/v1/account/password", &[], Some(request))
            .await
    }

    /// Fetch an account by name.
    pub async fn get(&self, name: &str) -> Result<Value> {
        let path = format!("/api/v1/account/{name}");
        self.exec.get(&path, &[]).await
    }

    /// Create an authentication token for an account.
    pub async fn create_token<B>(&self, name: &str, request: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/account/{name}/token");
        self.exec
            .send(Method::POST, &path, &[], Some(request))
            .await
    }

    /// Delete an authentication token from an account.
    pub async fn delete_token(&self, name: &str, id: &str) -> Result<Value> {
        let path = format!("/api/v1/account/{name}/token/{id}");
        self.exec
            .send::<()>(Method::DELETE, &path, &[], None)
            .await
    }
}
