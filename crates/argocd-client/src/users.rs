//! Operations on the `/api/v1/users` endpoint family.

use argocd_core::{ApiExecutor, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Handle for user operations.
#[derive(Debug, Clone)]
pub struct Users {
    exec: Arc<ApiExecutor>,
}

impl Users {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List users.
    pub async fn list(&self) -> Result<Value> {
        self.exec.get("/api/v1/users", &[]).await
    }

    /// Fetch a user by name.
    pub async fn get(&self, name: &str) -> Result<Value> {
        let path = format!("/api/v1/users/{name}");
        self.exec.get(&path, &[]).await
    }

    /// Create a user.
    pub async fn create<B>(&self, user: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.exec
            .send(Method::POST, "/api/v1/users", &[], Some(user))
            .await
    }

    /// Update a user.
    pub async fn update<B>(&self, name: &str, user: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/users/{name}");
        self.exec.send(Method::PUT, &path, &[], Some(user)).await
    }

    /// Delete a user.
    pub async fn delete(&self, name: &str) -> Result<Value> {
        let path = format!("/api/v1/users/{name}");
        self.exec
            .send::<()>(Method::DELETE, &path, &[], None)
            .await
    }
}
