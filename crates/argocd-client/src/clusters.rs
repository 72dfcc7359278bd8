//! Operations on the `/api/v1/clusters` endpoint family.
//!
//! Clusters are addressed by their API server URL. The address is inserted
//! into the path the way the server expects it; callers supply identifiers
//! that are already valid in a URL.

use argocd_core::{ApiExecutor, QueryParams, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Parameters supported by the clusters list endpoint.
#[derive(Debug, Default, Clone)]
pub struct ClusterListParams {
    /// Restrict the list to the cluster with this API server address.
    pub server: Option<String>,
    /// Restrict the list to the cluster with this name.
    pub name: Option<String>,
}

impl ClusterListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("server", self.server.as_deref());
        params.push_opt("name", self.name.as_deref());
        params.into_pairs()
    }
}

/// Handle for cluster operations.
#[derive(Debug, Clone)]
pub struct Clusters {
    exec: Arc<ApiExecutor>,
}

impl Clusters {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List clusters.
    pub async fn list(&self, params: &ClusterListParams) -> Result<Value> {
        self.exec.get("/api/v1/clusters", &params.to_pairs()).await
    }

    /// Create a cluster.
    pub async fn create<B>(&self, cluster: &B, upsert: bool) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut params = QueryParams::new();
        params.push_flag("upsert", upsert);
        self.exec
            .send(
                Method::POST,
                "/api/v1/clusters",
                &params.into_pairs(),
                Some(cluster),
            )
            .await
    }

    /// Fetch a cluster by API server address.
    pub async fn get(&self, server: &str) -> Result<Value> {
        let path = format!("/api/v1/clusters/{server}");
        self.exec.get(&path, &[]).await
    }

    /// Update a cluster, optionally restricting which fields change.
    pub async fn update<B>(
        &self,
        server: &str,
        cluster: &B,
        updated_fields: Option<&str>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut params = QueryParams::new();
        params.push_opt("updatedFields", updated_fields);
        let path = format!("/api/v1/clusters/{server}");
        self.exec
            .send(Method::PUT, &path, &params.into_pairs(), Some(cluster))
            .await
    }

    /// Delete a cluster.
    pub async fn delete(&self, server: &str, name: Option<&str>) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push_opt("name", name);
        let path = format!("/api/v1/clusters/{server}");
        self.exec
            .send::<()>(Method::DELETE, &path, &params.into_pairs(), None)
            .await
    }

    /// Rotate the bearer token used to access a cluster.
    pub async fn rotate_auth(&self, server: &str) -> Result<Value> {
        let path = format!("/api/v1/clusters/{server}/rotate-auth");
        self.exec.send::<()>(Method::POST, &path, &[], None).await
    }

    /// Invalidate the server-side cache for a cluster.
    pub async fn invalidate_cache(&self, server: &str) -> Result<Value> {
        let path = format!("/api/v1/clusters/{server}/invalidate-cache");
        self.exec.send::<()>(Method::POST, &path, &[], None).await
    }
}
