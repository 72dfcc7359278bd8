//! Operations on the `/api/v1/repositories` endpoint family.
//!
//! Repositories are addressed by their URL, inserted into the path as-is;
//! callers supply identifiers that are already valid in a URL.

use argocd_core::{ApiExecutor, QueryParams, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Parameters supported by the repositories list endpoint.
#[derive(Debug, Default, Clone)]
pub struct RepositoryListParams {
    /// Restrict the list to the repository with this URL.
    pub repo: Option<String>,
    /// Bypass the server-side connection-state cache.
    pub force_refresh: bool,
}

impl RepositoryListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("repo", self.repo.as_deref());
        params.push_flag("forceRefresh", self.force_refresh);
        params.into_pairs()
    }
}

/// Handle for repository operations.
#[derive(Debug, Clone)]
pub struct Repositories {
    exec: Arc<ApiExecutor>,
}

impl Repositories {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List configured repositories.
    pub async fn list(&self, params: &RepositoryListParams) -> Result<Value> {
        self.exec
            .get("/api/v1/repositories", &params.to_pairs())
            .await
    }

    /// Create a repository.
    ///
    /// `creds_only` stores the supplied credentials without registering the
    /// repository itself.
    pub async fn create<B>(&self, repository: &B, upsert: bool, creds_only: bool) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut params = QueryParams::new();
        params.push_flag("upsert", upsert);
        params.push_flag("credsOnly", creds_only);
        self.exec
            .send(
                Method::POST,
                "/api/v1/repositories",
                &params.into_pairs(),
                Some(repository),
            )
            .await
    }

    /// Fetch a repository by URL.
    pub async fn get(&self, repo: &str, force_refresh: bool) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push_flag("forceRefresh", force_refresh);
        let path = format!("/api/v1/repositories/{repo}");
        self.exec.get(&path, &params.into_pairs()).await
    }

    /// Update a repository.
    pub async fn update<B>(&self, repo: &str, repository: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/repositories/{repo}");
        self.exec
            .send(Method::PUT, &path, &[], Some(repository))
            .await
    }

    /// Delete a repository.
    pub async fn delete(&self, repo: &str) -> Result<Value> {
        let path = format!("/api/v1/repositories/{repo}");
        self.exec
            .send::<()>(Method::DELETE, &path, &[], None)
            .await
    }

    /// List the applications found in a repository.
    pub async fn apps(&self, repo: &str, revision: Option<&str>) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push_opt("revision", revision);
        let path = format!("/api/v1/repositories/{repo}/apps");
        self.exec.get(&path, &params.into_pairs()).await
    }

    /// Fetch application details for a path inside a repository.
    pub async fn app_details(
        &self,
        repo: &str,
        app_path: &str,
        revision: Option<&str>,
    ) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push("path", app_path);
        params.push_opt("revision", revision);
        let path = format!("/api/v1/repositories/{repo}/appdetails");
        self.exec.get(&path, &params.into_pairs()).await
    }

    /// List the helm charts served by a repository.
    pub async fn helm_charts(&self, repo: &str) -> Result<Value> {
        let path = format!("/api/v1/repositories/{repo}/helmcharts");
        self.exec.get(&path, &[]).await
    }

    /// List the refs (branches, tags) of a repository.
    pub async fn refs(&self, repo: &str) -> Result<Value> {
        let path = format!("/api/v1/repositories/{repo}/refs");
        self.exec.get(&path, &[]).await
    }
}
