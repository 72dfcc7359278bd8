//! Operations on the `/api/v1/projects` endpoint family.

use argocd_core::{ApiExecutor, QueryParams, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Handle for project operations.
#[derive(Debug, Clone)]
pub struct Projects {
    exec: Arc<ApiExecutor>,
}

impl Projects {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List projects, optionally filtered by name.
    pub async fn list(&self, name: Option<&str>) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push_opt("name", name);
        self.exec.get("/api/v1/projects", &params.into_pairs()).await
    }

    /// Create a project.
    pub async fn create<B>(&self, project: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.exec
            .send(Method::POST, "/api/v1/projects", &[], Some(project))
            .await
    }

    /// Fetch a project by name.
    pub async fn get(&self, name: &str) -> Result<Value> {
        let path = format!("/api/v1/projects/{name}");
        self.exec.get(&path, &[]).await
    }

    /// Update a project.
    pub async fn update<B>(&self, name: &str, project: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let path = format!("/api/v1/projects/{name}");
        self.exec
            .send(Method::PUT, &path, &[], Some(project))
            .await
    }

    /// Delete a project.
    pub async fn delete(&self, name: &str) -> Result<Value> {
        let path = format!("/api/v1/projects/{name}");
        self.exec
            .send::<()>(Method::DELETE, &path, &[], None)
            .await
    }

    /// Fetch a project together with its global project and scoped resources.
    pub async fn detailed(&self, name: &str) -> Result<Value> {
        let path = format!("/api/v1/projects/{name}/detailed");
        self.exec.get(&path, &[]).await
    }

    /// Report whether any sync windows are currently active for a project.
    pub async fn sync_windows_state(&self, name: &str) -> Result<Value> {
        let path = format!("/api/v1/projects/{name}/syncwindows");
        self.exec.get(&path, &[]).await
    }

    /// List global projects.
    pub async fn global(&self) -> Result<Value> {
        self.exec.get("/api/v1/projects/global", &[]).await
    }

    /// List events for a project.
    pub async fn events(&self, name: &str) -> Result<Value> {
        let path = format!("/api/v1/projects/{name}/events");
        self.exec.get(&path, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgoClient;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ArgoClient {
        ArgoClient::new(server.uri(), "test-token").unwrap()
    }

    #[tokio::test]
    async fn list_sends_name_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/projects"))
            .and(query_param("name", "default"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client.projects().list(Some("default")).await.unwrap();
        assert_eq!(value, json!({"items": []}));
    }

    #[tokio::test]
    async fn create_posts_body() {
        let server = MockServer::start().await;
        let project = json!({"metadata": {"name": "team-a"}});
        Mock::given(method("POST"))
            .and(path("/api/v1/projects"))
            .and(body_json(&project))
            .respond_with(ResponseTemplate::new(200).set_body_json(&project))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client.projects().create(&project).await.unwrap();
        assert_eq!(value["metadata"]["name"], "team-a");
    }

    #[tokio::test]
    async fn detailed_hits_subresource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/projects/team-a/detailed"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"project": {}})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client.projects().detailed("team-a").await.unwrap();
        assert_eq!(value, json!({"project": {}}));
    }

    #[tokio::test]
    async fn sync_windows_state_hits_subresource() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/projects/team-a/syncwindows"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"windows": null})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.projects().sync_windows_state("team-a").await.unwrap();
    }
}
