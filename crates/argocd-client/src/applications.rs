//! Operations on the `/api/v1/applications` endpoint family.

use argocd_core::{ApiExecutor, QueryParams, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Parameters supported by the applications list endpoint.
#[derive(Debug, Default, Clone)]
pub struct ApplicationListParams {
    /// Restrict the list to the application with this name.
    pub name: Option<String>,
    /// Forces application reconciliation when set to `hard`.
    pub refresh: Option<String>,
    /// Restrict the list to applications in these projects.
    pub projects: Vec<String>,
}

impl ApplicationListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("name", self.name.as_deref());
        params.push_opt("refresh", self.refresh.as_deref());
        params.push_each("projects", &self.projects);
        params.into_pairs()
    }
}

/// Parameters supported when fetching a single application.
#[derive(Debug, Default, Clone)]
pub struct ApplicationGetParams {
    /// Forces application reconciliation when set to `hard`.
    pub refresh: Option<String>,
    /// The project the application is expected to belong to.
    pub project: Option<String>,
}

impl ApplicationGetParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("refresh", self.refresh.as_deref());
        params.push_opt("project", self.project.as_deref());
        params.into_pairs()
    }
}

/// Parameters supported when deleting an application.
#[derive(Debug, Default, Clone)]
pub struct ApplicationDeleteParams {
    /// Whether to cascade-delete the application's resources.
    pub cascade: bool,
    /// Kubernetes propagation policy for the deletion.
    pub propagation_policy: Option<String>,
}

impl ApplicationDeleteParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_flag("cascade", self.cascade);
        params.push_opt("propagationPolicy", self.propagation_policy.as_deref());
        params.into_pairs()
    }
}

/// Parameters supported when syncing an application.
#[derive(Debug, Default, Clone)]
pub struct ApplicationSyncParams {
    /// Preview the sync without applying changes.
    pub dry_run: bool,
    /// Prune resources no longer tracked in git.
    pub prune: bool,
    /// The sync strategy to use.
    pub strategy: Option<String>,
    /// Restrict the sync to these resources.
    pub resources: Vec<String>,
}

impl ApplicationSyncParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_flag("dryRun", self.dry_run);
        params.push_flag("prune", self.prune);
        params.push_opt("strategy", self.strategy.as_deref());
        params.push_each("resources", &self.resources);
        params.into_pairs()
    }
}

/// Identifies a single resource managed by an application.
///
/// `namespace`, `resource_name`, `version`, and `kind` are required by the
/// server and always emitted; `group` is optional.
#[derive(Debug, Clone)]
pub struct ResourceRef {
    /// The resource namespace.
    pub namespace: String,
    /// The resource name.
    pub resource_name: String,
    /// The resource API version.
    pub version: String,
    /// The resource kind.
    pub kind: String,
    /// The resource API group.
    pub group: Option<String>,
}

impl ResourceRef {
    /// Convert the reference into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.pairs(None)
    }

    fn pairs(&self, action: Option<&str>) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push("namespace", &self.namespace);
        params.push("resourceName", &self.resource_name);
        params.push("version", &self.version);
        params.push("kind", &self.kind);
        params.push_opt("action", action);
        params.push_opt("group", self.group.as_deref());
        params.into_pairs()
    }
}

/// Filters supported when listing application events.
#[derive(Debug, Default, Clone)]
pub struct ApplicationEventParams {
    /// Only include events in this namespace.
    pub resource_namespace: Option<String>,
    /// Only include events for this resource name.
    pub resource_name: Option<String>,
    /// Only include events for this resource UID.
    pub resource_uid: Option<String>,
}

impl ApplicationEventParams {
    /// Convert the filters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("resourceNamespace", self.resource_namespace.as_deref());
        params.push_opt("resourceName", self.resource_name.as_deref());
        params.push_opt("resourceUID", self.resource_uid.as_deref());
        params.into_pairs()
    }
}

/// Handle for application operations.
#[derive(Debug, Clone)]
pub struct Applications {
    exec: Arc<ApiExecutor>,
}

impl Applications {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List applications.
    pub async fn list(&self, params: &ApplicationListParams) -> Result<Value> {
        self.exec
            .get("/api/v1/applications", &params.to_pairs())
            .await
    }

    /// Fetch a single application by name.
    pub async fn get(&self, name: &str, params: &ApplicationGetParams) -> Result<Value> {
        let path = format!("/api/v1/applications/{name}");
        self.exec.get(&path, &params.to_pairs()).await
    }

    /// Create an application.
    ///
    /// `upsert` updates an existing application of the same name instead of
    /// failing; `validate` defaults to on server-side, so an explicit
    /// `validate=false` is emitted only when disabled.
    pub async fn create<B>(&self, application: &B, upsert: bool, validate: bool) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut params = QueryParams::new();
        params.push_flag("upsert", upsert);
        if !validate {
            params.push("validate", false);
        }
        self.exec
            .send(
                Method::POST,
                "/api/v1/applications",
                &params.into_pairs(),
                Some(application),
            )
            .await
    }

    /// Update an application.
    pub async fn update<B>(&self, name: &str, application: &B, validate: bool) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let mut params = QueryParams::new();
        if !validate {
            params.push("validate", false);
        }
        let path = format!("/api/v1/applications/{name}");
        self.exec
            .send(Method::PUT, &path, &params.into_pairs(), Some(application))
            .await
    }

    /// Delete an application.
    pub async fn delete(&self, name: &str, params: &ApplicationDeleteParams) -> Result<Value> {
        let path = format!("/api/v1/applications/{name}");
        self.exec
            .send::<()>(Method::DELETE, &path, &params.to_pairs(), None)
            .await
    }

    /// Sync an application to its target state.
    pub async fn sync(&self, name: &str, params: &ApplicationSyncParams) -> Result<Value> {
        let path = format!("/api/v1/applications/{name}/sync");
        self.exec
            .send::<()>(Method::POST, &path, &params.to_pairs(), None)
            .await
    }

    /// Fetch the manifests rendered for an application.
    pub async fn manifests(&self, name: &str, revision: Option<&str>) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push_opt("revision", revision);
        let path = format!("/api/v1/applications/{name}/manifests");
        self.exec.get(&path, &params.into_pairs()).await
    }

    /// Fetch a single resource managed by an application.
    pub async fn resource(&self, name: &str, resource: &ResourceRef) -> Result<Value> {
        let path = format!("/api/v1/applications/{name}/resource");
        self.exec.get(&path, &resource.to_pairs()).await
    }

    /// List events for an application.
    pub async fn events(&self, name: &str, params: &ApplicationEventParams) -> Result<Value> {
        let path = format!("/api/v1/applications/{name}/events");
        self.exec.get(&path, &params.to_pairs()).await
    }

    /// List the actions available on a resource.
    pub async fn resource_actions(&self, name: &str, resource: &ResourceRef) -> Result<Value> {
        let path = format!("/api/v1/applications/{name}/resource/actions");
        self.exec.get(&path, &resource.to_pairs()).await
    }

    /// Run an action on a resource.
    pub async fn run_resource_action(
        &self,
        name: &str,
        resource: &ResourceRef,
        action: &str,
    ) -> Result<Value> {
        let path = format!("/api/v1/applications/{name}/resource/actions");
        self.exec
            .send::<()>(Method::POST, &path, &resource.pairs(Some(action)), None)
            .await
    }
}
