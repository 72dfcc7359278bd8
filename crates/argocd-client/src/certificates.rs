//! Operations on the `/api/v1/certificates` endpoint family.

use argocd_core::{ApiExecutor, QueryParams, Result};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Parameters supported by the certificates list endpoint.
#[derive(Debug, Default, Clone)]
pub struct CertificateListParams {
    /// A file-glob pattern (not a regex) matched against the host name.
    pub host_name_pattern: Option<String>,
    /// Certificate type (`https` or `ssh`).
    pub cert_type: Option<String>,
    /// Certificate sub type (`ssh-rsa`, `ecdsa-sha2-nistp256`, ...).
    pub cert_sub_type: Option<String>,
}

impl CertificateListParams {
    /// Convert the parameters into URL query pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut params = QueryParams::new();
        params.push_opt("hostNamePattern", self.host_name_pattern.as_deref());
        params.push_opt("certType", self.cert_type.as_deref());
        params.push_opt("certSubType", self.cert_sub_type.as_deref());
        params.into_pairs()
    }
}

/// Handle for repository certificate operations.
#[derive(Debug, Clone)]
pub struct Certificates {
    exec: Arc<ApiExecutor>,
}

impl Certificates {
    pub(crate) fn new(exec: Arc<ApiExecutor>) -> Self {
        Self { exec }
    }

    /// List repository certificates.
    pub async fn list(&self, params: &CertificateListParams) -> Result<Value> {
        self.exec
            .get("/api/v1/certificates", &params.to_pairs())
            .await
    }

    /// Create one or more repository certificates.
    pub async fn create<B>(&self, certificate: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.exec
            .send(Method::POST, "/api/v1/certificates", &[], Some(certificate))
            .await
    }

    /// Delete a repository certificate.
    ///
    /// The endpoint requires all three selectors, so they are always emitted
    /// as query parameters even though they are positional here.
    pub async fn delete(
        &self,
        host_name_pattern: &str,
        cert_type: &str,
        cert_sub_type: &str,
    ) -> Result<Value> {
        let mut params = QueryParams::new();
        params.push("hostNamePattern", host_name_pattern);
        params.push("certType", cert_type);
        params.push("certSubType", cert_sub_type);
        self.exec
            .send::<()>(
                Method::DELETE,
                "/api/v1/certificates",
                &params.into_pairs(),
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ArgoClient;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> ArgoClient {
        ArgoClient::new(server.uri(), "test-token").unwrap()
    }

    #[tokio::test]
    async fn list_sends_present_filters_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/certificates"))
            .and(query_param("certType", "ssh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let params = CertificateListParams {
            cert_type: Some("ssh".to_string()),
            ..CertificateListParams::default()
        };
        client.certificates().list(&params).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests[0].url.query(), Some("certType=ssh"));
    }

    #[tokio::test]
    async fn delete_always_sends_all_three_selectors() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/certificates"))
            .and(query_param("hostNamePattern", "github.com"))
            .and(query_param("certType", "ssh"))
            .and(query_param("certSubType", "ssh-rsa"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let value = client
            .certificates()
            .delete("github.com", "ssh", "ssh-rsa")
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }
}
