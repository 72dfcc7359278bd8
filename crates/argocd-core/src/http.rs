//! The shared request executor behind every resource handle.
//!
//! One routine turns (method, path, query, body) into a parsed JSON value or
//! a descriptive failure: it resolves the path against the configured base
//! URL, attaches bearer authentication, serializes the body, and normalizes
//! the outcome into [`Error::Api`] or [`Error::Network`]. No retries, no
//! caching, no state between calls.

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("argocd-core/", env!("CARGO_PKG_VERSION"));

/// Executes authenticated HTTP calls against a single Argo CD server.
///
/// Cheap to clone; internally immutable. Resource handles share one executor
/// behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ApiExecutor {
    http: Client,
    base_url: Url,
    token: String,
}

impl ApiExecutor {
    /// Build an executor from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the base URL is invalid or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.parse_base_url()?;

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(!config.tls_verify);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| Error::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            http,
            base_url,
            token: config.token.clone(),
        })
    }

    /// Return the configured base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a GET request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// See [`ApiExecutor::send`].
    pub async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Value> {
        self.send::<()>(Method::GET, path, query, None).await
    }

    /// Issue a request with an optional JSON body and decode the response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] when the server answers with a non-2xx status,
    /// [`Error::Network`] when the call cannot reach the server or the
    /// response body is not valid JSON.
    pub async fn send<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.send_with_headers(method, path, query, body, &[]).await
    }

    /// Issue a request with caller-supplied headers overlaid on the defaults.
    ///
    /// Default headers are `Authorization: Bearer <token>` and
    /// `Content-Type: application/json`; caller values win on key collision.
    ///
    /// # Errors
    ///
    /// See [`ApiExecutor::send`]; additionally returns [`Error::Config`] for
    /// header names or values that are not valid HTTP.
    pub async fn send_with_headers<B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<&B>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.request_url(path, query)?;
        let headers = self.request_headers(extra_headers)?;

        debug!(%method, path, "sending request");

        let mut request = self.http.request(method, url).headers(headers);
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = error_message(status, &bytes);
            debug!(status = status.as_u16(), %message, path, "request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Some endpoints (delete, rotate-auth) answer 200 with no body.
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|err| {
            Error::Network(format!("Failed to decode response from `{path}`: {err}"))
        })
    }

    fn request_url(&self, path: &str, query: &[(&'static str, String)]) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        Ok(url)
    }

    fn request_headers(&self, extra: &[(&str, &str)]) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|err| Error::Config(format!("Invalid bearer token: {err}")))?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in extra {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| Error::Config(format!("Invalid header name `{name}`: {err}")))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|err| Error::Config(format!("Invalid header value: {err}")))?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

/// Extract a human-readable message from an error response body.
///
/// Prefers the body's JSON `message` field, falls back to the raw body text,
/// and finally to the status line's canonical reason.
fn error_message(status: StatusCode, body: &[u8]) -> String {
    if let Ok(json) = serde_json::from_slice::<Value>(body) {
        if let Some(message) = json.get("message").and_then(Value::as_str) {
            return message.to_string();
        }
    }

    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_executor(server: &MockServer) -> ApiExecutor {
        let config = ApiConfig::new(server.uri(), "test-token").unwrap();
        ApiExecutor::new(&config).unwrap()
    }

    #[tokio::test]
    async fn get_attaches_bearer_and_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/settings"))
            .and(header("authorization", "Bearer test-token"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"url": "https://cd"})))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let value = exec.get("/api/v1/settings", &[]).await.unwrap();
        assert_eq!(value, json!({"url": "https://cd"}));
    }

    #[tokio::test]
    async fn success_body_passes_through_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let value = exec.get("/api/v1/applications", &[]).await.unwrap();
        assert_eq!(value, json!({"items": []}));
    }

    #[tokio::test]
    async fn empty_body_decodes_to_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/v1/session"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let value = exec
            .send::<()>(Method::DELETE, "/api/v1/session", &[], None)
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[tokio::test]
    async fn post_serializes_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/projects"))
            .and(body_json(json!({"metadata": {"name": "default"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"metadata": {"name": "default"}})))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let body = json!({"metadata": {"name": "default"}});
        let value = exec
            .send(Method::POST, "/api/v1/projects", &[], Some(&body))
            .await
            .unwrap();
        assert_eq!(value["metadata"]["name"], "default");
    }

    #[tokio::test]
    async fn api_error_uses_message_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not found"})))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let err = exec
            .get("/api/v1/applications/missing", &[])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            Error::Api {
                status: 404,
                message: "Not found".to_string()
            }
        );
        assert_eq!(
            err.to_string(),
            "Request failed with status code 404: Not found"
        );
    }

    #[tokio::test]
    async fn api_error_falls_back_to_body_text() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/clusters"))
            .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let err = exec.get("/api/v1/clusters", &[]).await.unwrap_err();
        assert_eq!(
            err,
            Error::Api {
                status: 500,
                message: "backend exploded".to_string()
            }
        );
    }

    #[tokio::test]
    async fn api_error_falls_back_to_canonical_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/version"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let err = exec.get("/api/v1/version", &[]).await.unwrap_err();
        assert_eq!(
            err,
            Error::Api {
                status: 503,
                message: "Service Unavailable".to_string()
            }
        );
    }

    #[tokio::test]
    async fn caller_header_overrides_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/settings"))
            .and(header("authorization", "Bearer other-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let value = exec
            .send_with_headers::<()>(
                Method::GET,
                "/api/v1/settings",
                &[],
                None,
                &[("Authorization", "Bearer other-token")],
            )
            .await
            .unwrap();
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn query_pairs_repeat_keys_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let query = vec![
            ("projects", "default".to_string()),
            ("projects", "team-a".to_string()),
        ];
        exec.get("/api/v1/applications", &query).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(
            requests[0].url.query(),
            Some("projects=default&projects=team-a")
        );
    }

    #[tokio::test]
    async fn identical_gets_issue_independent_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/applications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(2)
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let query = vec![("name", "guestbook".to_string())];
        exec.get("/api/v1/applications", &query).await.unwrap();
        exec.get("/api/v1/applications", &query).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, requests[1].url);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        // Port 1 is reserved; connections are refused immediately.
        let config = ApiConfig::new("http://127.0.0.1:1", "test-token").unwrap();
        let exec = ApiExecutor::new(&config).unwrap();
        let err = exec.get("/api/v1/version", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn invalid_json_response_is_a_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/version"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let exec = test_executor(&server);
        let err = exec.get("/api/v1/version", &[]).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }
}
