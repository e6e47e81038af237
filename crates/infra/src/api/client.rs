//! Request client for the CRM backend
//!
//! Every call resolves `<base_url>/api<path>`, sends JSON with caching
//! disabled, attaches the session's bearer token when there is one, and
//! normalizes non-success responses into [`ApiError::Status`] carrying the
//! server's `message` (or the generic fallback).

use std::sync::Arc;

use crmdesk_core::AccessTokenProvider;
use crmdesk_domain::constants::API_PREFIX;
use crmdesk_domain::ApiConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};
use url::Url;

use super::errors::ApiError;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Backend origin, e.g. `http://localhost:5000`; `/api` is appended per call
    pub base_url: String,
    pub user_agent: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        ApiConfig::default().into()
    }
}

impl From<ApiConfig> for ApiClientConfig {
    fn from(config: ApiConfig) -> Self {
        Self { base_url: config.base_url, user_agent: config.user_agent }
    }
}

/// Per-call overrides
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    /// Extra headers; these replace the defaults on name clashes
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self { method: Method::GET, body: None, headers: Vec::new() }
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self { method, ..Self::default() }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] if `body` cannot be serialized.
    pub fn with_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Validation(format!("Failed to serialize body: {e}")))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// HTTP client bound to one backend and one token source
pub struct ApiClient {
    http_client: HttpClient,
    auth: Arc<dyn AccessTokenProvider>,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`] if the base URL is not an absolute URL or
    /// the HTTP client cannot be built.
    pub fn new(
        config: ApiClientConfig,
        auth: Arc<dyn AccessTokenProvider>,
    ) -> Result<Self, ApiError> {
        let parsed = Url::parse(config.base_url.trim())
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {e}", config.base_url)))?;
        if parsed.cannot_be_a_base() {
            return Err(ApiError::Config(format!("Invalid base URL '{}'", config.base_url)));
        }

        let mut builder = HttpClient::builder();
        if let Some(agent) = config.user_agent {
            builder = builder.user_agent(agent);
        }
        let http_client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {e}")))?;

        Ok(Self {
            http_client,
            auth,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// Full URL for a backend path.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{API_PREFIX}{path}", self.base_url)
        } else {
            format!("{}{API_PREFIX}/{path}", self.base_url)
        }
    }

    /// Issue one request and decode the JSON response.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] when no response arrives, or a success body
    ///   cannot be read
    /// - [`ApiError::Status`] on a non-success status
    /// - [`ApiError::Decode`] when the body does not fit `R`
    #[instrument(skip(self, options), fields(method = %options.method, path = %path))]
    pub async fn request<R: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<R, ApiError> {
        let url = self.url_for(path);
        let headers = self.headers_for(&options).await?;

        let mut request = self.http_client.request(options.method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            let bytes = serde_json::to_vec(body)
                .map_err(|e| ApiError::Validation(format!("Failed to serialize body: {e}")))?;
            request = request.body(bytes);
        }

        let response = self.http_client.send(request).await.map_err(ApiError::from)?;
        let status = response.status();
        // An unreadable error body still yields a status error with the fallback message
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) if status.is_success() => {
                return Err(ApiError::Network(format!("Failed to read response body: {e}")));
            }
            Err(e) => {
                debug!(status = status.as_u16(), error = %e, "error body unreadable");
                String::new()
            }
        };

        if !status.is_success() {
            let err = ApiError::from_status(status, &text);
            warn!(status = status.as_u16(), message = err.message(), "request failed");
            return Err(err);
        }

        let result = Self::decode(status, &text)?;
        debug!(status = status.as_u16(), "request succeeded");
        Ok(result)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(path, RequestOptions::new(Method::GET)).await
    }

    pub async fn post<T, R>(&self, path: &str, body: &T) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(path, RequestOptions::new(Method::POST).with_body(body)?).await
    }

    pub async fn put<T, R>(&self, path: &str, body: &T) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(path, RequestOptions::new(Method::PUT).with_body(body)?).await
    }

    pub async fn patch<T, R>(&self, path: &str, body: &T) -> Result<R, ApiError>
    where
        T: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(path, RequestOptions::new(Method::PATCH).with_body(body)?).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        self.request(path, RequestOptions::new(Method::DELETE)).await
    }

    async fn headers_for(&self, options: &RequestOptions) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.auth.access_token().await.filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::Config("Session token is not a valid header value".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::Config(format!("Invalid header name '{name}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| ApiError::Config(format!("Invalid value for header '{name}': {e}")))?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    fn decode<R: DeserializeOwned>(status: StatusCode, text: &str) -> Result<R, ApiError> {
        // 204/205 carry no body by definition; an empty 200 is treated the same
        if status == StatusCode::NO_CONTENT
            || status == StatusCode::RESET_CONTENT
            || text.trim().is_empty()
        {
            return serde_json::from_value(Value::Null).map_err(|_| {
                ApiError::Decode(format!(
                    "No content response ({}), but response type cannot be deserialized from empty body",
                    status.as_u16()
                ))
            });
        }

        serde_json::from_str(text).map_err(|e| ApiError::Decode(format!("Failed to parse response: {e}")))
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    auth: Option<Arc<dyn AccessTokenProvider>>,
}

impl ApiClientBuilder {
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the token source (usually the session context)
    pub fn auth(mut self, auth: Arc<dyn AccessTokenProvider>) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if the token source is missing or client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();
        let auth =
            self.auth.ok_or_else(|| ApiError::Config("Auth provider not set".to_string()))?;

        ApiClient::new(config, auth)
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    struct StaticToken(Option<&'static str>);

    #[async_trait]
    impl AccessTokenProvider for StaticToken {
        async fn access_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Greeting {
        message: String,
    }

    fn client_for(server: &MockServer, token: Option<&'static str>) -> ApiClient {
        let config = ApiClientConfig { base_url: server.uri(), user_agent: None };
        ApiClient::new(config, Arc::new(StaticToken(token))).unwrap()
    }

    #[tokio::test]
    async fn get_prefixes_api_and_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .and(header("Cache-Control", "no-cache"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "hi"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("test-token"));
        let greeting: Greeting = client.get("/leads").await.unwrap();

        assert_eq!(greeting, Greeting { message: "hi".into() });
    }

    #[tokio::test]
    async fn no_token_means_no_authorization_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/public"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let _: Vec<Value> = client.get("public").await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn error_status_carries_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client
            .post::<_, Value>("/auth/login", &json!({"email": "a@b.c", "password": "x"}))
            .await
            .unwrap_err();

        assert_eq!(err, ApiError::Status { status: 401, message: "Invalid credentials".into() });
    }

    #[tokio::test]
    async fn error_without_message_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/sales"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let err = client.get::<Value>("/sales").await.unwrap_err();

        assert_eq!(err.message(), "Something went wrong");
        assert_eq!(err.status(), Some(500));
    }

    /// Serves one response whose body stops short of its content-length.
    async fn truncated_body_server(status_line: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut request = [0u8; 4096];
                let _ = socket.read(&mut request).await;
                let head = format!(
                    "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\n\
                     content-length: 64\r\n\r\n{{\"message\":"
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        format!("http://{addr}")
    }

    fn client_at(base_url: String) -> ApiClient {
        let config = ApiClientConfig { base_url, user_agent: None };
        ApiClient::new(config, Arc::new(StaticToken(Some("t")))).unwrap()
    }

    #[tokio::test]
    async fn unreadable_error_body_uses_fallback() {
        let client = client_at(truncated_body_server("502 Bad Gateway").await);
        let err = client.get::<Value>("/leads").await.unwrap_err();

        assert_eq!(err, ApiError::Status { status: 502, message: "Something went wrong".into() });
    }

    #[tokio::test]
    async fn unreadable_success_body_is_network_error() {
        let client = client_at(truncated_body_server("200 OK").await);
        let err = client.get::<Value>("/leads").await.unwrap_err();

        assert!(matches!(err, ApiError::Network(ref message) if message.contains("Failed to read")));
    }

    #[tokio::test]
    async fn put_sends_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/leaves/l1/status"))
            .and(body_json(json!({"status": "Approved"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let _: Value = client.put("/leaves/l1/status", &json!({"status": "Approved"})).await.unwrap();
    }

    #[tokio::test]
    async fn no_content_deserializes_from_null() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/returns/r1"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/api/returns/r1"))
            .respond_with(ResponseTemplate::new(205))
            .mount(&server)
            .await;

        let client = client_for(&server, Some("t"));
        let deleted: Result<(), ApiError> = client.delete("/returns/r1").await;
        assert!(deleted.is_ok());
        let patched: Option<Greeting> = client.patch("/returns/r1", &json!({})).await.unwrap();
        assert!(patched.is_none());
    }

    #[tokio::test]
    async fn unparsable_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/leads"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let err = client.get::<Vec<Value>>("/leads").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn header_overrides_replace_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/upload"))
            .and(header("Content-Type", "text/plain"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, None);
        let options = RequestOptions::new(Method::POST)
            .with_body("raw")
            .unwrap()
            .with_header("Content-Type", "text/plain");
        let _: Value = client.request("/upload", options).await.unwrap();
    }

    #[test]
    fn url_for_joins_base_and_prefix() {
        let client = ApiClient::new(
            ApiClientConfig { base_url: "http://crm.local:5000/".into(), user_agent: None },
            Arc::new(StaticToken(None)),
        )
        .unwrap();
        assert_eq!(client.url_for("/leads"), "http://crm.local:5000/api/leads");
        assert_eq!(client.url_for("leads"), "http://crm.local:5000/api/leads");
    }

    #[test]
    fn invalid_base_url_is_config_error() {
        let result = ApiClient::new(
            ApiClientConfig { base_url: "not a url".into(), user_agent: None },
            Arc::new(StaticToken(None)),
        );
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn builder_requires_auth() {
        assert!(ApiClient::builder().build().is_err());
        assert!(ApiClient::builder().auth(Arc::new(StaticToken(None))).build().is_ok());
    }
}
