use crate::{ApiError, ApiResult, AuthEvent, CredentialStore};

use bb_config::ApiConfig;

use std::time::Duration;

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::broadcast;

const AUTH_EVENT_CAPACITY: usize = 16;

/// HTTP client for the billing REST API
///
/// Attaches the persisted bearer token to every request. A 401 clears the
/// persisted credentials and a 403 is reported, both through [`AuthEvent`]s
/// that the routing layer subscribes to.
pub struct HttpClient {
    base_url: String,
    client: ReqwestClient,
    credentials: CredentialStore,
    auth_events: broadcast::Sender<AuthEvent>,
}

impl HttpClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://localhost:8080")
    /// * `timeout` - Per-request timeout
    /// * `credentials` - Where the bearer token is read from and cleared on 401
    pub fn new(
        base_url: &str,
        timeout: Duration,
        credentials: CredentialStore,
    ) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(ApiError::http)?;

        let (auth_events, _) = broadcast::channel(AUTH_EVENT_CAPACITY);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
            auth_events,
        })
    }

    pub fn from_config(config: &ApiConfig, credentials: CredentialStore) -> ApiResult<Self> {
        Self::new(&config.base_url, config.timeout(), credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Receive 401/403 notifications from every call made through this client
    pub fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.auth_events.subscribe()
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let req = self.request(Method::GET, path, query)?;
        let body = self.execute(req).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::POST, path, &[])?.json(body);
        let body = self.execute(req).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// POST without a request body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let req = self.request(Method::POST, path, &[])?;
        let body = self.execute(req).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let req = self.request(Method::PUT, path, &[])?.json(body);
        let body = self.execute(req).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// GET a raw body, e.g. a server-generated CSV export
    pub async fn get_bytes(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Vec<u8>> {
        let req = self.request(Method::GET, path, query)?;
        self.execute(req).await
    }

    // =========================================================================
    // Plumbing
    // =========================================================================

    fn url(&self, path: &str, query: &[(&str, String)]) -> ApiResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        let mut url =
            Url::parse(&raw).map_err(|e| ApiError::invalid_url(raw.clone(), e.to_string()))?;

        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }

        Ok(url)
    }

    /// Build a request with the bearer token when one is persisted
    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<RequestBuilder> {
        let url = self.url(path, query)?;
        debug!("{} {}", method, url.path());

        let mut req = self.client.request(method, url);

        match self.credentials.token() {
            Ok(Some(token)) => req = req.header(AUTHORIZATION, format!("Bearer {}", token)),
            Ok(None) => {}
            Err(e) => warn!("Sending request without token, credential read failed: {}", e),
        }

        Ok(req)
    }

    /// Execute request and normalize transport and status errors
    async fn execute(&self, req: RequestBuilder) -> ApiResult<Vec<u8>> {
        let response = req.send().await.map_err(ApiError::network)?;
        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::network)?;

        if status.is_success() {
            return Ok(body.to_vec());
        }

        let message = server_message(&body);

        match status {
            StatusCode::UNAUTHORIZED => {
                warn!("Received 401, clearing session");
                if let Err(e) = self.credentials.clear() {
                    warn!("Failed to clear persisted credentials: {}", e);
                }
                self.notify(AuthEvent::Unauthenticated);
                Err(ApiError::unauthenticated(message))
            }
            StatusCode::FORBIDDEN => {
                warn!("Received 403, access denied");
                self.notify(AuthEvent::Forbidden);
                Err(ApiError::forbidden(message))
            }
            _ => {
                debug!("Request failed with status {}", status.as_u16());
                Err(ApiError::server(status.as_u16(), message))
            }
        }
    }

    fn notify(&self, event: AuthEvent) {
        // No subscribers is fine: nothing is routing yet.
        let _ = self.auth_events.send(event);
    }
}

/// Pull a human-readable message out of an error body.
///
/// Accepts `{"message": ".."}`, `{"error": ".."}` and `{"error": {"message": ".."}}`.
pub(crate) fn server_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;

    let message = value
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| value.get("error").and_then(Value::as_str))
        .or_else(|| {
            value
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(Value::as_str)
        })?;

    if message.is_empty() {
        None
    } else {
        Some(message.to_string())
    }
}

