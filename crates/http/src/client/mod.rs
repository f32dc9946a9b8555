//! Shared API client with bearer and refresh-on-401 handling

pub mod auth;
pub mod error;

use error::ClientError;
use keyhold_core::{TokenKind, TokenStore};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

const DEFAULT_USER_AGENT: &str = concat!("keyhold-client/", env!("CARGO_PKG_VERSION"));

/// Request body encodings the backend accepts
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

/// A request description that can be sent more than once
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    headers: HeaderMap,
    body: Option<RequestBody>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Append a query parameter
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Set an extra header
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Send a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ClientError> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Send a form-encoded body
    pub fn form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        self.body = Some(RequestBody::Form(fields));
        self
    }
}

/// Keyhold API client
///
/// Clones share the underlying connection pool, token store and refresh lock.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
    refresh_lock: Arc<Mutex<()>>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client with default configuration
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).store(store).build()
    }

    /// Create a new client builder
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The token store this client reads and writes
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    /// Send a request with the stored access token attached
    ///
    /// A 401 answer triggers one refresh-and-retry. The retried response is
    /// returned as-is, so a second 401 surfaces as [`ClientError::Http`].
    pub async fn send(&self, request: ApiRequest) -> Result<Response, ClientError> {
        let attached = self.store.get(TokenKind::Access);
        let response = self.dispatch(&request, attached.as_deref()).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return Self::check_status(response).await;
        }

        debug!(
            method = %request.method,
            path = %request.path,
            "request rejected with 401, refreshing access token"
        );
        let fresh = self.recover_access_token(attached.as_deref()).await?;

        let response = self.dispatch(&request, Some(fresh.as_str())).await?;
        Self::check_status(response).await
    }

    /// Send a request without credentials or 401 handling
    pub async fn send_public(&self, request: ApiRequest) -> Result<Response, ClientError> {
        let response = self.dispatch(&request, None).await?;
        Self::check_status(response).await
    }

    /// Send an authenticated request and decode its JSON body
    pub async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Self::decode(response).await
    }

    /// Send a public request and decode its JSON body
    pub async fn execute_public<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ClientError> {
        let response = self.send_public(request).await?;
        Self::decode(response).await
    }

    /// Exchange the stored refresh token for a new access token
    ///
    /// On failure both tokens are cleared.
    pub async fn refresh_access_token(&self) -> Result<String, ClientError> {
        let _guard = self.refresh_lock.lock().await;
        self.refresh_locked().await
    }

    /// Obtain a usable access token after `stale` was rejected
    ///
    /// Refreshes are serialized. A caller that waited on the lock while another
    /// request refreshed reuses that token instead of refreshing again.
    async fn recover_access_token(&self, stale: Option<&str>) -> Result<String, ClientError> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.store.get(TokenKind::Access) {
            if stale != Some(current.as_str()) {
                debug!("access token already refreshed by a concurrent request");
                return Ok(current);
            }
        }

        self.refresh_locked().await
    }

    async fn refresh_locked(&self) -> Result<String, ClientError> {
        let Some(refresh_token) = self.store.get(TokenKind::Refresh) else {
            warn!("no refresh token stored, clearing session");
            self.store.clear();
            return Err(ClientError::SessionExpired);
        };

        match self.refresh_token(&refresh_token).await {
            Ok(response) => {
                self.store.set_pair(&response.access_token, &refresh_token)?;
                info!("access token refreshed");
                Ok(response.access_token)
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed, clearing session");
                self.store.clear();
                Err(ClientError::RefreshFailed(Box::new(err)))
            }
        }
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<Response, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .client
            .request(request.method.clone(), url)
            .headers(request.headers.clone());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        builder = match &request.body {
            Some(RequestBody::Json(body)) => builder.json(body),
            Some(RequestBody::Form(fields)) => builder.form(fields),
            None => builder,
        };

        trace!(method = %request.method, path = %request.path, "sending request");
        Ok(builder.send().await?)
    }

    async fn check_status(response: Response) -> Result<Response, ClientError> {
        let status = response.status();

        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            debug!(status = status.as_u16(), "request failed");
            Err(ClientError::from_status(status, body))
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Builder for ApiClient
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    store: Option<Arc<dyn TokenStore>>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Set the base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the token store
    pub fn store(mut self, store: Arc<dyn TokenStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the request timeout (ignored on WASM)
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ApiClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        url::Url::parse(&base_url).map_err(|e| {
            ClientError::Configuration(format!("invalid base_url {base_url:?}: {e}"))
        })?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let store = self
            .store
            .ok_or_else(|| ClientError::Configuration("token store is required".into()))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = Client::builder().user_agent(user_agent);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = self.timeout; // Timeouts not supported on WASM
            Client::builder().user_agent(user_agent).build()?
        };

        Ok(ApiClient {
            client,
            base_url,
            store,
            refresh_lock: Arc::new(Mutex::new(())),
        })
    }
}
