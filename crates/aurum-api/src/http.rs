//! # HTTP Transport
//!
//! The single path every backend call goes through.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       HTTP Transport Flow                               │
//! │                                                                         │
//! │  endpoint client                                                        │
//! │       │  get_json / post_json / put_json / delete                      │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  attach bearer token (when cell is set)   │                         │
//! │  │  send JSON request                        │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  2xx        → parse body                  │                         │
//! │  │  401        → CLEAR TOKEN CELL, Unauthorized                        │
//! │  │  403        → Forbidden (token retained)  │                         │
//! │  │  other      → Rejected{status, body}      │                         │
//! │  │  no response→ Network                     │                         │
//! │  └───────────────────────────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Token Cell
//! The bearer token lives in an `Arc<RwLock<Option<String>>>` shared with the
//! session store: the session writes it on login/restore, the transport reads
//! it per request and clears it synchronously on a 401 so the logged-in flag
//! can never outlive a rejected token by more than the current call.
//!
//! No client-side timeouts: a hung request leaves its collection stale until
//! the next trigger rather than failing a healthy-but-slow backend.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ApiError, ApiResult};

/// Shared bearer-token slot, owned jointly by transport and session store.
pub type TokenCell = Arc<RwLock<Option<String>>>;

/// HTTP client bound to one backend base URL.
///
/// Cheap to clone: the underlying `reqwest::Client` is an `Arc` internally
/// and the token cell is shared by design.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Base URL with any trailing slash removed.
    base: String,
    inner: reqwest::Client,
    token: TokenCell,
}

impl HttpClient {
    /// Creates a client for the given base URL (e.g. `http://localhost:8080`).
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let trimmed = base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| ApiError::BaseUrl(format!("{}: {}", base_url, e)))?;

        Ok(HttpClient {
            base: trimmed.to_string(),
            inner: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// The shared token cell.
    pub fn token_cell(&self) -> TokenCell {
        Arc::clone(&self.token)
    }

    /// Stores the bearer token used for subsequent requests.
    pub async fn set_token(&self, token: String) {
        *self.token.write().await = Some(token);
    }

    /// Drops the bearer token; subsequent requests go out unauthenticated.
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    /// Whether a bearer token is currently held.
    pub async fn has_token(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// GET returning a JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let body = self.request(Method::GET, path, None::<&()>).await?;
        Self::parse(&body)
    }

    /// POST with a JSON body, returning a JSON body.
    pub async fn post_json<T, B>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.request(Method::POST, path, Some(payload)).await?;
        Self::parse(&body)
    }

    /// PUT with a JSON body, returning a JSON body.
    pub async fn put_json<T, B>(&self, path: &str, payload: &B) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = self.request(Method::PUT, path, Some(payload)).await?;
        Self::parse(&body)
    }

    /// DELETE; tolerates an empty response body.
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.request(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// Sends one request and classifies the response, returning the raw
    /// success body.
    async fn request<B>(&self, method: Method, path: &str, payload: Option<&B>) -> ApiResult<String>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base, path);
        debug!(%method, %url, "backend request");

        let mut builder = self.inner.request(method, &url);
        if let Some(token) = self.token.read().await.as_deref() {
            builder = builder.bearer_auth(token);
        }
        if let Some(payload) = payload {
            builder = builder.json(payload);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() == 401 {
            // Proactive clear: the flag owner reacts on the same call path.
            warn!(%url, "token rejected by backend");
            self.clear_token().await;
            return Err(ApiError::Unauthorized);
        }
        if status.as_u16() == 403 {
            warn!(%url, "access denied");
            return Err(ApiError::Forbidden);
        }
        if !status.is_success() {
            return Err(ApiError::rejected(status.as_u16(), &body));
        }

        Ok(body)
    }

    fn parse<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
        if body.trim().is_empty() {
            return Err(ApiError::Decode("corpo de resposta vazio".into()));
        }
        Ok(serde_json::from_str(body)?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
