//! Shared HTTP transport for all API calls.
//!
//! DESIGN
//! ======
//! One `reqwest::Client` with a fixed timeout serves every request. Before
//! sending, the credential store is consulted and the bearer token attached
//! if present; requests without a credential go out unauthenticated and the
//! server decides. After every response the transport classifies the outcome
//! into an [`ApiError`] and applies exactly two global side effects:
//!
//! - 401: the registered unauthorized observer is notified once for the
//!   response (it forces logout), then the error propagates unchanged.
//!   The request is never retried.
//! - 5xx: the injected [`Navigator`] is told to redirect the application to
//!   the generic server-error view, then the error propagates.
//!
//! A 403 is classified as unauthorized for the caller but does NOT notify
//! the observer: an authenticated-but-forbidden response should not destroy
//! the session.
//!
//! The observer lives in a single-slot registry owned by the transport.
//! Registration replaces any previous observer; the slot holds a `Weak`
//! reference so a dropped session gate can never be resurrected through it.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{Arc, Mutex, Weak};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::net::error::{self, ApiError};
use crate::store::CredentialStore;

/// Receiver of the forced-logout signal raised by a 401 response.
#[async_trait::async_trait]
pub trait UnauthorizedObserver: Send + Sync {
    async fn on_unauthorized(&self);
}

/// Application-level navigation sink. The transport only ever asks for the
/// server-error fallback; the host maps this to a real page change.
pub trait Navigator: Send + Sync {
    fn redirect_to_error_page(&self);
}

/// Navigator that drops the request. Useful for headless tools and tests.
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn redirect_to_error_page(&self) {}
}

/// Shared HTTP entry point: base URL, timeout, credential attachment and
/// response classification.
pub struct Transport {
    http: reqwest::Client,
    base_url: String,
    store: Arc<CredentialStore>,
    observer: Mutex<Option<Weak<dyn UnauthorizedObserver>>>,
    navigator: Arc<dyn Navigator>,
}

impl Transport {
    /// Build the transport from config.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ClientBuild`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        config: &ClientConfig,
        store: Arc<CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            store,
            observer: Mutex::new(None),
            navigator,
        })
    }

    /// Replace the unauthorized observer; `None` clears the slot. Callable
    /// at any time, from anywhere, without panicking. A second registration
    /// replaces the first — observers never stack.
    pub fn set_unauthorized_observer(&self, observer: Option<&Arc<dyn UnauthorizedObserver>>) {
        *self
            .observer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) =
            observer.map(Arc::downgrade);
    }

    async fn notify_unauthorized(&self) {
        // Clone out of the slot before awaiting; the observer may call back
        // into `set_unauthorized_observer`.
        let observer = self
            .observer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade);
        if let Some(observer) = observer {
            observer.on_unauthorized().await;
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attach the credential (if any), send, and classify the response.
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let req = match self.store.get() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req.send().await.map_err(classify_send_error)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let code = status.as_u16();
        let detail = resp
            .json::<Value>()
            .await
            .ok()
            .as_ref()
            .and_then(error::detail_message);

        if code == 401 {
            tracing::debug!("401 received — signaling forced logout");
            self.notify_unauthorized().await;
        }
        if status.is_server_error() {
            tracing::warn!(status = code, "server failure — requesting fallback navigation");
            self.navigator.redirect_to_error_page();
            return Err(ApiError::Server { status: code });
        }
        match code {
            401 | 403 => Err(ApiError::Unauthorized { status: code, detail }),
            _ => Err(ApiError::Rejected { status: code, detail }),
        }
    }

    async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `GET` returning a decoded JSON body.
    ///
    /// # Errors
    ///
    /// Classified per [`ApiError`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        Self::decode(resp).await
    }

    /// `POST` with a JSON payload, returning a decoded JSON body.
    ///
    /// # Errors
    ///
    /// Classified per [`ApiError`].
    pub async fn post_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(resp).await
    }

    /// Bodyless `POST` for endpoints answering 204.
    ///
    /// # Errors
    ///
    /// Classified per [`ApiError`].
    pub async fn post_unit(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path))).await?;
        Ok(())
    }

    /// `PUT` with a JSON payload, returning a decoded JSON body.
    ///
    /// # Errors
    ///
    /// Classified per [`ApiError`].
    pub async fn put_json<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::decode(resp).await
    }

    /// `DELETE` returning a decoded JSON body (the API answers deletes with
    /// the deactivated record).
    ///
    /// # Errors
    ///
    /// Classified per [`ApiError`].
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.send(self.http.delete(self.url(path))).await?;
        Self::decode(resp).await
    }
}

/// Map a wire-level send failure (no response received) to [`ApiError::Network`].
fn classify_send_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Network("request timed out".to_owned())
    } else if e.is_connect() {
        ApiError::Network("connection failed".to_owned())
    } else {
        ApiError::Network(e.to_string())
    }
}
