use std::sync::{Arc, Mutex};

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

mod gateway;
pub mod wire;

use wire::ErrorBody;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A non-2xx response, carrying the backend's `detail` message when
    /// one could be parsed.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Transport failure or malformed JSON; the underlying error passes
    /// through unchanged.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Thin typed wrapper over the store's REST surface. One request per
/// call; no retries, timeouts, or caching. A bearer token obtained from
/// register/login is attached to every subsequent request.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    token: Arc<Mutex<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
            token: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        let mut slot = self.token.lock().expect("token lock poisoned");
        *slot = Some(token.into());
    }

    pub fn clear_token(&self) {
        let mut slot = self.token.lock().expect("token lock poisoned");
        *slot = None;
    }

    fn bearer(&self) -> Option<String> {
        self.token.lock().expect("token lock poisoned").clone()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = self.with_auth(self.http.get(self.url(path))).send().await?;
        decode(resp).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let resp = self
            .with_auth(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        decode(resp).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let resp = self
            .with_auth(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        decode(resp).await
    }

    /// DELETE endpoints confirm with a message body that nothing here
    /// consumes; only the status matters.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let resp = self
            .with_auth(self.http.delete(self.url(path)))
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.bytes().await?;
            return Err(error_from_body(status.as_u16(), &body));
        }
        Ok(())
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.bytes().await?;
        return Err(error_from_body(status.as_u16(), &body));
    }
    Ok(resp.json::<T>().await?)
}

/// The single error-normalization path: a parsable `{"detail": ...}`
/// body wins, anything else degrades to a generic status message.
fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|body| body.detail)
        .unwrap_or_else(|_| format!("HTTP error: {}", status));
    ApiError::Http { status, message }
}
