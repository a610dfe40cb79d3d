use log::{debug, warn};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, RequestBuilder, Response,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{api::types::ApiError, config, state::session::SessionStore};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_session(SessionStore::default())
    }

    pub fn with_session(session: SessionStore) -> Self {
        Self {
            client: build_http_client(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self::new().with_base_url(base_url)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    fn get_auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.session.get_token() {
            match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => warn!("stored access token is not a valid header value"),
            }
        }
        headers
    }

    /// Sends `request` without credentials.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        dispatch(request).await
    }

    /// Sends `request` with the session's bearer token attached, if any.
    pub(crate) async fn send_authorized(
        &self,
        request: RequestBuilder,
    ) -> Result<Response, ApiError> {
        dispatch(request.headers(self.get_auth_headers())).await
    }

    /// Decodes a successful authenticated response, or classifies the failure.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        } else {
            Err(self.authorized_failure(response).await)
        }
    }

    /// Like [`read_json`](Self::read_json) for endpoints whose body is ignored.
    pub(crate) async fn expect_success(&self, response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(self.authorized_failure(response).await)
        }
    }

    async fn authorized_failure(&self, response: Response) -> ApiError {
        let error = error_from_response(response).await;
        if error.is_auth() {
            warn!("request rejected as unauthorized; clearing session");
            self.session.clear_token();
        }
        error
    }
}

pub(crate) async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, extract_detail(&body));
    debug!("request failed with status {}: {}", status, error);
    error
}

/// Pulls a human-readable message out of an error body.
///
/// Understands `{"detail": "..."}`, the list form
/// `{"detail": [{"msg": "..."}, ...]}`, and falls back to `message` / `error`
/// string fields.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let detail = match value.get("detail") {
        Some(Value::String(text)) => Some(text.clone()),
        Some(Value::Array(items)) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                })
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        Some(obj @ Value::Object(_)) => obj.get("msg").and_then(Value::as_str).map(str::to_string),
        _ => None,
    };
    detail
        .or_else(|| value.get("message").and_then(Value::as_str).map(str::to_string))
        .or_else(|| value.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|text| !text.trim().is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client() -> Client {
    Client::builder()
        .timeout(config::REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|err| {
            warn!("falling back to default HTTP client: {}", err);
            Client::new()
        })
}

#[cfg(target_arch = "wasm32")]
fn build_http_client() -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
async fn dispatch(request: RequestBuilder) -> Result<Response, ApiError> {
    request.send().await.map_err(|e| {
        if e.is_timeout() {
            ApiError::network("request timed out")
        } else {
            ApiError::network(e.to_string())
        }
    })
}

// The browser fetch backend has no client-level timeout, so race the request
// against a timer instead.
#[cfg(target_arch = "wasm32")]
async fn dispatch(request: RequestBuilder) -> Result<Response, ApiError> {
    use futures::future::{select, Either};
    use gloo_timers::future::TimeoutFuture;

    let timeout = TimeoutFuture::new(config::REQUEST_TIMEOUT.as_millis() as u32);
    match select(Box::pin(request.send()), Box::pin(timeout)).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::network(e.to_string())),
        Either::Right(_) => Err(ApiError::network("request timed out")),
    }
}
