use std::fmt;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use ureq::http::Response;
use ureq::{Agent, Body, RequestBuilder};

use crate::error::ApiError;

/// Address of the backend when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client bound to one backend base URL.
#[derive(Clone)]
pub struct ApiClient {
    agent: Agent,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            // Non-2xx responses carry a `detail` body we want to surface.
            .http_status_as_error(false)
            .build();

        Self {
            agent: Agent::new_with_config(config),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        debug!(method = "GET", path, "sending request");
        let request = authorize(self.agent.get(self.url(path)), token);
        read_response(path, request.call()?)
    }

    pub(crate) fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(method = "POST", path, "sending request");
        let request = authorize(self.agent.post(self.url(path)), token);
        read_response(path, request.send_json(body)?)
    }

    pub(crate) fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        debug!(method = "POST", path, "sending request");
        let request = authorize(self.agent.post(self.url(path)), token);
        read_response(path, request.send_empty()?)
    }

    pub(crate) fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(method = "PUT", path, "sending request");
        let request = authorize(self.agent.put(self.url(path)), token);
        read_response(path, request.send_json(body)?)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }
}

fn authorize<B>(request: RequestBuilder<B>, token: Option<&str>) -> RequestBuilder<B> {
    match token {
        Some(token) => request.header("Authorization", format!("Bearer {token}")),
        None => request,
    }
}

fn read_response<T: DeserializeOwned>(
    path: &str,
    mut response: Response<Body>,
) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.body_mut().read_to_string()?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| ApiError::Decode {
            path: path.to_string(),
            message: e.to_string(),
        });
    }

    let detail = error_detail(&body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });
    warn!(path, status = status.as_u16(), detail = %detail, "request failed");

    match status.as_u16() {
        401 | 403 => Err(ApiError::Unauthorized(detail)),
        code => Err(ApiError::Status {
            status: code,
            detail,
        }),
    }
}

/// Extract the backend's `{"detail": ...}` message. Validation failures
/// carry a list instead of a string; those are returned as compact JSON.
fn error_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    match json.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
