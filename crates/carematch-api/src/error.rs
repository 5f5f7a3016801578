use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("not authorized: {0}")]
    Unauthorized(String),

    #[error("request failed with status {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("unexpected response from {path}: {message}")]
    Decode { path: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<ureq::Error> for ApiError {
    fn from(e: ureq::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl ApiError {
    /// Whether the backend rejected the bearer token or credentials.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized(_))
    }
}
