use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::session::{Role, SessionUser};

/// Body of `POST /patient/login` and `POST /insurer/login`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Returned by both login and signup endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub role: Role,
    pub id: Uuid,
    /// Present for patients only.
    #[serde(default)]
    pub status: Option<String>,
}

impl TokenResponse {
    pub fn user(&self) -> SessionUser {
        SessionUser {
            id: self.id,
            role: self.role,
            status: self.status.clone(),
        }
    }
}
