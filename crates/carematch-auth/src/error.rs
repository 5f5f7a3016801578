use thiserror::Error;

use carematch_api::ApiError;
use carematch_core::models::session::Role;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not logged in")]
    NotLoggedIn,

    #[error("this action requires a {expected} account, but the session belongs to a {actual}")]
    WrongRole { expected: Role, actual: Role },

    #[error("unexpected patient status: {0}. Please contact support.")]
    UnexpectedStatus(String),

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no config directory found")]
    NoConfigDir,

    #[error("session file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}
