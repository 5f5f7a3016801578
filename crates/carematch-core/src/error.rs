use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid role: {0}")]
    InvalidRole(String),

    #[error("invalid patient status: {0}")]
    InvalidStatus(String),
}
