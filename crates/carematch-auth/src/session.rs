//! The session context: bearer token plus user record, persisted between
//! invocations and passed explicitly to whatever needs it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use carematch_core::models::session::{Role, SessionUser};

use crate::error::AuthError;
use crate::storage;

const SESSION_FILE: &str = "session.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub saved_at: jiff::Timestamp,
}

impl Session {
    pub fn new(token: String, user: SessionUser) -> Self {
        Self {
            token,
            user,
            saved_at: jiff::Timestamp::now(),
        }
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn user_id(&self) -> Uuid {
        self.user.id
    }
}

/// Reads and writes the session file in one directory.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The per-user location, `<config_dir>/carematch`.
    pub fn default_location() -> Result<Self, AuthError> {
        storage::default_dir()
            .map(Self::new)
            .ok_or(AuthError::NoConfigDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    /// The stored session, or `None` when logged out.
    pub fn load(&self) -> Result<Option<Session>, AuthError> {
        let path = self.path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Like [`load`](Self::load), but a missing session is an error.
    pub fn require(&self) -> Result<Session, AuthError> {
        self.load()?.ok_or(AuthError::NotLoggedIn)
    }

    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        let json = serde_json::to_string_pretty(session)?;
        let path = storage::write_private(&self.dir, SESSION_FILE, json.as_bytes())?;

        tracing::info!(path = %path.display(), role = %session.role(), "session saved");
        Ok(())
    }

    /// Remove the stored session. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<(), AuthError> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(&path)?;
            tracing::info!(path = %path.display(), "session cleared");
        }
        Ok(())
    }
}
