use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Which side of the marketplace an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Patient,
    Insurer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Insurer => "insurer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "patient" => Ok(Role::Patient),
            "insurer" => Ok(Role::Insurer),
            other => Err(CoreError::InvalidRole(other.to_string())),
        }
    }
}

/// Treatment status a patient declares at signup.
///
/// The backend stores this as free text, so the wire schemas carry a
/// `String` and callers parse it where routing depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientStatus {
    /// No diagnosis yet: screening leads to provider matching.
    Undiagnosed,
    /// Diagnosed but not receiving adequate care: screening leads to the
    /// risk assessment.
    Undertreated,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Undiagnosed => "undiagnosed",
            PatientStatus::Undertreated => "undertreated",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "undiagnosed" => Ok(PatientStatus::Undiagnosed),
            "undertreated" => Ok(PatientStatus::Undertreated),
            other => Err(CoreError::InvalidStatus(other.to_string())),
        }
    }
}

/// The user record held alongside the bearer token for the life of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionUser {
    pub id: Uuid,
    pub role: Role,
    /// Raw status string from the backend. Insurers have none.
    #[serde(default)]
    pub status: Option<String>,
}

impl SessionUser {
    /// The parsed patient status, if present and recognised.
    pub fn patient_status(&self) -> Option<PatientStatus> {
        self.status.as_deref().and_then(|s| s.parse().ok())
    }
}
