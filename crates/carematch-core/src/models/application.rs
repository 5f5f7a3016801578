use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Returned by `POST /patient/apply/{insurer_id}/{patient_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ApplyResponse {
    pub message: String,
    #[serde(rename = "applicationId")]
    pub application_id: Uuid,
    pub patient_id: Uuid,
    pub insurer_id: Uuid,
    #[serde(rename = "applnStatus")]
    pub appln_status: String,
    pub patient_name: String,
    pub insurer_name: String,
    pub application_status: String,
}

/// An insurer's verdict on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ApplicationDecision {
    Accepted,
    Declined,
}

impl fmt::Display for ApplicationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplicationDecision::Accepted => f.write_str("accepted"),
            ApplicationDecision::Declined => f.write_str("declined"),
        }
    }
}

/// Body of `PUT /insurer/application/{id}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionRequest {
    pub status: ApplicationDecision,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DecisionResponse {
    pub application_id: Uuid,
    pub status: String,
    pub patient_id: Uuid,
    pub message: String,
}

/// One row of the insurer dashboard (`GET /insurer/patient-applications`).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientApplication {
    pub application_id: Uuid,
    pub patient_id: Uuid,
    #[serde(default)]
    pub insurer_id: Option<Uuid>,
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(rename = "riskLevel", default)]
    pub risk_level: Option<String>,
    #[serde(rename = "moodScore", default)]
    pub mood_score: Option<f64>,
    #[serde(rename = "applnStatus", default)]
    pub appln_status: Option<String>,
}

impl PatientApplication {
    /// Applications still awaiting an accept/decline decision.
    pub fn is_pending(&self) -> bool {
        matches!(self.appln_status.as_deref(), None | Some("pending"))
    }
}
