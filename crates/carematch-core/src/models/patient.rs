use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientSignup {
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    pub email: String,
    pub password: String,
    pub address: String,
    pub district: String,
    pub country: String,
    pub status: String,
}

/// Returned by `GET /patient/me` and `PUT /patient/update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientProfile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub address: String,
    pub district: String,
    pub country: String,
    pub status: String,
}

/// Partial update; only fields that are `Some` are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Clinical summary returned by `GET /patient/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientSummary {
    pub age: u32,
    pub gender: String,
    #[serde(rename = "diseaseName", default)]
    pub disease_name: Option<String>,
    #[serde(rename = "riskLevel", default)]
    pub risk_level: Option<String>,
    #[serde(default)]
    pub moodscore: Option<i32>,
}
