use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsurerSignup {
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    pub address: String,
    pub district: String,
    pub country: String,
}

/// An insurer as seen by itself (`GET /insurer/profile`) and by patients
/// browsing providers in their district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsurerProfile {
    pub id: Uuid,
    #[serde(rename = "companyName")]
    pub company_name: String,
    pub email: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    pub address: String,
    pub district: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InsurerUpdate {
    #[serde(rename = "companyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(rename = "contactNo", skip_serializing_if = "Option::is_none")]
    pub contact_no: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}
