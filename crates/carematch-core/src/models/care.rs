use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Inputs to the risk model besides the patient id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactors {
    pub age: u32,
    pub gender: String,
    pub mood_score: i32,
    /// 1-10.
    pub sleep_quality: u8,
    /// 1-10.
    pub stress_level: u8,
    pub emotional_state: String,
}

/// Body of `POST /patient/riskprediction`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskPredictionRequest {
    pub patient_id: Uuid,
    #[serde(flatten)]
    #[ts(flatten)]
    pub factors: RiskFactors,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskPredictionResponse {
    pub success: bool,
    pub message: String,
    pub patient_id: Uuid,
    #[serde(rename = "riskLevel")]
    pub risk_level: String,
}

/// Patient record echoed back with a care plan.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePatientInfo {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(rename = "diseaseName", default)]
    pub disease_name: Option<String>,
    #[serde(rename = "riskLevel", default)]
    pub risk_level: Option<String>,
    #[serde(rename = "moodScore", default)]
    pub mood_score: Option<f64>,
    pub district: String,
    pub country: String,
}

/// An insurer in the patient's district, as listed alongside a care plan.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CareProvider {
    pub id: Uuid,
    #[serde(rename = "companyName")]
    pub company_name: String,
    #[serde(rename = "contactNo")]
    pub contact_no: String,
    pub email: String,
    pub address: String,
    pub country: String,
}

/// Returned by `POST /careschedule/care/patient/overall/{id}`: a generated
/// treatment suggestion plus nearby providers.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CarePlan {
    pub suggestion: String,
    #[serde(default)]
    pub providers: Vec<CareProvider>,
    #[serde(rename = "patientInfo")]
    pub patient_info: CarePatientInfo,
}

impl CarePlan {
    /// Non-blank suggestion lines, trimmed.
    pub fn suggestion_lines(&self) -> impl Iterator<Item = &str> {
        self.suggestion
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}
