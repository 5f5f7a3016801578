use tracing::info;
use uuid::Uuid;

use carematch_core::models::application::ApplyResponse;
use carematch_core::models::care::{CarePlan, RiskPredictionRequest, RiskPredictionResponse};
use carematch_core::models::insurer::InsurerProfile;
use carematch_core::models::mood_score::{MoodScoreRequest, MoodScoreResponse};
use carematch_core::models::patient::{PatientProfile, PatientSummary, PatientUpdate};
use carematch_core::routes;

use crate::client::ApiClient;
use crate::error::ApiError;

pub fn me(client: &ApiClient, token: &str) -> Result<PatientProfile, ApiError> {
    client.get(routes::PATIENT_ME, Some(token))
}

pub fn update(
    client: &ApiClient,
    token: &str,
    update: &PatientUpdate,
) -> Result<PatientProfile, ApiError> {
    client.put(routes::PATIENT_UPDATE, Some(token), update)
}

/// Store the questionnaire total against the authenticated patient.
pub fn submit_mood_score(
    client: &ApiClient,
    token: &str,
    total_score: i32,
) -> Result<MoodScoreResponse, ApiError> {
    info!(total_score, "submitting mood score");
    let request = MoodScoreRequest {
        moodscore: total_score,
    };
    client.put(routes::PATIENT_MOOD_SCORE, Some(token), &request)
}

pub fn summary(client: &ApiClient, patient_id: Uuid) -> Result<PatientSummary, ApiError> {
    client.get(&routes::patient(patient_id), None)
}

/// Insurers operating in the patient's district.
pub fn providers(
    client: &ApiClient,
    token: &str,
    patient_id: Uuid,
) -> Result<Vec<InsurerProfile>, ApiError> {
    client.get(&routes::patient_providers(patient_id), Some(token))
}

pub fn apply(
    client: &ApiClient,
    token: &str,
    insurer_id: Uuid,
    patient_id: Uuid,
) -> Result<ApplyResponse, ApiError> {
    info!(%insurer_id, %patient_id, "applying to insurer");
    client.post_empty(&routes::apply(insurer_id, patient_id), Some(token))
}

/// Run the risk model on the patient's factors; the backend stores the
/// predicted level on the patient record.
pub fn predict_risk(
    client: &ApiClient,
    token: &str,
    request: &RiskPredictionRequest,
) -> Result<RiskPredictionResponse, ApiError> {
    info!(patient_id = %request.patient_id, "requesting risk prediction");
    client.post(routes::PATIENT_RISK_PREDICTION, Some(token), request)
}

pub fn care_plan(
    client: &ApiClient,
    token: &str,
    patient_id: Uuid,
) -> Result<CarePlan, ApiError> {
    info!(%patient_id, "requesting care plan");
    client.post_empty(&routes::care_plan(patient_id), Some(token))
}
