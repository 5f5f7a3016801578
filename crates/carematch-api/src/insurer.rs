use tracing::info;
use uuid::Uuid;

use carematch_core::models::application::{
    ApplicationDecision, DecisionRequest, DecisionResponse, PatientApplication,
};
use carematch_core::models::appointment::{AppointmentRequest, AppointmentResponse};
use carematch_core::models::insurer::{InsurerProfile, InsurerUpdate};
use carematch_core::routes;

use crate::client::ApiClient;
use crate::error::ApiError;

pub fn profile(client: &ApiClient, token: &str) -> Result<InsurerProfile, ApiError> {
    client.get(routes::INSURER_PROFILE, Some(token))
}

pub fn update(
    client: &ApiClient,
    token: &str,
    update: &InsurerUpdate,
) -> Result<InsurerProfile, ApiError> {
    client.put(routes::INSURER_UPDATE, Some(token), update)
}

/// Applications addressed to the authenticated insurer.
pub fn applications(
    client: &ApiClient,
    token: &str,
) -> Result<Vec<PatientApplication>, ApiError> {
    client.get(routes::INSURER_APPLICATIONS, Some(token))
}

pub fn decide(
    client: &ApiClient,
    token: &str,
    application_id: Uuid,
    decision: ApplicationDecision,
) -> Result<DecisionResponse, ApiError> {
    info!(%application_id, %decision, "deciding application");
    let request = DecisionRequest { status: decision };
    client.put(&routes::application(application_id), Some(token), &request)
}

pub fn book_appointment(
    client: &ApiClient,
    token: &str,
    request: &AppointmentRequest,
) -> Result<AppointmentResponse, ApiError> {
    info!(
        application_id = %request.application_id,
        scheduled = %request.scheduled_datetime,
        "booking appointment"
    );
    client.post(routes::BOOK_APPOINTMENT, Some(token), request)
}
