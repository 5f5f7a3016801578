use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Body of `POST /insurer/book-appointment`.
///
/// The backend takes a naive local date-time, so this is a civil value
/// rather than a timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppointmentRequest {
    pub application_id: Uuid,
    pub scheduled_datetime: jiff::civil::DateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppointmentResponse {
    pub message: String,
    #[serde(rename = "apptStatus")]
    pub appt_status: String,
    pub patient_id: Uuid,
}
