//! Backend route conventions.
//!
//! Pure string functions with no HTTP dependency. These define the canonical
//! paths of the REST backend, relative to its base URL.

use uuid::Uuid;

use crate::models::session::Role;

pub fn login(role: Role) -> String {
    format!("/{role}/login")
}

pub fn signup(role: Role) -> String {
    format!("/{role}/signup")
}

pub const PATIENT_ME: &str = "/patient/me";

pub const PATIENT_UPDATE: &str = "/patient/update";

pub const PATIENT_MOOD_SCORE: &str = "/patient/moodscore";

pub const PATIENT_RISK_PREDICTION: &str = "/patient/riskprediction";

pub fn patient(id: Uuid) -> String {
    format!("/patient/{id}")
}

pub fn patient_providers(id: Uuid) -> String {
    format!("/patient/{id}/providers")
}

pub fn apply(insurer_id: Uuid, patient_id: Uuid) -> String {
    format!("/patient/apply/{insurer_id}/{patient_id}")
}

/// Generated care suggestion plus providers in the patient's district.
pub fn care_plan(patient_id: Uuid) -> String {
    format!("/careschedule/care/patient/overall/{patient_id}")
}

pub const INSURER_PROFILE: &str = "/insurer/profile";

pub const INSURER_UPDATE: &str = "/insurer/update";

pub const INSURER_APPLICATIONS: &str = "/insurer/patient-applications";

pub fn application(id: Uuid) -> String {
    format!("/insurer/application/{id}")
}

pub const BOOK_APPOINTMENT: &str = "/insurer/book-appointment";
