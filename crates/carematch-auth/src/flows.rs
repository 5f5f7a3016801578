//! Account flows against the backend, and the landing each one leads to.

use tracing::{info, warn};

use carematch_api::{ApiClient, accounts, patient};
use carematch_core::models::auth::TokenResponse;
use carematch_core::models::care::{CarePlan, RiskFactors, RiskPredictionRequest};
use carematch_core::models::insurer::InsurerSignup;
use carematch_core::models::navigation::Landing;
use carematch_core::models::patient::PatientSignup;
use carematch_core::models::session::{PatientStatus, Role, SessionUser};
use carematch_instruments::scoring::ScoreResult;

use crate::credentials;
use crate::error::AuthError;
use crate::session::{Session, SessionStore};

/// A freshly stored session and where its user should go first.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub session: Session,
    pub landing: Landing,
}

pub fn login(
    client: &ApiClient,
    store: &SessionStore,
    role: Role,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, AuthError> {
    credentials::require_filled(email, password)?;
    let token = accounts::login(client, role, email.trim(), password)?;
    establish(store, token)
}

pub fn signup_patient(
    client: &ApiClient,
    store: &SessionStore,
    signup: &PatientSignup,
) -> Result<LoginOutcome, AuthError> {
    credentials::validate_email(&signup.email)?;
    credentials::validate_password(&signup.password)?;
    let token = accounts::signup_patient(client, signup)?;
    establish(store, token)
}

pub fn signup_insurer(
    client: &ApiClient,
    store: &SessionStore,
    signup: &InsurerSignup,
) -> Result<LoginOutcome, AuthError> {
    credentials::validate_email(&signup.email)?;
    credentials::validate_password(&signup.password)?;
    let token = accounts::signup_insurer(client, signup)?;
    establish(store, token)
}

pub fn logout(store: &SessionStore) -> Result<(), AuthError> {
    info!("logging out");
    store.clear()
}

fn establish(store: &SessionStore, token: TokenResponse) -> Result<LoginOutcome, AuthError> {
    let user = token.user();
    let session = Session::new(token.access_token, user);
    store.save(&session)?;

    let landing = landing_after_login(&session.user);
    info!(user_id = %session.user_id(), role = %session.role(), landing = landing.path(), "logged in");
    Ok(LoginOutcome { session, landing })
}

/// Undertreated patients upload clinical documents first; other patients
/// go straight to the questionnaire.
pub fn landing_after_login(user: &SessionUser) -> Landing {
    match user.role {
        Role::Insurer => Landing::InsurerDashboard,
        Role::Patient => match user.patient_status() {
            Some(PatientStatus::Undertreated) => Landing::Upload,
            _ => Landing::TakeTest,
        },
    }
}

/// Where a patient goes once their questionnaire total is stored.
pub fn landing_after_submission(user: &SessionUser) -> Result<Landing, AuthError> {
    match user.patient_status() {
        Some(PatientStatus::Undiagnosed) => Ok(Landing::Provider),
        Some(PatientStatus::Undertreated) => Ok(Landing::Assessment),
        None => Err(AuthError::UnexpectedStatus(
            user.status.clone().unwrap_or_else(|| "none".to_string()),
        )),
    }
}

pub fn require_role(session: &Session, role: Role) -> Result<(), AuthError> {
    if session.role() == role {
        Ok(())
    } else {
        Err(AuthError::WrongRole {
            expected: role,
            actual: session.role(),
        })
    }
}

/// Send the questionnaire total for the logged-in patient and decide the
/// next landing from their stored status.
pub fn submit_mood_score(
    client: &ApiClient,
    session: &Session,
    result: &ScoreResult,
) -> Result<Landing, AuthError> {
    require_role(session, Role::Patient)?;

    let response = patient::submit_mood_score(client, &session.token, result.total_score)
        .inspect_err(|e| {
            if e.is_unauthorized() {
                warn!("session token rejected; log in again");
            }
        })?;
    info!(patient_id = %response.patient_id, moodscore = response.moodscore, "mood score saved");

    landing_after_submission(&session.user)
}

/// Range accepted for the self-rated sleep quality and stress level.
pub const FACTOR_RANGE: std::ops::RangeInclusive<u8> = 1..=10;

/// The level the risk model stored and where the patient goes next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiskOutcome {
    pub risk_level: String,
    pub landing: Landing,
}

/// Run the risk assessment for the logged-in patient. Inputs are checked
/// locally before anything is sent.
pub fn predict_risk(
    client: &ApiClient,
    session: &Session,
    factors: RiskFactors,
) -> Result<RiskOutcome, AuthError> {
    require_role(session, Role::Patient)?;
    validate_factors(&factors)?;

    let request = RiskPredictionRequest {
        patient_id: session.user_id(),
        factors,
    };
    let response = patient::predict_risk(client, &session.token, &request)?;
    info!(
        patient_id = %response.patient_id,
        risk_level = %response.risk_level,
        "risk level stored"
    );

    Ok(RiskOutcome {
        risk_level: response.risk_level,
        landing: Landing::HealthPlan,
    })
}

pub fn validate_factors(factors: &RiskFactors) -> Result<(), AuthError> {
    for (name, value) in [
        ("sleep quality", factors.sleep_quality),
        ("stress level", factors.stress_level),
    ] {
        if !FACTOR_RANGE.contains(&value) {
            return Err(AuthError::InvalidInput(format!(
                "{name} must be between {} and {}, got {value}",
                FACTOR_RANGE.start(),
                FACTOR_RANGE.end()
            )));
        }
    }
    for (name, value) in [
        ("gender", &factors.gender),
        ("emotional state", &factors.emotional_state),
    ] {
        if value.trim().is_empty() {
            return Err(AuthError::InvalidInput(format!("{name} is required")));
        }
    }
    Ok(())
}

/// Fetch the generated care plan for the logged-in patient.
pub fn care_plan(client: &ApiClient, session: &Session) -> Result<CarePlan, AuthError> {
    require_role(session, Role::Patient)?;
    Ok(patient::care_plan(client, &session.token, session.user_id())?)
}
