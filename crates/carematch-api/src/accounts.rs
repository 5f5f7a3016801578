use tracing::{debug, info};

use carematch_core::models::auth::{LoginRequest, TokenResponse};
use carematch_core::models::insurer::InsurerSignup;
use carematch_core::models::patient::PatientSignup;
use carematch_core::models::session::Role;
use carematch_core::routes;

use crate::client::ApiClient;
use crate::error::ApiError;

/// Exchange email and password for a bearer token.
pub fn login(
    client: &ApiClient,
    role: Role,
    email: &str,
    password: &str,
) -> Result<TokenResponse, ApiError> {
    info!(role = %role, "logging in");
    debug!(email, "login account");

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    client.post(&routes::login(role), None, &request)
}

pub fn signup_patient(
    client: &ApiClient,
    signup: &PatientSignup,
) -> Result<TokenResponse, ApiError> {
    info!("registering patient");
    debug!(email = %signup.email, "signup account");
    client.post(&routes::signup(Role::Patient), None, signup)
}

pub fn signup_insurer(
    client: &ApiClient,
    signup: &InsurerSignup,
) -> Result<TokenResponse, ApiError> {
    info!("registering insurer");
    debug!(email = %signup.email, "signup account");
    client.post(&routes::signup(Role::Insurer), None, signup)
}
