mod common;

use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use uuid::Uuid;

use carematch_api::{accounts, patient};
use carematch_api::ApiError;
use carematch_core::models::care::{RiskFactors, RiskPredictionRequest};
use carematch_core::models::patient::PatientUpdate;
use carematch_core::models::session::{PatientStatus, Role};

use common::{TOKEN, authorized, serve};

const PATIENT_ID: &str = "6f1f0a5e-8f0c-4c3e-9a55-0d5c2b1f7a10";
const INSURER_ID: &str = "0b7e4f3a-2c1d-4e5f-8a9b-1c2d3e4f5a6b";

fn profile_json() -> Value {
    json!({
        "id": PATIENT_ID,
        "name": "Ada",
        "age": 34,
        "gender": "female",
        "address": "1 Main St",
        "district": "Central",
        "country": "Wakanda",
        "status": "undiagnosed"
    })
}

fn router() -> Router {
    Router::new()
        .route(
            "/patient/login",
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "Secret#123" {
                    (
                        StatusCode::OK,
                        Json(json!({
                            "access_token": TOKEN,
                            "token_type": "bearer",
                            "role": "patient",
                            "id": PATIENT_ID,
                            "status": "undertreated"
                        })),
                    )
                } else {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "detail": "Invalid credentials" })),
                    )
                }
            }),
        )
        .route(
            "/patient/me",
            get(|headers: HeaderMap| async move {
                if authorized(&headers) {
                    Ok(Json(profile_json()))
                } else {
                    Err((
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "detail": "Could not validate credentials" })),
                    ))
                }
            }),
        )
        .route(
            "/patient/update",
            put(|Json(body): Json<Value>| async move {
                let mut profile = profile_json();
                profile["district"] = body["district"].clone();
                // Fields left unset must not be sent at all.
                assert!(body.get("name").is_none());
                Json(profile)
            }),
        )
        .route(
            "/patient/moodscore",
            put(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert!(authorized(&headers));
                Json(json!({
                    "message": "Moodscore saved successfully",
                    "patient_id": PATIENT_ID,
                    "moodscore": body["moodscore"]
                }))
            }),
        )
        .route(
            "/patient/{id}/providers",
            get(|Path(id): Path<String>| async move {
                assert_eq!(id, PATIENT_ID);
                Json(json!([{
                    "id": INSURER_ID,
                    "companyName": "Acme Health",
                    "email": "cover@acme.test",
                    "contactNo": "555-0100",
                    "address": "2 High St",
                    "district": "Central",
                    "country": "Wakanda"
                }]))
            }),
        )
        .route(
            "/patient/apply/{insurer_id}/{patient_id}",
            post(
                |Path((insurer_id, patient_id)): Path<(String, String)>| async move {
                    Json(json!({
                        "message": "Application submitted successfully",
                        "applicationId": Uuid::new_v4(),
                        "patient_id": patient_id,
                        "insurer_id": insurer_id,
                        "applnStatus": "pending",
                        "patient_name": "Ada",
                        "insurer_name": "Acme Health",
                        "application_status": "pending"
                    }))
                },
            ),
        )
        .route(
            "/patient/{id}",
            get(|| async {
                Json(json!({
                    "age": 34,
                    "gender": "female",
                    "diseaseName": null,
                    "riskLevel": "2",
                    "moodscore": 12
                }))
            }),
        )
        .route(
            "/patient/riskprediction",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                assert!(authorized(&headers));
                if body["emotional_state"] == "crash" {
                    return Err((StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>"));
                }
                assert_eq!(body["patient_id"], PATIENT_ID);
                assert_eq!(body["mood_score"], 31);
                assert_eq!(body["sleep_quality"], 4);
                Ok(Json(json!({
                    "success": true,
                    "message": "Risk level predicted and stored successfully",
                    "patient_id": PATIENT_ID,
                    "riskLevel": "2"
                })))
            }),
        )
        .route(
            "/careschedule/care/patient/overall/{id}",
            post(|headers: HeaderMap, Path(id): Path<String>| async move {
                if !authorized(&headers) {
                    return Err((
                        StatusCode::UNAUTHORIZED,
                        Json(json!({ "detail": "Invalid token" })),
                    ));
                }
                Ok(Json(json!({
                    "suggestion": "Suggestion:\n-> Regular sleep schedule\n",
                    "providers": [{
                        "id": INSURER_ID,
                        "companyName": "Acme Health",
                        "contactNo": "555-0100",
                        "email": "cover@acme.test",
                        "address": "2 High St",
                        "country": "Wakanda"
                    }],
                    "patientInfo": {
                        "id": id,
                        "name": "Ada",
                        "age": 34,
                        "gender": "female",
                        "diseaseName": "GAD",
                        "riskLevel": "2",
                        "moodScore": 31,
                        "district": "Central",
                        "country": "Wakanda"
                    }
                })))
            }),
        )
}

fn risk_request(emotional_state: &str) -> RiskPredictionRequest {
    RiskPredictionRequest {
        patient_id: PATIENT_ID.parse().unwrap(),
        factors: RiskFactors {
            age: 34,
            gender: "Female".to_string(),
            mood_score: 31,
            sleep_quality: 4,
            stress_level: 7,
            emotional_state: emotional_state.to_string(),
        },
    }
}

#[test]
fn login_returns_token_and_user() {
    let client = serve(router());
    let token = accounts::login(&client, Role::Patient, "ada@example.com", "Secret#123").unwrap();

    assert_eq!(token.access_token, TOKEN);
    let user = token.user();
    assert_eq!(user.role, Role::Patient);
    assert_eq!(user.id.to_string(), PATIENT_ID);
    assert_eq!(user.patient_status(), Some(PatientStatus::Undertreated));
}

#[test]
fn bad_credentials_surface_the_backend_detail() {
    let client = serve(router());
    let err = accounts::login(&client, Role::Patient, "ada@example.com", "nope").unwrap_err();

    match err {
        ApiError::Status { status, detail } => {
            assert_eq!(status, 400);
            assert_eq!(detail, "Invalid credentials");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn me_requires_a_valid_token() {
    let client = serve(router());

    let profile = patient::me(&client, TOKEN).unwrap();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.status, "undiagnosed");

    let err = patient::me(&client, "stale").unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn update_sends_only_set_fields() {
    let client = serve(router());
    let update = PatientUpdate {
        district: Some("North".to_string()),
        ..Default::default()
    };
    let profile = patient::update(&client, TOKEN, &update).unwrap();
    assert_eq!(profile.district, "North");
}

#[test]
fn mood_score_is_sent_as_moodscore_field() {
    let client = serve(router());
    let response = patient::submit_mood_score(&client, TOKEN, 27).unwrap();
    assert_eq!(response.moodscore, 27);
    assert_eq!(response.patient_id.to_string(), PATIENT_ID);
}

#[test]
fn providers_and_apply() {
    let client = serve(router());
    let patient_id: Uuid = PATIENT_ID.parse().unwrap();

    let providers = patient::providers(&client, TOKEN, patient_id).unwrap();
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].company_name, "Acme Health");

    let applied = patient::apply(&client, TOKEN, providers[0].id, patient_id).unwrap();
    assert_eq!(applied.insurer_id, providers[0].id);
    assert_eq!(applied.appln_status, "pending");
}

#[test]
fn summary_tolerates_missing_clinical_fields() {
    let client = serve(router());
    let summary = patient::summary(&client, PATIENT_ID.parse().unwrap()).unwrap();
    assert_eq!(summary.disease_name, None);
    assert_eq!(summary.risk_level.as_deref(), Some("2"));
    assert_eq!(summary.moodscore, Some(12));
}

#[test]
fn risk_prediction_returns_the_stored_level() {
    let client = serve(router());
    let response = patient::predict_risk(&client, TOKEN, &risk_request("anxious")).unwrap();
    assert!(response.success);
    assert_eq!(response.risk_level, "2");
}

#[test]
fn non_json_server_error_uses_the_reason_phrase() {
    let client = serve(router());
    let err = patient::predict_risk(&client, TOKEN, &risk_request("crash")).unwrap_err();
    match err {
        ApiError::Status { status, detail } => {
            assert_eq!(status, 500);
            assert_eq!(detail, "Internal Server Error");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn care_plan_lists_suggestion_and_providers() {
    let client = serve(router());
    let patient_id: Uuid = PATIENT_ID.parse().unwrap();

    let plan = patient::care_plan(&client, TOKEN, patient_id).unwrap();
    assert_eq!(plan.patient_info.id, patient_id);
    assert_eq!(plan.patient_info.disease_name.as_deref(), Some("GAD"));
    assert_eq!(plan.providers[0].company_name, "Acme Health");
    assert_eq!(plan.suggestion_lines().count(), 2);

    let err = patient::care_plan(&client, "stale", patient_id).unwrap_err();
    assert!(err.is_unauthorized());
}
