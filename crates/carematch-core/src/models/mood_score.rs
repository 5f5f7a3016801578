use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Body of `PUT /patient/moodscore`: the raw questionnaire total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodScoreRequest {
    pub moodscore: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MoodScoreResponse {
    pub message: String,
    pub patient_id: Uuid,
    pub moodscore: i32,
}
