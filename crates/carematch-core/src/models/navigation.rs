use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Where a user is sent next after an authentication or submission step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Landing {
    /// The mood questionnaire.
    TakeTest,
    /// Clinical document upload (undertreated patients, before screening).
    Upload,
    /// Provider matching (undiagnosed patients, after screening).
    Provider,
    /// Risk assessment (undertreated patients, after screening).
    Assessment,
    /// Care plan and nearby providers, once a risk level is stored.
    HealthPlan,
    InsurerDashboard,
}

impl Landing {
    /// Frontend route for this landing.
    pub fn path(&self) -> &'static str {
        match self {
            Landing::TakeTest => "/take-test",
            Landing::Upload => "/upload",
            Landing::Provider => "/provider",
            Landing::Assessment => "/assessment",
            Landing::HealthPlan => "/health-plan",
            Landing::InsurerDashboard => "/insurer-dashboard",
        }
    }
}
