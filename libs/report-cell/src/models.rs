use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use bmi_cell::models::{BmiRecord, HealthCondition, PlanBundle, PlanKey};
use shared_models::error::AppError;
use specialist_cell::models::SpecialistMatch;

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    #[error("Please calculate your BMI first.")]
    NoMeasurement,

    #[error("Failed to render report: {0}")]
    Render(String),
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::NoMeasurement => AppError::PreconditionRequired(err.to_string()),
            ReportError::Render(_) => AppError::Internal(err.to_string()),
        }
    }
}

/// Display-ready summary block. Missing values are already "N/A".
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub city: String,
    pub condition: String,
    pub latest_bmi: String,
    pub category: String,
    pub measured_on: String,
}

impl ProfileSummary {
    /// Label/value pairs in print order.
    pub fn rows(&self) -> [(&'static str, &str); 8] {
        [
            ("Name", self.name.as_str()),
            ("Age", self.age.as_str()),
            ("Gender", self.gender.as_str()),
            ("City", self.city.as_str()),
            ("Condition", self.condition.as_str()),
            ("Latest BMI", self.latest_bmi.as_str()),
            ("Category", self.category.as_str()),
            ("Measured on", self.measured_on.as_str()),
        ]
    }
}

/// Everything printed in a report. Built on demand and never stored.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    /// Download name, derived from the stored name rather than the display one.
    pub filename: String,
    pub profile: ProfileSummary,
    pub latest: BmiRecord,
    pub condition: HealthCondition,
    pub plan_key: PlanKey,
    pub plan_label: String,
    pub plan: PlanBundle,
    pub specialist: SpecialistMatch,
    pub specialist_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_report_errors_map_to_http_statuses() {
        let missing: AppError = ReportError::NoMeasurement.into();
        assert_eq!(missing.status_code(), StatusCode::PRECONDITION_REQUIRED);

        let render: AppError = ReportError::Render("font".to_string()).into();
        assert_eq!(render.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
