use chrono::{DateTime, Utc};
use tracing::debug;

use bmi_cell::models::{BmiRecord, PlanKey, UserProfile};
use bmi_cell::services::recommendation::bundle_for;
use specialist_cell::models::SpecialistMatch;

use crate::models::{ProfileSummary, Report, ReportError, NOT_AVAILABLE};

const DATE_FORMAT: &str = "%d %b %Y";

/// A report needs at least one stored measurement.
pub fn require_measurement(latest: Option<BmiRecord>) -> Result<BmiRecord, ReportError> {
    latest.ok_or(ReportError::NoMeasurement)
}

/// `BMI_Report_<name>.pdf` with every non ASCII alphanumeric character of
/// the name replaced by `_`.
pub fn report_filename(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return "BMI_Report_User.pdf".to_string();
    }

    let sanitized: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    format!("BMI_Report_{}.pdf", sanitized)
}

fn or_not_available(value: Option<&str>) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

pub struct ReportAssembler;

impl ReportAssembler {
    pub fn assemble(
        profile: &UserProfile,
        latest: BmiRecord,
        specialist: SpecialistMatch,
        generated_at: DateTime<Utc>,
    ) -> Report {
        let condition = profile.health_condition();
        let plan_key = PlanKey::resolve(latest.status, condition);
        debug!("Assembling report for user {} with {:?} plan", profile.id, plan_key);

        let summary = ProfileSummary {
            name: or_not_available(Some(&profile.name)),
            age: profile
                .age
                .map(|age| age.to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            gender: or_not_available(profile.gender.as_deref()),
            city: or_not_available(profile.city.as_deref()),
            condition: condition.as_str().to_string(),
            latest_bmi: format!("{:.2}", latest.bmi),
            category: latest.status.as_str().to_string(),
            measured_on: latest.created_at.format(DATE_FORMAT).to_string(),
        };

        let specialist_message = specialist.fallback_message();

        Report {
            generated_at,
            filename: report_filename(&profile.name),
            profile: summary,
            condition,
            plan_key,
            plan_label: plan_key.label().to_string(),
            plan: bundle_for(plan_key).clone(),
            latest,
            specialist,
            specialist_message,
        }
    }
}
