use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use tracing::{info, instrument};

use bmi_cell::handlers::fetch_profile;
use bmi_cell::services::BmiRecordService;
use shared_config::AppConfig;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use specialist_cell::services::matching::specialist_query_term;
use specialist_cell::services::SpecialistDirectoryService;

use crate::models::Report;
use crate::services::assembler::{require_measurement, ReportAssembler};
use crate::services::pdf::render_pdf;

/// Collects profile, latest measurement and specialist for the caller. Fails
/// with 428 before the specialist lookup when no measurement exists.
#[instrument(skip_all, fields(user_id = %user.id))]
async fn build_report(config: &AppConfig, user: &AuthUser) -> Result<Report, AppError> {
    let profile = fetch_profile(config, user).await?;

    let latest = BmiRecordService::new(config)
        .latest_record(&user.id, &user.token)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;
    let latest = require_measurement(latest)?;

    let query_term = specialist_query_term(Some(latest.status), profile.health_condition());
    let specialist = SpecialistDirectoryService::new(config)
        .find_match(&profile.normalized_city(), &query_term, Some(&user.token))
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(ReportAssembler::assemble(&profile, latest, specialist, Utc::now()))
}

#[axum::debug_handler]
pub async fn get_report(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Report>, AppError> {
    let report = build_report(&state, &user).await?;
    Ok(Json(report))
}

#[axum::debug_handler]
pub async fn download_report_pdf(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, AppError> {
    let report = build_report(&state, &user).await?;
    let bytes = render_pdf(&report)?;

    info!("Exporting {} ({} bytes) for user {}", report.filename, bytes.len(), user.id);

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", report.filename)),
        ],
        bytes,
    )
        .into_response())
}
