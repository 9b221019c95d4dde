use std::sync::Arc;

use axum::{
    extract::{Extension, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use bmi_cell::handlers::fetch_profile;
use bmi_cell::services::BmiRecordService;
use shared_config::AppConfig;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;

use crate::models::SpecialistListQuery;
use crate::services::matching::specialist_query_term;
use crate::services::SpecialistDirectoryService;

#[axum::debug_handler]
pub async fn list_specialists(
    State(state): State<Arc<AppConfig>>,
    Query(query): Query<SpecialistListQuery>,
) -> Result<Json<Value>, AppError> {
    let specialists = SpecialistDirectoryService::new(&state)
        .list_specialists(query.location.as_deref(), None)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(json!({
        "specialists": specialists,
        "total": specialists.len()
    })))
}

/// Specialist for the caller's city, condition and latest weight category.
/// Works before any measurement exists; the search then uses the condition
/// or general practitioners.
#[axum::debug_handler]
pub async fn match_specialist(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let profile = fetch_profile(&state, &user).await?;

    let latest = BmiRecordService::new(&state)
        .latest_record(&user.id, &user.token)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    let query_term = specialist_query_term(latest.map(|r| r.status), profile.health_condition());
    let city = profile.normalized_city();
    debug!("Specialist lookup for user {}: '{}' in '{}'", user.id, query_term, city);

    let outcome = SpecialistDirectoryService::new(&state)
        .find_match(&city, &query_term, Some(&user.token))
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(json!({
        "match": outcome,
        "message": outcome.fallback_message()
    })))
}
