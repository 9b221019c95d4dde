use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::auth::{AuthUser, RequestIdentity};
use shared_models::error::AppError;

use crate::models::{
    BmiCategory, BmiError, BmiRecord, CalculateBmiRequest, CalculateBmiResponse, HealthCondition,
    PlanQuery, RecommendationResponse, UserProfile,
};
use crate::services::{BmiClassifier, BmiRecordService, RecommendationService, UserProfileService};

pub const NO_MEASUREMENT_MESSAGE: &str = "Please calculate your BMI first.";

/// Loads the caller's directory entry.
pub async fn fetch_profile(config: &AppConfig, user: &AuthUser) -> Result<UserProfile, AppError> {
    UserProfileService::new(config)
        .get_profile(&user.id, &user.token)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("User profile not found".to_string()))
}

/// Latest measurement of the caller, or a precondition failure when none
/// has been taken yet.
pub async fn fetch_latest_record(config: &AppConfig, user: &AuthUser) -> Result<BmiRecord, AppError> {
    BmiRecordService::new(config)
        .latest_record(&user.id, &user.token)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?
        .ok_or_else(|| AppError::PreconditionRequired(NO_MEASUREMENT_MESSAGE.to_string()))
}

// ==============================================================================
// CALCULATION (OPTIONAL AUTHENTICATION)
// ==============================================================================

#[axum::debug_handler]
pub async fn calculate_bmi(
    State(state): State<Arc<AppConfig>>,
    Extension(identity): Extension<RequestIdentity>,
    payload: Result<Json<CalculateBmiRequest>, JsonRejection>,
) -> Result<Json<CalculateBmiResponse>, AppError> {
    // Unreadable bodies get the same message as non-numeric fields.
    let Json(request) = payload.map_err(|rejection| {
        debug!("Rejected calculate body: {}", rejection);
        AppError::from(BmiError::InvalidInput)
    })?;
    let measurement = request.measurement()?;
    let result = BmiClassifier::classify(&measurement);
    debug!("Calculated BMI {} ({})", result.value, result.category);

    let (condition, saved) = match identity.user() {
        Some(user) => {
            let profile = fetch_profile(&state, user).await?;

            BmiRecordService::new(&state)
                .create_record(&user.id, &measurement, &result, &user.token)
                .await
                .map_err(|e| AppError::ExternalService(e.to_string()))?;

            let condition = profile.health_condition();
            (condition.is_present().then_some(condition), true)
        }
        None => (None, false),
    };

    Ok(Json(CalculateBmiResponse {
        bmi: result.value,
        status: result.category,
        height: measurement.height_cm,
        weight: measurement.weight_kg,
        condition,
        saved,
        message: format!(
            "Your BMI was calculated successfully: {} ({}).",
            result.value, result.category
        ),
    }))
}

// ==============================================================================
// PUBLIC PLAN LOOKUP
// ==============================================================================

#[axum::debug_handler]
pub async fn get_plan(
    Path(status): Path<String>,
    Query(query): Query<PlanQuery>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let category: BmiCategory = status.parse()?;
    let condition: HealthCondition = match query.condition.as_deref() {
        Some(raw) => raw.parse()?,
        None => HealthCondition::None,
    };

    Ok(Json(RecommendationService::recommend(category, condition)))
}

// ==============================================================================
// PROTECTED HISTORY AND RECOMMENDATION HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn get_history(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    let records = BmiRecordService::new(&state)
        .list_records(&user.id, &user.token)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    Ok(Json(json!({
        "records": records,
        "total": records.len()
    })))
}

#[axum::debug_handler]
pub async fn get_latest(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<BmiRecord>, AppError> {
    let record = BmiRecordService::new(&state)
        .latest_record(&user.id, &user.token)
        .await
        .map_err(|e| AppError::ExternalService(e.to_string()))?
        .ok_or_else(|| AppError::NotFound("No BMI records found".to_string()))?;

    Ok(Json(record))
}

#[axum::debug_handler]
pub async fn get_recommendations(
    State(state): State<Arc<AppConfig>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let profile = fetch_profile(&state, &user).await?;
    let latest = fetch_latest_record(&state, &user).await?;

    let response = RecommendationService::recommend(latest.status, profile.health_condition());
    info!("Serving {:?} plan to user {}", response.plan_key, user.id);

    Ok(Json(response))
}
