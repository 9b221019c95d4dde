use tracing::debug;

use crate::models::{BmiCategory, HealthCondition, PlanBundle, PlanKey, RecommendationResponse};
use crate::services::plans::{EMPTY_BUNDLE, PLAN_BUNDLES};

/// Looks up the plan for a category, letting a present condition override it.
/// A key missing from the tables yields an empty plan.
pub fn resolve_plan(category: BmiCategory, condition: HealthCondition) -> &'static PlanBundle {
    let key = PlanKey::resolve(category, condition);
    bundle_for(key)
}

pub fn bundle_for(key: PlanKey) -> &'static PlanBundle {
    PLAN_BUNDLES.get(&key).unwrap_or(&EMPTY_BUNDLE)
}

pub struct RecommendationService;

impl RecommendationService {
    pub fn recommend(category: BmiCategory, condition: HealthCondition) -> RecommendationResponse {
        let plan_key = PlanKey::resolve(category, condition);
        debug!("Resolved plan {:?} for status {} and condition {}", plan_key, category, condition);

        RecommendationResponse {
            status: category,
            condition,
            plan_key,
            plan: bundle_for(plan_key).clone(),
        }
    }
}
