use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware,
};

use shared_config::AppConfig;
use shared_utils::extractor::{auth_middleware, optional_auth_middleware};

use crate::handlers;

pub fn bmi_routes(state: Arc<AppConfig>) -> Router {
    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/plans/{status}", get(handlers::get_plan));

    // Anonymous callers get a result; signed-in callers also get it stored
    let optional_routes = Router::new()
        .route("/calculate", post(handlers::calculate_bmi))
        .layer(middleware::from_fn_with_state(state.clone(), optional_auth_middleware));

    // Protected routes (authentication required)
    let protected_routes = Router::new()
        .route("/history", get(handlers::get_history))
        .route("/latest", get(handlers::get_latest))
        .route("/recommendations", get(handlers::get_recommendations))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(optional_routes)
        .merge(protected_routes)
        .with_state(state)
}
