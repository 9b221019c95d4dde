use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use bmi_cell::router::bmi_routes;
use report_cell::router::report_routes;
use shared_config::AppConfig;
use specialist_cell::router::specialist_routes;

pub fn create_router(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", get(|| async { "BMI Tracker API is running!" }))
        .nest("/bmi", bmi_routes(state.clone()))
        .nest("/specialists", specialist_routes(state.clone()))
        .nest("/report", report_routes(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_state() -> Arc<AppConfig> {
        Arc::new(AppConfig {
            supabase_url: "http://localhost:1".to_string(),
            supabase_anon_key: "anon".to_string(),
            supabase_jwt_secret: "secret".to_string(),
            port: 0,
        })
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        create_router(test_state()).oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_health_route() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let response = create_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"BMI Tracker API is running!");
    }

    #[tokio::test]
    async fn test_cells_are_mounted() {
        assert_eq!(status_of("/bmi/plans/Obese").await, StatusCode::OK);
        assert_eq!(status_of("/bmi/history").await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of("/specialists/match").await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of("/report").await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of("/report/pdf").await, StatusCode::UNAUTHORIZED);
        assert_eq!(status_of("/unknown").await, StatusCode::NOT_FOUND);
    }
}
