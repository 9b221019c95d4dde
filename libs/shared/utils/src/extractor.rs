use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http::{header::AUTHORIZATION, HeaderMap};
use tracing::debug;

use shared_config::AppConfig;
use shared_models::auth::RequestIdentity;
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Returns the bearer token from the `Authorization` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<Option<&str>, AppError> {
    let Some(auth_header) = headers.get(AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Invalid authorization header format".to_string()))?;

    match auth_value.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(Some(token.trim())),
        _ => Err(AppError::Auth("Invalid authorization header format".to_string())),
    }
}

/// Rejects requests without a valid token. Inserts both `AuthUser` and
/// `RequestIdentity::Authenticated` into the request extensions.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?
        .ok_or_else(|| AppError::Auth("Missing authorization header".to_string()))?;

    let user = validate_token(token, &config.supabase_jwt_secret)
        .map_err(|e| AppError::Auth(e.to_string()))?;

    request.extensions_mut().insert(RequestIdentity::Authenticated(user.clone()));
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Never rejects. Routes behind it see `RequestIdentity::Anonymous` when the
/// caller sent no token or one that fails validation.
pub async fn optional_auth_middleware(
    State(config): State<Arc<AppConfig>>,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = match bearer_token(request.headers()) {
        Ok(Some(token)) => match validate_token(token, &config.supabase_jwt_secret) {
            Ok(user) => RequestIdentity::Authenticated(user),
            Err(e) => {
                debug!("Ignoring unusable token on optional-auth route: {}", e);
                RequestIdentity::Anonymous
            }
        },
        Ok(None) => RequestIdentity::Anonymous,
        Err(e) => {
            debug!("Ignoring malformed authorization header: {}", e);
            RequestIdentity::Anonymous
        }
    };

    request.extensions_mut().insert(identity);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::StatusCode,
        middleware,
        routing::get,
        Extension, Router,
    };
    use http::HeaderValue;
    use tower::ServiceExt;

    use shared_models::auth::AuthUser;

    use crate::test_utils::{JwtTestUtils, TestConfig, TestUser};

    fn app(config: Arc<AppConfig>) -> Router {
        let protected = Router::new()
            .route("/private", get(|Extension(user): Extension<AuthUser>| async move { user.id }))
            .layer(middleware::from_fn_with_state(config.clone(), auth_middleware));

        let open = Router::new()
            .route("/open", get(|Extension(identity): Extension<RequestIdentity>| async move {
                match identity.user() {
                    Some(user) => user.id.clone(),
                    None => "anonymous".to_string(),
                }
            }))
            .layer(middleware::from_fn_with_state(config.clone(), optional_auth_middleware));

        Router::new().merge(protected).merge(open).with_state(config)
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers).unwrap(), None);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap(), Some("abc.def.ghi"));

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));
        assert!(bearer_token(&headers).is_err());
    }

    #[tokio::test]
    async fn test_protected_route_requires_token() {
        let config = TestConfig::default().to_arc();
        let request = http::Request::builder().uri("/private").body(Body::empty()).unwrap();

        let response = app(config).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_protected_route_with_valid_token() {
        let test_config = TestConfig::default();
        let user = TestUser::user("user@example.com");
        let token = JwtTestUtils::create_test_token(&user, &test_config.jwt_secret, Some(1));

        let request = http::Request::builder()
            .uri("/private")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app(test_config.to_arc()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, user.id);
    }

    #[tokio::test]
    async fn test_optional_route_falls_back_to_anonymous() {
        let test_config = TestConfig::default();
        let token = JwtTestUtils::create_invalid_signature_token(&TestUser::default());

        let request = http::Request::builder()
            .uri("/open")
            .header("authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let response = app(test_config.to_arc()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "anonymous");
    }
}
