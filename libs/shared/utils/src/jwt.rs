use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use chrono::{TimeZone, Utc};
use thiserror::Error;
use tracing::debug;

use shared_models::auth::{AuthUser, JwtClaims, JwtHeader};

type HmacSha256 = Hmac<Sha256>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("JWT secret is not set")]
    MissingSecret,

    #[error("Invalid token format")]
    Malformed,

    #[error("Unsupported token algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid token signature")]
    BadSignature,

    #[error("Invalid claims format")]
    InvalidClaims,

    #[error("Token expired")]
    Expired,
}

fn decode_json<T: serde::de::DeserializeOwned>(segment: &str) -> Result<T, AuthError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| AuthError::Malformed)?;
    serde_json::from_slice(&bytes).map_err(|e| {
        debug!("Failed to parse token segment: {}", e);
        AuthError::InvalidClaims
    })
}

/// Validates an HS256 token and returns the identity it carries.
pub fn validate_token(token: &str, jwt_secret: &str) -> Result<AuthUser, AuthError> {
    if jwt_secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let mut parts = token.split('.');
    let (header_b64, claims_b64, signature_b64) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(c), Some(s), None) if !h.is_empty() && !c.is_empty() => (h, c, s),
        _ => return Err(AuthError::Malformed),
    };

    let header: JwtHeader = decode_json(header_b64).map_err(|_| AuthError::Malformed)?;
    if header.alg != "HS256" {
        return Err(AuthError::UnsupportedAlgorithm(header.alg));
    }

    let signature = URL_SAFE_NO_PAD.decode(signature_b64).map_err(|e| {
        debug!("Failed to decode signature: {}", e);
        AuthError::BadSignature
    })?;

    let mut mac = HmacSha256::new_from_slice(jwt_secret.as_bytes())
        .map_err(|_| AuthError::MissingSecret)?;
    mac.update(format!("{}.{}", header_b64, claims_b64).as_bytes());

    if mac.verify_slice(&signature).is_err() {
        debug!("Token signature verification failed");
        return Err(AuthError::BadSignature);
    }

    let claims: JwtClaims = decode_json(claims_b64)?;

    if let Some(exp) = claims.exp {
        let now = Utc::now().timestamp().max(0) as u64;
        if exp < now {
            debug!("Token expired at {} (now: {})", exp, now);
            return Err(AuthError::Expired);
        }
    }

    let issued_at = claims.iat
        .and_then(|timestamp| Utc.timestamp_opt(timestamp as i64, 0).single());

    let user = AuthUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
        issued_at,
        token: token.to_string(),
    };

    debug!("Token validated successfully for user: {}", user.id);
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::test_utils::{JwtTestUtils, TestUser};

    const SECRET: &str = "test-secret-key-for-jwt-validation-must-be-long-enough";

    #[test]
    fn test_valid_token() {
        let user = TestUser::user("user@example.com");
        let token = JwtTestUtils::create_test_token(&user, SECRET, Some(1));

        let auth = validate_token(&token, SECRET).unwrap();
        assert_eq!(auth.id, user.id);
        assert_eq!(auth.email.as_deref(), Some("user@example.com"));
        assert_eq!(auth.token, token);
        assert!(auth.issued_at.is_some());
    }

    #[test]
    fn test_expired_token() {
        let user = TestUser::default();
        let token = JwtTestUtils::create_expired_token(&user, SECRET);
        assert_matches!(validate_token(&token, SECRET), Err(AuthError::Expired));
    }

    #[test]
    fn test_wrong_signature() {
        let user = TestUser::default();
        let token = JwtTestUtils::create_invalid_signature_token(&user);
        assert_matches!(validate_token(&token, SECRET), Err(AuthError::BadSignature));
    }

    #[test]
    fn test_malformed_tokens() {
        assert_matches!(validate_token("abc", SECRET), Err(AuthError::Malformed));
        assert_matches!(validate_token("a.b.c.d", SECRET), Err(AuthError::Malformed));
        assert_matches!(
            validate_token(&JwtTestUtils::create_malformed_token(), SECRET),
            Err(AuthError::Malformed)
        );
    }

    #[test]
    fn test_missing_secret() {
        let token = JwtTestUtils::create_test_token(&TestUser::default(), SECRET, None);
        assert_matches!(validate_token(&token, ""), Err(AuthError::MissingSecret));
    }
}
