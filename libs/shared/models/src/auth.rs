use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtHeader {
    pub alg: String,
    pub typ: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub exp: Option<u64>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub user_metadata: Option<serde_json::Value>,
    pub aud: Option<String>,
    pub iat: Option<u64>,
}

/// Caller identity established from a validated bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub issued_at: Option<DateTime<Utc>>,
    /// Raw token, forwarded to the storage backend so row-level policies apply.
    #[serde(skip_serializing)]
    pub token: String,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some("admin")
    }
}

/// Request-scoped identity attached by the auth middlewares.
///
/// Routes with optional authentication always receive one of these; it is
/// `Anonymous` when no token (or an unusable token) was presented.
#[derive(Debug, Clone)]
pub enum RequestIdentity {
    Anonymous,
    Authenticated(AuthUser),
}

impl RequestIdentity {
    pub fn user(&self) -> Option<&AuthUser> {
        match self {
            RequestIdentity::Anonymous => None,
            RequestIdentity::Authenticated(user) => Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, RequestIdentity::Authenticated(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Option<&str>) -> AuthUser {
        AuthUser {
            id: "user-1".to_string(),
            email: Some("user@example.com".to_string()),
            role: role.map(str::to_string),
            issued_at: None,
            token: "token".to_string(),
        }
    }

    #[test]
    fn test_admin_role() {
        assert!(user(Some("admin")).is_admin());
        assert!(!user(Some("authenticated")).is_admin());
        assert!(!user(None).is_admin());
    }

    #[test]
    fn test_identity_accessors() {
        let anonymous = RequestIdentity::Anonymous;
        assert!(!anonymous.is_authenticated());
        assert!(anonymous.user().is_none());

        let identity = RequestIdentity::Authenticated(user(None));
        assert!(identity.is_authenticated());
        assert_eq!(identity.user().map(|u| u.id.as_str()), Some("user-1"));
    }

    #[test]
    fn test_token_not_serialized() {
        let json = serde_json::to_value(user(None)).unwrap();
        assert!(json.get("token").is_none());
        assert_eq!(json["id"], "user-1");
    }
}
