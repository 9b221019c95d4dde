use std::sync::Arc;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use base64::{Engine as _, engine::general_purpose};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;

pub const TEST_JWT_SECRET: &str = "test-secret-key-for-jwt-validation-must-be-long-enough";

pub struct TestConfig {
    pub jwt_secret: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            jwt_secret: TEST_JWT_SECRET.to_string(),
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    /// Points the storage client at a mock server.
    pub fn with_supabase_url(url: impl Into<String>) -> Self {
        Self {
            supabase_url: url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
            supabase_jwt_secret: self.jwt_secret.clone(),
            port: 0,
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

pub struct TestUser {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl Default for TestUser {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            role: "authenticated".to_string(),
        }
    }
}

impl TestUser {
    pub fn new(email: &str, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
            role: role.to_string(),
        }
    }

    /// Regular signed-in user.
    pub fn user(email: &str) -> Self {
        Self::new(email, "authenticated")
    }

    pub fn bearer(&self) -> String {
        format!("Bearer {}", JwtTestUtils::create_test_token(self, TEST_JWT_SECRET, Some(24)))
    }
}

pub struct JwtTestUtils;

impl JwtTestUtils {
    pub fn create_test_token(user: &TestUser, secret: &str, exp_hours: Option<i64>) -> String {
        let now = Utc::now();
        let exp = now + Duration::hours(exp_hours.unwrap_or(24));

        let header = json!({
            "alg": "HS256",
            "typ": "JWT"
        });

        let payload = json!({
            "sub": user.id,
            "email": user.email,
            "role": user.role,
            "iat": now.timestamp(),
            "exp": exp.timestamp()
        });

        let header_encoded = general_purpose::URL_SAFE_NO_PAD.encode(header.to_string());
        let payload_encoded = general_purpose::URL_SAFE_NO_PAD.encode(payload.to_string());

        let signing_input = format!("{}.{}", header_encoded, payload_encoded);

        let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(signing_input.as_bytes());
        let signature = mac.finalize().into_bytes();
        let signature_encoded = general_purpose::URL_SAFE_NO_PAD.encode(signature);

        format!("{}.{}", signing_input, signature_encoded)
    }

    pub fn create_expired_token(user: &TestUser, secret: &str) -> String {
        Self::create_test_token(user, secret, Some(-1))
    }

    pub fn create_invalid_signature_token(user: &TestUser) -> String {
        Self::create_test_token(user, "wrong-secret", Some(24))
    }

    pub fn create_malformed_token() -> String {
        "invalid.token.format".to_string()
    }
}

/// Row fixtures shaped like the REST backend's responses.
pub struct MockSupabaseResponses;

impl MockSupabaseResponses {
    pub fn user_row(user_id: &str, name: &str, city: &str, condition: Option<&str>) -> Value {
        json!({
            "id": user_id,
            "name": name,
            "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            "age": 34,
            "gender": "Female",
            "city": city,
            "has_condition": condition.is_some(),
            "condition": condition,
            "is_verified": true,
            "admin": false
        })
    }

    pub fn bmi_record_row(user_id: &str, height: f64, weight: f64, bmi: f64, status: &str, created_at: &str) -> Value {
        json!({
            "id": Uuid::new_v4(),
            "user_id": user_id,
            "height": height,
            "weight": weight,
            "bmi": bmi,
            "status": status,
            "created_at": created_at
        })
    }

    pub fn specialist_row(id: i64, name: &str, specialty: &str, specialist_type: &str, location: &str) -> Value {
        json!({
            "id": id,
            "name": name,
            "specialty": specialty,
            "specialist_type": specialist_type,
            "location": location,
            "availability": "Mon-Fri 9:00 am - 12:00 pm"
        })
    }

    /// A small directory spanning two cities, in id order.
    pub fn specialist_directory() -> Vec<Value> {
        vec![
            Self::specialist_row(1, "Dr. Anjali Verma", "Endocrinologist", "Diabetes", "Indore"),
            Self::specialist_row(2, "Dr. Rakesh Jain", "Cardiologist", "Blood Pressure", "Indore"),
            Self::specialist_row(3, "Dr. Meera Joshi", "Nutritionist", "Underweight", "Indore"),
            Self::specialist_row(4, "Dr. Sunil Patel", "Bariatric Physician", "Overweight, Obese", "Indore"),
            Self::specialist_row(5, "Dr. Kavita Rao", "General Physician", "General", "Indore"),
            Self::specialist_row(6, "Dr. Arvind Mishra", "Cardiologist", "Blood Pressure", "Bhopal"),
            Self::specialist_row(7, "Dr. Neha Gupta", "General Physician", "General", "Bhopal"),
        ]
    }
}
