use anyhow::Result;
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::UserProfile;

/// Read access to the user directory.
pub struct UserProfileService {
    supabase: SupabaseClient,
}

impl UserProfileService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn get_profile(&self, user_id: &str, auth_token: &str) -> Result<Option<UserProfile>> {
        debug!("Fetching user profile: {}", user_id);

        let profiles: Vec<UserProfile> = self.supabase.select(
            "users",
            &[("id", format!("eq.{}", user_id))],
            Some(auth_token),
        ).await?;

        Ok(profiles.into_iter().next())
    }
}
