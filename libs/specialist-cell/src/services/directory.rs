use anyhow::Result;
use tracing::{debug, info, instrument};

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Specialist, SpecialistMatch};
use crate::services::matching::match_specialist;

const TABLE: &str = "specialists";

/// Read access to the specialist directory. Rows always come back in id
/// order so that "first match" is stable.
pub struct SpecialistDirectoryService {
    supabase: SupabaseClient,
}

impl SpecialistDirectoryService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn list_specialists(
        &self,
        location: Option<&str>,
        auth_token: Option<&str>,
    ) -> Result<Vec<Specialist>> {
        let mut query = vec![("order", "id.asc".to_string())];
        if let Some(city) = location.map(str::trim).filter(|c| !c.is_empty()) {
            query.push(("location", format!("eq.{}", city)));
        }

        let specialists: Vec<Specialist> = self.supabase.select(TABLE, &query, auth_token).await?;
        debug!("Loaded {} specialists (location filter: {:?})", specialists.len(), location);

        Ok(specialists)
    }

    /// Looks up the specialist for `city` and `query_term`. An empty city is
    /// a miss without a round trip.
    #[instrument(skip(self, auth_token))]
    pub async fn find_match(
        &self,
        city: &str,
        query_term: &str,
        auth_token: Option<&str>,
    ) -> Result<SpecialistMatch> {
        let city = city.trim();
        if city.is_empty() {
            return Ok(match_specialist(&[], city, query_term));
        }

        let candidates = self.list_specialists(Some(city), auth_token).await?;
        let outcome = match_specialist(&candidates, city, query_term);

        match outcome.specialist() {
            Some(specialist) => info!("Matched specialist {} for '{}' in {}", specialist.id, query_term, city),
            None => info!("No specialist for '{}' in {}", query_term, city),
        }

        Ok(outcome)
    }
}
