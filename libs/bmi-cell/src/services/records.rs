use anyhow::Result;
use tracing::{debug, info};

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{BmiRecord, BmiResult, Measurement, NewBmiRecord};

const TABLE: &str = "bmi_records";

/// Append-only access to the measurement history.
pub struct BmiRecordService {
    supabase: SupabaseClient,
}

impl BmiRecordService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    pub async fn create_record(
        &self,
        user_id: &str,
        measurement: &Measurement,
        result: &BmiResult,
        auth_token: &str,
    ) -> Result<BmiRecord> {
        let row = NewBmiRecord {
            user_id,
            height: measurement.height_cm,
            weight: measurement.weight_kg,
            bmi: result.value,
            status: result.category,
        };

        let record: BmiRecord = self.supabase.insert(TABLE, serde_json::to_value(&row)?, Some(auth_token)).await?;
        info!("Stored BMI record {} for user {} ({} {})", record.id, user_id, record.bmi, record.status);

        Ok(record)
    }

    /// Oldest first, the order progress charts are drawn in.
    pub async fn list_records(&self, user_id: &str, auth_token: &str) -> Result<Vec<BmiRecord>> {
        debug!("Fetching BMI history for user: {}", user_id);

        self.supabase.select(
            TABLE,
            &[
                ("user_id", format!("eq.{}", user_id)),
                ("order", "created_at.asc".to_string()),
            ],
            Some(auth_token),
        ).await
    }

    pub async fn latest_record(&self, user_id: &str, auth_token: &str) -> Result<Option<BmiRecord>> {
        debug!("Fetching latest BMI record for user: {}", user_id);

        let records: Vec<BmiRecord> = self.supabase.select(
            TABLE,
            &[
                ("user_id", format!("eq.{}", user_id)),
                ("order", "created_at.desc".to_string()),
                ("limit", "1".to_string()),
            ],
            Some(auth_token),
        ).await?;

        Ok(records.into_iter().next())
    }
}
