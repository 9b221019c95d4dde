use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

use shared_models::error::AppError;

pub const MIN_HEIGHT_CM: f64 = 55.0;
pub const MAX_HEIGHT_CM: f64 = 272.0;
pub const MIN_WEIGHT_KG: f64 = 25.0;
pub const MAX_WEIGHT_KG: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Term used against a specialist's type when no condition applies.
    /// Normal weight is served by general practitioners.
    pub fn specialist_term(&self) -> &'static str {
        match self {
            BmiCategory::Normal => "General",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BmiCategory {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BmiCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BmiError::UnknownCategory(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HealthCondition {
    Diabetes,
    #[serde(rename = "Blood Pressure", alias = "BloodPressure")]
    BloodPressure,
    #[default]
    None,
}

impl HealthCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCondition::Diabetes => "Diabetes",
            HealthCondition::BloodPressure => "Blood Pressure",
            HealthCondition::None => "None",
        }
    }

    pub fn is_present(&self) -> bool {
        !matches!(self, HealthCondition::None)
    }

    /// Effective condition of a stored profile. The condition text only
    /// counts while the profile's `has_condition` flag is set.
    pub fn from_profile(has_condition: bool, condition: Option<&str>) -> Self {
        if !has_condition {
            return HealthCondition::None;
        }

        match condition.map(str::parse::<HealthCondition>) {
            Some(Ok(parsed)) => parsed,
            Some(Err(e)) => {
                warn!("Ignoring stored condition: {}", e);
                HealthCondition::None
            }
            None => HealthCondition::None,
        }
    }
}

impl fmt::Display for HealthCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HealthCondition {
    type Err = BmiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "diabetes" => Ok(HealthCondition::Diabetes),
            "bloodpressure" | "bp" => Ok(HealthCondition::BloodPressure),
            "" | "none" => Ok(HealthCondition::None),
            _ => Err(BmiError::UnknownCondition(s.trim().to_string())),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BmiError {
    #[error("Invalid input. Please enter numbers only.")]
    InvalidInput,

    #[error("Please enter valid height.")]
    InvalidHeight,

    #[error("Please enter valid weight.")]
    InvalidWeight,

    #[error("Unknown BMI status: {0}")]
    UnknownCategory(String),

    #[error("Unknown health condition: {0}")]
    UnknownCondition(String),
}

impl From<BmiError> for AppError {
    fn from(err: BmiError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

/// A height/weight pair that has passed range validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Measurement {
    pub fn new(height_cm: f64, weight_kg: f64) -> Result<Self, BmiError> {
        let measurement = Self { height_cm, weight_kg };
        measurement.validate()?;
        Ok(measurement)
    }

    pub fn validate(&self) -> Result<(), BmiError> {
        if !self.height_cm.is_finite() || !self.weight_kg.is_finite() {
            return Err(BmiError::InvalidInput);
        }
        if !(MIN_HEIGHT_CM..=MAX_HEIGHT_CM).contains(&self.height_cm) {
            return Err(BmiError::InvalidHeight);
        }
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&self.weight_kg) {
            return Err(BmiError::InvalidWeight);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    pub value: f64,
    pub category: BmiCategory,
}

/// Form fields arrive either as JSON numbers or as the raw text typed by
/// the user. Anything else is kept so it can be rejected with the same
/// message as unparseable text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for NumericInput {
    fn default() -> Self {
        NumericInput::Other(serde_json::Value::Null)
    }
}

impl NumericInput {
    pub fn to_f64(&self) -> Result<f64, BmiError> {
        let value = match self {
            NumericInput::Number(n) => *n,
            NumericInput::Text(raw) => raw.trim().parse::<f64>().map_err(|_| BmiError::InvalidInput)?,
            NumericInput::Other(_) => return Err(BmiError::InvalidInput),
        };
        if value.is_finite() {
            Ok(value)
        } else {
            Err(BmiError::InvalidInput)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateBmiRequest {
    #[serde(default)]
    pub height: NumericInput,
    #[serde(default)]
    pub weight: NumericInput,
}

impl CalculateBmiRequest {
    /// Both fields must parse before any range is checked; height is
    /// checked before weight.
    pub fn measurement(&self) -> Result<Measurement, BmiError> {
        let height_cm = self.height.to_f64()?;
        let weight_kg = self.weight.to_f64()?;
        Measurement::new(height_cm, weight_kg)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateBmiResponse {
    pub bmi: f64,
    pub status: BmiCategory,
    pub height: f64,
    pub weight: f64,
    pub condition: Option<HealthCondition>,
    pub saved: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietItem {
    pub item: String,
    pub nutrition_note: String,
    pub quantity: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutItem {
    pub exercise: String,
    pub duration_or_sets: String,
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanBundle {
    pub diet: Vec<DietItem>,
    pub workout: Vec<WorkoutItem>,
    pub schedule: Vec<ScheduleItem>,
}

impl PlanBundle {
    pub const fn empty() -> Self {
        Self {
            diet: Vec::new(),
            workout: Vec::new(),
            schedule: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.diet.is_empty() && self.workout.is_empty() && self.schedule.is_empty()
    }
}

/// Key of the static plan tables. Overweight and Obese share one plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanKey {
    Diabetes,
    BloodPressure,
    Underweight,
    Normal,
    OverweightOrObese,
}

impl PlanKey {
    /// A present condition wins over the weight category.
    pub fn resolve(category: BmiCategory, condition: HealthCondition) -> Self {
        match (condition, category) {
            (HealthCondition::Diabetes, _) => PlanKey::Diabetes,
            (HealthCondition::BloodPressure, _) => PlanKey::BloodPressure,
            (HealthCondition::None, BmiCategory::Underweight) => PlanKey::Underweight,
            (HealthCondition::None, BmiCategory::Normal) => PlanKey::Normal,
            (HealthCondition::None, BmiCategory::Overweight | BmiCategory::Obese) => PlanKey::OverweightOrObese,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlanKey::Diabetes => "Diabetes",
            PlanKey::BloodPressure => "Blood Pressure",
            PlanKey::Underweight => "Underweight",
            PlanKey::Normal => "Normal",
            PlanKey::OverweightOrObese => "Overweight / Obese",
        }
    }
}

/// Row of the user directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub city: Option<String>,
    #[serde(default)]
    pub has_condition: bool,
    pub condition: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub admin: bool,
}

impl UserProfile {
    pub fn health_condition(&self) -> HealthCondition {
        HealthCondition::from_profile(self.has_condition, self.condition.as_deref())
    }

    pub fn normalized_city(&self) -> String {
        self.city.as_deref().map(str::trim).unwrap_or_default().to_string()
    }
}

/// Row of the append-only measurement history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    pub id: Uuid,
    pub user_id: String,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub status: BmiCategory,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBmiRecord<'a> {
    pub user_id: &'a str,
    pub height: f64,
    pub weight: f64,
    pub bmi: f64,
    pub status: BmiCategory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlanQuery {
    pub condition: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub status: BmiCategory,
    pub condition: HealthCondition,
    pub plan_key: PlanKey,
    pub plan: PlanBundle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("normal".parse::<BmiCategory>().unwrap(), BmiCategory::Normal);
        assert_eq!(" Obese ".parse::<BmiCategory>().unwrap(), BmiCategory::Obese);
        assert_eq!(
            "skinny".parse::<BmiCategory>(),
            Err(BmiError::UnknownCategory("skinny".to_string()))
        );
    }

    #[test]
    fn test_specialist_term_substitutes_general() {
        assert_eq!(BmiCategory::Normal.specialist_term(), "General");
        assert_eq!(BmiCategory::Obese.specialist_term(), "Obese");
        assert_eq!(BmiCategory::Underweight.specialist_term(), "Underweight");
    }

    #[test]
    fn test_condition_parsing() {
        assert_eq!("Blood Pressure".parse::<HealthCondition>().unwrap(), HealthCondition::BloodPressure);
        assert_eq!("blood_pressure".parse::<HealthCondition>().unwrap(), HealthCondition::BloodPressure);
        assert_eq!("DIABETES".parse::<HealthCondition>().unwrap(), HealthCondition::Diabetes);
        assert_eq!("".parse::<HealthCondition>().unwrap(), HealthCondition::None);
        assert!("asthma".parse::<HealthCondition>().is_err());
    }

    #[test]
    fn test_condition_serde_uses_stored_labels() {
        let json = serde_json::to_value(HealthCondition::BloodPressure).unwrap();
        assert_eq!(json, "Blood Pressure");

        let parsed: HealthCondition = serde_json::from_str("\"BloodPressure\"").unwrap();
        assert_eq!(parsed, HealthCondition::BloodPressure);
    }

    #[test]
    fn test_condition_requires_flag() {
        assert_eq!(HealthCondition::from_profile(false, Some("Diabetes")), HealthCondition::None);
        assert_eq!(HealthCondition::from_profile(true, Some("Diabetes")), HealthCondition::Diabetes);
        assert_eq!(HealthCondition::from_profile(true, None), HealthCondition::None);
        assert_eq!(HealthCondition::from_profile(true, Some("Migraine")), HealthCondition::None);
    }

    #[test]
    fn test_measurement_ranges() {
        assert!(Measurement::new(55.0, 25.0).is_ok());
        assert!(Measurement::new(272.0, 150.0).is_ok());
        assert_eq!(Measurement::new(54.9, 60.0), Err(BmiError::InvalidHeight));
        assert_eq!(Measurement::new(272.1, 60.0), Err(BmiError::InvalidHeight));
        assert_eq!(Measurement::new(170.0, 24.9), Err(BmiError::InvalidWeight));
        assert_eq!(Measurement::new(170.0, 150.5), Err(BmiError::InvalidWeight));
        assert_eq!(Measurement::new(f64::NAN, 60.0), Err(BmiError::InvalidInput));
    }

    #[test]
    fn test_request_accepts_text_numbers() {
        let request: CalculateBmiRequest =
            serde_json::from_str(r#"{"height": "170", "weight": 70}"#).unwrap();
        let measurement = request.measurement().unwrap();
        assert_eq!(measurement.height_cm, 170.0);
        assert_eq!(measurement.weight_kg, 70.0);
    }

    #[test]
    fn test_request_rejects_non_numeric_before_ranges() {
        let request: CalculateBmiRequest =
            serde_json::from_str(r#"{"height": "1000", "weight": "seventy"}"#).unwrap();
        assert_eq!(request.measurement(), Err(BmiError::InvalidInput));

        let request: CalculateBmiRequest =
            serde_json::from_str(r#"{"height": "1000", "weight": "999"}"#).unwrap();
        assert_eq!(request.measurement(), Err(BmiError::InvalidHeight));

        let request: CalculateBmiRequest = serde_json::from_str(r#"{"weight": true}"#).unwrap();
        assert_eq!(request.measurement(), Err(BmiError::InvalidInput));
    }

    #[test]
    fn test_plan_key_resolution() {
        assert_eq!(PlanKey::resolve(BmiCategory::Normal, HealthCondition::Diabetes), PlanKey::Diabetes);
        assert_eq!(PlanKey::resolve(BmiCategory::Obese, HealthCondition::BloodPressure), PlanKey::BloodPressure);
        assert_eq!(PlanKey::resolve(BmiCategory::Overweight, HealthCondition::None), PlanKey::OverweightOrObese);
        assert_eq!(PlanKey::resolve(BmiCategory::Obese, HealthCondition::None), PlanKey::OverweightOrObese);
        assert_eq!(PlanKey::resolve(BmiCategory::Underweight, HealthCondition::None), PlanKey::Underweight);
    }

    #[test]
    fn test_profile_city_is_trimmed() {
        let profile = UserProfile {
            id: "1".to_string(),
            name: "Asha".to_string(),
            email: None,
            age: Some(30),
            gender: None,
            city: Some("  Indore ".to_string()),
            has_condition: false,
            condition: None,
            is_verified: true,
            admin: false,
        };
        assert_eq!(profile.normalized_city(), "Indore");
        assert_eq!(profile.health_condition(), HealthCondition::None);
    }
}
