use serde::{Deserialize, Serialize};

pub const DEFAULT_AVAILABILITY: &str = "Mon-Fri 9:00 am - 12:00 pm";

fn default_availability() -> String {
    DEFAULT_AVAILABILITY.to_string()
}

/// Directory entry for a healthcare provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specialist {
    pub id: i64,
    pub name: String,
    /// Profession, e.g. Cardiologist or Nutritionist.
    pub specialty: String,
    /// What the specialist treats, e.g. "Diabetes" or "General".
    pub specialist_type: String,
    /// City the specialist practices in.
    pub location: String,
    #[serde(default = "default_availability")]
    pub availability: String,
}

/// Outcome of a specialist lookup. A miss is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SpecialistMatch {
    Matched {
        query_term: String,
        city: String,
        specialist: Specialist,
    },
    NoMatch {
        query_term: String,
        city: String,
    },
}

impl SpecialistMatch {
    pub fn specialist(&self) -> Option<&Specialist> {
        match self {
            SpecialistMatch::Matched { specialist, .. } => Some(specialist),
            SpecialistMatch::NoMatch { .. } => None,
        }
    }

    pub fn query_term(&self) -> &str {
        match self {
            SpecialistMatch::Matched { query_term, .. } | SpecialistMatch::NoMatch { query_term, .. } => query_term,
        }
    }

    /// Informational text shown in place of a specialist on a miss.
    pub fn fallback_message(&self) -> Option<String> {
        match self {
            SpecialistMatch::Matched { .. } => None,
            SpecialistMatch::NoMatch { query_term, city } if city.is_empty() => Some(format!(
                "No {} specialist found. Add your city to your profile to find specialists near you.",
                query_term
            )),
            SpecialistMatch::NoMatch { query_term, city } => Some(format!(
                "No {} specialist is currently listed in {}. Please consult a general physician nearby.",
                query_term, city
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpecialistListQuery {
    pub location: Option<String>,
}
