use bmi_cell::models::{BmiCategory, HealthCondition};

use crate::models::{Specialist, SpecialistMatch};

const GENERAL_TERM: &str = "General";

/// Term matched against `specialist_type`: the condition when one is
/// present, otherwise the weight category (Normal maps to "General").
/// Without either, general practitioners are searched.
pub fn specialist_query_term(category: Option<BmiCategory>, condition: HealthCondition) -> String {
    if condition.is_present() {
        return condition.as_str().to_string();
    }

    category
        .map(|c| c.specialist_term())
        .unwrap_or(GENERAL_TERM)
        .to_string()
}

/// First specialist, in directory order, practicing in `city` whose type
/// contains `query_term` ignoring case.
pub fn find_specialist<'a>(directory: &'a [Specialist], city: &str, query_term: &str) -> Option<&'a Specialist> {
    let city = city.trim();
    if city.is_empty() {
        return None;
    }

    let term = query_term.trim().to_lowercase();
    directory.iter().find(|s| {
        s.location.trim() == city && s.specialist_type.to_lowercase().contains(&term)
    })
}

pub fn match_specialist(directory: &[Specialist], city: &str, query_term: &str) -> SpecialistMatch {
    let city = city.trim().to_string();
    let query_term = query_term.to_string();

    match find_specialist(directory, &city, &query_term) {
        Some(specialist) => SpecialistMatch::Matched {
            query_term,
            city,
            specialist: specialist.clone(),
        },
        None => SpecialistMatch::NoMatch { query_term, city },
    }
}
