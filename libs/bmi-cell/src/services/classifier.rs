use crate::models::{BmiCategory, BmiResult, Measurement};

const UNDERWEIGHT_BELOW: f64 = 18.5;
const NORMAL_BELOW: f64 = 24.9;
const OVERWEIGHT_BELOW: f64 = 29.9;

/// `weight / (height in metres)^2`, rounded to two decimals.
///
/// Rounds the exact value of the quotient with ties to even, so 24.125
/// becomes 24.12.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> f64 {
    let height_m = height_cm / 100.0;
    let raw = weight_kg / (height_m * height_m);
    format!("{:.2}", raw).parse().unwrap_or(raw)
}

/// Maps a BMI value to its category.
///
/// Values in `[24.9, 25.0)` are Overweight: the Normal band stops at 24.9
/// while the published Overweight band starts at 25, and that gap has always
/// been reported as Overweight.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

pub struct BmiClassifier;

impl BmiClassifier {
    pub fn classify(measurement: &Measurement) -> BmiResult {
        let value = compute_bmi(measurement.height_cm, measurement.weight_kg);
        BmiResult {
            value,
            category: classify(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_measurements() {
        let normal = BmiClassifier::classify(&Measurement::new(170.0, 70.0).unwrap());
        assert_eq!(normal.value, 24.22);
        assert_eq!(normal.category, BmiCategory::Normal);

        let under = BmiClassifier::classify(&Measurement::new(160.0, 45.0).unwrap());
        assert_eq!(under.value, 17.58);
        assert_eq!(under.category, BmiCategory::Underweight);
    }

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify(18.49), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(24.89), BmiCategory::Normal);
        assert_eq!(classify(24.9), BmiCategory::Overweight);
        assert_eq!(classify(24.95), BmiCategory::Overweight);
        assert_eq!(classify(25.0), BmiCategory::Overweight);
        assert_eq!(classify(29.89), BmiCategory::Overweight);
        assert_eq!(classify(29.9), BmiCategory::Obese);
        assert_eq!(classify(45.0), BmiCategory::Obese);
    }

    #[test]
    fn test_rounding_to_two_decimals() {
        let bmi = compute_bmi(180.0, 81.0);
        assert_eq!(bmi, 25.0);

        let bmi = compute_bmi(175.0, 68.0);
        assert_eq!(bmi, 22.2);
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        // 96.5 / 2.0^2 is exactly 24.125
        assert_eq!(compute_bmi(200.0, 96.5), 24.12);
        // 97.5 / 4 is exactly 24.375
        assert_eq!(compute_bmi(200.0, 97.5), 24.38);
        assert_eq!(classify(compute_bmi(200.0, 96.5)), BmiCategory::Normal);
    }
}
