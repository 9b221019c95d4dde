use tokio_test::{assert_err, assert_ok};

use bmi_cell::models::{BmiCategory, HealthCondition, Measurement, PlanKey};
use bmi_cell::services::recommendation::bundle_for;
use bmi_cell::{classify, compute_bmi, resolve_plan, BmiClassifier};

fn expected_category(bmi: f64) -> BmiCategory {
    match bmi {
        b if b < 18.5 => BmiCategory::Underweight,
        b if b < 24.9 => BmiCategory::Normal,
        b if b < 29.9 => BmiCategory::Overweight,
        _ => BmiCategory::Obese,
    }
}

#[test]
fn test_category_follows_rounded_value_across_accepted_range() {
    let mut height = 55.0;
    while height <= 272.0 {
        let mut weight = 25.0;
        while weight <= 150.0 {
            let measurement = assert_ok!(Measurement::new(height, weight));
            let result = BmiClassifier::classify(&measurement);

            let raw = weight / ((height / 100.0) * (height / 100.0));
            assert!((result.value - raw).abs() <= 0.005 + 1e-9, "{} vs {}", result.value, raw);
            assert_eq!(result.value, compute_bmi(height, weight));
            assert_eq!(result.category, expected_category(result.value));
            assert_eq!(result.category, classify(result.value));

            weight += 12.5;
        }
        height += 7.0;
    }
}

#[test]
fn test_measurements_outside_range_are_rejected() {
    assert_err!(Measurement::new(54.0, 70.0));
    assert_err!(Measurement::new(170.0, 151.0));
    assert_ok!(Measurement::new(55.0, 150.0));
}

#[test]
fn test_diabetic_normal_user_gets_diabetes_plan() {
    let plan = resolve_plan(BmiCategory::Normal, HealthCondition::Diabetes);
    assert_eq!(plan, bundle_for(PlanKey::Diabetes));
    assert_ne!(plan, bundle_for(PlanKey::Normal));
}

#[test]
fn test_every_category_resolves_to_a_plan() {
    for category in BmiCategory::ALL {
        assert!(!resolve_plan(category, HealthCondition::None).is_empty());
    }
}
