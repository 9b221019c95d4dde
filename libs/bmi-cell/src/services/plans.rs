//! Static diet, workout and daily-schedule tables.
//!
//! Each plan key owns one literal table per section. The tables are turned
//! into owned [`PlanBundle`]s once, on first use, and shared read-only after
//! that.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::models::{DietItem, PlanBundle, PlanKey, ScheduleItem, WorkoutItem};

type DietRow = (&'static str, &'static str, &'static str);
type WorkoutRow = (&'static str, &'static str, &'static str);
type ScheduleRow = (&'static str, &'static str);

struct PlanTable {
    diet: &'static [DietRow],
    workout: &'static [WorkoutRow],
    schedule: &'static [ScheduleRow],
}

// ---------------------------------------------------------------------------
// Underweight
// ---------------------------------------------------------------------------

const UNDERWEIGHT_DIET: &[DietRow] = &[
    ("Banana milkshake with dates", "Calorie dense, potassium and natural sugars", "1 large glass"),
    ("Poha with peanuts", "Carbohydrates with healthy fats", "1.5 bowls"),
    ("Paneer paratha with curd", "Protein, calcium and energy", "2 parathas + 1 bowl curd"),
    ("Rice with dal and ghee", "Complete protein, easy to digest", "2 bowls"),
    ("Mixed dry fruits", "Healthy fats and minerals", "1 handful (30 g)"),
    ("Boiled eggs or sprouts", "Lean protein for muscle gain", "2 eggs or 1 bowl"),
    ("Peanut butter toast", "Protein and monounsaturated fats", "2 slices"),
];

const UNDERWEIGHT_WORKOUT: &[WorkoutRow] = &[
    ("Bodyweight squats", "3 sets x 12 reps", "Builds leg and glute muscle"),
    ("Push-ups (knee push-ups if needed)", "3 sets x 10 reps", "Upper body strength"),
    ("Resistance band rows", "3 sets x 12 reps", "Back and posture muscles"),
    ("Plank", "3 x 30 seconds", "Core stability"),
    ("Brisk walk", "20 minutes", "Appetite and circulation without heavy calorie burn"),
];

const UNDERWEIGHT_SCHEDULE: &[ScheduleRow] = &[
    ("07:00 AM", "Wake up, warm water and soaked almonds"),
    ("08:00 AM", "Breakfast: paneer paratha with curd"),
    ("10:30 AM", "Banana milkshake with dates"),
    ("01:00 PM", "Lunch: rice, dal with ghee, sabzi"),
    ("04:30 PM", "Peanut butter toast or dry fruits"),
    ("06:00 PM", "Strength workout (30 minutes)"),
    ("08:00 PM", "Dinner: roti, paneer or egg curry, salad"),
    ("10:00 PM", "Warm milk with turmeric, sleep"),
];

// ---------------------------------------------------------------------------
// Normal
// ---------------------------------------------------------------------------

const NORMAL_DIET: &[DietRow] = &[
    ("Oats with fruits", "Fibre and slow-release energy", "1 bowl"),
    ("Multigrain roti with sabzi", "Balanced carbohydrates and vitamins", "2 rotis + 1 bowl"),
    ("Dal or rajma", "Plant protein and iron", "1 bowl"),
    ("Seasonal fruit", "Vitamins and antioxidants", "1-2 pieces"),
    ("Curd or buttermilk", "Probiotics and calcium", "1 bowl or 1 glass"),
    ("Green salad", "Fibre and micronutrients", "1 plate"),
];

const NORMAL_WORKOUT: &[WorkoutRow] = &[
    ("Jogging", "30 minutes", "Cardiovascular endurance"),
    ("Surya namaskar", "10 rounds", "Flexibility and full-body tone"),
    ("Bodyweight circuit", "3 rounds", "Maintains muscle strength"),
    ("Cycling", "20 minutes", "Leg strength and stamina"),
    ("Stretching", "10 minutes", "Mobility and recovery"),
];

const NORMAL_SCHEDULE: &[ScheduleRow] = &[
    ("06:30 AM", "Wake up, glass of water"),
    ("07:00 AM", "Jogging or yoga (30 minutes)"),
    ("08:30 AM", "Breakfast: oats with fruits"),
    ("11:00 AM", "Seasonal fruit"),
    ("01:30 PM", "Lunch: roti, dal, sabzi, salad"),
    ("05:00 PM", "Buttermilk and roasted chana"),
    ("08:00 PM", "Light dinner: khichdi or roti with sabzi"),
    ("10:30 PM", "Sleep"),
];

// ---------------------------------------------------------------------------
// Overweight / Obese
// ---------------------------------------------------------------------------

const OVERWEIGHT_DIET: &[DietRow] = &[
    ("Vegetable upma or moong chilla", "High fibre, low fat breakfast", "1 plate"),
    ("Cucumber and sprouts salad", "Keeps you full with few calories", "1 large bowl"),
    ("Jowar or bajra roti", "Low glycaemic whole grain", "2 rotis"),
    ("Dal with lots of vegetables", "Protein with volume and fibre", "1 bowl"),
    ("Grilled paneer or tofu", "Lean protein, preserves muscle", "100 g"),
    ("Green tea", "Zero calorie, antioxidants", "2 cups"),
    ("Apple or guava", "Low calorie fruit with fibre", "1 piece"),
];

const OVERWEIGHT_WORKOUT: &[WorkoutRow] = &[
    ("Brisk walking", "45 minutes", "Steady fat burning, joint friendly"),
    ("Cycling or elliptical", "20 minutes", "Low impact cardio"),
    ("Wall squats", "3 sets x 10 reps", "Leg strength with low knee strain"),
    ("Standing crunches", "3 sets x 15 reps", "Core activation"),
    ("Stretching and breathing", "10 minutes", "Flexibility and stress relief"),
];

const OVERWEIGHT_SCHEDULE: &[ScheduleRow] = &[
    ("06:00 AM", "Wake up, warm lemon water"),
    ("06:30 AM", "Brisk walk (45 minutes)"),
    ("08:00 AM", "Breakfast: moong chilla with mint chutney"),
    ("11:00 AM", "Green tea and an apple"),
    ("01:00 PM", "Lunch: jowar roti, dal, salad"),
    ("04:30 PM", "Sprouts salad"),
    ("06:30 PM", "Cycling or home workout (30 minutes)"),
    ("07:30 PM", "Early dinner: grilled paneer with vegetables"),
    ("10:00 PM", "Sleep"),
];

// ---------------------------------------------------------------------------
// Diabetes
// ---------------------------------------------------------------------------

const DIABETES_DIET: &[DietRow] = &[
    ("Methi (fenugreek) water", "Helps blood sugar control", "1 glass on empty stomach"),
    ("Besan chilla or vegetable dalia", "Low glycaemic index breakfast", "1 plate"),
    ("Brown rice or millet roti", "Complex carbohydrates, slow glucose release", "1 bowl or 2 rotis"),
    ("Bitter gourd or leafy sabzi", "Supports insulin sensitivity", "1 bowl"),
    ("Dal or chana", "Protein and fibre, steady sugar levels", "1 bowl"),
    ("Guava or jamun", "Low sugar fruit", "1 piece or 1 small bowl"),
    ("Roasted makhana", "Low calorie snack", "1 cup"),
];

const DIABETES_WORKOUT: &[WorkoutRow] = &[
    ("Post-meal walk", "15 minutes after each meal", "Lowers post-meal glucose spikes"),
    ("Brisk walking", "30 minutes", "Improves insulin sensitivity"),
    ("Resistance band training", "2 sets x 12 reps", "Muscle uses glucose efficiently"),
    ("Yoga (Mandukasana, Vajrasana)", "20 minutes", "Supports pancreatic function and calm"),
    ("Stretching", "10 minutes", "Flexibility and circulation"),
];

const DIABETES_SCHEDULE: &[ScheduleRow] = &[
    ("06:30 AM", "Wake up, methi water, check fasting sugar"),
    ("07:00 AM", "Brisk walk (30 minutes)"),
    ("08:30 AM", "Breakfast: besan chilla with curd"),
    ("11:00 AM", "Guava or roasted makhana"),
    ("01:30 PM", "Lunch: millet roti, bitter gourd sabzi, dal"),
    ("02:00 PM", "Post-meal walk (15 minutes)"),
    ("05:00 PM", "Green tea with roasted chana"),
    ("06:00 PM", "Yoga and resistance training"),
    ("08:00 PM", "Dinner: vegetable dalia or brown rice with dal"),
    ("08:30 PM", "Post-meal walk (15 minutes)"),
    ("10:30 PM", "Sleep"),
];

// ---------------------------------------------------------------------------
// Blood Pressure
// ---------------------------------------------------------------------------

const BLOOD_PRESSURE_DIET: &[DietRow] = &[
    ("Oats with banana", "Potassium and soluble fibre", "1 bowl"),
    ("Low salt vegetable khichdi", "Gentle on the heart, low sodium", "1 bowl"),
    ("Beetroot and carrot salad", "Nitrates help relax blood vessels", "1 plate"),
    ("Curd (low fat)", "Calcium without saturated fat", "1 bowl"),
    ("Flaxseeds", "Omega-3 fatty acids", "1 tablespoon"),
    ("Coconut water", "Natural potassium, no added salt", "1 glass"),
    ("Unsalted nuts", "Magnesium and healthy fats", "1 handful"),
];

const BLOOD_PRESSURE_WORKOUT: &[WorkoutRow] = &[
    ("Morning walk", "30-40 minutes", "Gradually lowers resting blood pressure"),
    ("Anulom vilom pranayama", "10 minutes", "Calms the nervous system"),
    ("Light cycling", "15 minutes", "Heart health without strain"),
    ("Shavasana", "10 minutes", "Stress reduction"),
    ("Gentle stretching", "10 minutes", "Flexibility, avoid heavy lifting"),
];

const BLOOD_PRESSURE_SCHEDULE: &[ScheduleRow] = &[
    ("06:30 AM", "Wake up, warm water, check blood pressure"),
    ("07:00 AM", "Morning walk and pranayama"),
    ("08:30 AM", "Breakfast: oats with banana and flaxseeds"),
    ("11:00 AM", "Coconut water"),
    ("01:30 PM", "Lunch: low salt khichdi, beetroot salad, curd"),
    ("04:30 PM", "Unsalted nuts and herbal tea"),
    ("06:30 PM", "Light cycling and stretching"),
    ("08:00 PM", "Dinner: roti with lauki sabzi (low salt)"),
    ("09:30 PM", "Shavasana and screen-free wind down"),
    ("10:30 PM", "Sleep"),
];

const TABLES: &[(PlanKey, PlanTable)] = &[
    (PlanKey::Underweight, PlanTable { diet: UNDERWEIGHT_DIET, workout: UNDERWEIGHT_WORKOUT, schedule: UNDERWEIGHT_SCHEDULE }),
    (PlanKey::Normal, PlanTable { diet: NORMAL_DIET, workout: NORMAL_WORKOUT, schedule: NORMAL_SCHEDULE }),
    (PlanKey::OverweightOrObese, PlanTable { diet: OVERWEIGHT_DIET, workout: OVERWEIGHT_WORKOUT, schedule: OVERWEIGHT_SCHEDULE }),
    (PlanKey::Diabetes, PlanTable { diet: DIABETES_DIET, workout: DIABETES_WORKOUT, schedule: DIABETES_SCHEDULE }),
    (PlanKey::BloodPressure, PlanTable { diet: BLOOD_PRESSURE_DIET, workout: BLOOD_PRESSURE_WORKOUT, schedule: BLOOD_PRESSURE_SCHEDULE }),
];

impl PlanTable {
    fn to_bundle(&self) -> PlanBundle {
        PlanBundle {
            diet: self
                .diet
                .iter()
                .map(|&(item, nutrition_note, quantity)| DietItem {
                    item: item.to_string(),
                    nutrition_note: nutrition_note.to_string(),
                    quantity: quantity.to_string(),
                })
                .collect(),
            workout: self
                .workout
                .iter()
                .map(|&(exercise, duration_or_sets, benefit)| WorkoutItem {
                    exercise: exercise.to_string(),
                    duration_or_sets: duration_or_sets.to_string(),
                    benefit: benefit.to_string(),
                })
                .collect(),
            schedule: self
                .schedule
                .iter()
                .map(|&(time, activity)| ScheduleItem {
                    time: time.to_string(),
                    activity: activity.to_string(),
                })
                .collect(),
        }
    }
}

pub(crate) static PLAN_BUNDLES: LazyLock<HashMap<PlanKey, PlanBundle>> = LazyLock::new(|| {
    TABLES
        .iter()
        .map(|(key, table)| (*key, table.to_bundle()))
        .collect()
});

pub(crate) static EMPTY_BUNDLE: PlanBundle = PlanBundle::empty();
