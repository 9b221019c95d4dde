pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

pub use models::*;
pub use router::bmi_routes;

pub use services::classifier::{classify, compute_bmi, BmiClassifier};
pub use services::recommendation::{resolve_plan, RecommendationService};
