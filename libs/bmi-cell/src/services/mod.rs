pub mod classifier;
pub mod plans;
pub mod recommendation;
pub mod records;
pub mod profile;

pub use classifier::BmiClassifier;
pub use recommendation::RecommendationService;
pub use records::BmiRecordService;
pub use profile::UserProfileService;
