pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

pub use models::*;
pub use router::specialist_routes;
pub use services::matching::{find_specialist, specialist_query_term};
pub use services::SpecialistDirectoryService;
