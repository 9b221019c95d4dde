pub mod handlers;
pub mod router;
pub mod models;
pub mod services;

pub use models::*;
pub use router::report_routes;
pub use services::assembler::{report_filename, ReportAssembler};
pub use services::pdf::render_pdf;
