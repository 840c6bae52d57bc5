//! Assessment HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::AssessmentHandlers;
pub use routes::assessment_routes;
