//! Wizard HTTP adapter.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::WizardHandlers;
pub use routes::wizard_routes;
