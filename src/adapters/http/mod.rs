//! HTTP adapters - REST API implementations.
//!
//! Each area has its own DTOs, handlers and routes; `api_router` mounts
//! them under `/api`.

pub mod assessment;
pub mod error;
pub mod middleware;
mod router;
pub mod wizard;

pub use error::ErrorResponse;
pub use middleware::{RequireUser, USER_ID_HEADER};
pub use router::api_router;
