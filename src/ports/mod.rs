//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - the persistence collaborator for finished records
//! - `SessionStore` - browsing-session scoped storage for partial wizard state

mod assessment_repository;
mod session_store;

pub use assessment_repository::AssessmentRepository;
pub use session_store::{SessionStore, SessionStoreError};

pub use crate::domain::assessment::PersistenceError;
