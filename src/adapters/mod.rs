//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - session store implementations
//! - `persistence` - assessment repository implementations (in-memory, HTTP API)
//! - `http` - axum REST API over the application handlers

pub mod http;
pub mod persistence;
pub mod storage;

pub use persistence::{HttpAssessmentRepository, HttpPersistenceConfig, InMemoryAssessmentRepository};
pub use storage::InMemorySessionStore;
