//! Persistence adapters for finished assessments.

mod http_client;
mod in_memory;
mod stored_record;

pub use http_client::{HttpAssessmentRepository, HttpPersistenceConfig};
pub use in_memory::InMemoryAssessmentRepository;
pub use stored_record::{decode_stored, decode_stored_list};
