//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, the state machine trait and the
//! error vocabulary used by the assessment and wizard modules.

mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use errors::{ErrorCode, ValidationError};
pub use ids::{AssessmentId, UserId, WizardSessionId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
