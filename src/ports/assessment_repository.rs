//! Assessment repository port.
//!
//! The persistence collaborator owns stored assessments: it assigns ids and
//! timestamps on `create`, and the core never updates a stored record.
//!
//! # Design
//!
//! - **Single attempt**: implementations do not retry; failures surface as
//!   `PersistenceError` and are passed to the caller unchanged
//! - **User-scoped listing**: `list` returns one user's records, newest first

use async_trait::async_trait;

use crate::domain::assessment::{Assessment, NewAssessment, PersistenceError};
use crate::domain::foundation::{AssessmentId, UserId};

/// Repository port for finished assessments.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Store an assembled record, returning it with id and timestamps.
    ///
    /// # Errors
    ///
    /// - `Unavailable` when the collaborator cannot be reached
    /// - `Rejected` when it refuses the record
    async fn create(&self, record: NewAssessment) -> Result<Assessment, PersistenceError>;

    /// Find one assessment by id. Returns `None` if it does not exist.
    async fn get(&self, id: &AssessmentId) -> Result<Option<Assessment>, PersistenceError>;

    /// All assessments owned by `user_id`, ordered by `created_at` descending.
    async fn list(&self, user_id: &UserId) -> Result<Vec<Assessment>, PersistenceError>;

    /// Remove an assessment owned by `user_id`.
    async fn delete(&self, user_id: &UserId, id: &AssessmentId) -> Result<(), PersistenceError>;
}
