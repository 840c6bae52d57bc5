//! In-Memory Assessment Repository
//!
//! Plays the persistence collaborator for tests and local development:
//! assigns ids and timestamps on create and keeps records in a map.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{Assessment, NewAssessment, PersistenceError};
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};
use crate::ports::AssessmentRepository;

/// In-memory storage for assessments
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    records: Arc<RwLock<HashMap<AssessmentId, Assessment>>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an already-saved record as-is (useful for tests)
    pub async fn insert(&self, assessment: Assessment) {
        self.records
            .write()
            .await
            .insert(*assessment.id(), assessment);
    }

    /// Clear all stored records
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }

    /// Number of stored records
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn create(&self, record: NewAssessment) -> Result<Assessment, PersistenceError> {
        let now = Timestamp::now();
        let assessment = Assessment::reconstitute(AssessmentId::new(), record, now, now);
        self.insert(assessment.clone()).await;
        Ok(assessment)
    }

    async fn get(&self, id: &AssessmentId) -> Result<Option<Assessment>, PersistenceError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<Assessment>, PersistenceError> {
        let records = self.records.read().await;
        let mut owned: Vec<Assessment> = records
            .values()
            .filter(|a| a.is_owner(user_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(a.created_at()));
        Ok(owned)
    }

    async fn delete(&self, user_id: &UserId, id: &AssessmentId) -> Result<(), PersistenceError> {
        let mut records = self.records.write().await;
        match records.get(id) {
            Some(existing) if !existing.is_owner(user_id) => Err(PersistenceError::Rejected {
                status: 403,
                message: "assessment belongs to another user".to_string(),
            }),
            _ => {
                records.remove(id);
                Ok(())
            }
        }
    }
}
