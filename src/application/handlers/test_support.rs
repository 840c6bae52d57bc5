//! Shared fixtures for handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::assessment::{
    assemble, Assessment, AssessmentField, AssessmentInput, Classifier, NewAssessment,
    PersistenceError,
};
use crate::domain::foundation::{AssessmentId, Timestamp, UserId};
use crate::ports::AssessmentRepository;

pub fn user(id: &str) -> UserId {
    UserId::new(id).unwrap()
}

pub fn complete_input() -> AssessmentInput {
    let mut input = AssessmentInput::new();
    for (field, value) in [
        (AssessmentField::Age, "18-24"),
        (AssessmentField::CycleLength, "26-30"),
        (AssessmentField::PeriodDuration, "4-5"),
        (AssessmentField::FlowHeaviness, "moderate"),
        (AssessmentField::PainLevel, "mild"),
    ] {
        input.set(field, value);
    }
    input
}

pub fn saved_assessment(owner: &str) -> Assessment {
    let record = assemble(complete_input(), user(owner), &Classifier::default()).unwrap();
    let now = Timestamp::now();
    Assessment::reconstitute(AssessmentId::new(), record, now, now)
}

/// Repository mock that records every call.
pub struct MockAssessmentRepository {
    created: Mutex<Vec<NewAssessment>>,
    deleted: Mutex<Vec<AssessmentId>>,
    stored: Mutex<Vec<Assessment>>,
    failure: Option<PersistenceError>,
}

impl MockAssessmentRepository {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
            stored: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn with(assessments: Vec<Assessment>) -> Self {
        let repo = Self::new();
        *repo.stored.lock().unwrap() = assessments;
        repo
    }

    pub fn failing(error: PersistenceError) -> Self {
        Self {
            failure: Some(error),
            ..Self::new()
        }
    }

    pub fn created(&self) -> Vec<NewAssessment> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<AssessmentId> {
        self.deleted.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), PersistenceError> {
        match &self.failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AssessmentRepository for MockAssessmentRepository {
    async fn create(&self, record: NewAssessment) -> Result<Assessment, PersistenceError> {
        self.created.lock().unwrap().push(record.clone());
        self.check()?;
        let now = Timestamp::now();
        let saved = Assessment::reconstitute(AssessmentId::new(), record, now, now);
        self.stored.lock().unwrap().push(saved.clone());
        Ok(saved)
    }

    async fn get(&self, id: &AssessmentId) -> Result<Option<Assessment>, PersistenceError> {
        self.check()?;
        Ok(self.stored.lock().unwrap().iter().find(|a| a.id() == id).cloned())
    }

    async fn list(&self, user_id: &UserId) -> Result<Vec<Assessment>, PersistenceError> {
        self.check()?;
        Ok(self
            .stored
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.is_owner(user_id))
            .cloned()
            .collect())
    }

    async fn delete(&self, _user_id: &UserId, id: &AssessmentId) -> Result<(), PersistenceError> {
        self.check()?;
        self.deleted.lock().unwrap().push(*id);
        self.stored.lock().unwrap().retain(|a| a.id() != id);
        Ok(())
    }
}
