//! Integration tests for the wizard flow at the application layer.
//!
//! These tests drive the command handlers directly over in-memory adapters:
//! 1. A full run stores exactly one assessment and clears the session
//! 2. A persistence failure keeps the wizard so the user can retry
//! 3. Revising a stored assessment produces a second, independent record
//! 4. Completion only happens from the results step

use std::sync::Arc;

use async_trait::async_trait;

use cycle_assessment::adapters::{InMemoryAssessmentRepository, InMemorySessionStore};
use cycle_assessment::application::handlers::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, GetWizardStateHandler,
    GetWizardStateQuery, ListAssessmentsHandler, ListAssessmentsQuery, ReviseAssessmentCommand,
    ReviseAssessmentHandler, StartWizardCommand, StartWizardHandler, SubmitStepCommand,
    SubmitStepHandler, WizardFlowError,
};
use cycle_assessment::domain::assessment::{
    Assessment, AssessmentError, Classifier, NewAssessment, Pattern, PersistenceError, SymptomSet,
};
use cycle_assessment::domain::foundation::{AssessmentId, UserId, WizardSessionId};
use cycle_assessment::domain::wizard::{StepValue, WizardError, WizardStep};
use cycle_assessment::ports::{AssessmentRepository, SessionStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Repository whose collaborator is always down.
struct UnavailableRepository;

#[async_trait]
impl AssessmentRepository for UnavailableRepository {
    async fn create(&self, _record: NewAssessment) -> Result<Assessment, PersistenceError> {
        Err(PersistenceError::Unavailable("connection refused".to_string()))
    }

    async fn get(&self, _id: &AssessmentId) -> Result<Option<Assessment>, PersistenceError> {
        Err(PersistenceError::Unavailable("connection refused".to_string()))
    }

    async fn list(&self, _user_id: &UserId) -> Result<Vec<Assessment>, PersistenceError> {
        Err(PersistenceError::Unavailable("connection refused".to_string()))
    }

    async fn delete(&self, _user_id: &UserId, _id: &AssessmentId) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable("connection refused".to_string()))
    }
}

struct Flow {
    store: Arc<dyn SessionStore>,
    repository: Arc<dyn AssessmentRepository>,
    classifier: Arc<Classifier>,
}

impl Flow {
    fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self {
            store: Arc::new(InMemorySessionStore::new()),
            repository,
            classifier: Arc::new(Classifier::default()),
        }
    }

    async fn start(&self) -> WizardSessionId {
        let state = StartWizardHandler::new(self.store.clone())
            .handle(StartWizardCommand {
                quick_response: false,
            })
            .await
            .unwrap();
        *state.session_id()
    }

    async fn submit(&self, session_id: WizardSessionId, value: StepValue) -> WizardStep {
        SubmitStepHandler::new(self.store.clone())
            .handle(SubmitStepCommand {
                session_id,
                value,
                quick_response: None,
            })
            .await
            .unwrap()
            .step()
    }

    async fn walk(&self, session_id: WizardSessionId, choices: [&str; 5], physical: &[&str]) {
        for choice in choices {
            self.submit(session_id, StepValue::choice(choice)).await;
        }
        let step = self
            .submit(
                session_id,
                StepValue::symptoms(
                    physical.iter().copied().collect(),
                    SymptomSet::new(),
                    SymptomSet::new(),
                ),
            )
            .await;
        assert_eq!(step, WizardStep::Results);
    }

    async fn complete(
        &self,
        session_id: WizardSessionId,
        user_id: &UserId,
    ) -> Result<Assessment, WizardFlowError> {
        CompleteAssessmentHandler::new(
            self.store.clone(),
            self.repository.clone(),
            self.classifier.clone(),
        )
        .handle(CompleteAssessmentCommand {
            session_id,
            user_id: user_id.clone(),
        })
        .await
    }

    async fn current_step(&self, session_id: WizardSessionId) -> WizardStep {
        GetWizardStateHandler::new(self.store.clone())
            .handle(GetWizardStateQuery {
                session_id,
                quick_response: None,
            })
            .await
            .unwrap()
            .step()
    }
}

fn owner() -> UserId {
    UserId::new("user-123").unwrap()
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn full_run_stores_one_assessment_and_clears_the_session() {
    let repository = Arc::new(InMemoryAssessmentRepository::new());
    let flow = Flow::new(repository.clone());
    let session_id = flow.start().await;
    flow.walk(session_id, ["18-24", "26-30", "4-5", "moderate", "mild"], &["Fatigue"])
        .await;

    let saved = flow.complete(session_id, &owner()).await.unwrap();
    assert_eq!(saved.pattern(), Pattern::Regular);
    assert_eq!(saved.user_id(), &owner());

    let stored = ListAssessmentsHandler::new(repository)
        .handle(ListAssessmentsQuery { user_id: owner() })
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id(), saved.id());

    assert_eq!(flow.current_step(session_id).await, WizardStep::AgeVerification);
    assert!(flow.store.get(&session_id.store_key()).await.unwrap().is_none());
}

#[tokio::test]
async fn persistence_failure_keeps_the_wizard_for_retry() {
    let flow = Flow::new(Arc::new(UnavailableRepository));
    let session_id = flow.start().await;
    flow.walk(session_id, ["25-plus", "26-30", "6-7", "heavy", "mild"], &[])
        .await;

    let err = flow.complete(session_id, &owner()).await.unwrap_err();
    assert!(matches!(
        err,
        WizardFlowError::Assessment(AssessmentError::Persistence(PersistenceError::Unavailable(_)))
    ));

    assert_eq!(flow.current_step(session_id).await, WizardStep::Results);
}

#[tokio::test]
async fn early_completion_reports_the_first_unset_step() {
    let flow = Flow::new(Arc::new(InMemoryAssessmentRepository::new()));
    let session_id = flow.start().await;
    flow.submit(session_id, StepValue::choice("18-24")).await;
    flow.submit(session_id, StepValue::choice("26-30")).await;

    let err = flow.complete(session_id, &owner()).await.unwrap_err();
    assert_eq!(err.first_unset_step(), Some(WizardStep::PeriodDuration));
    assert_eq!(flow.current_step(session_id).await, WizardStep::PeriodDuration);
}

#[tokio::test]
async fn revision_creates_a_second_record_and_leaves_the_first() {
    let repository = Arc::new(InMemoryAssessmentRepository::new());
    let flow = Flow::new(repository.clone());
    let session_id = flow.start().await;
    flow.walk(session_id, ["18-24", "26-30", "4-5", "moderate", "mild"], &[])
        .await;
    let original = flow.complete(session_id, &owner()).await.unwrap();

    let revised = ReviseAssessmentHandler::new(repository.clone(), flow.store.clone())
        .handle(ReviseAssessmentCommand {
            user_id: owner(),
            assessment_id: *original.id(),
            quick_response: false,
        })
        .await
        .unwrap();
    assert_ne!(*revised.session_id(), session_id);
    assert!(revised.input().is_complete());

    // Walk forward keeping every answer except pain.
    let revision_id = *revised.session_id();
    for choice in ["18-24", "26-30", "4-5", "moderate", "severe"] {
        flow.submit(revision_id, StepValue::choice(choice)).await;
    }
    flow.submit(
        revision_id,
        StepValue::symptoms(SymptomSet::new(), SymptomSet::new(), SymptomSet::new()),
    )
    .await;

    assert_eq!(flow.current_step(revision_id).await, WizardStep::Results);
    let second = flow.complete(revision_id, &owner()).await.unwrap();
    assert_eq!(second.pattern(), Pattern::Pain);
    assert_ne!(second.id(), original.id());

    let stored = ListAssessmentsHandler::new(repository)
        .handle(ListAssessmentsQuery { user_id: owner() })
        .await
        .unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored
        .iter()
        .any(|a| a.id() == original.id() && a.pattern() == Pattern::Regular));
}

#[tokio::test]
async fn revising_someone_elses_assessment_is_forbidden() {
    let repository = Arc::new(InMemoryAssessmentRepository::new());
    let flow = Flow::new(repository.clone());
    let session_id = flow.start().await;
    flow.walk(session_id, ["18-24", "26-30", "4-5", "moderate", "mild"], &[])
        .await;
    let saved = flow.complete(session_id, &owner()).await.unwrap();

    let err = ReviseAssessmentHandler::new(repository, flow.store.clone())
        .handle(ReviseAssessmentCommand {
            user_id: UserId::new("intruder").unwrap(),
            assessment_id: *saved.id(),
            quick_response: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, WizardFlowError::Assessment(AssessmentError::Forbidden)));
}

#[tokio::test]
async fn revision_cannot_be_completed_before_walking_the_steps() {
    let repository = Arc::new(InMemoryAssessmentRepository::new());
    let flow = Flow::new(repository.clone());
    let session_id = flow.start().await;
    flow.walk(session_id, ["18-24", "26-30", "4-5", "moderate", "mild"], &[])
        .await;
    let original = flow.complete(session_id, &owner()).await.unwrap();

    let revised = ReviseAssessmentHandler::new(repository.clone(), flow.store.clone())
        .handle(ReviseAssessmentCommand {
            user_id: owner(),
            assessment_id: *original.id(),
            quick_response: false,
        })
        .await
        .unwrap();

    let err = flow.complete(*revised.session_id(), &owner()).await.unwrap_err();
    assert_eq!(
        err,
        WizardFlowError::Wizard(WizardError::NotFinished {
            step: WizardStep::AgeVerification
        })
    );

    let stored = ListAssessmentsHandler::new(repository)
        .handle(ListAssessmentsQuery { user_id: owner() })
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
}
