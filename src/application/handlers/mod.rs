//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! session store and the assessment repository.

pub mod assessment;
pub mod wizard;

#[cfg(test)]
pub(crate) mod test_support;

pub use assessment::{
    DeleteAssessmentCommand, DeleteAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery,
    ListAssessmentsHandler, ListAssessmentsQuery, ReviseAssessmentCommand, ReviseAssessmentHandler,
};
pub use wizard::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, GetWizardStateHandler,
    GetWizardStateQuery, GoBackCommand, GoBackHandler, PreviewResults, PreviewResultsHandler,
    PreviewResultsQuery, StartWizardCommand, StartWizardHandler, SubmitStepCommand,
    SubmitStepHandler, WizardFlowError,
};
