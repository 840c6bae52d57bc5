//! Wizard command and query handlers.

mod complete_assessment;
mod errors;
mod get_wizard_state;
mod go_back;
mod preview_results;
mod start_wizard;
mod submit_step;
pub(crate) mod wizard_store;

pub use complete_assessment::{CompleteAssessmentCommand, CompleteAssessmentHandler};
pub use errors::WizardFlowError;
pub use get_wizard_state::{GetWizardStateHandler, GetWizardStateQuery};
pub use go_back::{GoBackCommand, GoBackHandler};
pub use preview_results::{PreviewResults, PreviewResultsHandler, PreviewResultsQuery};
pub use start_wizard::{StartWizardCommand, StartWizardHandler};
pub use submit_step::{SubmitStepCommand, SubmitStepHandler};
