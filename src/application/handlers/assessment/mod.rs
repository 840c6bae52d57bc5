//! Assessment command and query handlers.

mod delete_assessment;
mod get_assessment;
mod list_assessments;
mod revise_assessment;

pub use delete_assessment::{DeleteAssessmentCommand, DeleteAssessmentHandler};
pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use list_assessments::{ListAssessmentsHandler, ListAssessmentsQuery};
pub use revise_assessment::{ReviseAssessmentCommand, ReviseAssessmentHandler};
