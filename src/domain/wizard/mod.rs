//! Wizard domain module.
//!
//! Seven linear collection steps over an `AssessmentInput`. Transitions are
//! pure: `WizardState::submit` and `WizardState::back` return a new state.

mod errors;
mod state;
mod step;
mod value;

pub use errors::WizardError;
pub use state::WizardState;
pub use step::WizardStep;
pub use value::StepValue;
