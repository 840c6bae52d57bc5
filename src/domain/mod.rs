//! Domain layer containing the assessment engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors, state machine)
//! - `assessment` - Input model, normalizer, classifier, recommendations, records
//! - `wizard` - Seven-step collection wizard over an `AssessmentInput`

pub mod assessment;
pub mod foundation;
pub mod wizard;
