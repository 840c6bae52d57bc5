//! Assessment domain module.
//!
//! Everything that turns collected observations into a persisted record:
//!
//! - `AssessmentInput` - observations, built incrementally by the wizard
//! - `normalize` / `flatten` - decode either historical record shape
//! - `Classifier` - ordered decision list producing a `Pattern`
//! - `recommend` - pattern (plus symptoms) to ordered recommendations
//! - `assemble` - completeness guard and unsaved record construction

pub mod classifier;
mod errors;
mod fields;
mod input;
mod normalizer;
mod pattern;
mod recommendations;
mod record;
mod symptoms;

pub use classifier::{classify, BoundaryTable, BoundaryTableError, Classifier};
pub use errors::{AssessmentError, PersistenceError};
pub use fields::{AssessmentField, SymptomCategory};
pub use input::AssessmentInput;
pub use normalizer::{flatten, normalize};
pub use pattern::Pattern;
pub use recommendations::{base_recommendations, recommend, Recommendation};
pub use record::{assemble, Assessment, NewAssessment};
pub use symptoms::SymptomSet;
