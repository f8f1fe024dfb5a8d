//! Model module - the decision model of record.
//!
//! A decision model names its criteria and alternatives and accumulates the
//! pairwise judgments experts submit. Only raw judgments are kept; every
//! weight and score is derived from them by the analysis engine.

mod decision_model;
mod element;
mod errors;
mod expert_input;
mod judgment;

pub use decision_model::{DecisionModel, MIN_ALTERNATIVES, MIN_CRITERIA};
pub use element::{Element, ElementSet};
pub use errors::ModelError;
pub use expert_input::ExpertInput;
pub use judgment::{validate_judgments, Judgment};
