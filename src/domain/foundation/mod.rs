//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the group AHP domain.

mod errors;
mod ids;
mod saaty_value;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ElementId, ExpertId, ModelId};
pub use saaty_value::SaatyValue;
pub use timestamp::Timestamp;
