//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction and judgment validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' needs at least {min} entries, got {actual}")]
    TooFewEntries {
        field: String,
        min: usize,
        actual: usize,
    },

    #[error("Value {value} is not on the Saaty 1/9..9 scale")]
    NotOnScale { value: f64 },

    #[error("Element {element} cannot be compared with itself")]
    SelfComparison { element: String },

    #[error("Field '{field}' references unknown element {element}")]
    UnknownElement { field: String, element: String },

    #[error("Conflicting judgments for pair ({element_a}, {element_b})")]
    ConflictingJudgment { element_a: String, element_b: String },

    #[error("Duplicate element id {element}")]
    DuplicateElement { element: String },

    #[error("Expert {expert} appears more than once")]
    DuplicateExpert { expert: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a validation error for a list that is too short.
    pub fn too_few_entries(field: impl Into<String>, min: usize, actual: usize) -> Self {
        ValidationError::TooFewEntries {
            field: field.into(),
            min,
            actual,
        }
    }

    /// Creates an error for a judgment value outside the Saaty scale.
    pub fn not_on_scale(value: f64) -> Self {
        ValidationError::NotOnScale { value }
    }

    /// Creates an error for a judgment comparing an element with itself.
    pub fn self_comparison(element: impl fmt::Display) -> Self {
        ValidationError::SelfComparison {
            element: element.to_string(),
        }
    }

    /// Creates an error for a reference to an element the model does not have.
    pub fn unknown_element(field: impl Into<String>, element: impl fmt::Display) -> Self {
        ValidationError::UnknownElement {
            field: field.into(),
            element: element.to_string(),
        }
    }

    /// Creates an error for two judgments on the same pair that disagree.
    pub fn conflicting_judgment(element_a: impl fmt::Display, element_b: impl fmt::Display) -> Self {
        ValidationError::ConflictingJudgment {
            element_a: element_a.to_string(),
            element_b: element_b.to_string(),
        }
    }

    /// Creates an error for an element id used twice in one model.
    pub fn duplicate_element(element: impl fmt::Display) -> Self {
        ValidationError::DuplicateElement {
            element: element.to_string(),
        }
    }

    /// Creates an error for an expert with more than one input in a document.
    pub fn duplicate_expert(expert: impl fmt::Display) -> Self {
        ValidationError::DuplicateExpert {
            expert: expert.to_string(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found / conflict errors
    ModelNotFound,
    ModelAlreadyExists,
    ConcurrencyConflict,

    // Analysis errors
    InsufficientData,
    NoData,
    ModelInconsistency,

    // Infrastructure errors
    StorageError,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::ModelNotFound => "MODEL_NOT_FOUND",
            ErrorCode::ModelAlreadyExists => "MODEL_ALREADY_EXISTS",
            ErrorCode::ConcurrencyConflict => "CONCURRENCY_CONFLICT",
            ErrorCode::InsufficientData => "INSUFFICIENT_DATA",
            ErrorCode::NoData => "NO_DATA",
            ErrorCode::ModelInconsistency => "MODEL_INCONSISTENCY",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
///
/// Returned by ports; handlers translate it into their own error types.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
