//! Errors raised by the AHP analysis engine.

use thiserror::Error;

use crate::domain::foundation::{ElementId, ErrorCode};

/// Failures of a priority computation.
///
/// `InsufficientData` and `NoData` belong to one element set and are attached
/// to that set's slot in the results. `ModelInconsistency` means corrupted
/// upstream state and aborts the whole calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Insufficient data: no judgment chain relates {element_a} and {element_b}")]
    InsufficientData {
        element_a: ElementId,
        element_b: ElementId,
    },

    #[error("No data: no expert provided judgments for this element set")]
    NoData,

    #[error("Model inconsistency: {0}")]
    ModelInconsistency(String),
}

impl AnalysisError {
    pub fn insufficient_data(element_a: ElementId, element_b: ElementId) -> Self {
        AnalysisError::InsufficientData {
            element_a,
            element_b,
        }
    }

    pub fn model_inconsistency(reason: impl Into<String>) -> Self {
        AnalysisError::ModelInconsistency(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::InsufficientData { .. } => ErrorCode::InsufficientData,
            AnalysisError::NoData => ErrorCode::NoData,
            AnalysisError::ModelInconsistency(_) => ErrorCode::ModelInconsistency,
        }
    }

    /// True for failures that abort a whole ranking request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AnalysisError::ModelInconsistency(_))
    }
}
