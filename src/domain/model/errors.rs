//! Model-specific error types.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode, ModelId, ValidationError};

/// Errors surfaced by model command and query handlers.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Model was not found.
    #[error("Model not found: {0}")]
    NotFound(ModelId),

    /// A model with this id already exists.
    #[error("Model already exists: {0}")]
    AlreadyExists(ModelId),

    /// The model changed between load and save.
    #[error("Concurrent update: {0}")]
    Conflict(String),

    /// Input failed validation before reaching the engine.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The engine found the model structurally corrupted.
    #[error("{0}")]
    Analysis(#[from] AnalysisError),

    /// Infrastructure error.
    #[error("Error: {0}")]
    Infrastructure(String),
}

impl ModelError {
    pub fn not_found(id: ModelId) -> Self {
        ModelError::NotFound(id)
    }

    pub fn already_exists(id: ModelId) -> Self {
        ModelError::AlreadyExists(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ModelError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ModelError::NotFound(_) => ErrorCode::ModelNotFound,
            ModelError::AlreadyExists(_) => ErrorCode::ModelAlreadyExists,
            ModelError::Conflict(_) => ErrorCode::ConcurrencyConflict,
            ModelError::Validation(_) => ErrorCode::ValidationFailed,
            ModelError::Analysis(e) => e.code(),
            ModelError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<DomainError> for ModelError {
    fn from(err: DomainError) -> Self {
        let model_id = err
            .details
            .get("model_id")
            .and_then(|id| id.parse::<ModelId>().ok());
        match (err.code, model_id) {
            (ErrorCode::ModelNotFound, Some(id)) => ModelError::NotFound(id),
            (ErrorCode::ModelAlreadyExists, Some(id)) => ModelError::AlreadyExists(id),
            (ErrorCode::ConcurrencyConflict, _) => ModelError::Conflict(err.message),
            _ => ModelError::Infrastructure(err.to_string()),
        }
    }
}
