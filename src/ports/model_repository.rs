//! Model repository port.
//!
//! Defines the contract for persisting and retrieving decision models.
//! Only model-of-record data is stored: elements and raw expert judgments.
//! Weights and rankings are always recomputed.

use crate::domain::foundation::{DomainError, ModelId};
use crate::domain::model::DecisionModel;
use async_trait::async_trait;

/// Repository port for DecisionModel persistence.
#[async_trait]
pub trait ModelRepository: Send + Sync {
    /// Save a new model.
    ///
    /// # Errors
    ///
    /// - `ModelAlreadyExists` if a model with the same id is stored
    /// - `StorageError` on persistence failure
    async fn save(&self, model: &DecisionModel) -> Result<(), DomainError>;

    /// Replace an existing model.
    ///
    /// Uses optimistic locking: the stored version must be exactly one
    /// behind `model.version()`, i.e. the version the caller loaded.
    ///
    /// # Errors
    ///
    /// - `ModelNotFound` if the model doesn't exist
    /// - `ConcurrencyConflict` if another update landed first
    /// - `StorageError` on persistence failure
    async fn update(&self, model: &DecisionModel) -> Result<(), DomainError>;

    /// Find a model by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ModelId) -> Result<Option<DecisionModel>, DomainError>;

    /// All models, oldest first.
    async fn list(&self) -> Result<Vec<DecisionModel>, DomainError>;

    /// Check if a model exists.
    async fn exists(&self, id: &ModelId) -> Result<bool, DomainError>;

    /// Delete a model, returning it.
    ///
    /// # Errors
    ///
    /// - `ModelNotFound` if the model doesn't exist
    async fn delete(&self, id: &ModelId) -> Result<DecisionModel, DomainError>;
}
