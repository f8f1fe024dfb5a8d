//! In-Memory Model Repository Adapter
//!
//! Stores decision models in a process-local map. Data is lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ModelId};
use crate::domain::model::DecisionModel;
use crate::ports::ModelRepository;

/// In-memory storage for decision models
#[derive(Debug, Clone)]
pub struct InMemoryModelRepository {
    models: Arc<RwLock<HashMap<ModelId, DecisionModel>>>,
}

impl InMemoryModelRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            models: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored models
    pub async fn model_count(&self) -> usize {
        self.models.read().await.len()
    }
}

impl Default for InMemoryModelRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &ModelId) -> DomainError {
    DomainError::new(ErrorCode::ModelNotFound, format!("Model not found: {}", id))
        .with_detail("model_id", id.to_string())
}

#[async_trait]
impl ModelRepository for InMemoryModelRepository {
    async fn save(&self, model: &DecisionModel) -> Result<(), DomainError> {
        let mut models = self.models.write().await;
        if models.contains_key(&model.id()) {
            return Err(DomainError::new(
                ErrorCode::ModelAlreadyExists,
                format!("Model already exists: {}", model.id()),
            )
            .with_detail("model_id", model.id().to_string()));
        }
        models.insert(model.id(), model.clone());
        Ok(())
    }

    async fn update(&self, model: &DecisionModel) -> Result<(), DomainError> {
        let mut models = self.models.write().await;
        match models.get_mut(&model.id()) {
            Some(stored) if stored.version().checked_add(1) == Some(model.version()) => {
                *stored = model.clone();
                Ok(())
            }
            Some(stored) => Err(DomainError::new(
                ErrorCode::ConcurrencyConflict,
                format!(
                    "Model version mismatch: stored {}, update {}",
                    stored.version(),
                    model.version()
                ),
            )
            .with_detail("model_id", model.id().to_string())),
            None => Err(not_found(&model.id())),
        }
    }

    async fn find_by_id(&self, id: &ModelId) -> Result<Option<DecisionModel>, DomainError> {
        Ok(self.models.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<DecisionModel>, DomainError> {
        let mut models: Vec<DecisionModel> = self.models.read().await.values().cloned().collect();
        models.sort_by(|a, b| {
            a.created_at()
                .as_datetime()
                .cmp(b.created_at().as_datetime())
                .then_with(|| a.id().cmp(&b.id()))
        });
        Ok(models)
    }

    async fn exists(&self, id: &ModelId) -> Result<bool, DomainError> {
        Ok(self.models.read().await.contains_key(id))
    }

    async fn delete(&self, id: &ModelId) -> Result<DecisionModel, DomainError> {
        self.models
            .write()
            .await
            .remove(id)
            .ok_or_else(|| not_found(id))
    }
}
