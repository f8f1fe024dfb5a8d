//! GetModelHandler - Query handler for retrieving a model.

use std::sync::Arc;

use crate::domain::foundation::ModelId;
use crate::domain::model::{DecisionModel, ModelError};
use crate::ports::ModelRepository;

/// Query to get a model by ID.
#[derive(Debug, Clone)]
pub struct GetModelQuery {
    pub model_id: ModelId,
}

/// Handler for retrieving models, also used for export.
pub struct GetModelHandler {
    repository: Arc<dyn ModelRepository>,
}

impl GetModelHandler {
    pub fn new(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetModelQuery) -> Result<DecisionModel, ModelError> {
        self.repository
            .find_by_id(&query.model_id)
            .await?
            .ok_or_else(|| ModelError::not_found(query.model_id))
    }
}
