//! DeleteModelHandler - Command handler for removing a model.

use std::sync::Arc;

use crate::domain::foundation::ModelId;
use crate::domain::model::{DecisionModel, ModelError};
use crate::ports::ModelRepository;

#[derive(Debug, Clone)]
pub struct DeleteModelCommand {
    pub model_id: ModelId,
}

pub struct DeleteModelHandler {
    repository: Arc<dyn ModelRepository>,
}

impl DeleteModelHandler {
    pub fn new(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    /// Deletes the model and returns what was stored.
    pub async fn handle(&self, cmd: DeleteModelCommand) -> Result<DecisionModel, ModelError> {
        if !self.repository.exists(&cmd.model_id).await? {
            return Err(ModelError::not_found(cmd.model_id));
        }

        let model = self.repository.delete(&cmd.model_id).await?;
        tracing::info!(model_id = %cmd.model_id, "Model deleted");
        Ok(model)
    }
}
