//! ImportModelHandler - Command handler for restoring an exported model.

use std::sync::Arc;

use crate::domain::model::{DecisionModel, ModelError};
use crate::ports::ModelRepository;

/// Command carrying a fully validated model to store under its own id.
#[derive(Debug, Clone)]
pub struct ImportModelCommand {
    pub model: DecisionModel,
}

pub struct ImportModelHandler {
    repository: Arc<dyn ModelRepository>,
}

impl ImportModelHandler {
    pub fn new(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ImportModelCommand) -> Result<DecisionModel, ModelError> {
        let model = cmd.model;
        if self.repository.exists(&model.id()).await? {
            return Err(ModelError::already_exists(model.id()));
        }

        self.repository.save(&model).await?;

        tracing::info!(
            model_id = %model.id(),
            experts = model.expert_inputs().len(),
            "Model imported"
        );

        Ok(model)
    }
}
