//! CreateModelHandler - Command handler for creating decision models.

use std::sync::Arc;

use crate::domain::model::{DecisionModel, ModelError};
use crate::ports::ModelRepository;

/// Command to create a new model from element names.
#[derive(Debug, Clone)]
pub struct CreateModelCommand {
    pub name: String,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
}

/// Handler for creating models.
pub struct CreateModelHandler {
    repository: Arc<dyn ModelRepository>,
}

impl CreateModelHandler {
    pub fn new(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateModelCommand) -> Result<DecisionModel, ModelError> {
        let model = DecisionModel::new(cmd.name, &cmd.alternatives, &cmd.criteria)?;

        self.repository.save(&model).await?;

        tracing::info!(
            model_id = %model.id(),
            alternatives = model.alternatives().len(),
            criteria = model.criteria().len(),
            "Model created"
        );

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryModelRepository;
    use crate::domain::foundation::{DomainError, ErrorCode, ModelId, ValidationError};
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl ModelRepository for FailingRepository {
        async fn save(&self, _model: &DecisionModel) -> Result<(), DomainError> {
            Err(DomainError::new(ErrorCode::StorageError, "Simulated save failure"))
        }

        async fn update(&self, _model: &DecisionModel) -> Result<(), DomainError> {
            Ok(())
        }

        async fn find_by_id(&self, _id: &ModelId) -> Result<Option<DecisionModel>, DomainError> {
            Ok(None)
        }

        async fn list(&self) -> Result<Vec<DecisionModel>, DomainError> {
            Ok(vec![])
        }

        async fn exists(&self, _id: &ModelId) -> Result<bool, DomainError> {
            Ok(false)
        }

        async fn delete(&self, id: &ModelId) -> Result<DecisionModel, DomainError> {
            Err(DomainError::new(ErrorCode::ModelNotFound, id.to_string()))
        }
    }

    fn command(alternatives: &[&str], criteria: &[&str]) -> CreateModelCommand {
        CreateModelCommand {
            name: "Vendor selection".to_string(),
            alternatives: alternatives.iter().map(|s| s.to_string()).collect(),
            criteria: criteria.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn creates_and_persists_model() {
        let repo = Arc::new(InMemoryModelRepository::new());
        let handler = CreateModelHandler::new(repo.clone());

        let model = handler
            .handle(command(&["Acme", "Globex"], &["Price", "Support"]))
            .await
            .unwrap();

        assert_eq!(model.name(), "Vendor selection");
        assert!(repo.exists(&model.id()).await.unwrap());
    }

    #[tokio::test]
    async fn rejects_single_alternative() {
        let repo = Arc::new(InMemoryModelRepository::new());
        let handler = CreateModelHandler::new(repo.clone());

        let result = handler.handle(command(&["Acme"], &["Price"])).await;

        assert!(matches!(
            result,
            Err(ModelError::Validation(ValidationError::TooFewEntries { .. }))
        ));
        assert_eq!(repo.model_count().await, 0);
    }

    #[tokio::test]
    async fn rejects_missing_criteria() {
        let handler = CreateModelHandler::new(Arc::new(InMemoryModelRepository::new()));
        let result = handler.handle(command(&["Acme", "Globex"], &[])).await;
        assert!(matches!(result, Err(ModelError::Validation(_))));
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure() {
        let handler = CreateModelHandler::new(Arc::new(FailingRepository));
        let result = handler.handle(command(&["Acme", "Globex"], &["Price"])).await;
        assert!(matches!(result, Err(ModelError::Infrastructure(_))));
    }
}
