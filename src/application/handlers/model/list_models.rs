//! ListModelsHandler - Query handler for all stored models.

use std::sync::Arc;

use crate::domain::model::{DecisionModel, ModelError};
use crate::ports::ModelRepository;

/// Query for every model, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ListModelsQuery;

pub struct ListModelsHandler {
    repository: Arc<dyn ModelRepository>,
}

impl ListModelsHandler {
    pub fn new(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, _query: ListModelsQuery) -> Result<Vec<DecisionModel>, ModelError> {
        Ok(self.repository.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryModelRepository;

    #[tokio::test]
    async fn empty_repository_lists_nothing() {
        let handler = ListModelsHandler::new(Arc::new(InMemoryModelRepository::new()));
        assert!(handler.handle(ListModelsQuery).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn lists_saved_models() {
        let repo = Arc::new(InMemoryModelRepository::new());
        let model = DecisionModel::new(
            "Office",
            &["North".to_string(), "South".to_string()],
            &["Rent".to_string()],
        )
        .unwrap();
        repo.save(&model).await.unwrap();

        let handler = ListModelsHandler::new(repo);
        let models = handler.handle(ListModelsQuery).await.unwrap();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].id(), model.id());
    }
}
