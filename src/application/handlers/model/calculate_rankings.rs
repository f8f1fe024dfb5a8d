//! CalculateRankingsHandler - Query handler running the AHP engine.

use std::sync::Arc;

use crate::domain::analysis::{ModelResults, RankingEngine};
use crate::domain::foundation::ModelId;
use crate::domain::model::ModelError;
use crate::ports::ModelRepository;

#[derive(Debug, Clone)]
pub struct CalculateRankingsQuery {
    pub model_id: ModelId,
}

/// Loads a model and recomputes its results from the stored judgments.
pub struct CalculateRankingsHandler {
    repository: Arc<dyn ModelRepository>,
    engine: RankingEngine,
}

impl CalculateRankingsHandler {
    pub fn new(repository: Arc<dyn ModelRepository>, engine: RankingEngine) -> Self {
        Self { repository, engine }
    }

    pub async fn handle(&self, query: CalculateRankingsQuery) -> Result<ModelResults, ModelError> {
        let model = self
            .repository
            .find_by_id(&query.model_id)
            .await?
            .ok_or_else(|| ModelError::not_found(query.model_id))?;

        // CPU-bound; keep it off the async workers.
        let engine = self.engine;
        let results = tokio::task::spawn_blocking(move || engine.calculate(&model))
            .await
            .map_err(|e| ModelError::infrastructure(format!("ranking task failed: {}", e)))?;

        match results {
            Ok(results) => Ok(results),
            Err(error) => {
                tracing::error!(model_id = %query.model_id, error = %error, "Ranking calculation aborted");
                Err(error.into())
            }
        }
    }
}
