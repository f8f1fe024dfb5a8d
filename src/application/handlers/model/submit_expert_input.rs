//! SubmitExpertInputHandler - Command handler for recording expert judgments.

use std::sync::Arc;

use crate::domain::foundation::ModelId;
use crate::domain::model::{DecisionModel, ExpertInput, ModelError};
use crate::ports::ModelRepository;

/// Attempts before a submission that keeps losing version races gives up.
const MAX_SUBMIT_ATTEMPTS: usize = 8;

/// Command to add one expert's judgments to a model.
#[derive(Debug, Clone)]
pub struct SubmitExpertInputCommand {
    pub model_id: ModelId,
    pub input: ExpertInput,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitExpertInputResult {
    pub model: DecisionModel,
    /// True when the expert's earlier submission was replaced.
    pub replaced: bool,
}

pub struct SubmitExpertInputHandler {
    repository: Arc<dyn ModelRepository>,
}

impl SubmitExpertInputHandler {
    pub fn new(repository: Arc<dyn ModelRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: SubmitExpertInputCommand,
    ) -> Result<SubmitExpertInputResult, ModelError> {
        let expert_id = cmd.input.expert_id;
        let judgments = cmd.input.judgment_count();

        let mut attempt = 1;
        let (model, replaced) = loop {
            let mut model = self
                .repository
                .find_by_id(&cmd.model_id)
                .await?
                .ok_or_else(|| ModelError::not_found(cmd.model_id))?;

            let replaced = model.submit_expert_input(cmd.input.clone())?;

            match self.repository.update(&model).await.map_err(ModelError::from) {
                Ok(()) => break (model, replaced),
                Err(ModelError::Conflict(reason)) if attempt < MAX_SUBMIT_ATTEMPTS => {
                    tracing::debug!(
                        model_id = %cmd.model_id,
                        attempt,
                        reason = %reason,
                        "Model changed during submission, retrying"
                    );
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        };

        tracing::info!(
            model_id = %cmd.model_id,
            expert_id = %expert_id,
            judgments,
            replaced,
            "Expert input recorded"
        );

        Ok(SubmitExpertInputResult { model, replaced })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryModelRepository;
    use crate::domain::foundation::{ElementId, ExpertId, SaatyValue, ValidationError};
    use crate::domain::foundation::DomainError;
    use crate::domain::model::Judgment;
    use async_trait::async_trait;

    /// Repository that yields between reading a model and handing it back,
    /// so concurrent submissions interleave their read and write steps.
    struct YieldingRepository {
        inner: InMemoryModelRepository,
    }

    #[async_trait]
    impl ModelRepository for YieldingRepository {
        async fn save(&self, model: &DecisionModel) -> Result<(), DomainError> {
            self.inner.save(model).await
        }

        async fn update(&self, model: &DecisionModel) -> Result<(), DomainError> {
            self.inner.update(model).await
        }

        async fn find_by_id(&self, id: &ModelId) -> Result<Option<DecisionModel>, DomainError> {
            let found = self.inner.find_by_id(id).await;
            tokio::task::yield_now().await;
            found
        }

        async fn list(&self) -> Result<Vec<DecisionModel>, DomainError> {
            self.inner.list().await
        }

        async fn exists(&self, id: &ModelId) -> Result<bool, DomainError> {
            self.inner.exists(id).await
        }

        async fn delete(&self, id: &ModelId) -> Result<DecisionModel, DomainError> {
            self.inner.delete(id).await
        }
    }

    async fn setup() -> (Arc<InMemoryModelRepository>, DecisionModel) {
        let repo = Arc::new(InMemoryModelRepository::new());
        let model = DecisionModel::new(
            "Office",
            &["North".to_string(), "South".to_string()],
            &["Rent".to_string(), "Commute".to_string()],
        )
        .unwrap();
        repo.save(&model).await.unwrap();
        (repo, model)
    }

    #[tokio::test]
    async fn records_judgments() {
        let (repo, model) = setup().await;
        let c = model.criterion_ids();
        let input = ExpertInput::new(ExpertId::new())
            .with_criteria(vec![Judgment::new(c[0], c[1], SaatyValue::Three).unwrap()]);

        let handler = SubmitExpertInputHandler::new(repo.clone());
        let result = handler
            .handle(SubmitExpertInputCommand {
                model_id: model.id(),
                input,
            })
            .await
            .unwrap();

        assert!(!result.replaced);
        let stored = repo.find_by_id(&model.id()).await.unwrap().unwrap();
        assert_eq!(stored.expert_inputs().len(), 1);
    }

    #[tokio::test]
    async fn resubmission_replaces_earlier_input() {
        let (repo, model) = setup().await;
        let c = model.criterion_ids();
        let expert = ExpertId::new();
        let handler = SubmitExpertInputHandler::new(repo.clone());

        for value in [SaatyValue::Three, SaatyValue::Five] {
            let input = ExpertInput::new(expert)
                .with_criteria(vec![Judgment::new(c[0], c[1], value).unwrap()]);
            handler
                .handle(SubmitExpertInputCommand {
                    model_id: model.id(),
                    input,
                })
                .await
                .unwrap();
        }

        let stored = repo.find_by_id(&model.id()).await.unwrap().unwrap();
        assert_eq!(stored.expert_inputs().len(), 1);
        assert_eq!(
            stored.expert_inputs()[0].criteria_comparisons[0].value,
            SaatyValue::Five
        );
    }

    #[tokio::test]
    async fn unknown_element_is_rejected_and_nothing_stored() {
        let (repo, model) = setup().await;
        let c = model.criterion_ids();
        let input = ExpertInput::new(ExpertId::new()).with_criteria(vec![Judgment::new(
            c[0],
            ElementId::new(),
            SaatyValue::Three,
        )
        .unwrap()]);

        let handler = SubmitExpertInputHandler::new(repo.clone());
        let result = handler
            .handle(SubmitExpertInputCommand {
                model_id: model.id(),
                input,
            })
            .await;

        assert!(matches!(
            result,
            Err(ModelError::Validation(ValidationError::UnknownElement { .. }))
        ));
        let stored = repo.find_by_id(&model.id()).await.unwrap().unwrap();
        assert!(stored.expert_inputs().is_empty());
    }

    #[tokio::test]
    async fn concurrent_submissions_are_all_kept() {
        let (inner, model) = setup().await;
        let repo = Arc::new(YieldingRepository {
            inner: (*inner).clone(),
        });
        let handler = SubmitExpertInputHandler::new(repo.clone());
        let c = model.criterion_ids();

        let command = |value| SubmitExpertInputCommand {
            model_id: model.id(),
            input: ExpertInput::new(ExpertId::new())
                .with_criteria(vec![Judgment::new(c[0], c[1], value).unwrap()]),
        };
        let north = command(SaatyValue::Three);
        let south = command(SaatyValue::OneFifth);

        let (first, second) = tokio::join!(handler.handle(north), handler.handle(south));

        assert!(first.is_ok());
        assert!(second.is_ok());
        let stored = repo.find_by_id(&model.id()).await.unwrap().unwrap();
        assert_eq!(stored.expert_inputs().len(), 2);
    }

    #[tokio::test]
    async fn missing_model_is_not_found() {
        let handler = SubmitExpertInputHandler::new(Arc::new(InMemoryModelRepository::new()));
        let result = handler
            .handle(SubmitExpertInputCommand {
                model_id: ModelId::new(),
                input: ExpertInput::new(ExpertId::new()),
            })
            .await;
        assert!(matches!(result, Err(ModelError::NotFound(_))));
    }
}
