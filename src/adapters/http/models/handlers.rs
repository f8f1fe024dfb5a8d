//! HTTP handlers for model endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::model::{
    CalculateRankingsHandler, CalculateRankingsQuery, CreateModelCommand, CreateModelHandler,
    DeleteModelCommand, DeleteModelHandler, GetModelHandler, GetModelQuery, ImportModelCommand,
    ImportModelHandler, ListModelsHandler, ListModelsQuery, SubmitExpertInputCommand,
    SubmitExpertInputHandler,
};
use crate::domain::analysis::RankingEngine;
use crate::domain::foundation::{ErrorCode, ModelId, Timestamp};
use crate::domain::model::ModelError;
use crate::ports::ModelRepository;

use super::dto::{
    CreateModelRequest, DataEnvelope, ErrorResponse, InputError, ModelDocument,
    ModelResultsResponse, SubmitExpertInputRequest,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
#[derive(Clone)]
pub struct ModelsAppState {
    pub repository: Arc<dyn ModelRepository>,
    pub engine: RankingEngine,
}

impl ModelsAppState {
    pub fn new(repository: Arc<dyn ModelRepository>, engine: RankingEngine) -> Self {
        Self { repository, engine }
    }

    pub fn create_model_handler(&self) -> CreateModelHandler {
        CreateModelHandler::new(self.repository.clone())
    }

    pub fn list_models_handler(&self) -> ListModelsHandler {
        ListModelsHandler::new(self.repository.clone())
    }

    pub fn get_model_handler(&self) -> GetModelHandler {
        GetModelHandler::new(self.repository.clone())
    }

    pub fn delete_model_handler(&self) -> DeleteModelHandler {
        DeleteModelHandler::new(self.repository.clone())
    }

    pub fn submit_expert_input_handler(&self) -> SubmitExpertInputHandler {
        SubmitExpertInputHandler::new(self.repository.clone())
    }

    pub fn import_model_handler(&self) -> ImportModelHandler {
        ImportModelHandler::new(self.repository.clone())
    }

    pub fn calculate_rankings_handler(&self) -> CalculateRankingsHandler {
        CalculateRankingsHandler::new(self.repository.clone(), self.engine)
    }
}

fn parse_model_id(raw: &str) -> Result<ModelId, ModelsApiError> {
    raw.parse()
        .map_err(|_| ModelsApiError::BadRequest(format!("Invalid model ID format: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /models - List all models
pub async fn list_models(
    State(state): State<ModelsAppState>,
) -> Result<impl IntoResponse, ModelsApiError> {
    let models = state.list_models_handler().handle(ListModelsQuery).await?;
    let documents: Vec<ModelDocument> = models.iter().map(ModelDocument::from).collect();
    Ok(Json(DataEnvelope::new(documents)))
}

/// GET /models/:id - Get one model
pub async fn get_model(
    State(state): State<ModelsAppState>,
    Path(model_id): Path<String>,
) -> Result<impl IntoResponse, ModelsApiError> {
    let model_id = parse_model_id(&model_id)?;
    let model = state
        .get_model_handler()
        .handle(GetModelQuery { model_id })
        .await?;
    Ok(Json(DataEnvelope::new(ModelDocument::from(&model))))
}

/// GET /models/:id/export - Full model document for re-import
pub async fn export_model(
    State(state): State<ModelsAppState>,
    Path(model_id): Path<String>,
) -> Result<impl IntoResponse, ModelsApiError> {
    let model_id = parse_model_id(&model_id)?;
    let model = state
        .get_model_handler()
        .handle(GetModelQuery { model_id })
        .await?;

    tracing::debug!(model_id = %model_id, "Model exported");
    Ok(Json(DataEnvelope::new(ModelDocument::from(&model))))
}

/// GET /models/:id/rankings - Weights, consistency ratios and rankings
pub async fn get_rankings(
    State(state): State<ModelsAppState>,
    Path(model_id): Path<String>,
) -> Result<impl IntoResponse, ModelsApiError> {
    let model_id = parse_model_id(&model_id)?;
    let results = state
        .calculate_rankings_handler()
        .handle(CalculateRankingsQuery { model_id })
        .await?;
    Ok(Json(DataEnvelope::new(ModelResultsResponse::from(&results))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST/DELETE endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /models - Create a model from element names
pub async fn create_model(
    State(state): State<ModelsAppState>,
    payload: Result<Json<CreateModelRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ModelsApiError> {
    let Json(request) = payload?;
    let cmd = CreateModelCommand {
        name: request.name,
        alternatives: request.alternatives,
        criteria: request.criteria,
    };

    let model = state.create_model_handler().handle(cmd).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope::new(ModelDocument::from(&model))),
    ))
}

/// POST /models/import - Store an exported model under its own id
pub async fn import_model(
    State(state): State<ModelsAppState>,
    payload: Result<Json<ModelDocument>, JsonRejection>,
) -> Result<impl IntoResponse, ModelsApiError> {
    let Json(document) = payload?;
    let model = document.into_model()?;

    let model = state
        .import_model_handler()
        .handle(ImportModelCommand { model })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataEnvelope::new(ModelDocument::from(&model))),
    ))
}

/// POST /models/:id/experts - Submit one expert's judgments
pub async fn submit_expert_input(
    State(state): State<ModelsAppState>,
    Path(model_id): Path<String>,
    payload: Result<Json<SubmitExpertInputRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ModelsApiError> {
    let model_id = parse_model_id(&model_id)?;
    let Json(request) = payload?;
    let input = request.into_expert_input()?.submitted_at(Timestamp::now());

    let result = state
        .submit_expert_input_handler()
        .handle(SubmitExpertInputCommand { model_id, input })
        .await?;

    Ok(Json(DataEnvelope::new(ModelDocument::from(&result.model))))
}

/// DELETE /models/:id - Remove a model
pub async fn delete_model(
    State(state): State<ModelsAppState>,
    Path(model_id): Path<String>,
) -> Result<impl IntoResponse, ModelsApiError> {
    let model_id = parse_model_id(&model_id)?;
    let model = state
        .delete_model_handler()
        .handle(DeleteModelCommand { model_id })
        .await?;
    Ok(Json(DataEnvelope::new(ModelDocument::from(&model))))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts application errors to HTTP responses.
#[derive(Debug)]
pub enum ModelsApiError {
    BadRequest(String),
    Validation(String),
    NotFound(String),
    Conflict(ErrorCode, String),
    Inconsistent(String),
    Internal(String),
}

impl From<ModelError> for ModelsApiError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NotFound(_) => ModelsApiError::NotFound(err.to_string()),
            ModelError::AlreadyExists(_) | ModelError::Conflict(_) => {
                ModelsApiError::Conflict(err.code(), err.to_string())
            }
            ModelError::Validation(e) => ModelsApiError::Validation(e.to_string()),
            ModelError::Analysis(e) => ModelsApiError::Inconsistent(e.to_string()),
            ModelError::Infrastructure(msg) => ModelsApiError::Internal(msg),
        }
    }
}

impl From<InputError> for ModelsApiError {
    fn from(err: InputError) -> Self {
        match err {
            InputError::Malformed(msg) => ModelsApiError::BadRequest(msg),
            InputError::Invalid(e) => ModelsApiError::Validation(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ModelsApiError {
    fn from(rejection: JsonRejection) -> Self {
        ModelsApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ModelsApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ModelsApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ModelsApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new(ErrorCode::ValidationFailed.to_string(), msg),
            ),
            ModelsApiError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(ErrorCode::ModelNotFound.to_string(), msg),
            ),
            ModelsApiError::Conflict(code, msg) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(code.to_string(), msg),
            ),
            ModelsApiError::Inconsistent(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(ErrorCode::ModelInconsistency.to_string(), msg),
            ),
            ModelsApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(ErrorCode::InternalError.to_string(), msg),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
