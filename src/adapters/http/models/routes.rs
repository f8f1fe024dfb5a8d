//! Axum router configuration for model endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_model, delete_model, export_model, get_model, get_rankings, import_model, list_models,
    submit_expert_input, ModelsAppState,
};

/// Create the model API router.
///
/// # Routes
///
/// - `GET /models` - List all models
/// - `POST /models` - Create a model
/// - `POST /models/import` - Import an exported model
/// - `GET /models/:id` - Get a model
/// - `DELETE /models/:id` - Delete a model
/// - `POST /models/:id/experts` - Submit one expert's judgments
/// - `GET /models/:id/rankings` - Compute weights and rankings
/// - `GET /models/:id/export` - Export a model document
pub fn model_routes() -> Router<ModelsAppState> {
    Router::new()
        .route("/models", get(list_models).post(create_model))
        .route("/models/import", post(import_model))
        .route("/models/:id", get(get_model).delete(delete_model))
        .route("/models/:id/experts", post(submit_expert_input))
        .route("/models/:id/rankings", get(get_rankings))
        .route("/models/:id/export", get(export_model))
}

/// Create the complete model module router with state applied.
pub fn models_router(state: ModelsAppState) -> Router {
    model_routes().with_state(state)
}
