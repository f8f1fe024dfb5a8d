//! Model command and query handlers.

mod calculate_rankings;
mod create_model;
mod delete_model;
mod get_model;
mod import_model;
mod list_models;
mod submit_expert_input;

pub use calculate_rankings::{CalculateRankingsHandler, CalculateRankingsQuery};
pub use create_model::{CreateModelCommand, CreateModelHandler};
pub use delete_model::{DeleteModelCommand, DeleteModelHandler};
pub use get_model::{GetModelHandler, GetModelQuery};
pub use import_model::{ImportModelCommand, ImportModelHandler};
pub use list_models::{ListModelsHandler, ListModelsQuery};
pub use submit_expert_input::{
    SubmitExpertInputCommand, SubmitExpertInputHandler, SubmitExpertInputResult,
};
