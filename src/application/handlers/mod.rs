//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod model;

pub use model::{
    CalculateRankingsHandler, CalculateRankingsQuery, CreateModelCommand, CreateModelHandler,
    DeleteModelCommand, DeleteModelHandler, GetModelHandler, GetModelQuery, ImportModelCommand,
    ImportModelHandler, ListModelsHandler, ListModelsQuery, SubmitExpertInputCommand,
    SubmitExpertInputHandler, SubmitExpertInputResult,
};
