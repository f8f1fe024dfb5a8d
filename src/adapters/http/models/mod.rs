//! HTTP adapter for the model module.
//!
//! Exposes model management, expert submissions and ranking computation
//! via REST endpoints. Every success body is wrapped as `{"data": ...}`;
//! failures are `{"code": ..., "detail": ...}`.

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::{ModelsApiError, ModelsAppState};
pub use routes::{model_routes, models_router};
