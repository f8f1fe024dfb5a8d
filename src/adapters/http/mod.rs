//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them into the served application.

pub mod models;
pub mod router;

// Re-export key types for convenience
pub use models::{models_router, ModelsAppState};
pub use router::app_router;
