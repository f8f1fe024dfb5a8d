//! Storage Adapters
//!
//! Implementations of the ModelRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryModelRepository** - Stores models in memory (development and tests)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryModelRepository;
//!
//! let repository: Arc<dyn ModelRepository> = Arc::new(InMemoryModelRepository::new());
//! ```

mod in_memory_model_repository;

pub use in_memory_model_repository::InMemoryModelRepository;
