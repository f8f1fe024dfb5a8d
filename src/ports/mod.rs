//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ModelRepository` - Persistence of decision models and their judgments

mod model_repository;

pub use model_repository::ModelRepository;
