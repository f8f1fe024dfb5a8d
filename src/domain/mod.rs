//! Domain layer containing the decision model and the AHP engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, Saaty scale, timestamps, errors)
//! - `model` - Decision model aggregate and expert judgments
//! - `analysis` - Pure AHP computations (matrices, priorities, consistency, rankings)

pub mod analysis;
pub mod foundation;
pub mod model;
