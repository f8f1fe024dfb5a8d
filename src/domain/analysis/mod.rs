//! Analysis Module - Pure AHP computations over a decision model.
//!
//! # Components
//!
//! - `ComparisonMatrix` - Reciprocal pairwise matrix, with missing entries inferred
//! - `PrioritySolver` - Principal eigenvector via power iteration
//! - `ConsistencyEvaluator` - Saaty consistency index and ratio
//! - `ExpertAggregator` - Geometric-mean combination of expert priorities
//! - `ScoreCombiner` - Weighted overall alternative scores
//! - `RankPresenter` - Ordered rankings with shared places for ties
//! - `RankingEngine` - The full pipeline for one model
//!
//! Everything here is stateless and deterministic. The same judgments always
//! produce the same results.

mod comparison_matrix;
mod consistency;
mod engine;
mod errors;
mod expert_aggregator;
mod priority_solver;
mod priority_vector;
mod rank_presenter;
mod results;
mod score_combiner;

pub use comparison_matrix::{ComparisonMatrix, ComparisonMatrixBuilder};
pub use consistency::{
    random_index, ConsistencyEvaluator, DEFAULT_CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use engine::RankingEngine;
pub use errors::AnalysisError;
pub use expert_aggregator::{ExpertAggregator, ExpertPriorities, GroupPriorities};
pub use priority_solver::{
    PrioritySolution, PrioritySolver, DEFAULT_CONVERGENCE_TOLERANCE, DEFAULT_MAX_ITERATIONS,
};
pub use priority_vector::{PriorityVector, WEIGHT_SUM_TOLERANCE};
pub use rank_presenter::{
    to_percent, RankEntry, RankPresenter, RankedEntry, DEFAULT_SCORE_DECIMALS,
    MAX_SCORE_DECIMALS,
};
pub use results::{ModelResults, Rankings, SetFailure, SetOutcome};
pub use score_combiner::ScoreCombiner;
