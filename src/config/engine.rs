//! Ranking engine configuration

use serde::Deserialize;

use crate::domain::analysis::{
    PrioritySolver, RankingEngine, DEFAULT_CONSISTENCY_THRESHOLD, DEFAULT_CONVERGENCE_TOLERANCE,
    DEFAULT_MAX_ITERATIONS, DEFAULT_SCORE_DECIMALS, MAX_SCORE_DECIMALS,
};

use super::error::ValidationError;

/// Numerical settings for the AHP engine
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Power iteration stops once no weight moves by more than this
    #[serde(default = "default_tolerance")]
    pub convergence_tolerance: f64,

    /// Upper bound on power iteration steps
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Consistency ratios above this are logged as warnings
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Decimals kept on percentage scores before ranking
    #[serde(default = "default_score_decimals")]
    pub score_decimals: u32,
}

impl EngineConfig {
    /// Build the engine these settings describe
    pub fn ranking_engine(&self) -> RankingEngine {
        RankingEngine::new()
            .with_solver(PrioritySolver::new(
                self.convergence_tolerance,
                self.max_iterations,
            ))
            .with_consistency_threshold(self.consistency_threshold)
            .with_score_decimals(self.score_decimals)
    }

    /// Validate engine configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.convergence_tolerance > 0.0 && self.convergence_tolerance < 1.0) {
            return Err(ValidationError::InvalidTolerance);
        }
        if self.max_iterations == 0 || self.max_iterations > 100_000 {
            return Err(ValidationError::InvalidMaxIterations);
        }
        if !(self.consistency_threshold > 0.0) {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if self.score_decimals > MAX_SCORE_DECIMALS {
            return Err(ValidationError::InvalidScoreDecimals(MAX_SCORE_DECIMALS));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            convergence_tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            consistency_threshold: default_consistency_threshold(),
            score_decimals: default_score_decimals(),
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_CONVERGENCE_TOLERANCE
}

fn default_max_iterations() -> usize {
    DEFAULT_MAX_ITERATIONS
}

fn default_consistency_threshold() -> f64 {
    DEFAULT_CONSISTENCY_THRESHOLD
}

fn default_score_decimals() -> u32 {
    DEFAULT_SCORE_DECIMALS
}
