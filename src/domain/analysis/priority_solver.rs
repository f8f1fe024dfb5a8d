//! Priority Solver - principal eigenvector of a comparison matrix.

use super::{AnalysisError, ComparisonMatrix, PriorityVector};

/// Default convergence tolerance for power iteration.
pub const DEFAULT_CONVERGENCE_TOLERANCE: f64 = 1e-10;

/// Default iteration bound for power iteration.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Output of the solver: priorities plus the dominant eigenvalue.
#[derive(Debug, Clone, PartialEq)]
pub struct PrioritySolution {
    pub vector: PriorityVector,
    pub lambda_max: f64,
    pub iterations: usize,
    pub converged: bool,
}

/// Derives priority vectors with the principal-eigenvector method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrioritySolver {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for PrioritySolver {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_CONVERGENCE_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl PrioritySolver {
    /// Creates a solver with explicit convergence settings.
    ///
    /// `max_iterations` is raised to at least 1.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations: max_iterations.max(1),
        }
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Computes the normalized principal eigenvector and `λmax`.
    ///
    /// # Algorithm
    /// Power iteration from the uniform vector. Each step computes `M·v` and
    /// rescales it to sum 1; iteration stops when no component moves by more
    /// than the tolerance, or at the iteration bound. For the normalized `w`,
    /// `λmax = Σ (M·w)_i`.
    ///
    /// # Edge Cases
    /// - `n = 1`: `{element: 1}` with `λmax = 1`
    /// - `n = 0`: `ModelInconsistency`
    pub fn solve(&self, matrix: &ComparisonMatrix) -> Result<PrioritySolution, AnalysisError> {
        let n = matrix.size();
        match n {
            0 => {
                return Err(AnalysisError::model_inconsistency(
                    "cannot derive priorities for an empty element set",
                ))
            }
            1 => {
                return Ok(PrioritySolution {
                    vector: PriorityVector::single(matrix.element_ids()[0]),
                    lambda_max: 1.0,
                    iterations: 0,
                    converged: true,
                })
            }
            _ => {}
        }

        let mut current = vec![1.0 / n as f64; n];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations {
            iterations += 1;
            let next = normalize(matrix.multiply(&current));
            let delta = next
                .iter()
                .zip(&current)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0_f64, f64::max);
            current = next;
            if delta < self.tolerance {
                converged = true;
                break;
            }
        }

        let weights: Vec<f64> = current.iter().map(|w| w.abs()).collect();
        let vector = PriorityVector::normalized(matrix.element_ids().to_vec(), weights)?;
        let lambda_max = matrix.multiply(vector.weights()).iter().sum();

        Ok(PrioritySolution {
            vector,
            lambda_max,
            iterations,
            converged,
        })
    }
}

fn normalize(values: Vec<f64>) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total > 0.0 {
        values.into_iter().map(|v| v / total).collect()
    } else {
        values
    }
}
