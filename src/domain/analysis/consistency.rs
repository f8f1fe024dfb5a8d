//! Consistency Evaluator - Saaty consistency index and ratio.

/// Saaty random index for matrix sizes 1 through 15.
pub const RANDOM_INDEX: [f64; 15] = [
    0.0, 0.0, 0.58, 0.90, 1.12, 1.24, 1.32, 1.41, 1.45, 1.49, 1.51, 1.48, 1.56, 1.57, 1.59,
];

/// Ratios above this are reported as questionable.
pub const DEFAULT_CONSISTENCY_THRESHOLD: f64 = 0.1;

/// Random index for an `n × n` matrix. Sizes past the table reuse its last value.
pub fn random_index(n: usize) -> f64 {
    match n {
        0 => 0.0,
        n if n <= RANDOM_INDEX.len() => RANDOM_INDEX[n - 1],
        _ => RANDOM_INDEX[RANDOM_INDEX.len() - 1],
    }
}

/// Stateless consistency calculations.
pub struct ConsistencyEvaluator;

impl ConsistencyEvaluator {
    /// `CI = (λmax − n) / (n − 1)`, clamped at zero. Zero for `n < 2`.
    pub fn consistency_index(lambda_max: f64, n: usize) -> f64 {
        if n < 2 {
            return 0.0;
        }
        ((lambda_max - n as f64) / (n as f64 - 1.0)).max(0.0)
    }

    /// `CR = CI / RI(n)`, or zero where the random index is zero.
    pub fn consistency_ratio(lambda_max: f64, n: usize) -> f64 {
        let ri = random_index(n);
        if ri <= 0.0 {
            return 0.0;
        }
        Self::consistency_index(lambda_max, n) / ri
    }

    pub fn is_acceptable(consistency_ratio: f64, threshold: f64) -> bool {
        consistency_ratio <= threshold
    }
}
