//! Comparison Matrix - complete reciprocal matrices built from sparse judgments.

use std::collections::HashMap;

use crate::domain::foundation::ElementId;
use crate::domain::model::Judgment;

use super::AnalysisError;

/// A complete `n x n` pairwise comparison matrix.
///
/// Invariants: the diagonal is `1`, and for `i < j` the lower entry is
/// written as exactly `M[j][i] = 1 / M[i][j]`. Values are only produced by
/// [`ComparisonMatrixBuilder`] or [`ComparisonMatrix::from_weights`].
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonMatrix {
    element_ids: Vec<ElementId>,
    values: Vec<f64>,
}

impl ComparisonMatrix {
    /// Creates a builder for constructing a matrix from judgments.
    pub fn builder() -> ComparisonMatrixBuilder {
        ComparisonMatrixBuilder::new()
    }

    /// Creates the perfectly consistent matrix `M[i][j] = w_i / w_j`.
    ///
    /// Returns `None` if the lengths differ or a weight is not positive.
    pub fn from_weights(element_ids: Vec<ElementId>, weights: &[f64]) -> Option<Self> {
        if element_ids.len() != weights.len() || weights.iter().any(|w| !(*w > 0.0)) {
            return None;
        }

        let n = weights.len();
        let mut values = vec![1.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let ratio = weights[i] / weights[j];
                values[i * n + j] = ratio;
                values[j * n + i] = 1.0 / ratio;
            }
        }
        Some(Self {
            element_ids,
            values,
        })
    }

    /// Number of elements compared.
    pub fn size(&self) -> usize {
        self.element_ids.len()
    }

    /// Element ids in row/column order.
    pub fn element_ids(&self) -> &[ElementId] {
        &self.element_ids
    }

    /// Entry at row `i`, column `j`.
    ///
    /// # Panics
    /// If `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size() + j]
    }

    /// Entry for a pair of element ids, if both belong to the matrix.
    pub fn ratio(&self, a: &ElementId, b: &ElementId) -> Option<f64> {
        let i = self.element_ids.iter().position(|id| id == a)?;
        let j = self.element_ids.iter().position(|id| id == b)?;
        Some(self.get(i, j))
    }

    /// Computes `M * v`.
    pub fn multiply(&self, vector: &[f64]) -> Vec<f64> {
        let n = self.size();
        (0..n)
            .map(|i| {
                self.values[i * n..(i + 1) * n]
                    .iter()
                    .zip(vector)
                    .map(|(m, v)| m * v)
                    .sum()
            })
            .collect()
    }
}

/// Builder turning a sparse judgment set into a complete reciprocal matrix.
///
/// # Inference
///
/// Pairs without a direct judgment are estimated from two-hop chains: the
/// geometric mean of `M[i][k] * M[k][j]` over every `k` for which both legs
/// are known. Inference runs in rounds; each round uses only the entries
/// known when it started and commits its estimates together, so the result is
/// independent of iteration order. Longer chains are reached through entries
/// inferred in earlier rounds. When a round infers nothing and pairs remain
/// unknown, the judgment graph is disconnected.
#[derive(Debug, Default)]
pub struct ComparisonMatrixBuilder {
    element_ids: Vec<ElementId>,
    judgments: Vec<Judgment>,
}

impl ComparisonMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ordered elements being compared.
    pub fn elements(mut self, ids: &[ElementId]) -> Self {
        self.element_ids = ids.to_vec();
        self
    }

    /// Adds judgments.
    pub fn judgments(mut self, judgments: &[Judgment]) -> Self {
        self.judgments.extend_from_slice(judgments);
        self
    }

    /// Adds one judgment.
    pub fn judgment(mut self, judgment: Judgment) -> Self {
        self.judgments.push(judgment);
        self
    }

    /// Builds the complete matrix.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if some pair is related by no judgment chain
    /// - `ModelInconsistency` if a judgment references an element outside the set
    pub fn build(self) -> Result<ComparisonMatrix, AnalysisError> {
        let n = self.element_ids.len();
        let index: HashMap<ElementId, usize> = self
            .element_ids
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();

        let mut known: Vec<Option<f64>> = vec![None; n * n];
        for i in 0..n {
            known[i * n + i] = Some(1.0);
        }

        for judgment in &self.judgments {
            let i = Self::lookup(&index, &judgment.element_a_id)?;
            let j = Self::lookup(&index, &judgment.element_b_id)?;
            if i == j {
                continue;
            }
            let (row, col, value) = if i < j {
                (i, j, judgment.value.value())
            } else {
                (j, i, judgment.value.reciprocal().value())
            };
            known[row * n + col] = Some(value);
            known[col * n + row] = Some(1.0 / value);
        }

        loop {
            let missing: Vec<(usize, usize)> = (0..n)
                .flat_map(|i| ((i + 1)..n).map(move |j| (i, j)))
                .filter(|&(i, j)| known[i * n + j].is_none())
                .collect();

            let Some(&(first_i, first_j)) = missing.first() else {
                break;
            };

            let inferred: Vec<(usize, usize, f64)> = missing
                .iter()
                .filter_map(|&(i, j)| {
                    let chains: Vec<f64> = (0..n)
                        .filter(|&k| k != i && k != j)
                        .filter_map(|k| match (known[i * n + k], known[k * n + j]) {
                            (Some(ik), Some(kj)) => Some(ik * kj),
                            _ => None,
                        })
                        .collect();
                    if chains.is_empty() {
                        None
                    } else {
                        Some((i, j, geometric_mean(&chains)))
                    }
                })
                .collect();

            if inferred.is_empty() {
                return Err(AnalysisError::insufficient_data(
                    self.element_ids[first_i],
                    self.element_ids[first_j],
                ));
            }

            for (i, j, value) in inferred {
                known[i * n + j] = Some(value);
                known[j * n + i] = Some(1.0 / value);
            }
        }

        let values = known.into_iter().map(|v| v.unwrap_or(1.0)).collect();
        Ok(ComparisonMatrix {
            element_ids: self.element_ids,
            values,
        })
    }

    fn lookup(index: &HashMap<ElementId, usize>, id: &ElementId) -> Result<usize, AnalysisError> {
        index.get(id).copied().ok_or_else(|| {
            AnalysisError::model_inconsistency(format!(
                "judgment references element {} outside the compared set",
                id
            ))
        })
    }
}

/// Geometric mean of positive values. A single value is returned unchanged.
pub(crate) fn geometric_mean(values: &[f64]) -> f64 {
    match values {
        [] => 0.0,
        [single] => *single,
        _ => {
            let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
            (log_sum / values.len() as f64).exp()
        }
    }
}
