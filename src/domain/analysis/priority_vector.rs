//! Priority Vector - normalized weights over an ordered element set.

use std::collections::BTreeMap;

use crate::domain::foundation::ElementId;

use super::AnalysisError;

/// Tolerance for the `sum of weights == 1` invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Ordered mapping element id -> non-negative weight, summing to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityVector {
    element_ids: Vec<ElementId>,
    weights: Vec<f64>,
}

impl PriorityVector {
    /// Normalizes raw non-negative weights into a priority vector.
    ///
    /// # Errors
    ///
    /// `ModelInconsistency` if the lengths differ, a weight is negative or
    /// not finite, or every weight is zero.
    pub fn normalized(element_ids: Vec<ElementId>, raw: Vec<f64>) -> Result<Self, AnalysisError> {
        if element_ids.len() != raw.len() {
            return Err(AnalysisError::model_inconsistency(format!(
                "{} weights given for {} elements",
                raw.len(),
                element_ids.len()
            )));
        }
        if raw.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(AnalysisError::model_inconsistency(
                "weights must be finite and non-negative",
            ));
        }

        let total: f64 = raw.iter().sum();
        if !(total > 0.0) {
            return Err(AnalysisError::model_inconsistency("weights sum to zero"));
        }

        let weights = raw.into_iter().map(|w| w / total).collect();
        Ok(Self {
            element_ids,
            weights,
        })
    }

    /// The trivial vector `{element: 1}`.
    pub fn single(element_id: ElementId) -> Self {
        Self {
            element_ids: vec![element_id],
            weights: vec![1.0],
        }
    }

    pub fn element_ids(&self) -> &[ElementId] {
        &self.element_ids
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Weight of one element.
    pub fn get(&self, id: &ElementId) -> Option<f64> {
        self.element_ids
            .iter()
            .position(|e| e == id)
            .map(|i| self.weights[i])
    }

    /// Iterates `(id, weight)` in element order.
    pub fn iter(&self) -> impl Iterator<Item = (&ElementId, f64)> + '_ {
        self.element_ids.iter().zip(self.weights.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Keyed copy for publication.
    pub fn to_map(&self) -> BTreeMap<ElementId, f64> {
        self.iter().map(|(id, w)| (*id, w)).collect()
    }
}
