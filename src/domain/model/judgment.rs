//! Pairwise judgments and their validation against an element set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{ElementId, SaatyValue, ValidationError};

/// "Element a is `value` times as important as element b."
///
/// Only one direction is stored; `(b, a) -> 1/value` is implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgment {
    pub element_a_id: ElementId,
    pub element_b_id: ElementId,
    pub value: SaatyValue,
}

impl Judgment {
    /// Creates a judgment, returning error if both sides are the same element.
    pub fn new(
        element_a_id: ElementId,
        element_b_id: ElementId,
        value: SaatyValue,
    ) -> Result<Self, ValidationError> {
        if element_a_id == element_b_id {
            return Err(ValidationError::self_comparison(element_a_id));
        }
        Ok(Self {
            element_a_id,
            element_b_id,
            value,
        })
    }

    /// Returns the same statement with the pair written in ascending id order.
    pub fn canonical(&self) -> (ElementId, ElementId, SaatyValue) {
        if self.element_a_id <= self.element_b_id {
            (self.element_a_id, self.element_b_id, self.value)
        } else {
            (self.element_b_id, self.element_a_id, self.value.reciprocal())
        }
    }
}

/// Checks one expert's judgments for one element set.
///
/// Every referenced id must belong to `elements`, and a pair judged more than
/// once (in either direction) must carry the same value each time.
pub fn validate_judgments(
    field: &str,
    elements: &[ElementId],
    judgments: &[Judgment],
) -> Result<(), ValidationError> {
    let mut seen: HashMap<(ElementId, ElementId), SaatyValue> = HashMap::new();

    for judgment in judgments {
        for id in [judgment.element_a_id, judgment.element_b_id] {
            if !elements.contains(&id) {
                return Err(ValidationError::unknown_element(field, id));
            }
        }
        if judgment.element_a_id == judgment.element_b_id {
            return Err(ValidationError::self_comparison(judgment.element_a_id));
        }

        let (a, b, value) = judgment.canonical();
        match seen.get(&(a, b)) {
            Some(existing) if *existing != value => {
                return Err(ValidationError::conflicting_judgment(a, b));
            }
            Some(_) => {}
            None => {
                seen.insert((a, b), value);
            }
        }
    }

    Ok(())
}
