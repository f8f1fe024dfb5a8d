//! Elements (criteria and alternatives) and the comparison sets they form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{ElementId, ValidationError};

/// A criterion or an alternative of a decision model.
///
/// The role is given by the list the element lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub name: String,
}

impl Element {
    /// Creates an element with a fresh id, returning error if the name is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::with_id(ElementId::new(), name)
    }

    /// Creates an element with a known id.
    pub fn with_id(id: ElementId, name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            id,
            name: trimmed.to_string(),
        })
    }
}

/// Identity of one pairwise comparison set within a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementSet {
    /// Criteria compared against each other.
    Criteria,
    /// Alternatives compared with respect to one criterion.
    Alternatives { criterion: ElementId },
}

impl ElementSet {
    /// Key used for this set's slot in published results.
    pub fn slot_key(&self) -> String {
        match self {
            ElementSet::Criteria => "criteria".to_string(),
            ElementSet::Alternatives { criterion } => criterion.to_string(),
        }
    }
}

impl fmt::Display for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementSet::Criteria => write!(f, "criteria"),
            ElementSet::Alternatives { criterion } => write!(f, "alternatives[{}]", criterion),
        }
    }
}
