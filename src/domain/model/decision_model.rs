//! DecisionModel aggregate - the model of record.
//!
//! Holds the elements being compared and the raw judgments every expert
//! submitted. Derived results are never stored here; they are recomputed
//! from the judgments on demand.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::{ElementId, ModelId, Timestamp, ValidationError};

use super::{validate_judgments, Element, ExpertInput};

/// Minimum number of alternatives a model must offer.
pub const MIN_ALTERNATIVES: usize = 2;

/// Minimum number of criteria a model must have.
pub const MIN_CRITERIA: usize = 1;

/// A group decision problem and the judgments collected for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionModel {
    model_id: ModelId,
    name: String,
    alternatives: Vec<Element>,
    criteria: Vec<Element>,
    expert_inputs: Vec<ExpertInput>,
    created_at: Timestamp,
    /// Bumped on every change, for optimistic locking.
    #[serde(skip)]
    version: u32,
}

impl DecisionModel {
    /// Creates a new model from element names.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the model name or any element name is blank
    /// - `TooFewEntries` with fewer than 2 alternatives or no criteria
    pub fn new(
        name: impl Into<String>,
        alternative_names: &[String],
        criterion_names: &[String],
    ) -> Result<Self, ValidationError> {
        let alternatives = alternative_names
            .iter()
            .map(Element::new)
            .collect::<Result<Vec<_>, _>>()?;
        let criteria = criterion_names
            .iter()
            .map(Element::new)
            .collect::<Result<Vec<_>, _>>()?;

        Self::reconstitute(
            ModelId::new(),
            name,
            alternatives,
            criteria,
            Vec::new(),
            Timestamp::now(),
        )
    }

    /// Rebuilds a model from stored or imported parts, validating everything.
    ///
    /// # Errors
    ///
    /// - `DuplicateExpert` if two inputs share an expert id
    /// - any error `submit_expert_input` would raise for an input
    pub fn reconstitute(
        model_id: ModelId,
        name: impl Into<String>,
        alternatives: Vec<Element>,
        criteria: Vec<Element>,
        expert_inputs: Vec<ExpertInput>,
        created_at: Timestamp,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if alternatives.len() < MIN_ALTERNATIVES {
            return Err(ValidationError::too_few_entries(
                "alternatives",
                MIN_ALTERNATIVES,
                alternatives.len(),
            ));
        }
        if criteria.len() < MIN_CRITERIA {
            return Err(ValidationError::too_few_entries(
                "criteria",
                MIN_CRITERIA,
                criteria.len(),
            ));
        }

        let mut ids = HashSet::new();
        for element in alternatives.iter().chain(criteria.iter()) {
            if element.name.trim().is_empty() {
                return Err(ValidationError::empty_field("name"));
            }
            if !ids.insert(element.id) {
                return Err(ValidationError::duplicate_element(element.id));
            }
        }

        let mut model = Self {
            model_id,
            name,
            alternatives,
            criteria,
            expert_inputs: Vec::with_capacity(expert_inputs.len()),
            created_at,
            version: 0,
        };
        for input in expert_inputs {
            if model.expert_inputs.iter().any(|e| e.expert_id == input.expert_id) {
                return Err(ValidationError::duplicate_expert(input.expert_id));
            }
            model.validate_expert_input(&input)?;
            model.expert_inputs.push(input);
        }
        Ok(model)
    }

    /// Records an expert's judgments after validating them against the model.
    ///
    /// A new submission from an expert who already submitted replaces the
    /// earlier one, so results always reflect the latest judgments.
    ///
    /// Returns `true` when an earlier submission was replaced.
    pub fn submit_expert_input(&mut self, input: ExpertInput) -> Result<bool, ValidationError> {
        self.validate_expert_input(&input)?;
        self.version += 1;

        if let Some(existing) = self
            .expert_inputs
            .iter_mut()
            .find(|e| e.expert_id == input.expert_id)
        {
            *existing = input;
            return Ok(true);
        }

        self.expert_inputs.push(input);
        Ok(false)
    }

    fn validate_expert_input(&self, input: &ExpertInput) -> Result<(), ValidationError> {
        let criterion_ids = self.criterion_ids();
        let alternative_ids = self.alternative_ids();

        validate_judgments(
            "criteria_comparisons",
            &criterion_ids,
            &input.criteria_comparisons,
        )?;

        for (criterion, judgments) in &input.alternatives_comparisons {
            if !criterion_ids.contains(criterion) {
                return Err(ValidationError::unknown_element(
                    "alternatives_comparisons",
                    criterion,
                ));
            }
            validate_judgments("alternatives_comparisons", &alternative_ids, judgments)?;
        }

        Ok(())
    }

    pub fn id(&self) -> ModelId {
        self.model_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alternatives(&self) -> &[Element] {
        &self.alternatives
    }

    pub fn criteria(&self) -> &[Element] {
        &self.criteria
    }

    pub fn expert_inputs(&self) -> &[ExpertInput] {
        &self.expert_inputs
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Change counter. Repositories reject an update whose version is stale.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Criterion ids in model order.
    pub fn criterion_ids(&self) -> Vec<ElementId> {
        self.criteria.iter().map(|c| c.id).collect()
    }

    /// Alternative ids in model order.
    pub fn alternative_ids(&self) -> Vec<ElementId> {
        self.alternatives.iter().map(|a| a.id).collect()
    }

    /// Display name of any element in the model.
    pub fn element_name(&self, id: &ElementId) -> Option<&str> {
        self.alternatives
            .iter()
            .chain(self.criteria.iter())
            .find(|e| e.id == *id)
            .map(|e| e.name.as_str())
    }
}
