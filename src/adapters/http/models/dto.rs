//! HTTP DTOs (Data Transfer Objects) for model endpoints.
//!
//! These types define the JSON request/response structure for the model API.
//! They serve as the boundary between HTTP and the application layer: ids
//! arrive as strings and judgment values as plain numbers, and both are
//! checked here before anything reaches the domain.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::analysis::{ModelResults, RankedEntry, SetOutcome};
use crate::domain::foundation::{
    ElementId, ExpertId, ModelId, SaatyValue, Timestamp, ValidationError,
};
use crate::domain::model::{DecisionModel, Element, ExpertInput, Judgment};

// ════════════════════════════════════════════════════════════════════════════════
// Envelopes
// ════════════════════════════════════════════════════════════════════════════════

/// Wrapper for every successful response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code.
    pub code: String,
    /// Human-readable description.
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", detail)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Conversion Errors
// ════════════════════════════════════════════════════════════════════════════════

/// Why a request body could not be turned into domain values.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Structurally unusable input such as an unparseable id or timestamp.
    Malformed(String),
    /// Well-formed input that breaks a domain rule.
    Invalid(ValidationError),
}

impl From<ValidationError> for InputError {
    fn from(err: ValidationError) -> Self {
        InputError::Invalid(err)
    }
}

fn parse_id<T: std::str::FromStr>(field: &str, value: &str) -> Result<T, InputError> {
    value
        .trim()
        .parse()
        .map_err(|_| InputError::Malformed(format!("Invalid {} format: {}", field, value)))
}

fn parse_timestamp(field: &str, value: &str) -> Result<Timestamp, InputError> {
    Timestamp::parse_rfc3339(value)
        .map_err(|_| InputError::Malformed(format!("Invalid {} timestamp: {}", field, value)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a new model.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateModelRequest {
    pub name: String,
    pub alternatives: Vec<String>,
    pub criteria: Vec<String>,
}

/// One pairwise comparison as exchanged over HTTP.
///
/// A `null` or missing value means the pair was not judged; such entries are
/// dropped during conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonDto {
    pub element_a_id: String,
    pub element_b_id: String,
    #[serde(default)]
    pub value: Option<f64>,
}

impl ComparisonDto {
    fn into_judgment(self) -> Result<Option<Judgment>, InputError> {
        let Some(value) = self.value else {
            return Ok(None);
        };
        let a: ElementId = parse_id("element_a_id", &self.element_a_id)?;
        let b: ElementId = parse_id("element_b_id", &self.element_b_id)?;
        let value = SaatyValue::try_from_f64(value)?;
        Ok(Some(Judgment::new(a, b, value)?))
    }
}

impl From<&Judgment> for ComparisonDto {
    fn from(judgment: &Judgment) -> Self {
        Self {
            element_a_id: judgment.element_a_id.to_string(),
            element_b_id: judgment.element_b_id.to_string(),
            value: Some(judgment.value.value()),
        }
    }
}

fn into_judgments(comparisons: Vec<ComparisonDto>) -> Result<Vec<Judgment>, InputError> {
    let mut judgments = Vec::with_capacity(comparisons.len());
    for comparison in comparisons {
        if let Some(judgment) = comparison.into_judgment()? {
            judgments.push(judgment);
        }
    }
    Ok(judgments)
}

/// One expert's judgments. Used both as the submission body and inside
/// exported model documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpertInputDocument {
    /// Generated when omitted.
    #[serde(default)]
    pub expert_id: Option<String>,
    #[serde(default)]
    pub criteria_comparisons: Vec<ComparisonDto>,
    #[serde(default)]
    pub alternatives_comparisons: BTreeMap<String, Vec<ComparisonDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
}

/// Body of `POST /models/{id}/experts`.
pub type SubmitExpertInputRequest = ExpertInputDocument;

impl ExpertInputDocument {
    /// Converts into a domain input. Criteria sets left without any
    /// judgment after dropping `null` values are omitted.
    pub fn into_expert_input(self) -> Result<ExpertInput, InputError> {
        let expert_id = match self.expert_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => parse_id::<ExpertId>("expert_id", id)?,
            _ => ExpertId::new(),
        };

        let mut input =
            ExpertInput::new(expert_id).with_criteria(into_judgments(self.criteria_comparisons)?);
        for (criterion, comparisons) in self.alternatives_comparisons {
            let criterion: ElementId = parse_id("criterion id", &criterion)?;
            let judgments = into_judgments(comparisons)?;
            if !judgments.is_empty() {
                input = input.with_alternatives(criterion, judgments);
            }
        }
        if let Some(at) = self.submitted_at {
            input = input.submitted_at(parse_timestamp("submitted_at", &at)?);
        }
        Ok(input)
    }
}

impl From<&ExpertInput> for ExpertInputDocument {
    fn from(input: &ExpertInput) -> Self {
        Self {
            expert_id: Some(input.expert_id.to_string()),
            criteria_comparisons: input.criteria_comparisons.iter().map(Into::into).collect(),
            alternatives_comparisons: input
                .alternatives_comparisons
                .iter()
                .map(|(criterion, judgments)| {
                    (
                        criterion.to_string(),
                        judgments.iter().map(Into::into).collect(),
                    )
                })
                .collect(),
            submitted_at: Some(input.submitted_at.to_rfc3339()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Model Document (response, export and import)
// ════════════════════════════════════════════════════════════════════════════════

/// A named element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementDto {
    pub id: String,
    pub name: String,
}

impl ElementDto {
    fn into_element(self) -> Result<Element, InputError> {
        let id: ElementId = parse_id("element id", &self.id)?;
        Ok(Element::with_id(id, self.name)?)
    }
}

impl From<&Element> for ElementDto {
    fn from(element: &Element) -> Self {
        Self {
            id: element.id.to_string(),
            name: element.name.clone(),
        }
    }
}

/// Full model of record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDocument {
    pub model_id: String,
    pub name: String,
    pub alternatives: Vec<ElementDto>,
    pub criteria: Vec<ElementDto>,
    #[serde(default)]
    pub expert_inputs: Vec<ExpertInputDocument>,
    /// Set to the import time when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl ModelDocument {
    /// Rebuilds and validates a domain model from an imported document.
    pub fn into_model(self) -> Result<DecisionModel, InputError> {
        let model_id: ModelId = parse_id("model_id", &self.model_id)?;
        let alternatives = self
            .alternatives
            .into_iter()
            .map(ElementDto::into_element)
            .collect::<Result<Vec<_>, _>>()?;
        let criteria = self
            .criteria
            .into_iter()
            .map(ElementDto::into_element)
            .collect::<Result<Vec<_>, _>>()?;
        let expert_inputs = self
            .expert_inputs
            .into_iter()
            .map(ExpertInputDocument::into_expert_input)
            .collect::<Result<Vec<_>, _>>()?;
        let created_at = match self.created_at {
            Some(at) => parse_timestamp("created_at", &at)?,
            None => Timestamp::now(),
        };

        Ok(DecisionModel::reconstitute(
            model_id,
            self.name,
            alternatives,
            criteria,
            expert_inputs,
            created_at,
        )?)
    }
}

impl From<&DecisionModel> for ModelDocument {
    fn from(model: &DecisionModel) -> Self {
        Self {
            model_id: model.id().to_string(),
            name: model.name().to_string(),
            alternatives: model.alternatives().iter().map(Into::into).collect(),
            criteria: model.criteria().iter().map(Into::into).collect(),
            expert_inputs: model.expert_inputs().iter().map(Into::into).collect(),
            created_at: Some(model.created_at().to_rfc3339()),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Results DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Failure attached to an element set's slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetFailureResponse {
    pub code: String,
    pub detail: String,
}

/// One ranked element, score in percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntryResponse {
    pub id: String,
    pub name: String,
    pub score: f64,
    pub place: usize,
}

impl From<&RankedEntry> for RankingEntryResponse {
    fn from(entry: &RankedEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.clone(),
            score: entry.score,
            place: entry.place,
        }
    }
}

fn ranking(entries: &[RankedEntry]) -> Vec<RankingEntryResponse> {
    entries.iter().map(Into::into).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankingsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<Vec<RankingEntryResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Vec<RankingEntryResponse>>,
    pub alternatives: BTreeMap<String, Vec<RankingEntryResponse>>,
}

/// Response for `GET /models/{id}/rankings`.
///
/// A set that could not be computed is absent from the weight maps and
/// listed under `failures` instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResultsResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria_weights: Option<BTreeMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria_consistency_ratio: Option<f64>,
    pub alternative_weights: BTreeMap<String, BTreeMap<String, f64>>,
    pub alternative_consistency_ratios: BTreeMap<String, f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_scores: Option<BTreeMap<String, f64>>,
    pub failures: BTreeMap<String, SetFailureResponse>,
    pub rankings: RankingsResponse,
}

fn keyed(weights: BTreeMap<ElementId, f64>) -> BTreeMap<String, f64> {
    weights
        .into_iter()
        .map(|(id, weight)| (id.to_string(), weight))
        .collect()
}

impl From<&ModelResults> for ModelResultsResponse {
    fn from(results: &ModelResults) -> Self {
        let criteria = results.criteria.priorities();

        let mut alternative_weights = BTreeMap::new();
        let mut alternative_consistency_ratios = BTreeMap::new();
        for (criterion, outcome) in &results.alternatives {
            if let SetOutcome::Computed(group) = outcome {
                alternative_weights.insert(criterion.to_string(), keyed(group.vector.to_map()));
                alternative_consistency_ratios
                    .insert(criterion.to_string(), group.consistency_ratio);
            }
        }

        let failures = results
            .failures()
            .into_iter()
            .map(|(slot, failure)| {
                (
                    slot,
                    SetFailureResponse {
                        code: failure.error.code().to_string(),
                        detail: failure.detail(),
                    },
                )
            })
            .collect();

        let rankings = RankingsResponse {
            overall: results.rankings.overall.as_deref().map(ranking),
            criteria: results.rankings.criteria.as_deref().map(ranking),
            alternatives: results
                .rankings
                .alternatives
                .iter()
                .map(|(id, entries)| (id.to_string(), ranking(entries)))
                .collect(),
        };

        Self {
            criteria_weights: criteria.map(|g| keyed(g.vector.to_map())),
            criteria_consistency_ratio: criteria.map(|g| g.consistency_ratio),
            alternative_weights,
            alternative_consistency_ratios,
            overall_scores: results.overall_scores.as_ref().map(|v| keyed(v.to_map())),
            failures,
            rankings,
        }
    }
}
