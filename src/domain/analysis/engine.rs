//! Ranking Engine - runs the full AHP pipeline over a decision model.

use std::collections::BTreeMap;

use crate::domain::foundation::{ElementId, ExpertId};
use crate::domain::model::{DecisionModel, ElementSet, Judgment};

use super::{
    AnalysisError, ComparisonMatrix, ConsistencyEvaluator, ExpertAggregator, ExpertPriorities,
    GroupPriorities, ModelResults, PrioritySolver, PriorityVector, RankPresenter, Rankings,
    ScoreCombiner, SetFailure, SetOutcome, DEFAULT_CONSISTENCY_THRESHOLD, DEFAULT_SCORE_DECIMALS,
};

/// Stateless pipeline from raw judgments to ranked results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingEngine {
    solver: PrioritySolver,
    consistency_threshold: f64,
    score_decimals: u32,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self {
            solver: PrioritySolver::default(),
            consistency_threshold: DEFAULT_CONSISTENCY_THRESHOLD,
            score_decimals: DEFAULT_SCORE_DECIMALS,
        }
    }
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_solver(mut self, solver: PrioritySolver) -> Self {
        self.solver = solver;
        self
    }

    pub fn with_consistency_threshold(mut self, threshold: f64) -> Self {
        self.consistency_threshold = threshold;
        self
    }

    pub fn with_score_decimals(mut self, decimals: u32) -> Self {
        self.score_decimals = decimals;
        self
    }

    pub fn consistency_threshold(&self) -> f64 {
        self.consistency_threshold
    }

    /// Computes weights, consistency ratios, overall scores and rankings.
    ///
    /// Each element set is evaluated independently. A set that cannot be
    /// computed records its failure in its slot and the rest still run;
    /// overall scores need every set.
    ///
    /// # Errors
    ///
    /// `ModelInconsistency` when the stored model contradicts itself. No
    /// partial results are returned in that case.
    pub fn calculate(&self, model: &DecisionModel) -> Result<ModelResults, AnalysisError> {
        let criterion_ids = model.criterion_ids();
        let alternative_ids = model.alternative_ids();

        let criteria = if let [only] = criterion_ids.as_slice() {
            SetOutcome::Computed(GroupPriorities::trivial(PriorityVector::single(*only)))
        } else {
            let contributions = model
                .expert_inputs()
                .iter()
                .map(|input| (input.expert_id, input.criteria_comparisons.as_slice()));
            self.evaluate_set(&ElementSet::Criteria, &criterion_ids, contributions)?
        };

        let mut alternatives = Vec::with_capacity(criterion_ids.len());
        for criterion in &criterion_ids {
            let contributions = model
                .expert_inputs()
                .iter()
                .map(|input| (input.expert_id, input.alternatives_for(criterion)));
            let set = ElementSet::Alternatives {
                criterion: *criterion,
            };
            let outcome = self.evaluate_set(&set, &alternative_ids, contributions)?;
            alternatives.push((*criterion, outcome));
        }

        let overall_scores = match criteria.priorities() {
            Some(criteria_group) => {
                let local: Option<BTreeMap<ElementId, PriorityVector>> = alternatives
                    .iter()
                    .map(|(id, outcome)| outcome.priorities().map(|g| (*id, g.vector.clone())))
                    .collect();
                match local {
                    Some(local) => Some(ScoreCombiner::combine(&criteria_group.vector, &local)?),
                    None => None,
                }
            }
            None => None,
        };

        let rankings = self.rankings(model, &criteria, &alternatives, overall_scores.as_ref());

        tracing::debug!(
            model_id = %model.id(),
            experts = model.expert_inputs().len(),
            complete = overall_scores.is_some(),
            "Rankings calculated"
        );

        Ok(ModelResults {
            criteria,
            alternatives,
            overall_scores,
            rankings,
        })
    }

    /// Builds one matrix per contributing expert, solves, and aggregates.
    fn evaluate_set<'a>(
        &self,
        set: &ElementSet,
        element_ids: &[ElementId],
        contributions: impl Iterator<Item = (ExpertId, &'a [Judgment])>,
    ) -> Result<SetOutcome, AnalysisError> {
        let mut experts = Vec::new();

        for (expert_id, judgments) in contributions {
            if judgments.is_empty() {
                continue;
            }

            let matrix = match ComparisonMatrix::builder()
                .elements(element_ids)
                .judgments(judgments)
                .build()
            {
                Ok(matrix) => matrix,
                Err(error) if error.is_fatal() => return Err(error),
                Err(error) => {
                    tracing::debug!(set = %set, expert_id = %expert_id, error = %error, "Element set incomplete");
                    return Ok(SetOutcome::Failed(SetFailure::for_expert(error, expert_id)));
                }
            };

            let solution = self.solver.solve(&matrix)?;
            if !solution.converged {
                tracing::warn!(
                    set = %set,
                    expert_id = %expert_id,
                    iterations = solution.iterations,
                    "Power iteration did not converge"
                );
            }
            let consistency_ratio =
                ConsistencyEvaluator::consistency_ratio(solution.lambda_max, matrix.size());

            experts.push(ExpertPriorities {
                expert_id,
                vector: solution.vector,
                consistency_ratio,
            });
        }

        match ExpertAggregator::aggregate(&experts) {
            Ok(group) => {
                if !ConsistencyEvaluator::is_acceptable(
                    group.consistency_ratio,
                    self.consistency_threshold,
                ) {
                    tracing::warn!(
                        set = %set,
                        consistency_ratio = group.consistency_ratio,
                        threshold = self.consistency_threshold,
                        "Judgments are inconsistent"
                    );
                }
                Ok(SetOutcome::Computed(group))
            }
            Err(error) if error.is_fatal() => Err(error),
            Err(error) => Ok(SetOutcome::Failed(SetFailure::new(error))),
        }
    }

    fn rankings(
        &self,
        model: &DecisionModel,
        criteria: &SetOutcome,
        alternatives: &[(ElementId, SetOutcome)],
        overall_scores: Option<&PriorityVector>,
    ) -> Rankings {
        let decimals = self.score_decimals;
        Rankings {
            overall: overall_scores.map(|v| RankPresenter::rank_vector(v, model, decimals)),
            criteria: criteria
                .priorities()
                .map(|g| RankPresenter::rank_vector(&g.vector, model, decimals)),
            alternatives: alternatives
                .iter()
                .filter_map(|(id, outcome)| {
                    outcome
                        .priorities()
                        .map(|g| (*id, RankPresenter::rank_vector(&g.vector, model, decimals)))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SaatyValue;
    use crate::domain::model::ExpertInput;

    fn names(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn judgment(a: ElementId, b: ElementId, value: SaatyValue) -> Judgment {
        Judgment::new(a, b, value).unwrap()
    }

    fn laptop_model() -> DecisionModel {
        DecisionModel::new(
            "Laptop",
            &names(&["Alpha", "Beta"]),
            &names(&["Price", "Weight"]),
        )
        .unwrap()
    }

    #[test]
    fn opposite_experts_balance_out() {
        let mut model = laptop_model();
        let c = model.criterion_ids();
        let a = model.alternative_ids();

        let first = ExpertInput::new(ExpertId::new())
            .with_criteria(vec![judgment(c[0], c[1], SaatyValue::Four)])
            .with_alternatives(c[0], vec![judgment(a[0], a[1], SaatyValue::Three)])
            .with_alternatives(c[1], vec![judgment(a[0], a[1], SaatyValue::Two)]);
        let second = ExpertInput::new(ExpertId::new())
            .with_criteria(vec![judgment(c[1], c[0], SaatyValue::Four)])
            .with_alternatives(c[0], vec![judgment(a[0], a[1], SaatyValue::Three)])
            .with_alternatives(c[1], vec![judgment(a[0], a[1], SaatyValue::Two)]);
        model.submit_expert_input(first).unwrap();
        model.submit_expert_input(second).unwrap();

        let results = RankingEngine::default().calculate(&model).unwrap();
        let criteria = results.criteria.priorities().unwrap();

        assert!((criteria.vector.get(&c[0]).unwrap() - 0.5).abs() < 1e-9);
        assert!((criteria.vector.get(&c[1]).unwrap() - 0.5).abs() < 1e-9);
        assert_eq!(criteria.consistency_ratio, 0.0);
        assert_eq!(criteria.expert_count, 2);

        let overall = results.overall_scores.unwrap();
        assert!(overall.get(&a[0]).unwrap() > overall.get(&a[1]).unwrap());
        assert!((overall.sum() - 1.0).abs() < 1e-9);
        assert_eq!(results.rankings.overall.unwrap()[0].name, "Alpha");
    }

    #[test]
    fn model_without_judgments_reports_no_data() {
        let model = laptop_model();
        let results = RankingEngine::default().calculate(&model).unwrap();

        assert_eq!(
            results.criteria.failure().map(|f| &f.error),
            Some(&AnalysisError::NoData)
        );
        assert!(results.alternatives.iter().all(|(_, o)| !o.is_computed()));
        assert!(results.overall_scores.is_none());
        assert!(results.rankings.overall.is_none());
        assert!(results.rankings.criteria.is_none());
    }

    #[test]
    fn single_criterion_needs_no_criteria_judgments() {
        let mut model =
            DecisionModel::new("Pick", &names(&["A", "B"]), &names(&["Only"])).unwrap();
        let c = model.criterion_ids()[0];
        let a = model.alternative_ids();
        model
            .submit_expert_input(
                ExpertInput::new(ExpertId::new())
                    .with_alternatives(c, vec![judgment(a[0], a[1], SaatyValue::Four)]),
            )
            .unwrap();

        let results = RankingEngine::default().calculate(&model).unwrap();

        let criteria = results.criteria.priorities().unwrap();
        assert_eq!(criteria.vector.get(&c), Some(1.0));
        assert_eq!(criteria.consistency_ratio, 0.0);

        let overall = results.overall_scores.unwrap();
        assert!((overall.get(&a[0]).unwrap() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn disconnected_expert_fails_only_that_set() {
        let mut model = DecisionModel::new(
            "Trip",
            &names(&["Rome", "Oslo", "Lima"]),
            &names(&["Cost", "Fun"]),
        )
        .unwrap();
        let c = model.criterion_ids();
        let a = model.alternative_ids();
        let expert = ExpertId::new();
        model
            .submit_expert_input(
                ExpertInput::new(expert)
                    .with_criteria(vec![judgment(c[0], c[1], SaatyValue::Two)])
                    .with_alternatives(c[0], vec![judgment(a[0], a[1], SaatyValue::Three)])
                    .with_alternatives(
                        c[1],
                        vec![
                            judgment(a[0], a[1], SaatyValue::Two),
                            judgment(a[1], a[2], SaatyValue::Three),
                        ],
                    ),
            )
            .unwrap();

        let results = RankingEngine::default().calculate(&model).unwrap();

        assert!(results.criteria.is_computed());
        let failed = results.alternatives_for(&c[0]).unwrap().failure().unwrap();
        assert!(matches!(failed.error, AnalysisError::InsufficientData { .. }));
        assert_eq!(failed.expert_id, Some(expert));
        assert!(results.alternatives_for(&c[1]).unwrap().is_computed());
        assert!(results.overall_scores.is_none());
        assert!(results.rankings.alternatives.contains_key(&c[1]));
        assert!(!results.rankings.alternatives.contains_key(&c[0]));
    }

    #[test]
    fn inferred_judgments_complete_the_matrix() {
        let mut model = DecisionModel::new(
            "Chain",
            &names(&["A", "B", "C"]),
            &names(&["Only"]),
        )
        .unwrap();
        let c = model.criterion_ids()[0];
        let a = model.alternative_ids();
        model
            .submit_expert_input(ExpertInput::new(ExpertId::new()).with_alternatives(
                c,
                vec![
                    judgment(a[0], a[1], SaatyValue::Two),
                    judgment(a[1], a[2], SaatyValue::Three),
                ],
            ))
            .unwrap();

        let results = RankingEngine::default().calculate(&model).unwrap();
        let group = results.alternatives_for(&c).unwrap().priorities().unwrap();

        // Weights 6:3:1 are fully consistent.
        assert!((group.vector.get(&a[0]).unwrap() - 0.6).abs() < 1e-9);
        assert!((group.vector.get(&a[1]).unwrap() - 0.3).abs() < 1e-9);
        assert!(group.consistency_ratio < 1e-9);
    }

    #[test]
    fn calculation_is_idempotent() {
        let mut model = laptop_model();
        let c = model.criterion_ids();
        let a = model.alternative_ids();
        model
            .submit_expert_input(
                ExpertInput::new(ExpertId::new())
                    .with_criteria(vec![judgment(c[0], c[1], SaatyValue::OneThird)])
                    .with_alternatives(c[0], vec![judgment(a[0], a[1], SaatyValue::Five)])
                    .with_alternatives(c[1], vec![judgment(a[1], a[0], SaatyValue::Seven)]),
            )
            .unwrap();

        let engine = RankingEngine::default();
        assert_eq!(
            engine.calculate(&model).unwrap(),
            engine.calculate(&model).unwrap()
        );
    }

    #[test]
    fn tied_alternatives_share_first_place() {
        let mut model = laptop_model();
        let c = model.criterion_ids();
        let a = model.alternative_ids();
        model
            .submit_expert_input(
                ExpertInput::new(ExpertId::new())
                    .with_criteria(vec![judgment(c[0], c[1], SaatyValue::Equal)])
                    .with_alternatives(c[0], vec![judgment(a[0], a[1], SaatyValue::Three)])
                    .with_alternatives(c[1], vec![judgment(a[1], a[0], SaatyValue::Three)]),
            )
            .unwrap();

        let results = RankingEngine::default().calculate(&model).unwrap();
        let overall = results.rankings.overall.unwrap();

        assert_eq!(overall[0].score, 50.0);
        assert_eq!(overall[0].place, 1);
        assert_eq!(overall[1].place, 1);
    }
}
