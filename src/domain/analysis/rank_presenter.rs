//! Rank Presenter - ordered, placed rankings for display.

use crate::domain::foundation::ElementId;
use crate::domain::model::DecisionModel;

use super::PriorityVector;

/// Default number of decimals kept on percentage scores.
pub const DEFAULT_SCORE_DECIMALS: u32 = 10;

/// Upper bound on decimals; beyond this rounding no longer changes an f64 percentage.
pub const MAX_SCORE_DECIMALS: u32 = 12;

/// An element with its score, before ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankEntry {
    pub id: ElementId,
    pub name: String,
    pub score: f64,
}

impl RankEntry {
    pub fn new(id: ElementId, name: impl Into<String>, score: f64) -> Self {
        Self {
            id,
            name: name.into(),
            score,
        }
    }
}

/// A ranked element. Tied scores share a place.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedEntry {
    pub id: ElementId,
    pub name: String,
    pub score: f64,
    pub place: usize,
}

pub struct RankPresenter;

impl RankPresenter {
    /// Orders entries by score and assigns places.
    ///
    /// # Algorithm
    /// Stable sort by score descending, so equal scores keep input order.
    /// The first entry gets place 1. Each later entry takes its
    /// predecessor's place when the scores are exactly equal and its own
    /// 1-based position otherwise: `[90, 90, 70]` gives `[1, 1, 3]`.
    pub fn rank(mut entries: Vec<RankEntry>) -> Vec<RankedEntry> {
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));

        let mut ranked: Vec<RankedEntry> = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            let place = match ranked.last() {
                Some(previous) if previous.score == entry.score => previous.place,
                _ => index + 1,
            };
            ranked.push(RankedEntry {
                id: entry.id,
                name: entry.name,
                score: entry.score,
                place,
            });
        }
        ranked
    }

    /// Ranks a priority vector as percentages rounded to `decimals`.
    ///
    /// Names come from the model; ids unknown to it keep an empty name.
    pub fn rank_vector(
        vector: &PriorityVector,
        model: &DecisionModel,
        decimals: u32,
    ) -> Vec<RankedEntry> {
        let entries = vector
            .iter()
            .map(|(id, weight)| {
                RankEntry::new(
                    *id,
                    model.element_name(id).unwrap_or_default(),
                    to_percent(weight, decimals),
                )
            })
            .collect();
        Self::rank(entries)
    }
}

/// `weight × 100`, rounded half away from zero to `decimals` places.
pub fn to_percent(weight: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.min(MAX_SCORE_DECIMALS) as i32);
    (weight * 100.0 * factor).round() / factor
}
