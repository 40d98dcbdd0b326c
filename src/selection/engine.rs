//! Rule engine for multi-criteria candidate ranking.
//!
//! Rules are applied in sequence: a later rule is consulted only when every
//! earlier rule scores two candidates the same. Scores are compared with
//! [`f64::total_cmp`], so a rule returning NaN still yields a total order.
//! Sorting is stable, so candidates that tie on every rule keep their
//! catalog order.

use std::cmp::Ordering;
use std::sync::Arc;

use super::{RankingRule, SelectionContext};
use crate::models::Recipe;

/// A composable ranking engine.
#[derive(Clone, Default)]
pub struct RankingEngine {
    rules: Vec<Arc<dyn RankingRule>>,
}

impl RankingEngine {
    /// Creates an empty engine (ranks in catalog order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Earlier rules take precedence.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Ranks candidates (most preferred first).
    ///
    /// Returns indices into `candidates`.
    pub fn sort_indices(&self, candidates: &[&Recipe], context: &SelectionContext) -> Vec<usize> {
        let scores: Vec<Vec<f64>> = candidates
            .iter()
            .map(|r| {
                self.rules
                    .iter()
                    .map(|rule| rule.evaluate(r, context))
                    .collect()
            })
            .collect();

        let mut indices: Vec<usize> = (0..candidates.len()).collect();
        indices.sort_by(|&a, &b| compare_scores(&scores[a], &scores[b]));
        indices
    }

    /// Candidates in ranked order.
    pub fn rank<'a>(&self, candidates: &[&'a Recipe], context: &SelectionContext) -> Vec<&'a Recipe> {
        self.sort_indices(candidates, context)
            .into_iter()
            .map(|i| candidates[i])
            .collect()
    }

    /// Index of the most preferred candidate.
    pub fn select_best(&self, candidates: &[&Recipe], context: &SelectionContext) -> Option<usize> {
        self.sort_indices(candidates, context).first().copied()
    }
}

/// Lexicographic comparison of per-rule scores.
fn compare_scores(a: &[f64], b: &[f64]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.total_cmp(y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}
