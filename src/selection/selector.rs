//! Event course selector.
//!
//! # Algorithm
//!
//! 1. Rank candidates by rating. Occasions that require a HARD dish break
//!    rating ties toward the harder dish; remaining ties keep catalog order.
//! 2. Drop repeated recipe ids, keeping the best-ranked occurrence.
//! 3. Take the first `slots` recipes; fewer if candidates run out.
//! 4. If the occasion requires a HARD dish, none was picked, and a HARD
//!    candidate remains, it replaces the lowest-ranked pick.
//! 5. Assign roles from the policy rotation in selection order.

use std::collections::HashSet;
use tracing::debug;

use super::{rules, RankingEngine, SelectionContext};
use crate::models::{Course, Difficulty, Occasion, Recipe};
use crate::policy::EnginePolicy;

/// Greedy course selector for a single event.
#[derive(Debug, Clone)]
pub struct CourseSelector {
    policy: EnginePolicy,
}

impl CourseSelector {
    /// Creates a rating-ordered selector.
    pub fn new(policy: EnginePolicy) -> Self {
        Self { policy }
    }

    /// Ranking used for `occasion`.
    fn engine_for(&self, occasion: Occasion) -> RankingEngine {
        let engine = RankingEngine::new().with_rule(rules::HighestRating);
        if self.policy.requires_hard(occasion) {
            engine.with_rule(rules::HardestFirst)
        } else {
            engine
        }
    }

    /// Picks up to `slots` courses from `candidates` for `occasion`.
    pub fn select(&self, candidates: &[&Recipe], occasion: Occasion, slots: usize) -> Vec<Course> {
        let ranked = self
            .engine_for(occasion)
            .rank(candidates, &SelectionContext::new());

        let (distinct, _) = ranked.into_iter().fold(
            (Vec::<&Recipe>::new(), HashSet::<&str>::new()),
            |(mut acc, mut seen), recipe| {
                if seen.insert(recipe.id.as_str()) {
                    acc.push(recipe);
                }
                (acc, seen)
            },
        );

        let mut picked: Vec<&Recipe> = distinct.iter().take(slots).copied().collect();

        if self.policy.requires_hard(occasion) && !picked.is_empty() && !has_hard(&picked) {
            if let Some(&hard) = distinct[picked.len()..]
                .iter()
                .find(|r| r.difficulty == Difficulty::Hard)
            {
                debug!(recipe = %hard.id, "swapping in a hard dish for the occasion");
                picked.pop();
                picked.push(hard);
            }
        }

        picked
            .into_iter()
            .enumerate()
            .map(|(i, recipe)| {
                let role = self.policy.role_at(i);
                debug!(recipe = %recipe.id, %role, rating = recipe.rating, "selected course");
                Course::new(recipe.clone(), role)
            })
            .collect()
    }
}

impl Default for CourseSelector {
    fn default() -> Self {
        Self::new(EnginePolicy::default())
    }
}

fn has_hard(recipes: &[&Recipe]) -> bool {
    recipes.iter().any(|r| r.difficulty == Difficulty::Hard)
}
