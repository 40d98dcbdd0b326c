//! Weekly slot selector.
//!
//! Fills `(date, meal)` slots one at a time. The ranking engine leads with
//! [`rules::LeastUsed`], so a recipe is only reused once every eligible
//! recipe has been placed; among equally used recipes the strategy rules
//! (rating, time) decide, and remaining ties keep catalog order.
//!
//! Slots whose meal type no candidate suits stay unfilled.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{rules, RankingEngine, SelectionContext};
use crate::models::{MealType, Recipe};

/// A recipe placed in a weekly slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAssignment {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub recipe: Recipe,
}

/// Result of filling a week's slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklySelection {
    /// Filled slots, day-major.
    pub assignments: Vec<WeeklyAssignment>,
    /// Slots no candidate could fill.
    pub unfilled: usize,
}

impl WeeklySelection {
    /// Distinct recipes over filled slots (1.0 when nothing was filled).
    pub fn diversity_ratio(&self) -> f64 {
        if self.assignments.is_empty() {
            return 1.0;
        }
        self.distinct_recipes() as f64 / self.assignments.len() as f64
    }

    /// Number of distinct recipes placed.
    pub fn distinct_recipes(&self) -> usize {
        let mut ids: Vec<&str> = self
            .assignments
            .iter()
            .map(|a| a.recipe.id.as_str())
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }
}

/// Greedy, usage-aware slot selector.
#[derive(Debug, Clone)]
pub struct WeeklySelector {
    engine: RankingEngine,
}

impl WeeklySelector {
    /// Creates a selector from a ranking engine.
    ///
    /// The engine should lead with [`rules::LeastUsed`] for the diversity
    /// guarantee to hold.
    pub fn new(engine: RankingEngine) -> Self {
        Self { engine }
    }

    /// Fills `slots` from `pool`.
    pub fn select(&self, pool: &[&Recipe], slots: &[(NaiveDate, MealType)]) -> WeeklySelection {
        let (selection, context) = slots.iter().fold(
            (WeeklySelection::default(), SelectionContext::new()),
            |(mut selection, context), &(date, meal_type)| {
                let eligible: Vec<&Recipe> =
                    pool.iter().copied().filter(|r| r.suits(meal_type)).collect();

                match self.engine.select_best(&eligible, &context) {
                    Some(idx) => {
                        let recipe = eligible[idx];
                        debug!(
                            %date,
                            meal = %meal_type,
                            recipe = %recipe.id,
                            previous_uses = context.usage_of(&recipe.id),
                            "filled weekly slot"
                        );
                        let context = context.record(&recipe.id);
                        selection.assignments.push(WeeklyAssignment {
                            date,
                            meal_type,
                            recipe: recipe.clone(),
                        });
                        (selection, context)
                    }
                    None => {
                        selection.unfilled += 1;
                        (selection, context)
                    }
                }
            },
        );

        debug!(
            filled = selection.assignments.len(),
            distinct = context.distinct_used(),
            unfilled = selection.unfilled,
            "weekly selection done"
        );
        selection
    }
}

impl Default for WeeklySelector {
    fn default() -> Self {
        Self::new(
            RankingEngine::new()
                .with_rule(rules::LeastUsed)
                .with_rule(rules::HighestRating),
        )
    }
}
