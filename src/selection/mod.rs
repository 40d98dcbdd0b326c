//! Ranking rules and course selection.
//!
//! Candidates are ranked by a composable [`RankingEngine`] of
//! [`RankingRule`]s, then picked greedily:
//!
//! - [`CourseSelector`] fills an event's course slots (no repeated recipe,
//!   occasion difficulty policy, shorter menu when candidates run out).
//! - [`WeeklySelector`] fills `(day, meal)` slots, preferring recipes not yet
//!   used and falling back to the least-used ones only when the pool is
//!   smaller than the slot count.
//!
//! # Usage
//!
//! ```
//! use u_menu::selection::{RankingEngine, SelectionContext, rules};
//! use u_menu::models::Recipe;
//!
//! let a = Recipe::new("a", "Stew").with_rating(3.0);
//! let b = Recipe::new("b", "Curry").with_rating(4.5);
//! let pool = vec![&a, &b];
//!
//! let engine = RankingEngine::new()
//!     .with_rule(rules::HighestRating)
//!     .with_rule(rules::ShortestTotalTime);
//! let order = engine.sort_indices(&pool, &SelectionContext::new());
//! assert_eq!(pool[order[0]].id, "b");
//! ```

mod context;
mod engine;
pub mod rules;
mod selector;
mod weekly;

pub use context::SelectionContext;
pub use engine::RankingEngine;
pub use selector::CourseSelector;
pub use weekly::{WeeklyAssignment, WeeklySelection, WeeklySelector};

use crate::models::Recipe;
use std::fmt::Debug;

/// Score returned by a ranking rule.
///
/// Lower scores = picked first.
pub type RankScore = f64;

/// A rule that scores a candidate recipe.
///
/// # Score Convention
/// **Lower score = higher preference.** Rules return smaller values for
/// recipes that should be picked first.
pub trait RankingRule: Send + Sync + Debug {
    /// Rule name (e.g., "RATING").
    fn name(&self) -> &'static str;

    /// Scores a recipe in the current selection context.
    fn evaluate(&self, recipe: &Recipe, context: &SelectionContext) -> RankScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
