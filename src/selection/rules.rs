//! Built-in ranking rules.
//!
//! # Score Convention
//! All rules return lower scores for recipes that should be picked first.

use super::{RankScore, RankingRule, SelectionContext};
use crate::models::Recipe;

/// Highest rating first. A non-finite rating scores as 0.0.
#[derive(Debug, Clone, Copy)]
pub struct HighestRating;

impl RankingRule for HighestRating {
    fn name(&self) -> &'static str {
        "RATING"
    }

    fn evaluate(&self, recipe: &Recipe, _context: &SelectionContext) -> RankScore {
        let rating = f64::from(recipe.rating);
        if rating.is_finite() {
            0.0 - rating
        } else {
            0.0
        }
    }

    fn description(&self) -> &'static str {
        "Highest Rating"
    }
}

/// Shortest prep plus cooking time first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestTotalTime;

impl RankingRule for ShortestTotalTime {
    fn name(&self) -> &'static str {
        "STT"
    }

    fn evaluate(&self, recipe: &Recipe, _context: &SelectionContext) -> RankScore {
        recipe.total_minutes() as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Total Time"
    }
}

/// Hardest dish first (difficulty rank descending).
///
/// Breaks rating ties for occasions that call for an ambitious dish.
#[derive(Debug, Clone, Copy)]
pub struct HardestFirst;

impl RankingRule for HardestFirst {
    fn name(&self) -> &'static str {
        "HARD"
    }

    fn evaluate(&self, recipe: &Recipe, _context: &SelectionContext) -> RankScore {
        -f64::from(recipe.difficulty.rank())
    }

    fn description(&self) -> &'static str {
        "Hardest First"
    }
}

/// Least-used recipe first.
///
/// Context-aware: reads usage counts from [`SelectionContext::usage`], so
/// unused recipes always outrank reused ones.
#[derive(Debug, Clone, Copy)]
pub struct LeastUsed;

impl RankingRule for LeastUsed {
    fn name(&self) -> &'static str {
        "LU"
    }

    fn evaluate(&self, recipe: &Recipe, context: &SelectionContext) -> RankScore {
        context.usage_of(&recipe.id) as f64
    }

    fn description(&self) -> &'static str {
        "Least Used"
    }
}
