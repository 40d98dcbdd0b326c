//! Constraint filter.
//!
//! Narrows a catalog to the candidate pool for one generation: per-dish
//! cooking-time limit, difficulty bounds, minimum servings, meal type, and
//! an optional required ingredient. The same criteria double as the query
//! passed to a [`crate::ports::RecipeCatalog`].
//!
//! An empty pool is a valid result; callers turn it into an empty menu.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Difficulty, EventConfig, MealType, Recipe};

/// Recipe selection criteria. Unset fields accept everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeFilter {
    /// Reject recipes whose cooking time exceeds this (minutes).
    pub max_cooking_time: Option<u32>,
    /// Reject recipes easier than this.
    pub min_difficulty: Option<Difficulty>,
    /// Reject recipes harder than this.
    pub max_difficulty: Option<Difficulty>,
    /// Reject recipes yielding fewer portions.
    pub min_servings: Option<u32>,
    /// Reject recipes unsuitable for this meal.
    pub meal_type: Option<MealType>,
    /// Require this ingredient (case-insensitive) in the recipe.
    pub ingredient: Option<String>,
}

impl RecipeFilter {
    /// Accepts every recipe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria implied by an event configuration.
    pub fn from_event(config: &EventConfig) -> Self {
        Self {
            max_cooking_time: config.max_time_per_dish,
            min_difficulty: config.min_difficulty,
            max_difficulty: config.max_difficulty,
            min_servings: config.min_servings,
            meal_type: None,
            ingredient: None,
        }
    }

    /// Sets the cooking-time limit.
    pub fn with_max_cooking_time(mut self, minutes: u32) -> Self {
        self.max_cooking_time = Some(minutes);
        self
    }

    /// Sets the difficulty range (inclusive).
    pub fn with_difficulty_range(mut self, min: Difficulty, max: Difficulty) -> Self {
        self.min_difficulty = Some(min);
        self.max_difficulty = Some(max);
        self
    }

    /// Sets the minimum yield.
    pub fn with_min_servings(mut self, servings: u32) -> Self {
        self.min_servings = Some(servings);
        self
    }

    /// Restricts to recipes suitable for a meal.
    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_type = Some(meal_type);
        self
    }

    /// Requires an ingredient.
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient = Some(ingredient.into());
        self
    }

    /// Whether a recipe passes every set criterion.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if self
            .max_cooking_time
            .is_some_and(|limit| recipe.cooking_time > limit)
        {
            return false;
        }
        if self.min_difficulty.is_some_and(|min| recipe.difficulty < min) {
            return false;
        }
        if self.max_difficulty.is_some_and(|max| recipe.difficulty > max) {
            return false;
        }
        if self.min_servings.is_some_and(|min| recipe.servings < min) {
            return false;
        }
        if self.meal_type.is_some_and(|m| !recipe.suits(m)) {
            return false;
        }
        if let Some(ref wanted) = self.ingredient {
            let wanted = wanted.trim().to_lowercase();
            let has = recipe.principal_ingredient() == wanted
                || recipe
                    .ingredients
                    .iter()
                    .any(|i| i.trim().to_lowercase() == wanted);
            if !has {
                return false;
            }
        }
        true
    }

    /// Candidate pool, preserving catalog order.
    pub fn apply<'a>(&self, catalog: &'a [Recipe]) -> Vec<&'a Recipe> {
        let pool: Vec<&Recipe> = catalog.iter().filter(|r| self.matches(r)).collect();
        debug!(
            catalog = catalog.len(),
            candidates = pool.len(),
            "filtered recipe catalog"
        );
        pool
    }
}
