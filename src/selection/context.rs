//! Selection state passed to ranking rules.

use std::collections::HashMap;

/// Per-call selection state.
///
/// Holds how often each recipe has been used so far in the plan being
/// built. Created fresh for every generation call.
#[derive(Debug, Clone, Default)]
pub struct SelectionContext {
    /// Times each recipe has been placed (recipe_id → count).
    pub usage: HashMap<String, usize>,
}

impl SelectionContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the usage count for a recipe.
    pub fn with_usage(mut self, recipe_id: impl Into<String>, count: usize) -> Self {
        self.usage.insert(recipe_id.into(), count);
        self
    }

    /// Times a recipe has been used.
    pub fn usage_of(&self, recipe_id: &str) -> usize {
        self.usage.get(recipe_id).copied().unwrap_or(0)
    }

    /// Context with one more use of `recipe_id`.
    pub fn record(mut self, recipe_id: &str) -> Self {
        *self.usage.entry(recipe_id.to_string()).or_insert(0) += 1;
        self
    }

    /// Number of distinct recipes used.
    pub fn distinct_used(&self) -> usize {
        self.usage.values().filter(|&&c| c > 0).count()
    }
}
