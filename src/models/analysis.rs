//! Menu analysis results.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::Difficulty;

/// A quality issue found in a menu.
///
/// Issues are advisory; they never block generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuIssue {
    /// The same principal ingredient appears in several courses.
    RepeatedIngredient { ingredient: String, count: usize },
    /// Too few distinct recipes relative to courses.
    LowVariety { distinct: usize, total: usize },
    /// Every course shares one difficulty above easy.
    UniformDifficulty { difficulty: Difficulty },
}

impl fmt::Display for MenuIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RepeatedIngredient { ingredient, count } => write!(
                f,
                "Ingredient repetition: '{ingredient}' is the main ingredient of {count} dishes; \
                 consider substituting one of them."
            ),
            Self::LowVariety { distinct, total } => write!(
                f,
                "Low variety: only {distinct} of {total} dishes are distinct; \
                 consider adding more different recipes."
            ),
            Self::UniformDifficulty { difficulty } => write!(
                f,
                "All dishes are {difficulty}; consider balancing the menu with a simpler dish."
            ),
        }
    }
}

/// Diversity, difficulty, and ingredient-overlap metrics for a course list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuAnalysis {
    /// Distinct principal ingredients (normalized).
    pub main_ingredients: BTreeSet<String>,
    /// Hardest difficulty among the courses (easy for an empty menu).
    pub difficulty_level: Difficulty,
    /// Human-readable suggestions, one per issue.
    pub suggestions: Vec<String>,
    /// Structured form of `suggestions`.
    pub issues: Vec<MenuIssue>,
    /// Number of courses analyzed.
    pub course_count: usize,
    /// Number of distinct recipe ids.
    pub distinct_recipes: usize,
    /// `distinct_recipes / course_count` (1.0 for an empty menu).
    pub diversity_ratio: f64,
    /// Courses per difficulty level.
    pub difficulty_counts: BTreeMap<Difficulty, usize>,
    /// Sum of prep plus cooking time (minutes).
    pub total_minutes: i64,
}

impl MenuAnalysis {
    /// Whether some principal ingredient is used more than once.
    pub fn has_ingredient_repetition(&self) -> bool {
        self.main_ingredients.len() < self.course_count
    }

    /// Whether the analysis raised no suggestions.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        let issue = MenuIssue::RepeatedIngredient {
            ingredient: "chicken".into(),
            count: 2,
        };
        let text = issue.to_string();
        assert!(text.contains("repetition"));
        assert!(text.contains("'chicken'"));

        let uniform = MenuIssue::UniformDifficulty {
            difficulty: Difficulty::Hard,
        };
        assert!(uniform.to_string().starts_with("All dishes are hard"));
    }

    #[test]
    fn test_issue_serializes_tagged() {
        let issue = MenuIssue::LowVariety {
            distinct: 3,
            total: 7,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert_eq!(json["kind"], "low_variety");
        assert_eq!(json["distinct"], 3);
    }
}
