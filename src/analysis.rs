//! Menu analyzer.
//!
//! Computes diversity, difficulty, and ingredient-overlap metrics for any
//! course list and turns detected issues into advisory suggestions. It is
//! independent of generation and can analyze hand-edited menus.
//!
//! # Checks
//!
//! | Issue | Raised when |
//! |-------|-------------|
//! | Repeated ingredient | A principal ingredient backs 2+ courses |
//! | Low variety | distinct recipes / courses < `low_variety_ratio` |
//! | Uniform difficulty | 2+ courses, all one difficulty above easy |

use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

use crate::models::{Course, Difficulty, MenuAnalysis, MenuIssue};
use crate::policy::EnginePolicy;

/// Pure menu analyzer.
#[derive(Debug, Clone)]
pub struct MenuAnalyzer {
    low_variety_ratio: f64,
}

impl MenuAnalyzer {
    /// Creates an analyzer with the default variety threshold.
    pub fn new() -> Self {
        Self::from_policy(&EnginePolicy::default())
    }

    /// Creates an analyzer using a policy's variety threshold.
    pub fn from_policy(policy: &EnginePolicy) -> Self {
        Self {
            low_variety_ratio: policy.low_variety_ratio,
        }
    }

    /// Analyzes a course list.
    pub fn analyze(&self, courses: &[Course]) -> MenuAnalysis {
        let ingredient_counts: BTreeMap<String, usize> =
            courses.iter().fold(BTreeMap::new(), |mut counts, c| {
                *counts.entry(c.recipe.principal_ingredient()).or_insert(0) += 1;
                counts
            });

        let difficulty_counts: BTreeMap<Difficulty, usize> =
            courses.iter().fold(BTreeMap::new(), |mut counts, c| {
                *counts.entry(c.recipe.difficulty).or_insert(0) += 1;
                counts
            });

        let distinct_recipes = courses
            .iter()
            .map(Course::recipe_id)
            .collect::<HashSet<_>>()
            .len();

        let course_count = courses.len();
        let diversity_ratio = if course_count == 0 {
            1.0
        } else {
            distinct_recipes as f64 / course_count as f64
        };

        let difficulty_level = courses
            .iter()
            .map(|c| c.recipe.difficulty)
            .max()
            .unwrap_or(Difficulty::Easy);

        let mut issues: Vec<MenuIssue> = ingredient_counts
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(ingredient, &count)| MenuIssue::RepeatedIngredient {
                ingredient: ingredient.clone(),
                count,
            })
            .collect();

        if course_count > 0 && diversity_ratio < self.low_variety_ratio {
            issues.push(MenuIssue::LowVariety {
                distinct: distinct_recipes,
                total: course_count,
            });
        }

        if course_count >= 2 && difficulty_counts.len() == 1 && difficulty_level != Difficulty::Easy
        {
            issues.push(MenuIssue::UniformDifficulty {
                difficulty: difficulty_level,
            });
        }

        let suggestions: Vec<String> = issues.iter().map(ToString::to_string).collect();

        debug!(
            courses = course_count,
            distinct_recipes,
            difficulty = %difficulty_level,
            issues = issues.len(),
            "analyzed menu"
        );

        MenuAnalysis {
            main_ingredients: ingredient_counts.into_keys().collect::<BTreeSet<_>>(),
            difficulty_level,
            suggestions,
            issues,
            course_count,
            distinct_recipes,
            diversity_ratio,
            difficulty_counts,
            total_minutes: courses.iter().map(Course::duration).sum(),
        }
    }
}

impl Default for MenuAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyzes a course list with default policy.
pub fn analyze_menu(courses: &[Course]) -> MenuAnalysis {
    MenuAnalyzer::new().analyze(courses)
}
