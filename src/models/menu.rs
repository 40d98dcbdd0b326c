//! Generation outputs: event menus and weekly meal-plan options.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Course, EventConfig, MealType, MenuAnalysis, Strategy, TimePlan};

/// A composed event menu with its cooking timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMenu {
    /// The configuration the menu was generated for.
    pub config: EventConfig,
    /// Selected courses in selection order. May be empty.
    pub courses: Vec<Course>,
    /// Backward-scheduled cooking timeline.
    pub time_plan: TimePlan,
}

impl GeneratedMenu {
    /// Whether no dish could be selected.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Persistence entries for this menu, one per course.
    ///
    /// Servings equal the guest count.
    pub fn to_meal_plan_entries(&self, date: NaiveDate, meal_type: MealType) -> Vec<MealPlanEntry> {
        self.courses
            .iter()
            .map(|c| MealPlanEntry::new(date, meal_type, c.recipe_id(), self.config.guest_count))
            .collect()
    }
}

/// One planned meal, as handed to persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub recipe_id: String,
    pub servings: u32,
}

impl MealPlanEntry {
    /// Creates an entry.
    pub fn new(
        date: NaiveDate,
        meal_type: MealType,
        recipe_id: impl Into<String>,
        servings: u32,
    ) -> Self {
        Self {
            date,
            meal_type,
            recipe_id: recipe_id.into(),
            servings,
        }
    }
}

/// One strategy's weekly plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanOption {
    /// Short display name.
    pub name: String,
    /// One-line explanation of the strategy.
    pub description: String,
    /// Strategy that produced this option.
    pub strategy: Strategy,
    /// Planned meals, day-major. May be empty.
    pub meal_plans: Vec<MealPlanEntry>,
    /// Analysis of the planned dishes.
    pub analysis: MenuAnalysis,
}

impl MealPlanOption {
    /// Distinct recipes over planned meals (1.0 when nothing is planned).
    pub fn diversity_ratio(&self) -> f64 {
        if self.meal_plans.is_empty() {
            return 1.0;
        }
        let mut ids: Vec<&str> = self.meal_plans.iter().map(|m| m.recipe_id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len() as f64 / self.meal_plans.len() as f64
    }

    /// Entries planned for a given day.
    pub fn meals_on(&self, date: NaiveDate) -> Vec<&MealPlanEntry> {
        self.meal_plans.iter().filter(|m| m.date == date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseRole, Difficulty, Occasion, Recipe};
    use std::collections::{BTreeMap, BTreeSet};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn empty_analysis() -> MenuAnalysis {
        MenuAnalysis {
            main_ingredients: BTreeSet::new(),
            difficulty_level: Difficulty::Easy,
            suggestions: Vec::new(),
            issues: Vec::new(),
            course_count: 0,
            distinct_recipes: 0,
            diversity_ratio: 1.0,
            difficulty_counts: BTreeMap::new(),
            total_minutes: 0,
        }
    }

    #[test]
    fn test_menu_to_entries() {
        let config = EventConfig::new(Occasion::FamilyDinner, 5, 1080);
        let menu = GeneratedMenu {
            courses: vec![
                Course::new(Recipe::new("R1", "Stew"), CourseRole::Main),
                Course::new(Recipe::new("R2", "Rice"), CourseRole::Staple),
            ],
            time_plan: TimePlan::empty(config.start_time),
            config,
        };
        let entries = menu.to_meal_plan_entries(day(24), MealType::Dinner);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].recipe_id, "R2");
        assert!(entries.iter().all(|e| e.servings == 5));
    }

    #[test]
    fn test_option_diversity_ratio() {
        let option = MealPlanOption {
            name: "Balanced".into(),
            description: String::new(),
            strategy: Strategy::Balanced,
            meal_plans: vec![
                MealPlanEntry::new(day(19), MealType::Dinner, "A", 2),
                MealPlanEntry::new(day(20), MealType::Dinner, "B", 2),
                MealPlanEntry::new(day(21), MealType::Dinner, "A", 2),
                MealPlanEntry::new(day(22), MealType::Dinner, "C", 2),
            ],
            analysis: empty_analysis(),
        };
        assert!((option.diversity_ratio() - 0.75).abs() < 1e-10);
        assert_eq!(option.meals_on(day(20)).len(), 1);
    }

    #[test]
    fn test_empty_option_ratio() {
        let option = MealPlanOption {
            name: "Quick".into(),
            description: String::new(),
            strategy: Strategy::Quick,
            meal_plans: Vec::new(),
            analysis: empty_analysis(),
        };
        assert!((option.diversity_ratio() - 1.0).abs() < 1e-10);
    }
}
