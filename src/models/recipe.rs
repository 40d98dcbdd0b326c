//! Recipe model.
//!
//! A recipe is a catalog entry: an immutable snapshot of one dish with its
//! timing, difficulty, servings, principal ingredient, and rating. The engine
//! reads recipes but never mutates them.
//!
//! # Time Representation
//! All durations are whole minutes.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::MealType;
use crate::error::ConfigError;

/// Cooking difficulty.
///
/// Ordering goes through [`Difficulty::rank`], not declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Simple techniques, little supervision.
    Easy,
    /// Some technique required.
    Medium,
    /// Ambitious dish (roasts, laminated dough, multi-stage sauces).
    Hard,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Explicit rank table: EASY=1, MEDIUM=2, HARD=3.
    #[inline]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    /// Lower-case name used in config files and suggestions.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl PartialOrd for Difficulty {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Difficulty {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ConfigError::UnknownDifficulty(s.to_string())),
        }
    }
}

/// A catalog recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Active cooking time (minutes).
    pub cooking_time: u32,
    /// Preparation lead time before cooking (minutes), e.g. marinating.
    #[serde(default)]
    pub prep_time: u32,
    /// Portions the recipe yields.
    pub servings: u32,
    /// Difficulty level.
    pub difficulty: Difficulty,
    /// Principal ingredient. `None` = derive from `ingredients`.
    #[serde(default)]
    pub main_ingredient: Option<String>,
    /// Ingredient set, most important first.
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Average user rating (0.0..=5.0).
    #[serde(default)]
    pub rating: f32,
    /// Meals this recipe suits. Empty = any meal.
    #[serde(default)]
    pub meal_types: Vec<MealType>,
}

impl Recipe {
    /// Creates a recipe with zero times, one serving, easy difficulty.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cooking_time: 0,
            prep_time: 0,
            servings: 1,
            difficulty: Difficulty::Easy,
            main_ingredient: None,
            ingredients: Vec::new(),
            rating: 0.0,
            meal_types: Vec::new(),
        }
    }

    /// Sets the cooking time (minutes).
    pub fn with_cooking_time(mut self, minutes: u32) -> Self {
        self.cooking_time = minutes;
        self
    }

    /// Sets the prep time (minutes).
    pub fn with_prep_time(mut self, minutes: u32) -> Self {
        self.prep_time = minutes;
        self
    }

    /// Sets the servings.
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets the principal ingredient.
    pub fn with_main_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.main_ingredient = Some(ingredient.into());
        self
    }

    /// Adds an ingredient.
    pub fn with_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredients.push(ingredient.into());
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = rating;
        self
    }

    /// Restricts the recipe to a meal type (may be called repeatedly).
    pub fn with_meal_type(mut self, meal_type: MealType) -> Self {
        self.meal_types.push(meal_type);
        self
    }

    /// Prep plus cooking time (minutes). Widened so it cannot overflow.
    #[inline]
    pub fn total_minutes(&self) -> i64 {
        i64::from(self.prep_time) + i64::from(self.cooking_time)
    }

    /// Normalized principal ingredient.
    ///
    /// Falls back to the first listed ingredient, then to the recipe name,
    /// so every recipe contributes exactly one key.
    pub fn principal_ingredient(&self) -> String {
        self.main_ingredient
            .as_deref()
            .or_else(|| self.ingredients.first().map(String::as_str))
            .unwrap_or(&self.name)
            .trim()
            .to_lowercase()
    }

    /// Whether the recipe may be served at the given meal.
    pub fn suits(&self, meal_type: MealType) -> bool {
        self.meal_types.is_empty() || self.meal_types.contains(&meal_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_builder() {
        let r = Recipe::new("R1", "Braised Short Ribs")
            .with_cooking_time(180)
            .with_prep_time(30)
            .with_servings(6)
            .with_difficulty(Difficulty::Hard)
            .with_main_ingredient("Beef")
            .with_ingredient("carrot")
            .with_rating(4.5)
            .with_meal_type(MealType::Dinner);

        assert_eq!(r.id, "R1");
        assert_eq!(r.total_minutes(), 210);
        assert_eq!(r.servings, 6);
        assert_eq!(r.difficulty, Difficulty::Hard);
        assert_eq!(r.principal_ingredient(), "beef");
        assert!(r.suits(MealType::Dinner));
        assert!(!r.suits(MealType::Breakfast));
    }

    #[test]
    fn test_total_minutes_does_not_overflow() {
        let r = Recipe::new("x", "X")
            .with_prep_time(u32::MAX)
            .with_cooking_time(1);
        assert_eq!(r.total_minutes(), i64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_principal_ingredient_fallbacks() {
        let from_list = Recipe::new("R1", "Soup").with_ingredient(" Tomato ");
        assert_eq!(from_list.principal_ingredient(), "tomato");

        let from_name = Recipe::new("R2", "Fried Rice");
        assert_eq!(from_name.principal_ingredient(), "fried rice");
    }

    #[test]
    fn test_difficulty_rank_ordering() {
        assert!(Difficulty::Easy < Difficulty::Medium);
        assert!(Difficulty::Medium < Difficulty::Hard);
        assert_eq!(
            [Difficulty::Medium, Difficulty::Hard, Difficulty::Easy]
                .iter()
                .max(),
            Some(&Difficulty::Hard)
        );
        assert_eq!(Difficulty::Hard.rank(), 3);
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert!(matches!(
            "extreme".parse::<Difficulty>(),
            Err(ConfigError::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn test_recipe_deserialize_defaults() {
        let r: Recipe = serde_json::from_str(
            r#"{"id":"R1","name":"Salad","cooking_time":10,"servings":2,"difficulty":"easy"}"#,
        )
        .unwrap();
        assert_eq!(r.prep_time, 0);
        assert!(r.meal_types.is_empty());
        assert_eq!(r.rating, 0.0);
    }
}
