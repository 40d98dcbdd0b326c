//! Input validation for menu generation.
//!
//! Two layers:
//! - Configuration checks fail fast with a [`ConfigError`] (guest count,
//!   serving time, day range, difficulty bounds, policy tables).
//! - Catalog checks collect every integrity problem found in a recipe
//!   snapshot. Generators log them and keep going; the catalog is external
//!   and a bad entry is simply filtered out or ranked low.
//!
//! Catalog checks detect:
//! - Duplicate recipe IDs
//! - Empty IDs or names
//! - Zero servings
//! - Ratings outside 0..=5 or not finite
//! - Recipes with no prep or cooking time

use crate::error::ConfigError;
use crate::models::{EventConfig, Recipe, WeeklyConfig, MINUTES_PER_DAY};
use std::collections::HashSet;

/// Highest rating a recipe can carry.
pub const MAX_RATING: f32 = 5.0;

/// Catalog validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A catalog integrity problem.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Offending recipe ID (may be empty).
    pub recipe_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of catalog problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two recipes share the same ID.
    DuplicateId,
    /// A recipe has a blank ID or name.
    MissingIdentity,
    /// A recipe yields no portions.
    ZeroServings,
    /// Rating is NaN, infinite, or outside `0..=5`.
    InvalidRating,
    /// Prep plus cooking time is zero.
    ZeroDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, recipe_id: &str, message: impl Into<String>) -> Self {
        Self {
            kind,
            recipe_id: recipe_id.to_string(),
            message: message.into(),
        }
    }
}

/// Validates an event configuration.
pub fn validate_event_config(config: &EventConfig) -> Result<(), ConfigError> {
    if config.guest_count == 0 {
        return Err(ConfigError::InvalidGuestCount);
    }
    if !(0..MINUTES_PER_DAY).contains(&config.start_time) {
        return Err(ConfigError::InvalidServingTime(config.start_time));
    }
    if config.max_time_per_dish == Some(0) {
        return Err(ConfigError::InvalidTimeLimit);
    }
    if let (Some(min), Some(max)) = (config.min_difficulty, config.max_difficulty) {
        if min > max {
            return Err(ConfigError::InvalidDifficultyBounds);
        }
    }
    config.policy.validate()
}

/// Validates a weekly planner configuration.
///
/// `days` must be within `1..=policy.max_days`.
pub fn validate_weekly_config(config: &WeeklyConfig) -> Result<(), ConfigError> {
    if config.days == 0 || config.days > config.policy.max_days {
        return Err(ConfigError::InvalidDays);
    }
    if config.servings == 0 {
        return Err(ConfigError::InvalidServings);
    }
    if config.meal_types.is_empty() {
        return Err(ConfigError::NoMealTypes);
    }
    if config.max_cooking_time == Some(0) {
        return Err(ConfigError::InvalidTimeLimit);
    }
    config.policy.validate()
}

/// Validates a recipe catalog snapshot.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue in
/// catalog order.
pub fn validate_catalog(catalog: &[Recipe]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for recipe in catalog {
        if !ids.insert(recipe.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &recipe.id,
                format!("Duplicate recipe ID: {}", recipe.id),
            ));
        }

        if recipe.id.trim().is_empty() || recipe.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingIdentity,
                &recipe.id,
                format!("Recipe '{}' has a blank ID or name", recipe.id),
            ));
        }

        if recipe.servings == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroServings,
                &recipe.id,
                format!("Recipe '{}' yields zero servings", recipe.id),
            ));
        }

        if !recipe.rating.is_finite() || !(0.0..=MAX_RATING).contains(&recipe.rating) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRating,
                &recipe.id,
                format!("Recipe '{}' has rating {} outside 0..=5", recipe.id, recipe.rating),
            ));
        }

        if recipe.total_minutes() == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroDuration,
                &recipe.id,
                format!("Recipe '{}' takes no time to prepare", recipe.id),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, MealType, Occasion};
    use crate::policy::EnginePolicy;
    use chrono::NaiveDate;

    fn sample_catalog() -> Vec<Recipe> {
        vec![
            Recipe::new("bulgogi", "Bulgogi")
                .with_cooking_time(40)
                .with_prep_time(30)
                .with_rating(4.5),
            Recipe::new("kimchi-stew", "Kimchi Stew")
                .with_cooking_time(30)
                .with_rating(4.0),
        ]
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&sample_catalog()).is_ok());
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_recipe_id() {
        let catalog = vec![
            Recipe::new("r1", "One").with_cooking_time(10),
            Recipe::new("r1", "Other").with_cooking_time(10),
        ];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert_eq!(errors[0].recipe_id, "r1");
    }

    #[test]
    fn test_zero_servings() {
        let catalog = vec![Recipe::new("r1", "One")
            .with_cooking_time(10)
            .with_servings(0)];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroServings));
    }

    #[test]
    fn test_invalid_rating() {
        let catalog = vec![
            Recipe::new("high", "High").with_cooking_time(10).with_rating(7.0),
            Recipe::new("nan", "NaN").with_cooking_time(10).with_rating(f32::NAN),
        ];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::InvalidRating)
                .count(),
            2
        );
    }

    #[test]
    fn test_missing_identity_and_zero_duration() {
        let catalog = vec![Recipe::new("", "Nameless")];
        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingIdentity));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroDuration));
    }

    #[test]
    fn test_event_config_checks() {
        assert!(validate_event_config(&EventConfig::new(Occasion::Casual, 2, 1080)).is_ok());

        assert!(matches!(
            validate_event_config(&EventConfig::new(Occasion::Casual, 0, 1080)),
            Err(ConfigError::InvalidGuestCount)
        ));
        assert!(matches!(
            validate_event_config(&EventConfig::new(Occasion::Casual, 2, 1440)),
            Err(ConfigError::InvalidServingTime(1440))
        ));
        assert!(matches!(
            validate_event_config(&EventConfig::new(Occasion::Casual, 2, -5)),
            Err(ConfigError::InvalidServingTime(-5))
        ));
        assert!(matches!(
            validate_event_config(
                &EventConfig::new(Occasion::Casual, 2, 1080).with_max_time_per_dish(0)
            ),
            Err(ConfigError::InvalidTimeLimit)
        ));
        assert!(matches!(
            validate_event_config(
                &EventConfig::new(Occasion::Casual, 2, 1080)
                    .with_difficulty_range(Difficulty::Hard, Difficulty::Easy)
            ),
            Err(ConfigError::InvalidDifficultyBounds)
        ));
    }

    #[test]
    fn test_event_config_rejects_bad_policy() {
        let policy = EnginePolicy {
            low_variety_ratio: 1.5,
            ..EnginePolicy::default()
        };
        let config = EventConfig::new(Occasion::Casual, 2, 1080).with_policy(policy);
        assert!(matches!(
            validate_event_config(&config),
            Err(ConfigError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_weekly_config_checks() {
        assert!(validate_weekly_config(&WeeklyConfig::new(monday(), 7)).is_ok());

        assert!(matches!(
            validate_weekly_config(&WeeklyConfig::new(monday(), 0)),
            Err(ConfigError::InvalidDays)
        ));
        assert!(matches!(
            validate_weekly_config(&WeeklyConfig::new(monday(), 7).with_servings(0)),
            Err(ConfigError::InvalidServings)
        ));
        assert!(matches!(
            validate_weekly_config(&WeeklyConfig::new(monday(), 7).with_meal_types(vec![])),
            Err(ConfigError::NoMealTypes)
        ));
        assert!(matches!(
            validate_weekly_config(&WeeklyConfig::new(monday(), 7).with_max_cooking_time(0)),
            Err(ConfigError::InvalidTimeLimit)
        ));
        assert!(validate_weekly_config(
            &WeeklyConfig::new(monday(), 1).with_meal_types(vec![MealType::Breakfast])
        )
        .is_ok());
    }

    #[test]
    fn test_weekly_days_capped_by_policy() {
        assert!(matches!(
            validate_weekly_config(&WeeklyConfig::new(monday(), u32::MAX)),
            Err(ConfigError::InvalidDays)
        ));
        assert!(validate_weekly_config(&WeeklyConfig::new(monday(), 366)).is_ok());

        let policy = EnginePolicy {
            max_days: 14,
            ..EnginePolicy::default()
        };
        let config = WeeklyConfig::new(monday(), 15).with_policy(policy.clone());
        assert!(matches!(
            validate_weekly_config(&config),
            Err(ConfigError::InvalidDays)
        ));
        let config = WeeklyConfig::new(monday(), 14).with_policy(policy);
        assert!(validate_weekly_config(&config).is_ok());
    }
}
