//! Catalog and persistence ports.
//!
//! The engine never reads storage on its own and never saves anything
//! automatically. A caller queries a [`RecipeCatalog`] for a snapshot, runs
//! the pure generators, reviews the result, and then explicitly hands an
//! accepted menu or option to a [`MealPlanSink`].
//!
//! In-memory implementations are provided for embedding and tests.

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{ConfigError, PersistenceError};
use crate::filter::RecipeFilter;
use crate::models::{
    EventConfig, GeneratedMenu, MealPlanEntry, MealPlanOption, MealType, Recipe, WeeklyConfig,
};
use crate::planner::{generate_event_menu, generate_weekly_options};

/// Read-only recipe lookup.
pub trait RecipeCatalog {
    /// Returns a snapshot of recipes matching `filter`, in catalog order.
    fn query_recipes(&self, filter: &RecipeFilter) -> Vec<Recipe>;
}

/// Destination for accepted meal plans.
pub trait MealPlanSink {
    /// Stores one batch of entries.
    ///
    /// # Errors
    ///
    /// Returns [`PersistenceError`] if the backing store fails or refuses
    /// the batch.
    fn save_meal_plan(&mut self, entries: &[MealPlanEntry]) -> Result<(), PersistenceError>;
}

/// Catalog backed by a recipe list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    recipes: Vec<Recipe>,
}

impl InMemoryCatalog {
    /// Creates a catalog from recipes (order is preserved).
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Appends a recipe.
    pub fn with_recipe(mut self, recipe: Recipe) -> Self {
        self.recipes.push(recipe);
        self
    }

    /// Number of stored recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl RecipeCatalog for InMemoryCatalog {
    fn query_recipes(&self, filter: &RecipeFilter) -> Vec<Recipe> {
        filter.apply(&self.recipes).into_iter().cloned().collect()
    }
}

/// Sink that records every saved batch.
#[derive(Debug, Clone, Default)]
pub struct InMemorySink {
    batches: Vec<Vec<MealPlanEntry>>,
    failure: Option<PersistenceError>,
}

impl InMemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that fails every save with `error`.
    pub fn failing(error: PersistenceError) -> Self {
        Self {
            batches: Vec::new(),
            failure: Some(error),
        }
    }

    /// Saved batches, oldest first.
    pub fn batches(&self) -> &[Vec<MealPlanEntry>] {
        &self.batches
    }

    /// All saved entries, flattened.
    pub fn entries(&self) -> impl Iterator<Item = &MealPlanEntry> {
        self.batches.iter().flatten()
    }
}

impl MealPlanSink for InMemorySink {
    fn save_meal_plan(&mut self, entries: &[MealPlanEntry]) -> Result<(), PersistenceError> {
        if let Some(ref err) = self.failure {
            return Err(err.clone());
        }
        self.batches.push(entries.to_vec());
        Ok(())
    }
}

/// Persists an accepted weekly option.
///
/// # Errors
///
/// Propagates the sink's [`PersistenceError`].
pub fn save_meal_plan_option<S: MealPlanSink + ?Sized>(
    sink: &mut S,
    option: &MealPlanOption,
) -> Result<(), PersistenceError> {
    sink.save_meal_plan(&option.meal_plans)?;
    info!(
        option = %option.name,
        meals = option.meal_plans.len(),
        "saved meal plan option"
    );
    Ok(())
}

/// Persists an accepted event menu as entries for `date` and `meal_type`.
///
/// # Errors
///
/// Propagates the sink's [`PersistenceError`].
pub fn save_generated_menu<S: MealPlanSink + ?Sized>(
    sink: &mut S,
    menu: &GeneratedMenu,
    date: NaiveDate,
    meal_type: MealType,
) -> Result<(), PersistenceError> {
    let entries = menu.to_meal_plan_entries(date, meal_type);
    sink.save_meal_plan(&entries)?;
    info!(%date, meal = %meal_type, courses = entries.len(), "saved event menu");
    Ok(())
}

/// Queries the catalog with the event's criteria, then generates the menu.
///
/// # Errors
///
/// Returns [`ConfigError`] when the configuration is invalid.
pub fn generate_event_menu_from_catalog<C: RecipeCatalog + ?Sized>(
    config: &EventConfig,
    catalog: &C,
) -> Result<GeneratedMenu, ConfigError> {
    let recipes = catalog.query_recipes(&RecipeFilter::from_event(config));
    debug!(recipes = recipes.len(), "queried catalog for event");
    generate_event_menu(config, &recipes)
}

/// Queries the whole catalog, then generates weekly options.
///
/// # Errors
///
/// Returns [`ConfigError`] when the configuration is invalid.
pub fn generate_weekly_options_from_catalog<C: RecipeCatalog + ?Sized>(
    config: &WeeklyConfig,
    catalog: &C,
) -> Result<Vec<MealPlanOption>, ConfigError> {
    let recipes = catalog.query_recipes(&RecipeFilter::new());
    debug!(recipes = recipes.len(), "queried catalog for weekly plan");
    generate_weekly_options(config, &recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Occasion};

    fn catalog() -> InMemoryCatalog {
        InMemoryCatalog::new(vec![
            Recipe::new("slow", "Slow Roast")
                .with_cooking_time(120)
                .with_difficulty(Difficulty::Hard)
                .with_rating(4.8),
            Recipe::new("fast", "Fast Salad")
                .with_cooking_time(10)
                .with_rating(4.0),
        ])
    }

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_catalog_query_applies_filter() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        let quick = catalog.query_recipes(&RecipeFilter::new().with_max_cooking_time(30));
        assert_eq!(quick.len(), 1);
        assert_eq!(quick[0].id, "fast");
    }

    #[test]
    fn test_event_menu_from_catalog() {
        let config = EventConfig::new(Occasion::FamilyDinner, 2, 1140).with_max_time_per_dish(60);
        let menu = generate_event_menu_from_catalog(&config, &catalog()).unwrap();
        assert_eq!(menu.courses.len(), 1);
        assert_eq!(menu.courses[0].recipe_id(), "fast");
    }

    #[test]
    fn test_save_generated_menu() {
        let config = EventConfig::new(Occasion::FamilyDinner, 5, 1140);
        let menu = generate_event_menu_from_catalog(&config, &catalog()).unwrap();

        let mut sink = InMemorySink::new();
        save_generated_menu(&mut sink, &menu, monday(), MealType::Dinner).unwrap();

        assert_eq!(sink.batches().len(), 1);
        assert!(sink.entries().all(|e| e.servings == 5 && e.date == monday()));
        assert_eq!(sink.entries().count(), menu.courses.len());
    }

    #[test]
    fn test_save_option_is_explicit() {
        let config = WeeklyConfig::new(monday(), 3);
        let options = generate_weekly_options_from_catalog(&config, &catalog()).unwrap();

        let mut sink = InMemorySink::new();
        assert!(sink.batches().is_empty());
        save_meal_plan_option(&mut sink, &options[0]).unwrap();
        assert_eq!(sink.batches()[0], options[0].meal_plans);
    }

    #[test]
    fn test_sink_failure_propagates() {
        let config = WeeklyConfig::new(monday(), 1);
        let options = generate_weekly_options_from_catalog(&config, &catalog()).unwrap();

        let mut sink = InMemorySink::failing(PersistenceError::Storage("disk full".into()));
        let err = save_meal_plan_option(&mut sink, &options[0]).unwrap_err();
        assert_eq!(err, PersistenceError::Storage("disk full".into()));
        assert!(sink.batches().is_empty());
    }
}
