//! Weekly meal-plan options.
//!
//! Each requested strategy runs the weekly slot selector over its own
//! candidate pool and ranking, then the resulting meals are analyzed as one
//! menu.
//!
//! | Strategy | Pool | Ranking |
//! |----------|------|---------|
//! | Balanced | whole catalog | least used → rating → shortest time |
//! | Quick | `cooking_time <= limit` | least used → rating → shortest time |
//! | Surprise | whole catalog, seeded shuffle | least used → shuffled order |

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{info, warn};

use super::warn_catalog_issues;
use crate::analysis::MenuAnalyzer;
use crate::error::ConfigError;
use crate::filter::RecipeFilter;
use crate::models::{
    Course, CourseRole, MealPlanEntry, MealPlanOption, MealType, Recipe, Strategy, WeeklyConfig,
};
use crate::selection::{rules, RankingEngine, WeeklySelector};
use crate::validation::validate_weekly_config;

/// Produces one meal-plan option per effective strategy, in request order.
///
/// Options are proposals only; persisting one is a separate call
/// ([`crate::ports::save_meal_plan_option`]).
///
/// # Errors
/// Returns [`ConfigError`] when the configuration is invalid.
pub fn generate_weekly_options(
    config: &WeeklyConfig,
    catalog: &[Recipe],
) -> Result<Vec<MealPlanOption>, ConfigError> {
    validate_weekly_config(config)?;
    warn_catalog_issues(catalog);

    let slots = config.slots();
    Ok(config
        .effective_strategies()
        .into_iter()
        .map(|strategy| build_option(config, catalog, &slots, strategy))
        .collect())
}

fn build_option(
    config: &WeeklyConfig,
    catalog: &[Recipe],
    slots: &[(NaiveDate, MealType)],
    strategy: Strategy,
) -> MealPlanOption {
    let filter = match strategy {
        Strategy::Quick => RecipeFilter::new().with_max_cooking_time(config.quick_time_limit()),
        Strategy::Balanced | Strategy::Surprise => RecipeFilter::new(),
    };
    let mut pool = filter.apply(catalog);

    let engine = match strategy {
        Strategy::Balanced | Strategy::Quick => RankingEngine::new()
            .with_rule(rules::LeastUsed)
            .with_rule(rules::HighestRating)
            .with_rule(rules::ShortestTotalTime),
        Strategy::Surprise => {
            let mut rng = StdRng::seed_from_u64(config.seed);
            pool.shuffle(&mut rng);
            RankingEngine::new().with_rule(rules::LeastUsed)
        }
    };

    let selection = WeeklySelector::new(engine).select(&pool, slots);

    let meal_plans: Vec<MealPlanEntry> = selection
        .assignments
        .iter()
        .map(|a| MealPlanEntry::new(a.date, a.meal_type, a.recipe.id.as_str(), config.servings))
        .collect();
    let courses: Vec<Course> = selection
        .assignments
        .iter()
        .map(|a| Course::new(a.recipe.clone(), CourseRole::Main))
        .collect();
    let analysis = MenuAnalyzer::from_policy(&config.policy).analyze(&courses);

    let ratio = selection.diversity_ratio();
    let minimum = config.policy.min_diversity(strategy);
    if ratio < minimum {
        warn!(
            %strategy,
            ratio,
            minimum,
            candidates = pool.len(),
            slots = slots.len(),
            "diversity below target, candidate pool too small"
        );
    }

    info!(
        %strategy,
        candidates = pool.len(),
        meals = meal_plans.len(),
        unfilled = selection.unfilled,
        distinct = selection.distinct_recipes(),
        "built weekly option"
    );

    let (name, description) = describe(config, strategy);
    MealPlanOption {
        name,
        description,
        strategy,
        meal_plans,
        analysis,
    }
}

fn describe(config: &WeeklyConfig, strategy: Strategy) -> (String, String) {
    match strategy {
        Strategy::Balanced => (
            "Balanced plan".to_string(),
            format!(
                "Varied, well-rated meals over {} days with as few repeats as possible",
                config.days
            ),
        ),
        Strategy::Quick => (
            "Quick plan".to_string(),
            format!(
                "Meals cooking in {} minutes or less",
                config.quick_time_limit()
            ),
        ),
        Strategy::Surprise => (
            "Surprise plan".to_string(),
            format!("A shuffled pick of varied meals over {} days", config.days),
        ),
    }
}
