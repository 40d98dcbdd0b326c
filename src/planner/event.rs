//! Event menu generation.
//!
//! # Pipeline
//!
//! 1. Validate the config.
//! 2. Filter the catalog by time limit, difficulty bounds, and servings.
//! 3. Size the menu from the occasion policy and guest count.
//! 4. Select courses (see [`CourseSelector`]).
//! 5. Backward-schedule them to end at the serving time.

use tracing::{debug, info, warn};

use super::warn_catalog_issues;
use crate::error::ConfigError;
use crate::filter::RecipeFilter;
use crate::models::{format_clock, EventConfig, GeneratedMenu, Recipe, MINUTES_PER_DAY};
use crate::scheduler::{CookingScheduler, TimelineKpi};
use crate::selection::CourseSelector;
use crate::validation::validate_event_config;

/// Composes a menu and its cooking timeline for one event.
///
/// Deterministic: the same `(config, catalog)` always yields the same menu.
///
/// # Errors
/// Returns [`ConfigError`] when the configuration is invalid. An empty
/// candidate pool is not an error; the menu is simply empty.
pub fn generate_event_menu(
    config: &EventConfig,
    catalog: &[Recipe],
) -> Result<GeneratedMenu, ConfigError> {
    validate_event_config(config)?;
    warn_catalog_issues(catalog);

    let pool = RecipeFilter::from_event(config).apply(catalog);
    let slots = config
        .policy
        .slot_count(config.occasion, config.guest_count);
    debug!(
        occasion = %config.occasion,
        guests = config.guest_count,
        candidates = pool.len(),
        slots,
        "composing event menu"
    );

    let courses = CourseSelector::new(config.policy.clone()).select(&pool, config.occasion, slots);
    let time_plan = CookingScheduler::new().build(&courses, config.start_time);
    let kpi = TimelineKpi::calculate(&time_plan, config.start_time);

    if !kpi.fits_within(MINUTES_PER_DAY) {
        warn!(
            kitchen_minutes = kpi.kitchen_minutes,
            longest = kpi.longest_task.as_deref().unwrap_or_default(),
            "kitchen work spans more than a day"
        );
    }

    info!(
        occasion = %config.occasion,
        courses = courses.len(),
        target = slots,
        kitchen_start = %format_clock(time_plan.start_time),
        serving = %format_clock(config.start_time),
        kitchen_minutes = kpi.kitchen_minutes,
        longest = kpi.longest_task.as_deref().unwrap_or_default(),
        "generated event menu"
    );

    Ok(GeneratedMenu {
        config: config.clone(),
        courses,
        time_plan,
    })
}
