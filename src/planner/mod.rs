//! Engine entry points.
//!
//! - [`generate_event_menu`]: filter → select courses → backward schedule.
//! - [`generate_weekly_options`]: one [`MealPlanOption`](crate::models::MealPlanOption)
//!   per strategy, each with its own analysis.
//!
//! Both validate the configuration first and fail fast with a
//! [`ConfigError`](crate::error::ConfigError). An empty or fully filtered
//! catalog is a successful, empty result. Neither touches persistence.

mod event;
mod weekly;

pub use event::generate_event_menu;
pub use weekly::generate_weekly_options;

use tracing::warn;

use crate::models::Recipe;
use crate::validation::validate_catalog;

/// Logs catalog integrity problems without failing generation.
fn warn_catalog_issues(catalog: &[Recipe]) {
    if let Err(errors) = validate_catalog(catalog) {
        for e in &errors {
            warn!(kind = ?e.kind, recipe = %e.recipe_id, "{}", e.message);
        }
    }
}
