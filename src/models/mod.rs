//! Menu-planning domain models.
//!
//! Provides the inputs (recipes, event and weekly configurations) and the
//! outputs (courses, cooking timelines, menus, meal-plan options, analyses)
//! of the engine. Every value is built fresh per generation call.
//!
//! # Domain Mappings
//!
//! | u-menu | Scheduling analogue |
//! |--------|---------------------|
//! | Recipe | Task template |
//! | Course | Selected task |
//! | ScheduledTask | Assignment |
//! | TimePlan | Single-resource schedule |
//! | EventConfig.start_time | Common deadline |

mod analysis;
mod config;
mod course;
mod menu;
mod recipe;
mod timeline;

pub use analysis::{MenuAnalysis, MenuIssue};
pub use config::{EventConfig, MealType, Occasion, Strategy, WeeklyConfig, MINUTES_PER_DAY};
pub use course::{Course, CourseRole};
pub use menu::{GeneratedMenu, MealPlanEntry, MealPlanOption};
pub use recipe::{Difficulty, Recipe};
pub use timeline::{format_clock, ScheduledTask, TimePlan};
