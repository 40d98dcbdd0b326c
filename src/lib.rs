//! Menu composition and cooking-schedule engine.
//!
//! Given a recipe catalog snapshot and an event configuration, selects a
//! coherent set of dishes, schedules them backward from the serving time on
//! a single-cook timeline, and analyzes the menu for quality issues. A
//! weekly planner runs the same machinery under several named strategies.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Recipe`, `EventConfig`, `WeeklyConfig`,
//!   `Course`, `TimePlan`, `GeneratedMenu`, `MealPlanOption`, `MenuAnalysis`
//! - **`policy`**: Tuned tables (slot counts, diversity ratios), TOML-loadable
//! - **`filter`**: Candidate pool narrowing
//! - **`selection`**: Ranking rules, event course selector, weekly slot selector
//! - **`scheduler`**: Backward cooking scheduler and timeline KPIs
//! - **`analysis`**: Standalone menu analyzer
//! - **`planner`**: Engine entry points
//! - **`ports`**: Catalog and persistence boundaries
//! - **`validation`**: Config checks and catalog integrity checks
//!
//! # Example
//!
//! ```
//! use u_menu::models::{Difficulty, EventConfig, Occasion, Recipe};
//! use u_menu::{analyze_menu, generate_event_menu};
//!
//! let catalog = vec![
//!     Recipe::new("roast", "Roast").with_cooking_time(90).with_difficulty(Difficulty::Hard),
//!     Recipe::new("salad", "Salad").with_cooking_time(15),
//! ];
//! let config = EventConfig::new(Occasion::FamilyDinner, 4, 17 * 60);
//! let menu = generate_event_menu(&config, &catalog).unwrap();
//!
//! assert_eq!(menu.time_plan.task_for_recipe("roast").unwrap().start_time, 930);
//! assert_eq!(menu.time_plan.task_for_recipe("salad").unwrap().start_time, 915);
//! assert_eq!(analyze_menu(&menu.courses).difficulty_level, Difficulty::Hard);
//! ```
//!
//! The engine is synchronous and holds no state between calls. It emits
//! `tracing` events but never installs a subscriber.

pub mod analysis;
pub mod error;
pub mod filter;
pub mod models;
pub mod planner;
pub mod policy;
pub mod ports;
pub mod scheduler;
pub mod selection;
pub mod validation;

pub use analysis::analyze_menu;
pub use error::{ConfigError, PersistenceError};
pub use planner::{generate_event_menu, generate_weekly_options};
