//! Error types for menu generation and persistence.
//!
//! Configuration problems fail fast with [`ConfigError`]. An empty or fully
//! filtered catalog is not an error: generation succeeds with an empty menu.
//! [`PersistenceError`] only comes back from a [`crate::ports::MealPlanSink`].

use thiserror::Error;

/// Invalid event, weekly, or policy configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("guest count must be greater than zero")]
    InvalidGuestCount,

    #[error("day count must be between 1 and the policy maximum")]
    InvalidDays,

    #[error("servings must be greater than zero")]
    InvalidServings,

    #[error("serving time {0} is outside 00:00..24:00 (minutes of day 0..1440)")]
    InvalidServingTime(i64),

    #[error("time limit must be greater than zero minutes")]
    InvalidTimeLimit,

    #[error("weekly plan needs at least one meal type")]
    NoMealTypes,

    #[error("unknown occasion {0:?} (expected family_dinner, friends_gathering, celebration, or casual)")]
    UnknownOccasion(String),

    #[error("unknown strategy {0:?} (expected balanced, quick, or surprise)")]
    UnknownStrategy(String),

    #[error("unknown meal type {0:?} (expected breakfast, lunch, dinner, or snack)")]
    UnknownMealType(String),

    #[error("unknown difficulty {0:?} (expected easy, medium, or hard)")]
    UnknownDifficulty(String),

    #[error("minimum difficulty is above maximum difficulty")]
    InvalidDifficultyBounds,

    #[error("invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("policy TOML parse error: {0}")]
    PolicyParse(#[from] toml::de::Error),
}

/// Failure reported by a persistence sink. Opaque to the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    #[error("storage failure: {0}")]
    Storage(String),

    #[error("meal plan rejected: {0}")]
    Rejected(String),
}
