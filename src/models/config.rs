//! Generation inputs: occasions, meal types, strategies, and the event and
//! weekly configurations.
//!
//! # Time Representation
//! `EventConfig::start_time` is the serving time in minutes of day
//! (0 = midnight, 1020 = 17:00). Timeline values derived from it may go
//! negative when cooking starts the previous day.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Difficulty;
use crate::error::ConfigError;
use crate::policy::EnginePolicy;

/// Minutes in a day; serving times must fall in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Kind of event a menu is composed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occasion {
    FamilyDinner,
    FriendsGathering,
    Celebration,
    Casual,
}

impl Occasion {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FamilyDinner => "family_dinner",
            Self::FriendsGathering => "friends_gathering",
            Self::Celebration => "celebration",
            Self::Casual => "casual",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Occasion {
    type Err = ConfigError;

    /// Accepts `family_dinner`, `FAMILY_DINNER`, or `family-dinner`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "family_dinner" => Ok(Self::FamilyDinner),
            "friends_gathering" => Ok(Self::FriendsGathering),
            "celebration" => Ok(Self::Celebration),
            "casual" => Ok(Self::Casual),
            _ => Err(ConfigError::UnknownOccasion(s.to_string())),
        }
    }
}

/// Meal slot within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(ConfigError::UnknownMealType(s.to_string())),
        }
    }
}

/// Selection strategy for a weekly meal-plan option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Highest-rated recipes, maximizing distinct dishes.
    Balanced,
    /// Only recipes within the quick cooking-time limit.
    Quick,
    /// Seeded shuffle of the pool instead of a rating order.
    Surprise,
}

impl Strategy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Balanced => "balanced",
            Self::Quick => "quick",
            Self::Surprise => "surprise",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_name(s).as_str() {
            "balanced" => Ok(Self::Balanced),
            "quick" => Ok(Self::Quick),
            "surprise" => Ok(Self::Surprise),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

fn normalize_name(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('-', "_")
}

/// Configuration for a single-event menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventConfig {
    /// Event kind (drives course count and difficulty policy).
    pub occasion: Occasion,
    /// Number of guests (> 0).
    pub guest_count: u32,
    /// Serving time, minutes of day.
    pub start_time: i64,
    /// Upper bound on a dish's cooking time (minutes). `None` = unbounded.
    #[serde(default)]
    pub max_time_per_dish: Option<u32>,
    /// Easiest acceptable difficulty.
    #[serde(default)]
    pub min_difficulty: Option<Difficulty>,
    /// Hardest acceptable difficulty.
    #[serde(default)]
    pub max_difficulty: Option<Difficulty>,
    /// Minimum recipe yield (portions).
    #[serde(default)]
    pub min_servings: Option<u32>,
    /// Policy tables. Defaults apply when omitted.
    #[serde(default)]
    pub policy: EnginePolicy,
}

impl EventConfig {
    /// Creates an event config served at `start_time` (minutes of day).
    pub fn new(occasion: Occasion, guest_count: u32, start_time: i64) -> Self {
        Self {
            occasion,
            guest_count,
            start_time,
            max_time_per_dish: None,
            min_difficulty: None,
            max_difficulty: None,
            min_servings: None,
            policy: EnginePolicy::default(),
        }
    }

    /// Sets the serving time from a clock time.
    pub fn with_serving_time(mut self, time: NaiveTime) -> Self {
        self.start_time = i64::from(time.hour() * 60 + time.minute());
        self
    }

    /// Sets the per-dish cooking-time limit.
    pub fn with_max_time_per_dish(mut self, minutes: u32) -> Self {
        self.max_time_per_dish = Some(minutes);
        self
    }

    /// Sets the accepted difficulty range (inclusive).
    pub fn with_difficulty_range(mut self, min: Difficulty, max: Difficulty) -> Self {
        self.min_difficulty = Some(min);
        self.max_difficulty = Some(max);
        self
    }

    /// Sets the minimum recipe yield.
    pub fn with_min_servings(mut self, servings: u32) -> Self {
        self.min_servings = Some(servings);
        self
    }

    /// Replaces the policy tables.
    pub fn with_policy(mut self, policy: EnginePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Configuration for the multi-option weekly planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyConfig {
    /// First planned day.
    pub start_date: NaiveDate,
    /// Number of consecutive days (> 0).
    pub days: u32,
    /// Meals planned per day, in serving order.
    pub meal_types: Vec<MealType>,
    /// Portions per planned meal.
    pub servings: u32,
    /// Cooking-time limit for the quick option. `None` = policy default.
    #[serde(default)]
    pub max_cooking_time: Option<u32>,
    /// Appends a quick option if not already requested.
    #[serde(default)]
    pub include_quick_option: bool,
    /// Strategies to produce, one option each, in order.
    pub strategies: Vec<Strategy>,
    /// Seed for the surprise strategy.
    #[serde(default)]
    pub seed: u64,
    /// Policy tables. Defaults apply when omitted.
    #[serde(default)]
    pub policy: EnginePolicy,
}

impl WeeklyConfig {
    /// Creates a dinner-only, two-serving, balanced plan.
    pub fn new(start_date: NaiveDate, days: u32) -> Self {
        Self {
            start_date,
            days,
            meal_types: vec![MealType::Dinner],
            servings: 2,
            max_cooking_time: None,
            include_quick_option: false,
            strategies: vec![Strategy::Balanced],
            seed: 0,
            policy: EnginePolicy::default(),
        }
    }

    /// Sets the planned meal types.
    pub fn with_meal_types(mut self, meal_types: Vec<MealType>) -> Self {
        self.meal_types = meal_types;
        self
    }

    /// Sets the servings per meal.
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings;
        self
    }

    /// Sets the quick option's cooking-time limit.
    pub fn with_max_cooking_time(mut self, minutes: u32) -> Self {
        self.max_cooking_time = Some(minutes);
        self
    }

    /// Requests the quick option.
    pub fn with_quick_option(mut self) -> Self {
        self.include_quick_option = true;
        self
    }

    /// Sets the strategies.
    pub fn with_strategies(mut self, strategies: Vec<Strategy>) -> Self {
        self.strategies = strategies;
        self
    }

    /// Sets strategies by name, rejecting unknown names.
    pub fn with_strategy_names(mut self, names: &[&str]) -> Result<Self, ConfigError> {
        self.strategies = names
            .iter()
            .map(|n| n.parse::<Strategy>())
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Sets the surprise seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the policy tables.
    pub fn with_policy(mut self, policy: EnginePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Effective quick-option cooking-time limit.
    pub fn quick_time_limit(&self) -> u32 {
        self.max_cooking_time
            .unwrap_or(self.policy.quick_max_cooking_time)
    }

    /// Strategies to run, with the quick option appended when requested.
    pub fn effective_strategies(&self) -> Vec<Strategy> {
        let mut strategies = self.strategies.clone();
        if self.include_quick_option && !strategies.contains(&Strategy::Quick) {
            strategies.push(Strategy::Quick);
        }
        strategies
    }

    /// Planned slots, day-major: every meal of day 1, then day 2, ...
    pub fn slots(&self) -> Vec<(NaiveDate, MealType)> {
        self.start_date
            .iter_days()
            .take(self.days as usize)
            .flat_map(|date| self.meal_types.iter().map(move |&m| (date, m)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_occasion_from_str_variants() {
        assert_eq!(
            "FAMILY_DINNER".parse::<Occasion>().unwrap(),
            Occasion::FamilyDinner
        );
        assert_eq!(
            "friends-gathering".parse::<Occasion>().unwrap(),
            Occasion::FriendsGathering
        );
        assert!(matches!(
            "picnic".parse::<Occasion>(),
            Err(ConfigError::UnknownOccasion(_))
        ));
    }

    #[test]
    fn test_strategy_and_meal_type_from_str() {
        assert_eq!("Quick".parse::<Strategy>().unwrap(), Strategy::Quick);
        assert!(matches!(
            "gourmet".parse::<Strategy>(),
            Err(ConfigError::UnknownStrategy(_))
        ));
        assert_eq!("LUNCH".parse::<MealType>().unwrap(), MealType::Lunch);
        assert!("brunch".parse::<MealType>().is_err());
    }

    #[test]
    fn test_event_config_builder() {
        let config = EventConfig::new(Occasion::Celebration, 8, 0)
            .with_serving_time(NaiveTime::from_hms_opt(19, 30, 0).unwrap())
            .with_max_time_per_dish(90)
            .with_difficulty_range(Difficulty::Medium, Difficulty::Hard)
            .with_min_servings(4);

        assert_eq!(config.start_time, 1170);
        assert_eq!(config.max_time_per_dish, Some(90));
        assert_eq!(config.min_difficulty, Some(Difficulty::Medium));
        assert_eq!(config.min_servings, Some(4));
    }

    #[test]
    fn test_weekly_slots_day_major() {
        let config = WeeklyConfig::new(monday(), 2)
            .with_meal_types(vec![MealType::Lunch, MealType::Dinner]);
        let slots = config.slots();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0], (monday(), MealType::Lunch));
        assert_eq!(slots[1], (monday(), MealType::Dinner));
        assert_eq!(slots[2].0, monday().succ_opt().unwrap());
    }

    #[test]
    fn test_effective_strategies_appends_quick_once() {
        let config = WeeklyConfig::new(monday(), 7).with_quick_option();
        assert_eq!(
            config.effective_strategies(),
            vec![Strategy::Balanced, Strategy::Quick]
        );

        let already = WeeklyConfig::new(monday(), 7)
            .with_strategies(vec![Strategy::Quick])
            .with_quick_option();
        assert_eq!(already.effective_strategies(), vec![Strategy::Quick]);
    }

    #[test]
    fn test_with_strategy_names() {
        let config = WeeklyConfig::new(monday(), 7)
            .with_strategy_names(&["balanced", "surprise"])
            .unwrap();
        assert_eq!(
            config.strategies,
            vec![Strategy::Balanced, Strategy::Surprise]
        );
        assert!(WeeklyConfig::new(monday(), 7)
            .with_strategy_names(&["random"])
            .is_err());
    }

    #[test]
    fn test_quick_time_limit_default() {
        let config = WeeklyConfig::new(monday(), 7);
        assert_eq!(config.quick_time_limit(), 30);
        assert_eq!(config.with_max_cooking_time(20).quick_time_limit(), 20);
    }
}
