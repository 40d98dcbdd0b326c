//! Tunable policy tables.
//!
//! Course counts per occasion, guest-count scaling, role rotation, and
//! per-strategy diversity targets are empirical heuristics, so they live in
//! a value passed with each configuration instead of in constants. Defaults
//! can be overridden from TOML; missing keys keep their defaults.
//!
//! ```
//! use u_menu::policy::EnginePolicy;
//! use u_menu::models::{Occasion, Strategy};
//!
//! let policy = EnginePolicy::from_toml_str(r#"
//!     guest_thresholds = [4]
//!     [diversity]
//!     balanced = 0.8
//! "#).unwrap();
//! assert_eq!(policy.slot_count(Occasion::FamilyDinner, 4), 4);
//! assert_eq!(policy.min_diversity(Strategy::Balanced), 0.8);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::{CourseRole, Occasion, Strategy};

/// Course policy for one occasion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OccasionPolicy {
    /// Courses before guest scaling.
    pub base_courses: usize,
    /// Whether guest thresholds add courses.
    pub scale_with_guests: bool,
    /// Whether at least one HARD dish is required when available.
    pub require_hard: bool,
}

impl OccasionPolicy {
    pub const fn new(base_courses: usize, scale_with_guests: bool, require_hard: bool) -> Self {
        Self {
            base_courses,
            scale_with_guests,
            require_hard,
        }
    }
}

/// Per-occasion course policies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccasionTable {
    pub family_dinner: OccasionPolicy,
    pub friends_gathering: OccasionPolicy,
    pub celebration: OccasionPolicy,
    pub casual: OccasionPolicy,
}

impl OccasionTable {
    /// Policy for an occasion.
    pub fn get(&self, occasion: Occasion) -> &OccasionPolicy {
        match occasion {
            Occasion::FamilyDinner => &self.family_dinner,
            Occasion::FriendsGathering => &self.friends_gathering,
            Occasion::Celebration => &self.celebration,
            Occasion::Casual => &self.casual,
        }
    }
}

impl Default for OccasionTable {
    fn default() -> Self {
        Self {
            family_dinner: OccasionPolicy::new(3, true, false),
            friends_gathering: OccasionPolicy::new(4, true, false),
            celebration: OccasionPolicy::new(5, true, true),
            casual: OccasionPolicy::new(1, false, false),
        }
    }
}

/// Minimum distinct-to-total recipe ratio per weekly strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityTable {
    pub balanced: f64,
    pub quick: f64,
    pub surprise: f64,
}

impl DiversityTable {
    /// Target for a strategy.
    pub fn get(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Balanced => self.balanced,
            Strategy::Quick => self.quick,
            Strategy::Surprise => self.surprise,
        }
    }
}

impl Default for DiversityTable {
    fn default() -> Self {
        Self {
            balanced: 0.7,
            quick: 0.5,
            surprise: 0.7,
        }
    }
}

/// All tunable engine policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnginePolicy {
    /// Course policy per occasion.
    pub occasions: OccasionTable,
    /// Each threshold the guest count reaches adds one course.
    pub guest_thresholds: Vec<u32>,
    /// Hard cap on courses per event menu.
    pub max_courses: usize,
    /// Roles assigned to courses in selection order, cycling.
    pub role_rotation: Vec<CourseRole>,
    /// Weekly diversity targets.
    pub diversity: DiversityTable,
    /// Default cooking-time limit for the quick strategy (minutes).
    pub quick_max_cooking_time: u32,
    /// Analyzer flags menus whose distinct ratio falls below this.
    pub low_variety_ratio: f64,
    /// Longest weekly plan accepted (days).
    pub max_days: u32,
}

impl Default for EnginePolicy {
    fn default() -> Self {
        Self {
            occasions: OccasionTable::default(),
            guest_thresholds: vec![6, 10],
            max_courses: 8,
            role_rotation: vec![
                CourseRole::Main,
                CourseRole::Soup,
                CourseRole::Staple,
                CourseRole::Appetizer,
                CourseRole::Dessert,
            ],
            diversity: DiversityTable::default(),
            quick_max_cooking_time: 30,
            low_variety_ratio: 0.7,
            max_days: 366,
        }
    }
}

impl EnginePolicy {
    /// Parses a policy from TOML and validates it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let policy: Self = toml::from_str(content)?;
        policy.validate()?;
        Ok(policy)
    }

    /// Checks ratios and caps.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_courses == 0 {
            return Err(ConfigError::InvalidPolicy(
                "max_courses must be greater than zero".into(),
            ));
        }
        if self.role_rotation.is_empty() {
            return Err(ConfigError::InvalidPolicy(
                "role_rotation must not be empty".into(),
            ));
        }
        let ratios = [
            ("diversity.balanced", self.diversity.balanced),
            ("diversity.quick", self.diversity.quick),
            ("diversity.surprise", self.diversity.surprise),
            ("low_variety_ratio", self.low_variety_ratio),
        ];
        for (name, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidPolicy(format!(
                    "{name} must be within 0.0..=1.0, got {value}"
                )));
            }
        }
        if self.quick_max_cooking_time == 0 {
            return Err(ConfigError::InvalidPolicy(
                "quick_max_cooking_time must be greater than zero".into(),
            ));
        }
        if self.max_days == 0 {
            return Err(ConfigError::InvalidPolicy(
                "max_days must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Target course count for an event.
    ///
    /// `base + thresholds reached`, capped at `max_courses`, never below one.
    pub fn slot_count(&self, occasion: Occasion, guest_count: u32) -> usize {
        let entry = self.occasions.get(occasion);
        let extra = if entry.scale_with_guests {
            self.guest_thresholds
                .iter()
                .filter(|&&t| guest_count >= t)
                .count()
        } else {
            0
        };
        (entry.base_courses + extra).clamp(1, self.max_courses.max(1))
    }

    /// Whether an occasion requires a HARD dish when one is available.
    pub fn requires_hard(&self, occasion: Occasion) -> bool {
        self.occasions.get(occasion).require_hard
    }

    /// Role of the course at selection position `index`.
    pub fn role_at(&self, index: usize) -> CourseRole {
        self.role_rotation
            .get(index % self.role_rotation.len().max(1))
            .copied()
            .unwrap_or(CourseRole::Main)
    }

    /// Minimum diversity ratio for a strategy.
    pub fn min_diversity(&self, strategy: Strategy) -> f64 {
        self.diversity.get(strategy)
    }
}
