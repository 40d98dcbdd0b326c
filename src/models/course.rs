//! Course model.
//!
//! A course is a selected recipe filling one menu slot, tagged with the
//! role the selector gave it. Courses are built per generation and never
//! persisted on their own.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Recipe;

/// Role of a course within a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseRole {
    /// Rice, bread, noodles.
    Staple,
    Soup,
    Main,
    Appetizer,
    Dessert,
}

impl CourseRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Staple => "staple",
            Self::Soup => "soup",
            Self::Main => "main",
            Self::Appetizer => "appetizer",
            Self::Dessert => "dessert",
        }
    }
}

impl fmt::Display for CourseRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recipe placed in a menu slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub recipe: Recipe,
    pub role: CourseRole,
}

impl Course {
    /// Creates a course.
    pub fn new(recipe: Recipe, role: CourseRole) -> Self {
        Self { recipe, role }
    }

    /// Prep plus cooking time (minutes).
    #[inline]
    pub fn duration(&self) -> i64 {
        self.recipe.total_minutes()
    }

    /// Recipe identifier.
    #[inline]
    pub fn recipe_id(&self) -> &str {
        &self.recipe.id
    }
}
