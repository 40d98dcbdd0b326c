//! Cooking timeline model.
//!
//! A [`TimePlan`] is the single-cook timeline for a menu: one
//! [`ScheduledTask`] per course, laid back to back so the sequence ends at
//! the serving time.
//!
//! # Time Representation
//! Minutes relative to midnight of the serving day. Values below zero
//! belong to the previous day.

use serde::{Deserialize, Serialize};

use super::MINUTES_PER_DAY;
use super::Course;

/// A course placed on the kitchen timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    /// The course being cooked.
    pub course: Course,
    /// When work on the course begins (minutes).
    pub start_time: i64,
    /// Prep plus cooking time (minutes).
    pub duration: i64,
}

impl ScheduledTask {
    /// Creates a task for `course` starting at `start_time`.
    pub fn new(course: Course, start_time: i64) -> Self {
        let duration = course.duration();
        Self {
            course,
            start_time,
            duration,
        }
    }

    /// When the course is done (minutes).
    #[inline]
    pub fn end_time(&self) -> i64 {
        self.start_time + self.duration
    }

    /// Preparation portion of the task (minutes).
    #[inline]
    pub fn prep_time(&self) -> i64 {
        i64::from(self.course.recipe.prep_time)
    }

    /// When active cooking begins, after preparation (minutes).
    #[inline]
    pub fn cooking_start(&self) -> i64 {
        self.start_time + self.prep_time()
    }
}

/// A complete single-cook timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePlan {
    /// Tasks in descending duration order (the first ends at serving time).
    pub tasks: Vec<ScheduledTask>,
    /// When ingredient preparation must begin (minutes).
    pub prep_time: i64,
    /// When the kitchen starts: the earliest task start (minutes).
    pub start_time: i64,
}

impl TimePlan {
    /// A timeline with no tasks, anchored at the serving time.
    pub fn empty(serving_time: i64) -> Self {
        Self {
            tasks: Vec::new(),
            prep_time: serving_time,
            start_time: serving_time,
        }
    }

    /// Whether there is nothing to cook.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Sum of task durations (minutes of hands-on work).
    pub fn total_minutes(&self) -> i64 {
        self.tasks.iter().map(|t| t.duration).sum()
    }

    /// Latest task end, or `None` for an empty plan.
    pub fn finish_time(&self) -> Option<i64> {
        self.tasks.iter().map(ScheduledTask::end_time).max()
    }

    /// Minutes from ingredient prep start to the last finished dish.
    pub fn span_minutes(&self) -> i64 {
        self.finish_time()
            .map(|end| end - self.prep_time)
            .unwrap_or(0)
    }

    /// Finds the task for a recipe.
    pub fn task_for_recipe(&self, recipe_id: &str) -> Option<&ScheduledTask> {
        self.tasks.iter().find(|t| t.course.recipe.id == recipe_id)
    }

    /// Tasks in wall-clock order (earliest start first).
    pub fn tasks_by_start(&self) -> Vec<&ScheduledTask> {
        let mut tasks: Vec<&ScheduledTask> = self.tasks.iter().collect();
        tasks.sort_by_key(|t| t.start_time);
        tasks
    }
}

/// Formats minutes-of-day as `HH:MM`, wrapping across midnight.
///
/// ```
/// use u_menu::models::format_clock;
/// assert_eq!(format_clock(930), "15:30");
/// assert_eq!(format_clock(-30), "23:30");
/// ```
pub fn format_clock(minutes: i64) -> String {
    let m = minutes.rem_euclid(MINUTES_PER_DAY);
    format!("{:02}:{:02}", m / 60, m % 60)
}
