//! Cooking timeline metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Kitchen minutes | Serving time - prep start |
//! | Active minutes | Sum of task durations |
//! | Prep lead | Kitchen start - prep start |
//! | Late tasks | Tasks ending after serving time |
//! | On-Time Rate | Fraction of tasks done by serving time |

use crate::models::TimePlan;

/// Timeline performance indicators. All values in minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineKpi {
    /// From ingredient prep start until serving.
    pub kitchen_minutes: i64,
    /// Hands-on work (sum of durations).
    pub active_minutes: i64,
    /// Preparation lead before the first task.
    pub prep_lead_minutes: i64,
    /// Tasks that end after serving time.
    pub late_tasks: usize,
    /// Fraction of tasks finishing in time (1.0 for an empty plan).
    pub on_time_rate: f64,
    /// Recipe id of the longest task.
    pub longest_task: Option<String>,
}

impl TimelineKpi {
    /// Computes KPIs for a plan served at `serving_time`.
    pub fn calculate(plan: &TimePlan, serving_time: i64) -> Self {
        let late_tasks = plan
            .tasks
            .iter()
            .filter(|t| t.end_time() > serving_time)
            .count();

        let on_time_rate = if plan.tasks.is_empty() {
            1.0
        } else {
            (plan.tasks.len() - late_tasks) as f64 / plan.tasks.len() as f64
        };

        let longest_task = plan
            .tasks
            .iter()
            .rev()
            .max_by_key(|t| t.duration)
            .map(|t| t.course.recipe.id.clone());

        Self {
            kitchen_minutes: serving_time - plan.prep_time,
            active_minutes: plan.total_minutes(),
            prep_lead_minutes: plan.start_time - plan.prep_time,
            late_tasks,
            on_time_rate,
            longest_task,
        }
    }

    /// Whether every dish is ready by serving time.
    pub fn all_on_time(&self) -> bool {
        self.late_tasks == 0
    }

    /// Whether the kitchen work fits within `max_minutes`.
    pub fn fits_within(&self, max_minutes: i64) -> bool {
        self.kitchen_minutes <= max_minutes
    }
}
