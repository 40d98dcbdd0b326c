//! Backward (deadline-anchored) single-cook scheduler.
//!
//! # Algorithm
//!
//! 1. `duration = prep_time + cooking_time` per course.
//! 2. Sort by duration descending; equal durations keep selection order.
//! 3. Walk the sorted list with a cursor starting at the serving time:
//!    each task starts at `cursor - duration`, then the cursor moves to that
//!    start. The longest task therefore ends exactly at serving time and
//!    each shorter task ends where the previous one starts.
//! 4. `start_time` is the earliest task start. `prep_time` moves back from
//!    it by the longest preparation lead among the courses (equal to
//!    `start_time` when no course needs preparation).
//!
//! # Complexity
//! O(n log n) for the sort.

use tracing::debug;

use crate::models::{Course, ScheduledTask, TimePlan};

/// Reverse scheduler anchored at the serving time.
#[derive(Debug, Clone, Copy, Default)]
pub struct CookingScheduler;

impl CookingScheduler {
    /// Creates a scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Builds the cooking timeline for `courses` served at `serving_time`.
    pub fn build(&self, courses: &[Course], serving_time: i64) -> TimePlan {
        if courses.is_empty() {
            return TimePlan::empty(serving_time);
        }

        let mut order: Vec<&Course> = courses.iter().collect();
        order.sort_by(|a, b| b.duration().cmp(&a.duration()));

        let (tasks, start_time) = order.into_iter().fold(
            (Vec::with_capacity(courses.len()), serving_time),
            |(mut tasks, cursor), course| {
                let start = cursor - course.duration();
                tasks.push(ScheduledTask::new(course.clone(), start));
                (tasks, start)
            },
        );

        let lead = tasks
            .iter()
            .map(ScheduledTask::prep_time)
            .max()
            .unwrap_or(0);
        let prep_time = start_time - lead;

        debug!(
            tasks = tasks.len(),
            start_time,
            prep_time,
            serving_time,
            "built cooking timeline"
        );

        TimePlan {
            tasks,
            prep_time,
            start_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseRole, Recipe};

    fn course(id: &str, prep: u32, cook: u32) -> Course {
        Course::new(
            Recipe::new(id, id)
                .with_prep_time(prep)
                .with_cooking_time(cook),
            CourseRole::Main,
        )
    }

    #[test]
    fn test_two_dishes_back_to_back() {
        let courses = vec![course("quick", 0, 15), course("slow", 0, 90)];
        let plan = CookingScheduler::new().build(&courses, 1020);

        assert_eq!(plan.tasks[0].course.recipe_id(), "slow");
        assert_eq!(plan.tasks[0].start_time, 930);
        assert_eq!(plan.tasks[1].course.recipe_id(), "quick");
        assert_eq!(plan.tasks[1].start_time, 915);
        assert_eq!(plan.start_time, 915);
        assert_eq!(plan.prep_time, 915);
    }

    #[test]
    fn test_all_tasks_end_by_serving_time() {
        let courses = vec![
            course("a", 10, 40),
            course("b", 0, 25),
            course("c", 5, 120),
            course("d", 0, 5),
        ];
        let plan = CookingScheduler::new().build(&courses, 1140);

        assert_eq!(plan.task_count(), 4);
        assert!(plan.tasks.iter().all(|t| t.end_time() <= 1140));
        assert_eq!(plan.tasks[0].end_time(), 1140);
        for pair in plan.tasks.windows(2) {
            assert!(pair[0].duration >= pair[1].duration);
            assert_eq!(pair[1].end_time(), pair[0].start_time);
        }
        assert_eq!(plan.start_time, 1140 - plan.total_minutes());
    }

    #[test]
    fn test_equal_durations_keep_selection_order() {
        let courses = vec![course("first", 0, 30), course("second", 10, 20)];
        let plan = CookingScheduler::new().build(&courses, 720);

        assert_eq!(plan.tasks[0].course.recipe_id(), "first");
        assert_eq!(plan.tasks[0].start_time, 690);
        assert_eq!(plan.tasks[1].course.recipe_id(), "second");
        assert_eq!(plan.tasks[1].start_time, 660);
    }

    #[test]
    fn test_prep_time_leads_start() {
        let courses = vec![course("roast", 0, 90), course("marinated", 45, 15)];
        let plan = CookingScheduler::new().build(&courses, 1020);

        // marinated (60) runs 870..930, roast (90) runs 930..1020
        assert_eq!(plan.start_time, 870);
        assert_eq!(plan.prep_time, 825);
        assert!(plan.prep_time < plan.start_time);
    }

    #[test]
    fn test_prep_lead_uses_longest_preparation() {
        let courses = vec![course("brined", 120, 60), course("salad", 0, 10)];
        let plan = CookingScheduler::new().build(&courses, 1200);

        // brined 1020..1200, salad 1010..1020; earliest task has no prep
        assert_eq!(plan.start_time, 1010);
        assert_eq!(plan.prep_time, 890);
    }

    #[test]
    fn test_crosses_midnight() {
        let courses = vec![course("stock", 0, 480)];
        let plan = CookingScheduler::new().build(&courses, 420);
        assert_eq!(plan.start_time, -60);
    }

    #[test]
    fn test_empty_courses() {
        let plan = CookingScheduler::new().build(&[], 1020);
        assert!(plan.is_empty());
        assert_eq!(plan.start_time, 1020);
        assert_eq!(plan.prep_time, 1020);
    }
}
