//! Backward cooking scheduler and timeline metrics.
//!
//! # Algorithm
//!
//! `CookingScheduler` reverse-schedules courses for a single cook: tasks
//! are sorted longest first and laid back to back, walking backward from
//! the serving time, so the whole sequence ends exactly when the meal is
//! served. It does not model parallel burners or ovens.
//!
//! # KPI
//!
//! `TimelineKpi` summarizes a timeline: kitchen time, hands-on minutes,
//! preparation lead, and deadline adherence.

mod backward;
mod kpi;

pub use backward::CookingScheduler;
pub use kpi::TimelineKpi;
