//! Summary statistics over a generated schedule

use studyplan_core::{SchedulePreview, ScheduleDay, StudyPlan};

/// Wrap a generated schedule with its summary statistics
pub fn preview_stats(plan: &StudyPlan, schedule: Vec<ScheduleDay>) -> SchedulePreview {
    SchedulePreview {
        total_days: schedule.len(),
        practice_test_count: practice_test_count(&schedule),
        total_study_hours: total_study_hours(plan, &schedule),
        schedule,
    }
}

pub fn practice_test_count(schedule: &[ScheduleDay]) -> usize {
    schedule.iter().filter(|day| day.is_practice_test).count()
}

/// Planned hours over every day that is neither blackout nor taper.
///
/// Counts the plan's weekday/weekend hours whether or not any material was
/// actually assigned that day.
pub fn total_study_hours(plan: &StudyPlan, schedule: &[ScheduleDay]) -> f64 {
    schedule
        .iter()
        .filter(|day| !day.is_blackout && day.days_left > plan.taper_days)
        .map(|day| plan.available_hours(day.day_of_week))
        .sum()
}
