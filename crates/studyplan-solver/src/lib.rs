//! # studyplan-solver
//!
//! Schedule generation for studyplan.
//!
//! This crate provides:
//! - The seed material catalog and per-generation inventory
//! - The day-by-day schedule builder (blackout, taper, practice test, review, study)
//! - Summary statistics over a generated schedule
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use studyplan_core::{Planner, StudyPlan};
//! use studyplan_solver::StudyPlanner;
//!
//! let plan = StudyPlan::new(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
//!     .practice_test_day(Weekday::Mon);
//! let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
//!
//! let preview = StudyPlanner::new().plan(&plan, today).unwrap();
//! assert_eq!(preview.total_days, 10);
//! assert_eq!(preview.practice_test_count, 1);
//! ```

pub mod builder;
pub mod catalog;
pub mod stats;

pub use builder::ScheduleBuilder;
pub use catalog::{MaterialCatalog, SEED_MATERIALS};
pub use stats::preview_stats;

use chrono::NaiveDate;
use studyplan_core::{Planner, SchedulePreview, StudyPlan, ValidationError};

/// Generates study calendars from the seed catalog
#[derive(Clone, Debug, Default)]
pub struct StudyPlanner {
    /// Inventory cloned into each generation; the seed list when `None`
    catalog: Option<MaterialCatalog>,
}

impl StudyPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom inventory instead of the seed list
    pub fn with_catalog(mut self, catalog: MaterialCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }
}

impl Planner for StudyPlanner {
    fn plan(&self, plan: &StudyPlan, today: NaiveDate) -> Result<SchedulePreview, ValidationError> {
        let mut builder = ScheduleBuilder::new(plan, today)?;
        if let Some(catalog) = &self.catalog {
            builder = builder.with_catalog(catalog.clone());
        }
        let schedule = builder.build();
        Ok(preview_stats(plan, schedule))
    }
}

/// Generate a calendar with the seed catalog
pub fn generate(plan: &StudyPlan, today: NaiveDate) -> Result<SchedulePreview, ValidationError> {
    StudyPlanner::new().plan(plan, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn planner_creation() {
        let planner = StudyPlanner::new();
        assert!(planner.catalog.is_none());
    }

    #[test]
    fn repeated_generations_start_from_full_catalog() {
        let plan = StudyPlan::new(NaiveDate::from_ymd_opt(2025, 4, 4).unwrap())
            .practice_test_day(Weekday::Sat)
            .taper_days(2);
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let planner = StudyPlanner::new();

        let first = planner.plan(&plan, today).unwrap();
        let second = planner.plan(&plan, today).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.practice_test_count, 4);
    }

    #[test]
    fn custom_catalog_is_cloned_per_generation() {
        let plan = StudyPlan::new(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap())
            .practice_test_day(Weekday::Mon);
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let planner = StudyPlanner::new().with_catalog(MaterialCatalog::from_items(&[]));

        let preview = planner.plan(&plan, today).unwrap();
        assert_eq!(preview.practice_test_count, 0);
        assert_eq!(planner.plan(&plan, today).unwrap(), preview);
    }
}
