//! Day-by-day schedule construction
//!
//! Days are walked from the day after `today` up to the exam date. Each day
//! gets exactly one classification, checked in this order:
//!
//! 1. Blackout: the date matches a blackout entry (month/day, any year)
//! 2. Taper: `days_left <= taper_days`
//! 3. Practice test: the weekday is a practice-test day and a test is still available
//! 4. Post-test review: the previous day was a practice test
//! 5. Regular study: question bank and CARS allocation by available hours
//!
//! A practice-test weekday with no tests left falls through to rules 4 and 5.

use chrono::NaiveDate;
use studyplan_core::{
    MaterialCategory, MaterialItem, ScheduleDay, StudyPlan, ValidationError, BLACKOUT_LABEL,
    FULL_LENGTH_REVIEW, REVIEW_LABEL, TAPER_LABEL,
};
use tracing::{debug, info};

use crate::catalog::MaterialCatalog;

/// Hours needed before a question-bank set is scheduled
pub const QUESTIONS_MIN_HOURS: f64 = 2.0;

/// Hours needed (after question banks) before a CARS pack is scheduled
pub const CARS_MIN_HOURS: f64 = 0.5;

/// Builds the calendar for one plan; consumed by [`ScheduleBuilder::build`]
#[derive(Debug)]
pub struct ScheduleBuilder<'a> {
    plan: &'a StudyPlan,
    today: NaiveDate,
    total_days: u32,
    catalog: MaterialCatalog,
    days: Vec<ScheduleDay>,
}

impl<'a> ScheduleBuilder<'a> {
    /// Prepare a builder with a fresh copy of the seed catalog.
    ///
    /// Fails when the exam is not strictly after `today`.
    pub fn new(plan: &'a StudyPlan, today: NaiveDate) -> Result<Self, ValidationError> {
        let span = plan.days_until_test(today);
        if span < 1 {
            return Err(ValidationError::TestDateNotInFuture {
                test_date: plan.test_date,
                today,
            });
        }
        // chrono's date range keeps any span well inside u32
        let total_days = u32::try_from(span).unwrap_or(u32::MAX);

        Ok(Self {
            plan,
            today,
            total_days,
            catalog: MaterialCatalog::new(),
            days: Vec::with_capacity(total_days as usize),
        })
    }

    /// Replace the inventory used for this generation
    pub fn with_catalog(mut self, catalog: MaterialCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Number of days the schedule will contain
    pub fn total_days(&self) -> u32 {
        self.total_days
    }

    /// Walk every day and return the records in ascending date order
    pub fn build(mut self) -> Vec<ScheduleDay> {
        let countdown = (1..=self.total_days).rev();
        for (date, days_left) in self.today.iter_days().skip(1).zip(countdown) {
            let day = self.next_day(date, days_left);
            debug!(
                date = %day.calendar_date,
                weekday = day.day_name(),
                days_left,
                kind = %day.kind(self.plan.taper_days),
                "classified day"
            );
            self.days.push(day);
        }

        info!(
            total_days = self.days.len(),
            practice_tests = self.days.iter().filter(|d| d.is_practice_test).count(),
            unused_materials = self.catalog.len(),
            "schedule generated"
        );
        self.days
    }

    fn next_day(&mut self, date: NaiveDate, days_left: u32) -> ScheduleDay {
        let mut day = ScheduleDay::new(date, days_left);

        if self.plan.is_blackout(date) {
            day.is_blackout = true;
            day.review = Some(BLACKOUT_LABEL.into());
            return day;
        }

        if days_left <= self.plan.taper_days {
            day.review = Some(TAPER_LABEL.into());
            return day;
        }

        if self.plan.is_practice_test_day(day.day_of_week) {
            if let Some(test) = self.take(MaterialCategory::PracticeTest) {
                day.practice_questions = Some(test.name.to_string());
                day.is_practice_test = true;
                day.review = Some(REVIEW_LABEL.into());
                return day;
            }
        }

        if self.previous_was_practice_test() {
            day.practice_questions = Some(FULL_LENGTH_REVIEW.into());
            day.is_review_day = true;
            day.cars = self
                .take(MaterialCategory::Cars)
                .map(|item| item.name.to_string());
            day.review = Some(REVIEW_LABEL.into());
            return day;
        }

        self.fill_study_day(&mut day);
        day
    }

    fn previous_was_practice_test(&self) -> bool {
        self.days.last().is_some_and(|prev| prev.is_practice_test)
    }

    /// Allocate question banks and CARS against the day's planned hours.
    ///
    /// Item costs may exceed what is left; the thresholds only gate whether a
    /// category is attempted at all.
    fn fill_study_day(&mut self, day: &mut ScheduleDay) {
        let mut remaining = self.plan.available_hours(day.day_of_week);

        if remaining >= QUESTIONS_MIN_HOURS {
            if let Some(questions) = self.take(MaterialCategory::PracticeQuestions) {
                day.practice_questions = Some(questions.name.to_string());
                remaining -= questions.estimated_hours;
            }
        }

        if remaining >= CARS_MIN_HOURS {
            if let Some(cars) = self.take(MaterialCategory::Cars) {
                day.cars = Some(cars.name.to_string());
                remaining -= cars.estimated_hours;
            }
        }

        day.review = Some(REVIEW_LABEL.into());
        debug!(date = %day.calendar_date, unallocated_hours = remaining, "study day filled");
    }

    fn take(&mut self, category: MaterialCategory) -> Option<MaterialItem> {
        let item = self.catalog.take_next(category);
        if item.is_none() {
            debug!(%category, "category exhausted");
        }
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // 2025-03-05 is a Wednesday
    fn today() -> NaiveDate {
        date(2025, 3, 5)
    }

    fn monday_plan() -> StudyPlan {
        StudyPlan::new(date(2025, 3, 15))
            .practice_test_day(Weekday::Mon)
            .weekday_hours(4.0)
            .weekend_hours(8.0)
            .taper_days(3)
    }

    #[test]
    fn rejects_exam_today_or_earlier() {
        let plan = monday_plan();
        assert!(matches!(
            ScheduleBuilder::new(&plan, date(2025, 3, 15)),
            Err(ValidationError::TestDateNotInFuture { .. })
        ));
        assert!(ScheduleBuilder::new(&plan, date(2025, 3, 20)).is_err());
    }

    #[test]
    fn exam_tomorrow_is_single_taper_day() {
        let plan = monday_plan();
        let days = ScheduleBuilder::new(&plan, date(2025, 3, 14)).unwrap().build();
        assert_eq!(days.len(), 1);
        assert_eq!(days[0].calendar_date, date(2025, 3, 15));
        assert_eq!(days[0].days_left, 1);
        assert_eq!(days[0].review.as_deref(), Some(TAPER_LABEL));
    }

    #[test]
    fn total_days_counts_through_exam_date() {
        let plan = monday_plan();
        let builder = ScheduleBuilder::new(&plan, today()).unwrap();
        assert_eq!(builder.total_days(), 10);
        let days = builder.build();
        assert_eq!(days.first().map(|d| d.calendar_date), Some(date(2025, 3, 6)));
        assert_eq!(days.last().map(|d| d.calendar_date), Some(date(2025, 3, 15)));
    }

    #[test]
    fn first_study_day_gets_question_bank_and_cars() {
        let plan = monday_plan();
        let days = ScheduleBuilder::new(&plan, today()).unwrap().build();
        let thursday = &days[0];
        assert_eq!(thursday.day_of_week, Weekday::Thu);
        assert_eq!(
            thursday.practice_questions.as_deref(),
            Some("AAMC Question Bank Questions - 100 Questions")
        );
        assert_eq!(thursday.cars.as_deref(), Some("AAMC CARS Pack 1/2 - 3 passages"));
        assert_eq!(thursday.review.as_deref(), Some(REVIEW_LABEL));
    }

    #[test]
    fn three_hour_day_spends_everything_on_question_bank() {
        // 3h weekday: the 3h question bank leaves nothing for CARS
        let plan = monday_plan().weekday_hours(3.0);
        let days = ScheduleBuilder::new(&plan, today()).unwrap().build();
        assert!(days[0].practice_questions.is_some());
        assert_eq!(days[0].cars, None);
    }

    #[test]
    fn short_day_skips_question_banks_but_gets_cars() {
        let plan = monday_plan().weekday_hours(1.0);
        let days = ScheduleBuilder::new(&plan, today()).unwrap().build();
        assert_eq!(days[0].practice_questions, None);
        assert_eq!(days[0].cars.as_deref(), Some("AAMC CARS Pack 1/2 - 3 passages"));
    }

    #[test]
    fn practice_test_weekday_falls_through_when_tests_exhausted() {
        let plan = monday_plan();
        let catalog = MaterialCatalog::from_items(&[
            MaterialItem::new("Only Bank", MaterialCategory::PracticeQuestions, 1, 2.0),
            MaterialItem::new("Other Bank", MaterialCategory::PracticeQuestions, 2, 2.0),
            MaterialItem::new("Third Bank", MaterialCategory::PracticeQuestions, 3, 2.0),
            MaterialItem::new("Fourth Bank", MaterialCategory::PracticeQuestions, 4, 2.0),
            MaterialItem::new("Fifth Bank", MaterialCategory::PracticeQuestions, 5, 2.0),
        ]);
        let days = ScheduleBuilder::new(&plan, today())
            .unwrap()
            .with_catalog(catalog)
            .build();

        let monday = days.iter().find(|d| d.day_of_week == Weekday::Mon).unwrap();
        assert!(!monday.is_practice_test);
        assert_eq!(monday.practice_questions.as_deref(), Some("Fifth Bank"));

        let tuesday = days.iter().find(|d| d.day_of_week == Weekday::Tue).unwrap();
        assert!(!tuesday.is_review_day);
    }

    #[test]
    fn empty_catalog_still_labels_review() {
        let plan = monday_plan();
        let days = ScheduleBuilder::new(&plan, today())
            .unwrap()
            .with_catalog(MaterialCatalog::from_items(&[]))
            .build();
        assert_eq!(days.len(), 10);
        for day in days.iter().filter(|d| d.days_left > 3) {
            assert_eq!(day.practice_questions, None);
            assert_eq!(day.cars, None);
            assert_eq!(day.review.as_deref(), Some(REVIEW_LABEL));
        }
    }
}
