//! # studyplan-core
//!
//! Core domain model and traits for the studyplan calendar generator.
//!
//! This crate provides:
//! - Domain types: `StudyPlan`, `MaterialItem`, `ScheduleDay`, `SchedulePreview`
//! - Core traits: `Planner`, `Renderer`
//! - Error types
//!
//! ## Example
//!
//! ```rust
//! use chrono::{NaiveDate, Weekday};
//! use studyplan_core::StudyPlan;
//!
//! let plan = StudyPlan::new(NaiveDate::from_ymd_opt(2025, 4, 4).unwrap())
//!     .weekday_hours(3.0)
//!     .weekend_hours(6.0)
//!     .practice_test_day(Weekday::Sat)
//!     .taper_days(2);
//!
//! let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
//! assert!(plan.validate(today).is_ok());
//! assert_eq!(plan.days_until_test(today), 30);
//! ```

pub mod weekday;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Constants
// ============================================================================

/// Review label on every regular, practice-test and post-test review day
pub const REVIEW_LABEL: &str = "Anki Review Cards";

/// Review label on blackout days
pub const BLACKOUT_LABEL: &str = "Blackout Day";

/// Review label on taper days
pub const TAPER_LABEL: &str = "Light Review - Taper Period";

/// Practice-questions entry on the day after a full-length test
pub const FULL_LENGTH_REVIEW: &str = "Review Full Length";

pub const MIN_DAILY_HOURS: f64 = 1.0;
pub const MAX_DAILY_HOURS: f64 = 16.0;

pub const MIN_TAPER_DAYS: u32 = 2;
pub const MAX_TAPER_DAYS: u32 = 4;
pub const DEFAULT_TAPER_DAYS: u32 = 3;

/// Format a date the way schedule rows show it: month/day without padding ("3/6")
pub fn month_day(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

// ============================================================================
// Study Plan (input)
// ============================================================================

/// Parameters for one schedule generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    /// Exam date
    #[serde(alias = "test_date")]
    pub test_date: NaiveDate,
    /// Hours available Monday through Friday
    #[serde(alias = "weekday_hours", default = "default_weekday_hours")]
    pub weekday_hours: f64,
    /// Hours available Saturday and Sunday
    #[serde(alias = "weekend_hours", default = "default_weekend_hours")]
    pub weekend_hours: f64,
    /// Weekdays on which a full-length test may be scheduled
    #[serde(alias = "practice_test_days", default, with = "weekday::plan_list")]
    pub practice_test_days: Vec<Weekday>,
    /// Days with no study
    #[serde(alias = "blackout_dates", default)]
    pub blackout_dates: Vec<BlackoutDate>,
    /// Final days reserved for light review
    #[serde(alias = "taper_days", default = "default_taper_days")]
    pub taper_days: u32,
    /// Requested export target (not used by schedule generation)
    #[serde(alias = "output_format", default)]
    pub output_format: OutputFormat,
}

const fn default_weekday_hours() -> f64 {
    4.0
}

const fn default_weekend_hours() -> f64 {
    8.0
}

const fn default_taper_days() -> u32 {
    DEFAULT_TAPER_DAYS
}

impl StudyPlan {
    /// Create a plan for the given exam date with default hours and no practice days
    pub fn new(test_date: NaiveDate) -> Self {
        Self {
            test_date,
            weekday_hours: default_weekday_hours(),
            weekend_hours: default_weekend_hours(),
            practice_test_days: Vec::new(),
            blackout_dates: Vec::new(),
            taper_days: DEFAULT_TAPER_DAYS,
            output_format: OutputFormat::default(),
        }
    }

    pub fn weekday_hours(mut self, hours: f64) -> Self {
        self.weekday_hours = hours;
        self
    }

    pub fn weekend_hours(mut self, hours: f64) -> Self {
        self.weekend_hours = hours;
        self
    }

    /// Add a practice-test weekday (duplicates are ignored)
    pub fn practice_test_day(mut self, day: Weekday) -> Self {
        if !self.practice_test_days.contains(&day) {
            self.practice_test_days.push(day);
        }
        self
    }

    /// Add a blackout date without a reason
    pub fn blackout(mut self, date: NaiveDate) -> Self {
        self.blackout_dates.push(BlackoutDate::new(date));
        self
    }

    /// Add a blackout date with a reason
    pub fn blackout_with_reason(mut self, date: NaiveDate, reason: impl Into<String>) -> Self {
        self.blackout_dates
            .push(BlackoutDate::new(date).reason(reason));
        self
    }

    pub fn taper_days(mut self, days: u32) -> Self {
        self.taper_days = days;
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Calendar days from `today` to the exam (the exam day counts, today does not)
    pub fn days_until_test(&self, today: NaiveDate) -> i64 {
        (self.test_date - today).num_days()
    }

    /// Planned study hours for a weekday
    pub fn available_hours(&self, day: Weekday) -> f64 {
        if weekday::is_weekend(day) {
            self.weekend_hours
        } else {
            self.weekday_hours
        }
    }

    pub fn is_practice_test_day(&self, day: Weekday) -> bool {
        self.practice_test_days.contains(&day)
    }

    /// Whether `date` falls on a blackout entry.
    ///
    /// Matching compares month and day only, so an entry blacks out that date in every year.
    pub fn is_blackout(&self, date: NaiveDate) -> bool {
        self.blackout_dates
            .iter()
            .any(|b| b.date.month() == date.month() && b.date.day() == date.day())
    }

    /// Check every request-level constraint against the generation date
    pub fn validate(&self, today: NaiveDate) -> Result<(), ValidationError> {
        if self.test_date <= today {
            return Err(ValidationError::TestDateNotInFuture {
                test_date: self.test_date,
                today,
            });
        }
        if self.practice_test_days.is_empty() {
            return Err(ValidationError::NoPracticeTestDays);
        }
        check_hours("weekday hours", self.weekday_hours)?;
        check_hours("weekend hours", self.weekend_hours)?;
        if !(MIN_TAPER_DAYS..=MAX_TAPER_DAYS).contains(&self.taper_days) {
            return Err(ValidationError::TaperDaysOutOfRange(self.taper_days));
        }
        Ok(())
    }
}

fn check_hours(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if (MIN_DAILY_HOURS..=MAX_DAILY_HOURS).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::HoursOutOfRange { field, value })
    }
}

/// A day excluded from studying
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutDate {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl BlackoutDate {
    pub fn new(date: NaiveDate) -> Self {
        Self { date, reason: None }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

/// Export target requested with a plan
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Excel,
    GoogleSheets,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Excel => write!(f, "excel"),
            OutputFormat::GoogleSheets => write!(f, "google-sheets"),
        }
    }
}

// ============================================================================
// Materials
// ============================================================================

/// Slot a study material is eligible for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialCategory {
    PracticeQuestions,
    Cars,
    PracticeTest,
    Review,
}

impl MaterialCategory {
    pub const fn as_str(self) -> &'static str {
        match self {
            MaterialCategory::PracticeQuestions => "practice_questions",
            MaterialCategory::Cars => "cars",
            MaterialCategory::PracticeTest => "practice_test",
            MaterialCategory::Review => "review",
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consumable unit of study content
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialItem {
    pub name: &'static str,
    pub category: MaterialCategory,
    /// Lower values are consumed first
    pub priority: u32,
    pub estimated_hours: f64,
    /// Occupies a whole study day
    pub is_full_day: bool,
}

impl MaterialItem {
    pub const fn new(
        name: &'static str,
        category: MaterialCategory,
        priority: u32,
        estimated_hours: f64,
    ) -> Self {
        Self {
            name,
            category,
            priority,
            estimated_hours,
            is_full_day: false,
        }
    }

    pub const fn full_day(mut self) -> Self {
        self.is_full_day = true;
        self
    }
}

// ============================================================================
// Schedule (Result)
// ============================================================================

/// How a generated day was classified
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DayKind {
    Blackout,
    Taper,
    PracticeTest,
    PostTestReview,
    Study,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DayKind::Blackout => "blackout",
            DayKind::Taper => "taper",
            DayKind::PracticeTest => "practice-test",
            DayKind::PostTestReview => "post-test-review",
            DayKind::Study => "study",
        };
        f.write_str(s)
    }
}

/// One row of the generated calendar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDay {
    /// Month/day label, e.g. "3/6"
    pub date: String,
    /// Full date behind `date`; kept out of the record payload
    #[serde(skip)]
    pub calendar_date: NaiveDate,
    #[serde(with = "weekday::full")]
    pub day_of_week: Weekday,
    /// Countdown to the exam; the exam day itself is 1
    pub days_left: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub practice_questions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cars: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_practice_test: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_review_day: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_blackout: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl ScheduleDay {
    /// Create an empty record for `date`
    pub fn new(date: NaiveDate, days_left: u32) -> Self {
        Self {
            date: month_day(date),
            calendar_date: date,
            day_of_week: date.weekday(),
            days_left,
            practice_questions: None,
            cars: None,
            review: None,
            is_practice_test: false,
            is_review_day: false,
            is_blackout: false,
        }
    }

    /// Full English weekday name ("Monday")
    pub fn day_name(&self) -> &'static str {
        weekday::full_name(self.day_of_week)
    }

    pub fn is_weekend(&self) -> bool {
        weekday::is_weekend(self.day_of_week)
    }

    /// Classify this record; taper is recognized by countdown, the rest by flags
    pub fn kind(&self, taper_days: u32) -> DayKind {
        if self.is_blackout {
            DayKind::Blackout
        } else if self.days_left <= taper_days {
            DayKind::Taper
        } else if self.is_practice_test {
            DayKind::PracticeTest
        } else if self.is_review_day {
            DayKind::PostTestReview
        } else {
            DayKind::Study
        }
    }

    /// Names of catalog materials consumed on this day
    pub fn consumed_materials(&self) -> impl Iterator<Item = &str> {
        let questions = self
            .practice_questions
            .as_deref()
            .filter(|name| *name != FULL_LENGTH_REVIEW);
        questions.into_iter().chain(self.cars.as_deref())
    }
}

/// Generated calendar plus summary statistics
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulePreview {
    pub total_days: usize,
    pub practice_test_count: usize,
    /// Planned hours over non-blackout, non-taper days
    pub total_study_hours: f64,
    pub schedule: Vec<ScheduleDay>,
}

// ============================================================================
// Traits
// ============================================================================

/// Schedule generation
pub trait Planner {
    /// Generate the calendar for `plan` as seen from `today`
    fn plan(&self, plan: &StudyPlan, today: NaiveDate) -> Result<SchedulePreview, ValidationError>;
}

/// Output rendering
pub trait Renderer {
    type Output;

    /// Render a generated calendar to the output format
    fn render(
        &self,
        plan: &StudyPlan,
        preview: &SchedulePreview,
    ) -> Result<Self::Output, RenderError>;
}

// ============================================================================
// Errors
// ============================================================================

/// Rejected plan parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Test date must be in the future (test date {test_date}, today {today})")]
    TestDateNotInFuture {
        test_date: NaiveDate,
        today: NaiveDate,
    },

    #[error("Please select at least one practice test day")]
    NoPracticeTestDays,

    #[error("{field} must be between 1 and 16, got {value}")]
    HoursOutOfRange { field: &'static str, value: f64 },

    #[error("Taper days must be between 2 and 4, got {0}")]
    TaperDaysOutOfRange(u32),
}

/// Rendering error
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format error: {0}")]
    Format(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

// ============================================================================
// Tests
// ============================================================================
