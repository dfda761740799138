//! Starter plan written by `studyplan init`

use chrono::NaiveDate;

/// Render a commented TOML plan for the given exam date
pub fn template_plan(test_date: NaiveDate) -> String {
    format!(
        r#"# MCAT study plan
#
# Generate a calendar with:
#   studyplan generate plan.toml

# Exam date (YYYY-MM-DD); the calendar runs from tomorrow through this day
test_date = "{test_date}"

# Study hours per day (1-16)
weekday_hours = 4
weekend_hours = 8

# Weekdays reserved for full-length practice tests
practice_test_days = ["saturday"]

# Light-review days before the exam (2-4)
taper_days = 3

# "excel" or "google-sheets"
output_format = "excel"

# Days off, matched by month and day
# [[blackout_dates]]
# date = "{test_date}"
# reason = "Family event"
"#,
        test_date = test_date.format("%Y-%m-%d"),
    )
}
