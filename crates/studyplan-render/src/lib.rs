//! # studyplan-render
//!
//! Rendering backends for generated study calendars.
//!
//! This crate provides:
//! - Excel workbooks with color-coded day rows
//! - Plain-text tables for console output
//! - Row classification shared by both
//!
//! ## Example
//!
//! ```rust,ignore
//! use studyplan_core::Renderer;
//! use studyplan_render::{ExcelRenderer, TextRenderer};
//!
//! let xlsx_bytes = ExcelRenderer::new().render(&plan, &preview)?;
//! std::fs::write("mcat-study-plan.xlsx", xlsx_bytes)?;
//!
//! print!("{}", TextRenderer::new().render(&plan, &preview)?);
//! ```

pub mod excel;
pub mod style;

pub use excel::{default_file_name, ExcelRenderer};
pub use style::RowStyle;

use std::fmt::Write as _;
use studyplan_core::{RenderError, Renderer, SchedulePreview, StudyPlan};

/// Plain text renderer for console output
#[derive(Clone, Debug)]
pub struct TextRenderer {
    /// Whether to print the summary lines above the table
    pub include_summary: bool,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self {
            include_summary: true,
        }
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print only the table
    pub fn no_summary(mut self) -> Self {
        self.include_summary = false;
        self
    }
}

impl Renderer for TextRenderer {
    type Output = String;

    fn render(&self, plan: &StudyPlan, preview: &SchedulePreview) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_text(&mut out, plan, preview)
            .map_err(|e| RenderError::Format(e.to_string()))?;
        Ok(out)
    }
}

impl TextRenderer {
    fn write_text(
        &self,
        out: &mut String,
        plan: &StudyPlan,
        preview: &SchedulePreview,
    ) -> std::fmt::Result {
        if self.include_summary {
            writeln!(out, "{}", excel::DEFAULT_TITLE)?;
            writeln!(out, "Test Date: {}", plan.test_date.format("%Y-%m-%d"))?;
            writeln!(
                out,
                "Study Hours: {}h weekdays, {}h weekends",
                plan.weekday_hours, plan.weekend_hours
            )?;
            writeln!(
                out,
                "Schedule: {} total days, {} practice tests",
                preview.total_days, preview.practice_test_count
            )?;
            writeln!(out)?;
        }

        writeln!(
            out,
            "{:>4}  {:<2}  {:<5}  {:<9}  {:<44}  {:<32}  Other/Review",
            "Left", "", "Day", "Weekday", "Practice Questions", "CARS"
        )?;
        writeln!(out, "{}", "-".repeat(126))?;

        for day in &preview.schedule {
            let style = RowStyle::for_day(day, plan.taper_days);
            let line = format!(
                "{:>4}  {:<2}  {:<5}  {:<9}  {:<44}  {:<32}  {}",
                day.days_left,
                style.marker(),
                day.date,
                day.day_name(),
                day.practice_questions.as_deref().unwrap_or(""),
                day.cars.as_deref().unwrap_or(""),
                day.review.as_deref().unwrap_or(""),
            );
            writeln!(out, "{}", line.trim_end())?;
        }

        Ok(())
    }
}
