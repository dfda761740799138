//! Excel study calendar renderer
//!
//! Generates a single-sheet XLSX workbook:
//!
//! ```text
//! Sheet: MCAT Study Plan
//! MCAT Study Plan
//! Test Date: 2025-03-15
//! Study Hours: 4h weekdays, 8h weekends
//! Schedule: 10 total days, 1 practice tests
//!
//! | Days Left | Day  | Day of Week | Practice Questions      | CARS                  | Other/Review      |
//! |-----------|------|-------------|-------------------------|-----------------------|-------------------|
//! | 10        | 3/6  | Thursday    | AAMC Question Bank ...  | AAMC CARS Pack 1/2 .. | Anki Review Cards |
//! | 6         | 3/10 | Monday      | AAMC Sample Test        |                       | Anki Review Cards |
//! ```
//!
//! Rows are filled by day type (practice test, post-test review, blackout,
//! taper) and the material columns carry their own font colors.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use studyplan_core::{RenderError, Renderer, ScheduleDay, SchedulePreview, StudyPlan};

use crate::style::{RowStyle, CARS_FONT, HEADER_FILL, REVIEW_FONT};

/// Default worksheet name and title line
pub const DEFAULT_TITLE: &str = "MCAT Study Plan";

const MIN_ROW_HEIGHT: f64 = 20.0;
const LINE_HEIGHT: f64 = 15.0;
const TITLE_ROW_HEIGHT: f64 = 25.0;

/// Summary block rows, including the blank spacer
const SUMMARY_ROWS: u32 = 5;

/// Calendar columns in sheet order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Column {
    DaysLeft,
    Day,
    DayOfWeek,
    PracticeQuestions,
    Cars,
    Review,
}

impl Column {
    const ALL: [Column; 6] = [
        Column::DaysLeft,
        Column::Day,
        Column::DayOfWeek,
        Column::PracticeQuestions,
        Column::Cars,
        Column::Review,
    ];

    fn index(self) -> u16 {
        self as u16
    }

    fn header(self) -> &'static str {
        match self {
            Column::DaysLeft => "Days Left",
            Column::Day => "Day",
            Column::DayOfWeek => "Day of Week",
            Column::PracticeQuestions => "Practice Questions",
            Column::Cars => "CARS",
            Column::Review => "Other/Review",
        }
    }

    fn width(self) -> u16 {
        match self {
            Column::DaysLeft => 12,
            Column::Day => 8,
            Column::DayOfWeek => 12,
            Column::PracticeQuestions => 40,
            Column::Cars => 30,
            Column::Review => 20,
        }
    }

    fn centered(self) -> bool {
        matches!(self, Column::DaysLeft | Column::Day | Column::DayOfWeek)
    }

    fn text(self, day: &ScheduleDay) -> Option<String> {
        match self {
            Column::DaysLeft => Some(day.days_left.to_string()),
            Column::Day => Some(day.date.clone()),
            Column::DayOfWeek => Some(day.day_name().to_string()),
            Column::PracticeQuestions => day.practice_questions.clone(),
            Column::Cars => day.cars.clone(),
            Column::Review => day.review.clone(),
        }
    }
}

/// Excel study calendar renderer
#[derive(Clone, Debug)]
pub struct ExcelRenderer {
    /// Worksheet name and title line
    pub title: String,
    /// Whether to write the summary block above the table
    pub include_summary: bool,
}

impl Default for ExcelRenderer {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            include_summary: true,
        }
    }
}

impl ExcelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set worksheet name and title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Start the sheet at the header row
    pub fn no_summary(mut self) -> Self {
        self.include_summary = false;
        self
    }

    /// Zero-based row of the column headers
    pub fn header_row(&self) -> u32 {
        if self.include_summary {
            SUMMARY_ROWS
        } else {
            0
        }
    }

    /// Generate Excel workbook bytes
    pub fn render_to_bytes(
        &self,
        plan: &StudyPlan,
        preview: &SchedulePreview,
    ) -> Result<Vec<u8>, RenderError> {
        let mut workbook = Workbook::new();
        let formats = ExcelFormats::new();

        let sheet = workbook.add_worksheet();
        sheet
            .set_name(&self.title)
            .map_err(|e| RenderError::Format(e.to_string()))?;

        if self.include_summary {
            self.write_summary(sheet, plan, preview, &formats)?;
        }
        self.write_calendar(sheet, plan, preview, &formats)?;

        let buffer = workbook
            .save_to_buffer()
            .map_err(|e| RenderError::Format(format!("Failed to create Excel: {e}")))?;

        Ok(buffer)
    }

    fn write_summary(
        &self,
        sheet: &mut Worksheet,
        plan: &StudyPlan,
        preview: &SchedulePreview,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        sheet
            .write_with_format(0, 0, self.title.as_str(), &formats.title)
            .map_err(|e| RenderError::Format(e.to_string()))?;

        sheet
            .write_with_format(
                1,
                0,
                format!("Test Date: {}", plan.test_date.format("%Y-%m-%d")),
                &formats.subtitle,
            )
            .map_err(|e| RenderError::Format(e.to_string()))?;
        sheet
            .write(
                2,
                0,
                format!(
                    "Study Hours: {}h weekdays, {}h weekends",
                    plan.weekday_hours, plan.weekend_hours
                ),
            )
            .map_err(|e| RenderError::Format(e.to_string()))?;
        sheet
            .write(
                3,
                0,
                format!(
                    "Schedule: {} total days, {} practice tests",
                    preview.total_days, preview.practice_test_count
                ),
            )
            .map_err(|e| RenderError::Format(e.to_string()))?;

        for row in 0..SUMMARY_ROWS {
            sheet.set_row_height(row, summary_row_height(row)).ok();
        }

        Ok(())
    }

    fn write_calendar(
        &self,
        sheet: &mut Worksheet,
        plan: &StudyPlan,
        preview: &SchedulePreview,
        formats: &ExcelFormats,
    ) -> Result<(), RenderError> {
        let header_row = self.header_row();

        for column in Column::ALL {
            sheet
                .write_with_format(header_row, column.index(), column.header(), &formats.header)
                .map_err(|e| RenderError::Format(e.to_string()))?;
            sheet.set_column_width(column.index(), column.width()).ok();
        }
        sheet.set_row_height(header_row, MIN_ROW_HEIGHT).ok();
        sheet.set_freeze_panes(header_row + 1, 0).ok();

        for (row, day) in (header_row + 1..).zip(&preview.schedule) {
            let style = RowStyle::for_day(day, plan.taper_days);

            for column in Column::ALL {
                let format = body_format(style, column);
                let col = column.index();
                let written = match (column, column.text(day)) {
                    (Column::DaysLeft, _) => {
                        sheet.write_with_format(row, col, f64::from(day.days_left), &format)
                    }
                    (_, Some(text)) => sheet.write_with_format(row, col, text, &format),
                    (_, None) => sheet.write_blank(row, col, &format),
                };
                written.map_err(|e| RenderError::Format(e.to_string()))?;
            }

            sheet.set_row_height(row, row_height(day)).ok();
        }

        Ok(())
    }
}

/// File name offered for a calendar generated on `today`
pub fn default_file_name(today: NaiveDate) -> String {
    format!("mcat-study-plan-{}.xlsx", today.format("%Y-%m-%d"))
}

/// Height that fits the longest wrapped cell, never below the minimum
fn row_height(day: &ScheduleDay) -> f64 {
    let lines = Column::ALL
        .iter()
        .filter_map(|column| {
            column
                .text(day)
                .map(|text| text.chars().count().div_ceil(usize::from(column.width())))
        })
        .max()
        .unwrap_or(1);
    (lines as f64 * LINE_HEIGHT).max(MIN_ROW_HEIGHT)
}

fn summary_row_height(row: u32) -> f64 {
    if row == 0 {
        TITLE_ROW_HEIGHT
    } else {
        MIN_ROW_HEIGHT
    }
}

fn body_format(style: RowStyle, column: Column) -> Format {
    let mut format = Format::new()
        .set_border(FormatBorder::Thin)
        .set_text_wrap()
        .set_align(FormatAlign::VerticalCenter);

    if column.centered() {
        format = format.set_align(FormatAlign::Center);
    }
    if let Some(fill) = style.fill() {
        format = format.set_background_color(fill);
    }

    match column {
        Column::PracticeQuestions => {
            format = format.set_font_color(style.questions_font());
            if style.questions_bold() {
                format = format.set_bold();
            }
        }
        Column::Cars => format = format.set_font_color(CARS_FONT),
        Column::Review => format = format.set_font_color(REVIEW_FONT),
        _ => {}
    }

    format
}

/// Reusable Excel formats
struct ExcelFormats {
    title: Format,
    subtitle: Format,
    header: Format,
}

impl ExcelFormats {
    fn new() -> Self {
        Self {
            title: Format::new().set_bold().set_font_size(16),
            subtitle: Format::new().set_bold().set_font_size(12),
            header: Format::new()
                .set_bold()
                .set_font_size(12)
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_background_color(HEADER_FILL)
                .set_border(FormatBorder::Thin),
        }
    }
}

impl Renderer for ExcelRenderer {
    type Output = Vec<u8>;

    fn render(&self, plan: &StudyPlan, preview: &SchedulePreview) -> Result<Vec<u8>, RenderError> {
        if preview.schedule.is_empty() {
            return Err(RenderError::InvalidData("No schedule days to render".into()));
        }
        self.render_to_bytes(plan, preview)
    }
}
