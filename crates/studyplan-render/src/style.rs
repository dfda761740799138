//! Row classification and colors shared by the renderers

use studyplan_core::ScheduleDay;

pub const HEADER_FILL: u32 = 0xE6F0FF;

pub const PRACTICE_TEST_FILL: u32 = 0xFFFF00;
pub const REVIEW_DAY_FILL: u32 = 0xFFCC99;
pub const BLACKOUT_FILL: u32 = 0xD3D3D3;
pub const TAPER_FILL: u32 = 0xE6F3FF;

pub const PRACTICE_TEST_FONT: u32 = 0xFF0000;
pub const REVIEW_DAY_FONT: u32 = 0xFF6600;
pub const QUESTIONS_FONT: u32 = 0x0066CC;
pub const CARS_FONT: u32 = 0x009900;
pub const REVIEW_FONT: u32 = 0x9900CC;

/// Visual class of a schedule row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowStyle {
    PracticeTest,
    ReviewDay,
    Blackout,
    Taper,
    Regular,
}

impl RowStyle {
    /// First match wins: practice test, review day, blackout, taper
    pub fn for_day(day: &ScheduleDay, taper_days: u32) -> Self {
        if day.is_practice_test {
            RowStyle::PracticeTest
        } else if day.is_review_day {
            RowStyle::ReviewDay
        } else if day.is_blackout {
            RowStyle::Blackout
        } else if day.days_left <= taper_days {
            RowStyle::Taper
        } else {
            RowStyle::Regular
        }
    }

    /// Background fill, `None` for plain rows
    pub fn fill(self) -> Option<u32> {
        match self {
            RowStyle::PracticeTest => Some(PRACTICE_TEST_FILL),
            RowStyle::ReviewDay => Some(REVIEW_DAY_FILL),
            RowStyle::Blackout => Some(BLACKOUT_FILL),
            RowStyle::Taper => Some(TAPER_FILL),
            RowStyle::Regular => None,
        }
    }

    /// Font color of the practice-questions cell
    pub fn questions_font(self) -> u32 {
        match self {
            RowStyle::PracticeTest => PRACTICE_TEST_FONT,
            RowStyle::ReviewDay => REVIEW_DAY_FONT,
            _ => QUESTIONS_FONT,
        }
    }

    /// Practice test names are the only bold body text
    pub fn questions_bold(self) -> bool {
        self == RowStyle::PracticeTest
    }

    /// Two-letter tag for plain-text output
    pub fn marker(self) -> &'static str {
        match self {
            RowStyle::PracticeTest => "PT",
            RowStyle::ReviewDay => "RV",
            RowStyle::Blackout => "BO",
            RowStyle::Taper => "TP",
            RowStyle::Regular => "",
        }
    }
}
