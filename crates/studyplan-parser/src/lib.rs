//! # studyplan-parser
//!
//! Loads study plans from files.
//!
//! This crate provides:
//! - TOML plan files (`.toml`, snake_case keys)
//! - JSON plan files (`.json`, the camelCase request body of the web form)
//! - A commented starter plan for `studyplan init`
//!
//! ## Example
//!
//! ```rust
//! use studyplan_parser::parse_toml;
//!
//! let input = r#"
//! test_date = "2025-04-04"
//! weekday_hours = 3
//! weekend_hours = 6
//! practice_test_days = ["saturday"]
//! taper_days = 2
//! "#;
//!
//! let plan = parse_toml(input).unwrap();
//! assert_eq!(plan.taper_days, 2);
//! ```

pub mod template;

pub use template::template_plan;

use std::path::{Path, PathBuf};
use studyplan_core::StudyPlan;
use thiserror::Error;

/// Parsing error
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid TOML plan: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON plan: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// TOML plan file (.toml)
    Toml,
    /// JSON request body (.json)
    Json,
}

/// Detect file format from extension
pub fn detect_format(path: &Path) -> FileFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
        _ => FileFormat::Toml,
    }
}

/// Parse a plan from TOML
pub fn parse_toml(input: &str) -> Result<StudyPlan, ParseError> {
    Ok(toml::from_str(input)?)
}

/// Parse a plan from JSON
pub fn parse_json(input: &str) -> Result<StudyPlan, ParseError> {
    Ok(serde_json::from_str(input)?)
}

/// Parse a plan in the given format
pub fn parse_str(input: &str, format: FileFormat) -> Result<StudyPlan, ParseError> {
    match format {
        FileFormat::Toml => parse_toml(input),
        FileFormat::Json => parse_json(input),
    }
}

/// Parse a plan file from a path (auto-detects format)
pub fn parse_file(path: &Path) -> Result<StudyPlan, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content, detect_format(path))
}
