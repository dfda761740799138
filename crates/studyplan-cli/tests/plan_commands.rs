//! End-to-end tests for `check`, `preview` and `generate`
//!
//! All runs pin `--today 2025-03-05` (a Wednesday) so weekday-dependent
//! output is stable.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

const TODAY: &str = "2025-03-05";

const TEN_DAY_PLAN: &str = r#"
test_date = "2025-03-15"
weekday_hours = 4
weekend_hours = 8
practice_test_days = ["monday"]
taper_days = 3
"#;

fn studyplan_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_studyplan"))
}

fn write_plan(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

fn run(args: &[&str], plan: &Path) -> Output {
    Command::new(studyplan_binary())
        .arg(args[0])
        .arg(plan)
        .args(&args[1..])
        .args(["--today", TODAY])
        .env_remove("STUDYPLAN_TODAY")
        .output()
        .expect("failed to execute studyplan")
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_accepts_valid_plan() {
    let (_dir, plan) = write_plan("plan.toml", TEN_DAY_PLAN);
    let output = run(&["check"], &plan);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("10 days away"));
    assert!(stdout.contains("4h weekdays, 8h weekends"));
    assert!(stdout.contains("Monday"));
    assert!(stdout.contains("OK"));
}

#[test]
fn check_rejects_out_of_range_hours() {
    let (_dir, plan) = write_plan(
        "plan.toml",
        "test_date = \"2025-03-15\"\nweekday_hours = 20\npractice_test_days = [\"monday\"]\n",
    );
    let output = run(&["check"], &plan);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("weekday hours must be between 1 and 16"));
}

#[test]
fn check_rejects_missing_practice_test_days() {
    let (_dir, plan) = write_plan("plan.toml", "test_date = \"2025-03-15\"\n");
    let output = run(&["check"], &plan);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please select at least one practice test day"));
}

#[test]
fn check_rejects_past_exam() {
    let (_dir, plan) = write_plan(
        "plan.toml",
        "test_date = \"2025-03-05\"\npractice_test_days = [\"monday\"]\n",
    );
    let output = run(&["check"], &plan);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Test date must be in the future"));
}

#[test]
fn check_reports_missing_file() {
    let dir = tempdir().unwrap();
    let output = run(&["check"], &dir.path().join("missing.toml"));

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.toml"));
}

// =============================================================================
// preview
// =============================================================================

#[test]
fn preview_text_shows_totals() {
    let (_dir, plan) = write_plan("plan.toml", TEN_DAY_PLAN);
    let output = run(&["preview"], &plan);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total days:      10"));
    assert!(stdout.contains("Practice tests:  1"));
    assert!(stdout.contains("Study hours:     36"));
    assert!(stdout.contains("Range:           3/6 - 3/15"));
}

#[test]
fn preview_json_matches_api_payload() {
    let (_dir, plan) = write_plan(
        "plan.json",
        r#"{"testDate": "2025-03-15", "weekdayHours": 4, "weekendHours": 8,
            "practiceTestDays": ["monday"], "taperDays": 3}"#,
    );
    let output = run(&["preview", "--format", "json"], &plan);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["totalDays"], 10);
    assert_eq!(json["practiceTestCount"], 1);
    assert_eq!(json["totalStudyHours"], 36.0);

    let schedule = json["schedule"].as_array().unwrap();
    assert_eq!(schedule.len(), 10);
    assert_eq!(schedule[4]["date"], "3/10");
    assert_eq!(schedule[4]["dayOfWeek"], "Monday");
    assert_eq!(schedule[4]["practiceQuestions"], "AAMC Sample Test");
    assert_eq!(schedule[4]["isPracticeTest"], true);
    assert_eq!(schedule[5]["isReviewDay"], true);
}

// =============================================================================
// generate
// =============================================================================

#[test]
fn generate_writes_xlsx() {
    let (dir, plan) = write_plan("plan.toml", TEN_DAY_PLAN);
    let out = dir.path().join("calendar.xlsx");

    let output = Command::new(studyplan_binary())
        .arg("generate")
        .arg(&plan)
        .args(["--today", TODAY, "-o"])
        .arg(&out)
        .output()
        .expect("failed to execute studyplan");

    assert!(output.status.success());
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK"), "xlsx files are zip archives");
    assert!(String::from_utf8_lossy(&output.stdout).contains("Created:"));
}

#[test]
fn generate_default_xlsx_name_uses_today() {
    let (dir, plan) = write_plan("plan.toml", TEN_DAY_PLAN);

    let output = Command::new(studyplan_binary())
        .current_dir(dir.path())
        .arg("generate")
        .arg(&plan)
        .args(["--today", TODAY])
        .output()
        .expect("failed to execute studyplan");

    assert!(output.status.success());
    assert!(dir.path().join("mcat-study-plan-2025-03-05.xlsx").exists());
}

#[test]
fn generate_text_to_stdout() {
    let (_dir, plan) = write_plan("plan.toml", TEN_DAY_PLAN);
    let output = run(&["generate", "-f", "text"], &plan);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("MCAT Study Plan"));
    assert!(stdout.contains("AAMC Sample Test"));
    assert!(stdout.contains("Review Full Length"));
    assert!(stdout.contains("Light Review - Taper Period"));
}

#[test]
fn generate_json_to_file() {
    let (dir, plan) = write_plan("plan.toml", TEN_DAY_PLAN);
    let out = dir.path().join("calendar.json");

    let output = Command::new(studyplan_binary())
        .arg("generate")
        .arg(&plan)
        .args(["--today", TODAY, "-f", "json", "-o"])
        .arg(&out)
        .output()
        .expect("failed to execute studyplan");

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["totalDays"], 10);
}

#[test]
fn generate_fails_on_invalid_plan() {
    let (dir, plan) = write_plan("plan.toml", "test_date = \"not a date\"\n");
    let out = dir.path().join("calendar.xlsx");

    let output = Command::new(studyplan_binary())
        .arg("generate")
        .arg(&plan)
        .args(["--today", TODAY, "-o"])
        .arg(&out)
        .output()
        .expect("failed to execute studyplan");

    assert_eq!(output.status.code(), Some(1));
    assert!(!out.exists());
}
