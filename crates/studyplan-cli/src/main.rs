//! studyplan CLI - MCAT Study Calendar Generator
//!
//! Command-line interface for checking plans, previewing and rendering calendars.

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use studyplan_core::{OutputFormat, Planner, Renderer, SchedulePreview, StudyPlan};
use studyplan_render::{default_file_name, ExcelRenderer, TextRenderer};
use studyplan_solver::StudyPlanner;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exam date written by `init` when none is given
const DEFAULT_LEAD_DAYS: u64 = 90;

#[derive(Parser)]
#[command(name = "studyplan")]
#[command(author, version, about = "MCAT study calendar generator", long_about = None)]
struct Cli {
    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and validate a plan file
    Check {
        /// Plan file (.toml or .json)
        #[arg(value_name = "PLAN")]
        file: PathBuf,

        /// Generation date (YYYY-MM-DD), defaults to the local date
        #[arg(long, value_name = "DATE", env = "STUDYPLAN_TODAY")]
        today: Option<NaiveDate>,
    },

    /// Show calendar statistics without writing a file
    Preview {
        /// Plan file (.toml or .json)
        #[arg(value_name = "PLAN")]
        file: PathBuf,

        /// Generation date (YYYY-MM-DD), defaults to the local date
        #[arg(long, value_name = "DATE", env = "STUDYPLAN_TODAY")]
        today: Option<NaiveDate>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = PreviewFormat::Text)]
        format: PreviewFormat,
    },

    /// Render the calendar
    Generate {
        /// Plan file (.toml or .json)
        #[arg(value_name = "PLAN")]
        file: PathBuf,

        /// Generation date (YYYY-MM-DD), defaults to the local date
        #[arg(long, value_name = "DATE", env = "STUDYPLAN_TODAY")]
        today: Option<NaiveDate>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = GenerateFormat::Xlsx)]
        format: GenerateFormat,

        /// Output file (xlsx defaults to mcat-study-plan-<today>.xlsx, others to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a starter plan file
    Init {
        /// Plan name, used as the file name
        #[arg(default_value = "plan")]
        name: String,

        /// Directory to create the file in
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Exam date (YYYY-MM-DD), defaults to 90 days from today
        #[arg(long, value_name = "DATE")]
        test_date: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PreviewFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GenerateFormat {
    Xlsx,
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Check { file, today } => cmd_check(&file, resolve_today(today)),
        Commands::Preview {
            file,
            today,
            format,
        } => cmd_preview(&file, resolve_today(today), format),
        Commands::Generate {
            file,
            today,
            format,
            output,
        } => cmd_generate(&file, resolve_today(today), format, output),
        Commands::Init {
            name,
            output,
            test_date,
        } => cmd_init(&name, &output, test_date),
    }
}

/// Install the stderr subscriber; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

/// Parse and validate a plan file
fn load_plan(file: &Path, today: NaiveDate) -> Result<StudyPlan> {
    let plan = studyplan_parser::parse_file(file)
        .with_context(|| format!("Failed to load {}", file.display()))?;
    plan.validate(today)
        .with_context(|| format!("Invalid plan in {}", file.display()))?;
    debug!(file = %file.display(), %today, "plan loaded");
    Ok(plan)
}

fn generate_preview(file: &Path, today: NaiveDate) -> Result<(StudyPlan, SchedulePreview)> {
    let plan = load_plan(file, today)?;
    let preview = StudyPlanner::new()
        .plan(&plan, today)
        .context("Failed to generate schedule")?;
    Ok((plan, preview))
}

fn cmd_check(file: &Path, today: NaiveDate) -> Result<()> {
    let plan = load_plan(file, today)?;

    let test_days: Vec<_> = plan
        .practice_test_days
        .iter()
        .map(|day| studyplan_core::weekday::full_name(*day))
        .collect();

    println!("Plan: {}", file.display());
    println!(
        "  Test date:      {} ({} days away)",
        plan.test_date,
        plan.days_until_test(today)
    );
    println!(
        "  Study hours:    {}h weekdays, {}h weekends",
        plan.weekday_hours, plan.weekend_hours
    );
    println!("  Practice tests: {}", test_days.join(", "));
    println!("  Blackout days:  {}", plan.blackout_dates.len());
    println!("  Taper days:     {}", plan.taper_days);
    println!("OK");
    Ok(())
}

fn cmd_preview(file: &Path, today: NaiveDate, format: PreviewFormat) -> Result<()> {
    let (_, preview) = generate_preview(file, today)?;

    match format {
        PreviewFormat::Json => {
            let json = serde_json::to_string_pretty(&preview).context("Failed to encode preview")?;
            println!("{json}");
        }
        PreviewFormat::Text => {
            println!("Total days:      {}", preview.total_days);
            println!("Practice tests:  {}", preview.practice_test_count);
            println!("Study hours:     {}", preview.total_study_hours);
            if let (Some(first), Some(last)) = (preview.schedule.first(), preview.schedule.last()) {
                println!("Range:           {} - {}", first.date, last.date);
            }
        }
    }
    Ok(())
}

fn cmd_generate(
    file: &Path,
    today: NaiveDate,
    format: GenerateFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let (plan, preview) = generate_preview(file, today)?;

    let rendered = match format {
        GenerateFormat::Xlsx => {
            if plan.output_format == OutputFormat::GoogleSheets {
                warn!("Google Sheets export is not built in; writing an Excel file to import");
            }
            let bytes = ExcelRenderer::new()
                .render(&plan, &preview)
                .context("Failed to render Excel workbook")?;
            let path = output.unwrap_or_else(|| PathBuf::from(default_file_name(today)));
            std::fs::write(&path, bytes)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), days = preview.total_days, "workbook written");
            println!("Created: {}", path.display());
            return Ok(());
        }
        GenerateFormat::Text => TextRenderer::new()
            .render(&plan, &preview)
            .context("Failed to render text")?,
        GenerateFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&preview).context("Failed to encode preview")?;
            json.push('\n');
            json
        }
    };

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Created: {}", path.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}

fn cmd_init(name: &str, dir: &Path, test_date: Option<NaiveDate>) -> Result<()> {
    let path = dir.join(format!("{}.toml", sanitize_file_stem(name)));
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    let test_date = match test_date {
        Some(date) => date,
        None => Local::now()
            .date_naive()
            .checked_add_days(chrono::Days::new(DEFAULT_LEAD_DAYS))
            .context("Default exam date is out of range")?,
    };

    std::fs::write(&path, studyplan_parser::template_plan(test_date))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created: {}", path.display());
    println!("Next: edit the plan, then run `studyplan generate {}`", path.display());
    Ok(())
}

/// Keep ASCII letters, digits, `-` and `_`; anything else becomes `_`
fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
