//! Deadline diagnostics - Main Entry Point
//!
//! Reads a checklist document and prints its deadline diagnostics.
//! The actual implementation is in the `deadline_diagnostics` library.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::{CommandFactory, Parser, ValueEnum};
use deadline_diagnostics::{Config, DateValidation, DecorationVisitor, Severity, formatting};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Toml,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MinSeverity {
    Error,
    Warning,
    Info,
    Hint,
}

impl From<MinSeverity> for Severity {
    fn from(value: MinSeverity) -> Self {
        match value {
            MinSeverity::Error => Severity::Error,
            MinSeverity::Warning => Severity::Warning,
            MinSeverity::Info => Severity::Information,
            MinSeverity::Hint => Severity::Hint,
        }
    }
}

/// Deadline diagnostics - flag overdue and upcoming dates in markdown checklists
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the checklist document
    file: PathBuf,

    /// Path to a TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD), overrides the configuration
    #[arg(long)]
    today: Option<String>,

    /// Reject out-of-range and past-year dates instead of rolling them over
    #[arg(long)]
    strict: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Least urgent severity to report
    #[arg(long, value_enum, default_value = "hint")]
    min_severity: MinSeverity,

    /// Also print the per-line deadline annotations
    #[arg(long)]
    annotate: bool,

    /// Print the effective configuration as TOML before the report
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    let has_errors = run(&args)?;
    if has_errors {
        std::process::exit(1);
    }
    Ok(())
}

/// Returns whether any overdue deadline was reported
fn run(args: &Args) -> Result<bool> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(today) = &args.today {
        let date = match NaiveDate::parse_from_str(today, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => bail!(
                "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
                today
            ),
        };
        config.today = Some(date);
    }
    if args.strict {
        config.validation = DateValidation::strict;
    }
    if args.print_config {
        println!("{}", config.to_toml()?);
    }

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let path = args.file.display().to_string();

    let mut parser = config.parser();
    let mut visitor = DecorationVisitor::new(Some(parser.today()));
    let mut diagnostics = parser
        .parse_with_visitor(&text, &mut visitor)
        .with_context(|| format!("Failed to parse {}", path))?;
    formatting::apply_severity_filter(&mut diagnostics, args.min_severity.into());

    match args.format {
        Format::Text => {
            print!("{}", formatting::format_diagnostics(&path, &diagnostics));
            if args.annotate {
                print!("{}", formatting::format_decorations(visitor.decorations()));
            }
        }
        Format::Toml => print!(
            "{}",
            formatting::format_diagnostics_toml(&path, &diagnostics)?
        ),
    }

    Ok(diagnostics.iter().any(|d| d.severity == Severity::Error))
}
