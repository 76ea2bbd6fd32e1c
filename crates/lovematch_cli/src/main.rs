//! Command-line front end for the compatibility engine.
//!
//! # Responsibility
//! - Parse arguments and own the process-level inputs (system RNG, today).
//! - Print results as text or JSON.
//! - Optionally start file logging before any scoring happens.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use log::info;
use lovematch_core::text::canonical::check_name;
use lovematch_core::{
    analyze_birth_dates, analyze_zodiac, canonicalize, default_log_level, engine_version,
    init_logging, score_birth_dates_on, score_names_with, score_zodiac_with, BirthDate,
    CompatibilityResult, Sign, ValidationError,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(
    name = "lovematch",
    version = engine_version(),
    about = "Deterministic compatibility scores for names, signs and birth dates"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Seed for verdict selection; scores never depend on it
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// trace|debug|info|warn|error (default depends on build mode)
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Directory for rotating log files; logging stays off when omitted
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Cmd {
    /// Score two names
    Names { first: String, second: String },
    /// Score two zodiac signs (English names, any case)
    Zodiac { first: Sign, second: Sign },
    /// Score two birth dates given as YYYY-MM-DD
    Dates { first: NaiveDate, second: NaiveDate },
    /// Check whether a name is accepted and show its canonical form
    Validate { name: String },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    if let Some(dir) = &cli.log_dir {
        start_logging(cli.log_level.as_deref(), dir)?;
    }
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.cmd {
        Cmd::Names { first, second } => {
            let result = score_names_with(&first, &second, &mut rng)
                .map_err(|err| rejected("names", err))?;
            print_result(&result, None, cli.json)?;
        }
        Cmd::Zodiac { first, second } => {
            let result = score_zodiac_with(first, second, &mut rng);
            let analysis = serde_json::to_value(analyze_zodiac(first, second))?;
            print_result(&result, Some(analysis), cli.json)?;
        }
        Cmd::Dates { first, second } => {
            let today = Local::now().date_naive();
            let result = score_birth_dates_on(first, second, today, &mut rng)
                .map_err(|err| rejected("dates", err))?;
            let first = BirthDate::validate(first, today, 1)?;
            let second = BirthDate::validate(second, today, 2)?;
            let analysis = serde_json::to_value(analyze_birth_dates(first, second))?;
            print_result(&result, Some(analysis), cli.json)?;
        }
        Cmd::Validate { name } => return Ok(validate(&name, cli.json)),
    }
    Ok(ExitCode::SUCCESS)
}

fn start_logging(level: Option<&str>, dir: &Path) -> Result<()> {
    let dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .context("resolve current directory for --log-dir")?
            .join(dir)
    };
    let dir_str = dir
        .to_str()
        .with_context(|| format!("log directory is not valid UTF-8: {dir:?}"))?;
    let level = level.unwrap_or_else(|| default_log_level());
    init_logging(level, dir_str).with_context(|| format!("start logging in {}", dir.display()))?;
    info!(
        "event=cli_start module=cli status=ok engine_version={}",
        engine_version()
    );
    Ok(())
}

fn rejected(command: &str, err: ValidationError) -> anyhow::Error {
    anyhow::Error::new(err).context(format!("{command}: input rejected"))
}

fn print_result(
    result: &CompatibilityResult,
    analysis: Option<serde_json::Value>,
    json: bool,
) -> Result<()> {
    if json {
        let mut body = serde_json::json!({ "result": result });
        if let Some(analysis) = analysis {
            body["analysis"] = analysis;
        }
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    println!("{}% {} ({:?})", result.score, result.emoji, result.band);
    println!("{}", result.message);
    for (metric, value) in result.breakdown.iter() {
        println!("  {:<22} {:>5.1}", metric.label(), value);
    }
    if result.is_degraded() {
        println!("  (hash-only score: names had no letters to compare)");
    }
    if let Some(serde_json::Value::Object(fields)) = analysis {
        for (key, value) in fields {
            match value {
                serde_json::Value::String(text) => println!("  {key}: {text}"),
                other => println!("  {key}: {other}"),
            }
        }
    }
    Ok(())
}

fn validate(name: &str, json: bool) -> ExitCode {
    let verdict = check_name(name, 1);
    let canonical = canonicalize(name);
    if json {
        println!(
            "{}",
            serde_json::json!({
                "valid": verdict.is_ok(),
                "canonical": canonical,
                "error": verdict.as_ref().err().map(ValidationError::code),
            })
        );
    } else {
        match &verdict {
            Ok(()) => println!("valid canonical={canonical}"),
            Err(err) => println!("invalid: {err}"),
        }
    }
    if verdict.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
