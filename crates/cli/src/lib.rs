//! # `remotejobs-cli` Library Crate
//!
//! Argument parsing, the interactive job-count prompt, logging setup and the
//! terminal report around [`remotejobs::Scraper`].

use anyhow::{Context, Result};
use clap::Parser;
use remotejobs::constants::{DEFAULT_JOB_LIMIT, DEFAULT_OUTPUT_FILE};
use remotejobs::{NormalizedRecord, ScraperConfig, Scraper};
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about = "Scrape RemoteOK job listings into a CSV file", long_about = None)]
pub struct Cli {
    /// Number of jobs to scrape. Prompted for when omitted; non-numeric input means 100.
    /// Zero or negative keeps every listing.
    #[arg(long, allow_hyphen_values = true)]
    pub limit: Option<String>,
    /// Output CSV file. Overwritten if it exists.
    #[arg(long, short, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// Optional YAML configuration file.
    #[arg(long, env = "REMOTEJOBS_CONFIG")]
    pub config: Option<String>,
}

// --- Logging ---

/// Installs a subscriber that logs to stdout and appends to `log_file`.
///
/// The level defaults to `info` and can be changed through `RUST_LOG`.
pub fn init_logging(log_file: &str) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file '{log_file}'"))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .context("Failed to install tracing subscriber")?;
    Ok(())
}

/// Prints a notice and exits when the user interrupts the run with Ctrl+C.
pub fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        println!("\n🛑 Scraping interrupted by user");
        tracing::warn!("Scraping interrupted by user");
        std::process::exit(130);
    })
    .context("Failed to install the interrupt handler")
}

// --- Job Count Input ---

/// Parses the requested job count. Empty input means the default; anything
/// non-numeric yields `None`.
pub fn parse_limit(input: &str) -> Option<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Some(DEFAULT_JOB_LIMIT);
    }
    input.parse().ok()
}

/// Asks for the job count on `output` and reads one line from `input`.
pub fn prompt_limit<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    write!(
        output,
        "Enter number of jobs to scrape (default {DEFAULT_JOB_LIMIT}): "
    )?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

fn resolve_limit(raw: Option<String>) -> Result<i64> {
    let raw = match raw {
        Some(raw) => raw,
        None => prompt_limit(io::stdin().lock(), io::stdout())
            .context("Failed to read the job count")?,
    };
    Ok(parse_limit(&raw).unwrap_or_else(|| {
        println!("Using default limit of {DEFAULT_JOB_LIMIT} jobs");
        DEFAULT_JOB_LIMIT
    }))
}

// --- Public Entrypoint ---

/// Runs one scrape and prints the outcome.
///
/// A scrape that produced nothing is reported on the terminal and is not an
/// error; only setup failures are returned.
pub fn run(cli: Cli, config: ScraperConfig) -> Result<()> {
    println!("🚀 RemoteOK Job Scraper");
    println!("{}", "=".repeat(50));

    let limit = resolve_limit(cli.limit)?;
    info!("Scraping up to {limit} jobs into '{}'", cli.output.display());

    let scraper = Scraper::new(&config).context("Failed to initialize the scraper")?;

    match scraper.scrape_jobs(limit, &cli.output) {
        Ok(jobs) => print_success(&jobs, &cli.output),
        Err(e) => {
            info!("Scrape finished without output: {e}");
            println!("❌ No jobs were scraped. Check the logs for errors.");
        }
    }

    Ok(())
}

fn print_success(jobs: &[NormalizedRecord], output: &Path) {
    println!("\n✅ Successfully scraped {} jobs!", jobs.len());
    println!("📁 Data saved to '{}'", output.display());

    if let Some(job) = jobs.first() {
        println!("\n📊 Sample job:");
        println!("   Title: {}", job.title);
        println!("   Company: {}", job.company);
        println!("   Location: {}", job.location);
        println!("   Posted: {}", job.posted_date);
        println!("   Salary: {}", job.salary);
    }
}
