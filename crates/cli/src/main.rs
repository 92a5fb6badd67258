//! # remotejobs: RemoteOK Job Scraper CLI
//!
//! Thin entrypoint: loads configuration, installs logging and hands over to
//! the `remotejobs_cli` library crate.

use anyhow::Result;
use clap::Parser;
use remotejobs::config::get_config;
use remotejobs_cli::{init_logging, install_interrupt_handler, run, Cli};

fn main() -> Result<()> {
    // 1. Parse CLI arguments
    let cli = Cli::parse();

    // 2. Resolve configuration (defaults, optional YAML file, environment)
    let config = get_config(cli.config.as_deref())?;

    // 3. Setup logging to stdout and the log file
    init_logging(&config.log_file)?;
    install_interrupt_handler()?;

    // 4. Run the scrape and report the outcome
    if let Err(e) = run(cli, config) {
        eprintln!("❌ An error occurred: {e:?}");
        tracing::error!("Main function error: {e}");
        std::process::exit(1);
    }

    Ok(())
}
