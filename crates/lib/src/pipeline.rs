//! # Scrape Pipeline
//!
//! Runs one fetch, normalize and save cycle.

use crate::config::ScraperConfig;
use crate::errors::ScrapeError;
use crate::fetch::Fetcher;
use crate::normalize::Normalizer;
use crate::output::save_to_csv;
use crate::types::NormalizedRecord;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{error, info};

pub struct Scraper {
    fetcher: Fetcher,
    normalizer: Normalizer,
    courtesy_delay: Duration,
}

impl Scraper {
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            normalizer: Normalizer::new(config.base_url.as_str())?,
            courtesy_delay: config.courtesy_delay(),
        })
    }

    /// Fetches up to `limit` jobs, normalizes them and writes them to `path`.
    ///
    /// The output file is only created once at least one job survived
    /// normalization.
    pub fn scrape_jobs(
        &self,
        limit: i64,
        path: impl AsRef<Path>,
    ) -> Result<Vec<NormalizedRecord>, ScrapeError> {
        let path = path.as_ref();
        info!("Starting RemoteOK job scraping...");

        let raw_jobs = self.fetcher.get_jobs(limit);
        if raw_jobs.is_empty() {
            error!("No jobs fetched. Exiting.");
            return Err(ScrapeError::NoJobsFetched);
        }

        thread::sleep(self.courtesy_delay);

        let processed = self.normalizer.process_jobs(&raw_jobs);
        if processed.is_empty() {
            error!("No jobs processed. Exiting.");
            return Err(ScrapeError::NoJobsProcessed);
        }

        save_to_csv(&processed, path).inspect_err(|e| error!("Failed to save jobs to CSV: {e}"))?;

        info!(
            "Scraping completed! {} jobs saved to {}",
            processed.len(),
            path.display()
        );
        Ok(processed)
    }
}
