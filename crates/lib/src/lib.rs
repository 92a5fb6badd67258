//! # RemoteOK Job Scraper
//!
//! This crate fetches job listings from the RemoteOK JSON API, normalizes the
//! loosely-typed records into a fixed 17-column schema and writes them to CSV.
//!
//! The pieces can be used on their own (`Fetcher`, `process_jobs`, `save_to_csv`)
//! or driven end to end through [`Scraper::scrape_jobs`].

pub mod config;
pub mod constants;
pub mod errors;
pub mod fetch;
pub mod normalize;
pub mod output;
pub mod pipeline;
pub mod types;

pub use crate::config::{RetryPolicy, ScraperConfig};
pub use errors::{ConfigError, FetchError, PersistError, RecordError, ScrapeError};
pub use fetch::Fetcher;
pub use normalize::Normalizer;
pub use output::{read_csv, save_to_csv};
pub use pipeline::Scraper;
pub use types::{NormalizedRecord, RawRecord};
