use thiserror::Error;

/// Failures of the fetch stage.
///
/// Rate limiting, network errors and unexpected statuses are retried inside
/// the request loop and only surface here once the attempts run out.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(reqwest::Error),
    #[error("Request failed after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },
    #[error("Failed to read response body: {0}")]
    Body(reqwest::Error),
    #[error("Failed to parse JSON response: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Unexpected response format: expected an array, got {0}")]
    UnexpectedFormat(&'static str),
}

/// A listing that cannot be normalized at all. The record is skipped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Job {index} has a tags list with non-string entries")]
    InvalidTags { index: usize },
}

/// Failures while writing the CSV output.
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("No jobs to save")]
    NoRecords,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The negative outcomes of a full scrape run.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Failed to set up the fetcher: {0}")]
    Setup(#[from] FetchError),
    #[error("Failed to compile text cleaning patterns: {0}")]
    Pattern(#[from] regex::Error),
    #[error("No jobs fetched")]
    NoJobsFetched,
    #[error("No jobs processed")]
    NoJobsProcessed,
    #[error("Failed to save jobs to CSV: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    General(#[from] config::ConfigError),
    #[error("Configuration file not found: {0}")]
    NotFound(String),
}
