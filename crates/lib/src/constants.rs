//! # Shared Constants
//!
//! Endpoint defaults, sentinel strings and the keyword tables used by the
//! experience-level heuristic. Keeping them here avoids "magic strings" spread
//! across the fetcher and normalizer.

/// The public RemoteOK JSON feed.
pub const DEFAULT_API_URL: &str = "https://remoteok.com/api";

/// The site root used to build job URLs.
pub const DEFAULT_BASE_URL: &str = "https://remoteok.com";

/// Path segment inserted between the base URL and the job identifier.
pub const JOB_PATH_SEGMENT: &str = "job";

/// Default output file for the CLI.
pub const DEFAULT_OUTPUT_FILE: &str = "remoteok_jobs.csv";

/// Default log file for the CLI.
pub const DEFAULT_LOG_FILE: &str = "scraper.log";

/// Number of jobs requested when the user gives no usable count.
pub const DEFAULT_JOB_LIMIT: i64 = 100;

/// Placeholder for absent or unparseable values.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Location used when a listing carries no `location` key at all.
pub const DEFAULT_LOCATION: &str = "Remote";

/// A desktop Chrome user agent; the API rejects obvious bot agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const ACCEPT: &str = "application/json, text/plain, */*";
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";
pub const REFERER: &str = "https://remoteok.com/";

/// Keywords checked first. Any match classifies the listing as "Senior".
pub const SENIOR_KEYWORDS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "5+ years",
    "7+ years",
    "expert",
    "architect",
];

pub const ENTRY_KEYWORDS: &[&str] = &[
    "junior",
    "entry",
    "graduate",
    "intern",
    "0-2 years",
    "new grad",
    "beginner",
];

pub const MID_KEYWORDS: &[&str] = &[
    "mid",
    "intermediate",
    "3-5 years",
    "2-4 years",
    "experienced",
];

/// CSV column order. Must match the field order of `NormalizedRecord`.
pub const CSV_HEADERS: [&str; 17] = [
    "job_title",
    "company_name",
    "location",
    "tags_skills",
    "job_url",
    "posted_date",
    "salary",
    "job_type",
    "experience_level",
    "industry_department",
    "job_description",
    "application_deadline",
    "apply_url",
    "company_logo",
    "verified",
    "remote_ok_id",
    "raw_date",
];
