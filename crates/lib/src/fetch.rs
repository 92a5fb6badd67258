//! # Job Feed Fetcher
//!
//! Issues the GET request against the jobs API with a bounded retry loop, then
//! validates the body and filters it down to real job listings.

use crate::config::{RetryPolicy, ScraperConfig};
use crate::constants::{ACCEPT, ACCEPT_LANGUAGE, REFERER};
use crate::errors::FetchError;
use crate::types::RawRecord;
use reqwest::blocking::{Client, Response};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::StatusCode;
use serde_json::Value;
use std::thread;
use tracing::{error, info, warn};

/// A blocking client for one jobs endpoint.
///
/// The underlying HTTP client (and its connection pool) lives as long as the
/// fetcher and is reused across retry attempts.
pub struct Fetcher {
    client: Client,
    api_url: String,
    policy: RetryPolicy,
}

impl Fetcher {
    pub fn new(config: &ScraperConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(browser_headers())
            .timeout(config.timeout())
            .build()
            .map_err(FetchError::ClientBuild)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            policy: config.retry_policy(),
        })
    }

    /// Sends a GET request, retrying up to `max_retries` times.
    ///
    /// Only HTTP 200 counts as success. A 429 waits `attempt * rate_limit_backoff`,
    /// a transport error waits `retry_delay * attempt` (skipped after the final
    /// attempt), any other status retries immediately.
    pub fn make_request(&self, url: &str) -> Result<Response, FetchError> {
        let max_retries = self.policy.max_retries;

        for attempt in 1..=max_retries {
            info!("Making request to {url} (attempt {attempt}/{max_retries})");
            match self.client.get(url).send() {
                Ok(response) if response.status() == StatusCode::OK => return Ok(response),
                Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
                    let wait = self.policy.rate_limit_wait(attempt);
                    warn!("Rate limited. Waiting {} seconds...", wait.as_secs_f64());
                    thread::sleep(wait);
                }
                Ok(response) => {
                    let status = response.status();
                    warn!(
                        "HTTP {}: {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown")
                    );
                }
                Err(e) => {
                    error!("Request failed (attempt {attempt}): {e}");
                    if attempt < max_retries {
                        thread::sleep(self.policy.network_wait(attempt));
                    }
                }
            }
        }

        Err(FetchError::RetriesExhausted {
            attempts: max_retries,
        })
    }

    /// Fetches the feed and returns at most `limit` job listings.
    ///
    /// A `limit` of zero or less keeps every listing.
    pub fn try_get_jobs(&self, limit: i64) -> Result<Vec<RawRecord>, FetchError> {
        info!("Fetching jobs from {}...", self.api_url);
        let response = self.make_request(&self.api_url)?;
        let body = response.text().map_err(FetchError::Body)?;
        let jobs = parse_jobs(&body, limit)?;
        info!("Successfully fetched {} jobs", jobs.len());
        Ok(jobs)
    }

    /// Like [`Fetcher::try_get_jobs`], but logs the failure and returns an empty
    /// list instead.
    pub fn get_jobs(&self, limit: i64) -> Vec<RawRecord> {
        self.try_get_jobs(limit).unwrap_or_else(|e| {
            error!("Failed to fetch jobs: {e}");
            Vec::new()
        })
    }
}

/// Parses a response body into filtered job listings.
pub fn parse_jobs(body: &str, limit: i64) -> Result<Vec<RawRecord>, FetchError> {
    let data: Value = serde_json::from_str(body)?;
    match data {
        Value::Array(items) => Ok(filter_jobs(items, limit)),
        other => Err(FetchError::UnexpectedFormat(json_kind(&other))),
    }
}

/// Keeps objects that carry both `id` and `position`, then applies the limit.
///
/// The feed mixes a legal notice and other metadata entries in with the jobs;
/// those lack one of the two keys and are dropped here.
pub fn filter_jobs(items: Vec<Value>, limit: i64) -> Vec<RawRecord> {
    let jobs = items.into_iter().filter_map(|item| match item {
        Value::Object(map) if map.contains_key("id") && map.contains_key("position") => Some(map),
        _ => None,
    });

    match usize::try_from(limit) {
        Ok(n) if n > 0 => jobs.take(n).collect(),
        _ => jobs.collect(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::REFERER, HeaderValue::from_static(REFERER));
    headers.insert(
        HeaderName::from_static("sec-fetch-dest"),
        HeaderValue::from_static("empty"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-mode"),
        HeaderValue::from_static("cors"),
    );
    headers.insert(
        HeaderName::from_static("sec-fetch-site"),
        HeaderValue::from_static("same-origin"),
    );
    headers
}
